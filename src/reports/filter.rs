//! Declarative record filters
//!
//! A [`ReportFilter`] is an inclusive calendar-day range plus any number of
//! categorical equality predicates. Day boundaries are UTC: `from` starts at
//! 00:00:00.000 and `to` ends at 23:59:59.999 (`to + 24h - 1ms`).
//!
//! Applying a filter never re-sorts: passing records keep their relative order.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use std::fmt;

use crate::error::{PortalError, PortalResult};
use crate::models::{FieldKey, Record};

const MS_PER_DAY: i64 = 86_400_000;

/// Sentinel that disables a categorical predicate
pub const ALL: &str = "all";

/// A choice-list selection: either no constraint or one exact value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a selection; exactly "all" means no constraint, anything else is matched verbatim
    pub fn parse(s: &str) -> Self {
        if s == ALL {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }

    /// The selected value, if constrained
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }

    /// Does a field value satisfy this selection?
    ///
    /// A record without the field only passes an unconstrained selection.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(v) => f.write_str(v),
        }
    }
}

/// An inclusive range of calendar days, either end optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Both ends set
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(Some(from), Some(to))
    }

    /// Neither end set
    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// `from` after `to`; such a range matches nothing
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    /// Earliest accepted instant
    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.from.map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    /// Latest accepted instant
    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.to
            .map(|d| d.and_time(NaiveTime::MIN).and_utc() + Duration::milliseconds(MS_PER_DAY - 1))
    }

    /// Is the instant inside the range?
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        let after_start = self.lower_bound().map_or(true, |start| ts >= start);
        let before_end = self.upper_bound().map_or(true, |end| ts <= end);
        after_start && before_end
    }

    /// Whole days from `from` to `to`, when both are set
    pub fn span_days(&self) -> Option<i64> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((to - from).num_days()),
            _ => None,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (None, None) => write!(f, "all dates"),
            (Some(from), None) => write!(f, "from {}", from),
            (None, Some(to)) => write!(f, "until {}", to),
            (Some(from), Some(to)) => write!(f, "{} to {}", from, to),
        }
    }
}

/// Rules a view applies to the range before searching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangePolicy {
    /// Both ends must be picked
    pub require_both: bool,
    /// Longest accepted span in days
    pub max_span_days: Option<i64>,
    /// Treat `from > to` as an error instead of an empty result
    pub reject_inverted: bool,
}

impl RangePolicy {
    /// Anything goes, including open and inverted ranges
    pub fn open() -> Self {
        Self::default()
    }

    /// Both ends required
    pub fn required() -> Self {
        Self {
            require_both: true,
            ..Self::default()
        }
    }

    /// Both ends required, span capped
    pub fn required_within(max_span_days: i64) -> Self {
        Self {
            require_both: true,
            max_span_days: Some(max_span_days),
            reject_inverted: false,
        }
    }

    pub fn rejecting_inverted(mut self, reject: bool) -> Self {
        self.reject_inverted = reject;
        self
    }

    /// Check a range against the policy
    pub fn check(&self, range: &DateRange) -> PortalResult<()> {
        if self.require_both && (range.from.is_none() || range.to.is_none()) {
            return Err(PortalError::Validation(
                "Date range required: please pick both a start and an end date".into(),
            ));
        }

        if self.reject_inverted && range.is_inverted() {
            return Err(PortalError::Validation(format!(
                "Invalid date range: start {} is after end {}",
                range.from.map(|d| d.to_string()).unwrap_or_default(),
                range.to.map(|d| d.to_string()).unwrap_or_default()
            )));
        }

        if let (Some(max), Some(span)) = (self.max_span_days, range.span_days()) {
            if span > max {
                return Err(PortalError::Validation(format!(
                    "Invalid date range: cannot exceed {} days",
                    max
                )));
            }
        }

        Ok(())
    }
}

/// Filter applied to a report view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportFilter {
    pub range: DateRange,
    predicates: Vec<(FieldKey, Selection)>,
}

impl ReportFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by date range
    pub fn range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Constrain a categorical field
    pub fn field(mut self, key: FieldKey, selection: Selection) -> Self {
        self.set_field(key, selection);
        self
    }

    /// Replace the range
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
    }

    /// Replace the selection for a field
    pub fn set_field(&mut self, key: FieldKey, selection: Selection) {
        match self.predicates.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = selection,
            None => self.predicates.push((key, selection)),
        }
    }

    /// Current selection for a field (`All` when never set)
    pub fn selection(&self, key: FieldKey) -> Selection {
        self.predicates
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, s)| s.clone())
            .unwrap_or_default()
    }

    /// Constrained fields, in the order they were set
    pub fn active_predicates(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.predicates
            .iter()
            .filter_map(|(k, s)| s.value().map(|v| (*k, v)))
    }

    /// Check if a record passes this filter
    pub fn matches<R: Record>(&self, record: &R) -> PortalResult<bool> {
        let ts = record.timestamp()?;
        if !self.range.contains(ts) {
            return Ok(false);
        }

        Ok(self
            .predicates
            .iter()
            .all(|(key, selection)| selection.matches(record.field(*key))))
    }

    /// Records passing the filter, in input order
    pub fn apply<R: Record + Clone>(&self, records: &[R]) -> PortalResult<Vec<R>> {
        let mut passed = Vec::new();
        for record in records {
            if self.matches(record)? {
                passed.push(record.clone());
            }
        }
        Ok(passed)
    }
}

impl fmt::Display for ReportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.range)?;
        for (key, value) in self.active_predicates() {
            write!(f, ", {}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReportKind, StoreId, VisitReport};
    use crate::source::fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_visits() -> Vec<VisitReport> {
        fixtures::field_visits()
            .into_iter()
            .filter(|v| v.store_id == StoreId::from("S-1001"))
            .collect()
    }

    fn ids<R: Record>(records: &[R]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_single_day_range() {
        let filter = ReportFilter::new().range(DateRange::between(date(2025, 10, 6), date(2025, 10, 6)));
        let result = filter.apply(&sample_visits()).unwrap();
        assert_eq!(ids(&result), vec!["vr-1002"]);
    }

    #[test]
    fn test_open_range_passes_everything() {
        let visits = sample_visits();
        let result = ReportFilter::new().apply(&visits).unwrap();
        assert_eq!(result, visits);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::between(date(2025, 10, 7), date(2025, 10, 1));
        assert!(range.is_inverted());
        let result = ReportFilter::new().range(range).apply(&sample_visits()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_end_of_day_is_inclusive() {
        let range = DateRange::between(date(2025, 10, 6), date(2025, 10, 6));
        let last_ms = "2025-10-06T23:59:59.999Z".parse::<DateTime<Utc>>().unwrap();
        let next_day = "2025-10-07T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let prev_day = "2025-10-05T23:59:59.999Z".parse::<DateTime<Utc>>().unwrap();

        assert!(range.contains(last_ms));
        assert!(!range.contains(next_day));
        assert!(!range.contains(prev_day));
    }

    #[test]
    fn test_half_open_ranges() {
        let from_only = ReportFilter::new().range(DateRange::new(Some(date(2025, 10, 6)), None));
        assert_eq!(ids(&from_only.apply(&sample_visits()).unwrap()), vec!["vr-1002"]);

        let to_only = ReportFilter::new().range(DateRange::new(None, Some(date(2025, 10, 5))));
        assert_eq!(ids(&to_only.apply(&sample_visits()).unwrap()), vec!["vr-1001"]);
    }

    #[test]
    fn test_store_selection() {
        let visits = sample_visits();

        let same_store = ReportFilter::new().field(FieldKey::Store, Selection::parse("S-1001"));
        assert_eq!(ids(&same_store.apply(&visits).unwrap()), vec!["vr-1001", "vr-1002"]);

        let other_store = ReportFilter::new().field(FieldKey::Store, Selection::parse("S-9999"));
        assert!(other_store.apply(&visits).unwrap().is_empty());
    }

    #[test]
    fn test_all_sentinel_is_no_constraint() {
        let filter = ReportFilter::new()
            .field(FieldKey::Store, Selection::parse("all"))
            .field(FieldKey::Employee, Selection::parse("all"));
        assert_eq!(filter.apply(&sample_visits()).unwrap().len(), 2);
        assert_eq!(filter.active_predicates().count(), 0);
    }

    #[test]
    fn test_sentinel_is_exact() {
        assert_eq!(Selection::parse("ALL"), Selection::Only("ALL".into()));
        assert_eq!(Selection::parse(" all"), Selection::Only(" all".into()));

        let filter = ReportFilter::new().field(FieldKey::Store, Selection::parse("All"));
        assert!(filter.apply(&sample_visits()).unwrap().is_empty());

        let padded = ReportFilter::new().field(FieldKey::Store, Selection::parse("S-1001 "));
        assert!(padded.apply(&sample_visits()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_field_fails_constrained_predicate() {
        let filter = ReportFilter::new().field(FieldKey::PaymentMode, Selection::parse("UPI"));
        assert!(filter.apply(&sample_visits()).unwrap().is_empty());
    }

    #[test]
    fn test_set_field_replaces_selection() {
        let mut filter = ReportFilter::new().field(FieldKey::Employee, Selection::parse("Anita Rao"));
        filter.set_field(FieldKey::Employee, Selection::parse("Vikram Kulkarni"));

        assert_eq!(
            filter.selection(FieldKey::Employee),
            Selection::Only("Vikram Kulkarni".into())
        );
        assert_eq!(filter.selection(FieldKey::Store), Selection::All);
        assert_eq!(ids(&filter.apply(&sample_visits()).unwrap()), vec!["vr-1002"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = ReportFilter::new()
            .range(DateRange::new(Some(date(2025, 10, 1)), None))
            .field(FieldKey::Store, Selection::parse("S-1001"));
        let once = filter.apply(&fixtures::field_visits()).unwrap();
        let twice = filter.apply(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut visits = fixtures::field_visits();
        visits.reverse();
        let result = ReportFilter::new()
            .field(FieldKey::Employee, Selection::parse("Anita Rao"))
            .apply(&visits)
            .unwrap();
        assert_eq!(ids(&result), vec!["vr-1003", "vr-1001"]);
    }

    #[test]
    fn test_unparseable_timestamp_is_validation_error() {
        let mut visits = sample_visits();
        visits[1].datetime = "garbage".into();
        let err = ReportFilter::new().apply(&visits).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_filter_works_on_payments() {
        let payments = fixtures::payments();
        let filter = ReportFilter::new()
            .range(DateRange::between(date(2024, 1, 1), date(2024, 1, 31)))
            .field(FieldKey::Status, Selection::parse("Pending"));
        let result = filter.apply(&payments).unwrap();
        assert_eq!(ids(&result), vec!["2"]);
        assert_eq!(<crate::models::Payment as Record>::KIND, ReportKind::Payments);
    }

    #[test]
    fn test_policy_requires_both_ends() {
        let policy = RangePolicy::required();
        assert!(policy.check(&DateRange::default()).unwrap_err().is_validation());
        assert!(policy
            .check(&DateRange::new(Some(date(2024, 1, 1)), None))
            .is_err());
        assert!(policy
            .check(&DateRange::between(date(2024, 1, 1), date(2024, 1, 2)))
            .is_ok());
    }

    #[test]
    fn test_policy_max_span() {
        let policy = RangePolicy::required_within(90);
        let ninety = DateRange::between(date(2024, 1, 1), date(2024, 3, 31));
        let ninety_one = DateRange::between(date(2024, 1, 1), date(2024, 4, 1));

        assert_eq!(ninety.span_days(), Some(90));
        assert!(policy.check(&ninety).is_ok());
        let err = policy.check(&ninety_one).unwrap_err();
        assert!(err.to_string().contains("cannot exceed 90 days"));
    }

    #[test]
    fn test_policy_inverted_range() {
        let inverted = DateRange::between(date(2024, 2, 1), date(2024, 1, 1));
        assert!(RangePolicy::required_within(90).check(&inverted).is_ok());
        assert!(RangePolicy::open()
            .rejecting_inverted(true)
            .check(&inverted)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_display() {
        let filter = ReportFilter::new()
            .range(DateRange::between(date(2025, 10, 6), date(2025, 10, 6)))
            .field(FieldKey::Store, Selection::parse("S-1001"))
            .field(FieldKey::Employee, Selection::All);
        assert_eq!(filter.to_string(), "2025-10-06 to 2025-10-06, store=S-1001");
        assert_eq!(ReportFilter::new().to_string(), "all dates");
    }
}
