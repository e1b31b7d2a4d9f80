//! Report service
//!
//! Builds report views for a session: fetch the records, check the
//! requested store against the allow-list, scope to allowed stores, apply the
//! per-view range policy, then filter.

use crate::access::{AccessControl, AllowList};
use crate::config::Settings;
use crate::error::PortalResult;
use crate::models::{ApprovalStatus, Dataset, FieldKey, StoreId};
use crate::reports::{
    employee_options, scope, store_options, FieldVisitReport, PaymentReport, RangePolicy,
    ReportFilter, ReturnReport,
};
use crate::source::RecordSource;

/// Choice lists for the field visit filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitOptions {
    /// `(store id, store name)` of every allowed store with a visit
    pub stores: Vec<(StoreId, String)>,
    /// Employee names, first-seen order
    pub employees: Vec<String>,
}

/// Service producing the three report views
pub struct ReportService<'a> {
    source: &'a dyn RecordSource,
    access: &'a dyn AccessControl,
    settings: &'a Settings,
}

impl<'a> ReportService<'a> {
    /// Create a new report service
    pub fn new(
        source: &'a dyn RecordSource,
        access: &'a dyn AccessControl,
        settings: &'a Settings,
    ) -> Self {
        Self {
            source,
            access,
            settings,
        }
    }

    /// Field visits, any range accepted
    pub fn field_visits(&self, filter: &ReportFilter) -> PortalResult<FieldVisitReport> {
        self.policy(RangePolicy::open()).check(&filter.range)?;
        let (dataset, allow_list) = self.load(filter)?;
        FieldVisitReport::generate(&scope(&dataset.field_visits, &allow_list), filter)
    }

    /// Payments, both dates required
    pub fn payments(&self, filter: &ReportFilter) -> PortalResult<PaymentReport> {
        self.policy(RangePolicy::required()).check(&filter.range)?;
        let (dataset, allow_list) = self.load(filter)?;
        PaymentReport::generate(&scope(&dataset.payments, &allow_list), filter)
    }

    /// Returns, both dates required and a bounded span
    pub fn returns(&self, filter: &ReportFilter) -> PortalResult<ReturnReport> {
        self.policy(RangePolicy::required_within(self.settings.max_range_days))
            .check(&filter.range)?;
        let (dataset, allow_list) = self.load(filter)?;
        ReturnReport::generate(
            &scope(&dataset.returns, &allow_list),
            &dataset.return_items,
            filter,
        )
    }

    /// Store and employee choices for the field visit filters
    pub fn visit_options(&self) -> PortalResult<VisitOptions> {
        let dataset = self.source.fetch()?;
        let allow_list = self.access.allowed_stores()?;
        let visits = scope(&dataset.field_visits, &allow_list);

        Ok(VisitOptions {
            stores: store_options(&visits),
            employees: employee_options(&visits),
        })
    }

    /// Status choices for payments and returns
    pub fn status_options(&self) -> Vec<&'static str> {
        ApprovalStatus::ALL.iter().map(|s| s.as_str()).collect()
    }

    /// Where the records come from
    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    fn policy(&self, policy: RangePolicy) -> RangePolicy {
        policy.rejecting_inverted(self.settings.reject_inverted_range)
    }

    fn load(&self, filter: &ReportFilter) -> PortalResult<(Dataset, AllowList)> {
        let allow_list = self.access.allowed_stores()?;
        if let Some(store) = filter.selection(FieldKey::Store).value() {
            allow_list.authorize(store)?;
        }
        let dataset = self.source.fetch()?;
        Ok((dataset, allow_list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::StaticAccessControl;
    use crate::error::PortalError;
    use crate::reports::{DateRange, ReportView, Selection};
    use crate::source::FixtureSource;
    use chrono::NaiveDate;

    struct Unreachable;

    impl RecordSource for Unreachable {
        fn fetch(&self) -> PortalResult<Dataset> {
            Err(PortalError::DataUnavailable("backend offline".into()))
        }

        fn describe(&self) -> String {
            "offline".into()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn access() -> StaticAccessControl {
        StaticAccessControl::new(AllowList::new(["S-1001"]))
    }

    #[test]
    fn test_field_visits_are_scoped() {
        let settings = Settings::default();
        let access = access();
        let service = ReportService::new(&FixtureSource, &access, &settings);

        let report = service.field_visits(&ReportFilter::new()).unwrap();
        let ids: Vec<_> = report.rows().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["vr-1001", "vr-1002"]);
    }

    #[test]
    fn test_store_outside_allow_list_is_refused() {
        let settings = Settings::default();
        let access = access();
        let service = ReportService::new(&FixtureSource, &access, &settings);

        let filter = ReportFilter::new().field(FieldKey::Store, Selection::parse("S-2002"));
        let err = service.field_visits(&filter).unwrap_err();
        assert!(err.is_authorization());
    }

    #[test]
    fn test_empty_allow_list_sees_nothing() {
        let settings = Settings::default();
        let access = StaticAccessControl::new(AllowList::default());
        let service = ReportService::new(&FixtureSource, &access, &settings);

        assert!(service.field_visits(&ReportFilter::new()).unwrap().rows().is_empty());
    }

    #[test]
    fn test_payments_require_range() {
        let settings = Settings::default();
        let access = access();
        let service = ReportService::new(&FixtureSource, &access, &settings);

        let err = service.payments(&ReportFilter::new()).unwrap_err();
        assert!(err.is_validation());

        let filter = ReportFilter::new().range(DateRange::between(date(2024, 1, 1), date(2024, 1, 31)));
        assert_eq!(service.payments(&filter).unwrap().rows().len(), 2);
    }

    #[test]
    fn test_returns_span_limit() {
        let settings = Settings::default();
        let access = access();
        let service = ReportService::new(&FixtureSource, &access, &settings);

        let too_long = ReportFilter::new().range(DateRange::between(date(2024, 1, 1), date(2024, 6, 1)));
        let err = service.returns(&too_long).unwrap_err();
        assert!(err.to_string().contains("cannot exceed 90 days"));

        let ok = ReportFilter::new().range(DateRange::between(date(2024, 1, 1), date(2024, 1, 31)));
        assert_eq!(service.returns(&ok).unwrap().rows().len(), 2);
    }

    #[test]
    fn test_inverted_range_policy() {
        let inverted = ReportFilter::new().range(DateRange::between(date(2025, 10, 7), date(2025, 10, 1)));
        let access = access();

        let lenient = Settings::default();
        let service = ReportService::new(&FixtureSource, &access, &lenient);
        assert!(service.field_visits(&inverted).unwrap().rows().is_empty());

        let strict = Settings {
            reject_inverted_range: true,
            ..Settings::default()
        };
        let service = ReportService::new(&FixtureSource, &access, &strict);
        assert!(service.field_visits(&inverted).unwrap_err().is_validation());
    }

    #[test]
    fn test_unreachable_source() {
        let settings = Settings::default();
        let access = access();
        let service = ReportService::new(&Unreachable, &access, &settings);

        let err = service.field_visits(&ReportFilter::new()).unwrap_err();
        assert!(matches!(err, PortalError::DataUnavailable(_)));
    }

    #[test]
    fn test_visit_options() {
        let settings = Settings::default();
        let access = access();
        let service = ReportService::new(&FixtureSource, &access, &settings);

        let options = service.visit_options().unwrap();
        assert_eq!(
            options.stores,
            vec![(StoreId::from("S-1001"), "Medplus Koramangala".to_string())]
        );
        assert_eq!(options.employees, vec!["Anita Rao", "Vikram Kulkarni"]);
        assert_eq!(service.status_options(), vec!["Approved", "Pending", "Rejected"]);
    }
}
