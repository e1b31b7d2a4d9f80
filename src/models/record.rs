//! The common shape shared by visit, payment and return records
//!
//! The reporting engine only ever sees records through [`Record`]: an id, a
//! point in time, the store the record belongs to, and a handful of
//! categorical fields that can be filtered on.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::StoreId;
use crate::error::{PortalError, PortalResult};

/// The three report views of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    FieldVisits,
    Payments,
    Returns,
}

impl ReportKind {
    /// File name stem used for downloads
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::FieldVisits => "field-visit-reports",
            Self::Payments => "payments",
            Self::Returns => "returns",
        }
    }

    /// Title shown above terminal and printed reports
    pub fn title(&self) -> &'static str {
        match self {
            Self::FieldVisits => "Field Visit Reports",
            Self::Payments => "Payments",
            Self::Returns => "Return Details",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldVisits => write!(f, "FieldVisits"),
            Self::Payments => write!(f, "Payments"),
            Self::Returns => write!(f, "Returns"),
        }
    }
}

/// Categorical fields a filter can constrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Store,
    Employee,
    Status,
    PaymentMode,
    CreatedBy,
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => write!(f, "store"),
            Self::Employee => write!(f, "employee"),
            Self::Status => write!(f, "status"),
            Self::PaymentMode => write!(f, "mode"),
            Self::CreatedBy => write!(f, "created_by"),
        }
    }
}

/// Read access the reporting engine needs from any record
pub trait Record {
    /// Which report view this record belongs to
    const KIND: ReportKind;

    /// Unique identifier within a collection
    fn id(&self) -> &str;

    /// The ISO 8601 text the timestamp was supplied as
    fn raw_timestamp(&self) -> &str;

    /// Store / tenant the record belongs to
    fn store_id(&self) -> &StoreId;

    /// Value of a categorical field, `None` if this record type has no such field
    fn field(&self, key: FieldKey) -> Option<&str>;

    /// The record's point in time
    fn timestamp(&self) -> PortalResult<DateTime<Utc>> {
        parse_timestamp(self.raw_timestamp())
    }
}

/// Parse a record timestamp
///
/// Accepts RFC 3339, a naive date-time (read as UTC), or a bare date
/// (midnight UTC).
pub fn parse_timestamp(raw: &str) -> PortalResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(PortalError::Validation(format!(
        "Invalid timestamp: '{}'. Use ISO 8601 (e.g., 2025-10-05T10:30:00Z)",
        raw
    )))
}

/// Parse a calendar date as typed on the command line
pub fn parse_date(raw: &str) -> PortalResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        PortalError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", raw))
    })
}
