//! Core data models for the franchise portal
//!
//! This module contains the records the report views display: field visit
//! reports, payments and product returns, plus the shared [`Record`] shape
//! the reporting engine works through.

pub mod dataset;
pub mod ids;
pub mod payment;
pub mod rating;
pub mod record;
pub mod returns;
pub mod status;
pub mod visit;

pub use dataset::Dataset;
pub use ids::{EmployeeId, StoreId};
pub use payment::Payment;
pub use rating::{Rating, RATING_MAX, RATING_MIN};
pub use record::{parse_date, parse_timestamp, FieldKey, Record, ReportKind};
pub use returns::{ReturnItem, ReturnNote};
pub use status::{ApprovalStatus, ReplenishmentStatus, YesNo};
pub use visit::VisitReport;
