//! Service layer for the franchise portal
//!
//! The service layer ties the record source, store access control and the
//! reporting engine together, and delivers exports.

pub mod export;
pub mod report;

pub use export::{default_filename, export_view, print_filename, print_view, ExportOutcome};
pub use report::{ReportService, VisitOptions};
