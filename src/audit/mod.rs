//! Audit logging for the franchise portal
//!
//! Every export and print is recorded in an append-only audit log so a
//! franchisee can see what left the portal and under which filter.
//!
//! # Architecture
//!
//! - `AuditEntry`: one export or print with timestamp, report, file name,
//!   record count and filter summary.
//! - `AuditLogger`: writes entries to the log file in line-delimited JSON
//!   (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use portal::audit::{AuditEntry, AuditLogger};
//! use portal::models::ReportKind;
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::export(ReportKind::Payments, "payments.csv", "csv", 2, "all dates");
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
