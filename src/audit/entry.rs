//! Audit entry data structures
//!
//! Defines the operations the portal records and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ReportKind;

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Records were downloaded as a file
    Export,
    /// A printable document was produced
    Print,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Export => write!(f, "EXPORT"),
            Operation::Print => write!(f, "PRINT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Which view the records came from
    pub report: ReportKind,

    /// Name of the delivered file
    pub filename: String,

    /// Output format (csv, json, yaml; none for print)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Number of records delivered
    pub record_count: usize,

    /// Human-readable filter summary
    pub filter: String,
}

impl AuditEntry {
    /// Create an entry for an export
    pub fn export(
        report: ReportKind,
        filename: impl Into<String>,
        format: impl Into<String>,
        record_count: usize,
        filter: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Export,
            report,
            filename: filename.into(),
            format: Some(format.into()),
            record_count,
            filter: filter.into(),
        }
    }

    /// Create an entry for a print
    pub fn print(
        report: ReportKind,
        filename: impl Into<String>,
        record_count: usize,
        filter: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Print,
            report,
            filename: filename.into(),
            format: None,
            record_count,
            filter: filter.into(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} -> {} ({} records)",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.report,
            self.filename,
            self.record_count
        );

        if !self.filter.is_empty() {
            output.push_str(&format!("\n  Filter: {}", self.filter));
        }

        output
    }
}
