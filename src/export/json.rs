//! JSON Export functionality
//!
//! Exports the filtered records of a view with a small metadata envelope.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};
use crate::models::ReportKind;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Records of one view, as exported
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordExport<T> {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Which view the records came from
    pub report: ReportKind,

    /// Human-readable description of the filter that produced the records
    pub filter: String,

    /// Number of records
    pub record_count: usize,

    /// The records, in view order
    pub records: Vec<T>,
}

impl<T: Clone> RecordExport<T> {
    pub fn new(report: ReportKind, filter: impl Into<String>, records: &[T]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
            filter: filter.into(),
            record_count: records.len(),
            records: records.to_vec(),
        }
    }
}

/// Write the export as JSON
pub fn export_records_json<W, T>(writer: &mut W, export: &RecordExport<T>, pretty: bool) -> PortalResult<()>
where
    W: Write,
    T: Serialize,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    }
    .map_err(|e| PortalError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PortalError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Payment;
    use crate::source::fixtures;

    #[test]
    fn test_export_json_envelope() {
        let payments = fixtures::payments();
        let export = RecordExport::new(ReportKind::Payments, "all dates", &payments);

        let mut out = Vec::new();
        export_records_json(&mut out, &export, true).unwrap();

        let parsed: RecordExport<Payment> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.report, ReportKind::Payments);
        assert_eq!(parsed.record_count, 2);
        assert_eq!(parsed.records, payments);
    }

    #[test]
    fn test_export_json_uses_portal_field_names() {
        let visits = fixtures::field_visits();
        let export = RecordExport::new(ReportKind::FieldVisits, "all dates", &visits[..1]);

        let mut out = Vec::new();
        export_records_json(&mut out, &export, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\"storeEnvironment\""));
        assert!(text.contains("\"report\":\"field_visits\""));
    }
}
