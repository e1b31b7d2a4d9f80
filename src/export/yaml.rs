//! YAML Export functionality
//!
//! Same envelope as the JSON export, for human-readable review.

use std::io::Write;

use serde::Serialize;

use crate::error::{PortalError, PortalResult};
use crate::export::json::RecordExport;

/// Write the export as YAML with a short comment header
pub fn export_records_yaml<W, T>(writer: &mut W, export: &RecordExport<T>) -> PortalResult<()>
where
    W: Write,
    T: Serialize,
{
    writeln!(writer, "# Franchise portal export: {}", export.report.title())
        .map_err(|e| PortalError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PortalError::Export(e.to_string()))?;
    writeln!(writer, "# Filter: {}", export.filter)
        .map_err(|e| PortalError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PortalError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| PortalError::Export(e.to_string()))?;

    Ok(())
}
