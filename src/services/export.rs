//! Export service
//!
//! Renders a report view into a file, hands it to a [`Downloader`] and
//! records the operation in the audit log.

use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::Settings;
use crate::error::{PortalError, PortalResult};
use crate::export::{
    export_records_json, export_records_yaml, Downloader, ExportFormat, RecordExport,
};
use crate::models::ReportKind;
use crate::reports::ReportView;

/// Result of a delivered export or print
#[derive(Debug)]
pub struct ExportOutcome {
    /// Where the downloader put the file
    pub path: PathBuf,
    /// Number of records in the file
    pub record_count: usize,
    /// Set when the file was delivered but the audit entry could not be written
    pub audit_error: Option<PortalError>,
}

/// Default download name for a view: `field-visit-reports.csv`, `payments.json`, ...
pub fn default_filename(kind: ReportKind, format: ExportFormat) -> String {
    format!("{}.{}", kind.file_stem(), format.extension())
}

/// Download name of the printable document
pub fn print_filename(kind: ReportKind) -> String {
    format!("{}-print.txt", kind.file_stem())
}

/// Render the view's rows in `format` and deliver them
pub fn export_view<V: ReportView>(
    view: &V,
    format: ExportFormat,
    filename: Option<&str>,
    settings: &Settings,
    downloader: &dyn Downloader,
    audit: &AuditLogger,
) -> PortalResult<ExportOutcome> {
    let filename = filename
        .map(str::to_string)
        .unwrap_or_else(|| default_filename(view.kind(), format));
    let filter = view.filter().to_string();

    let mut blob = Vec::new();
    match format {
        ExportFormat::Csv => view.export_csv(&mut blob, settings)?,
        ExportFormat::Json => {
            let export = RecordExport::new(view.kind(), filter.clone(), view.rows());
            export_records_json(&mut blob, &export, true)?;
        }
        ExportFormat::Yaml => {
            let export = RecordExport::new(view.kind(), filter.clone(), view.rows());
            export_records_yaml(&mut blob, &export)?;
        }
    }

    let path = downloader.deliver(&filename, &blob)?;
    let record_count = view.rows().len();

    let entry = AuditEntry::export(
        view.kind(),
        filename,
        format.extension(),
        record_count,
        filter,
    );

    Ok(ExportOutcome {
        path,
        record_count,
        audit_error: audit.log(&entry).err(),
    })
}

/// Render the printable document and deliver it
pub fn print_view<V: ReportView>(
    view: &V,
    settings: &Settings,
    downloader: &dyn Downloader,
    audit: &AuditLogger,
) -> PortalResult<ExportOutcome> {
    let filename = print_filename(view.kind());
    let document = view.format_print(settings);

    let path = downloader.deliver(&filename, document.as_bytes())?;
    let record_count = view.rows().len();

    let entry = AuditEntry::print(
        view.kind(),
        filename,
        record_count,
        view.filter().to_string(),
    );

    Ok(ExportOutcome {
        path,
        record_count,
        audit_error: audit.log(&entry).err(),
    })
}
