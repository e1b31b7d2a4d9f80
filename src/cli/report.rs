//! CLI commands for the report views
//!
//! `portal visits`, `portal payments` and `portal returns`: show the filtered
//! table, expand one record, and export or print what is shown.

use clap::Args;

use super::Session;
use crate::display::{double_separator, format_header};
use crate::error::{PortalError, PortalResult};
use crate::export::ExportFormat;
use crate::models::{parse_date, ApprovalStatus, FieldKey};
use crate::reports::{DateRange, ReportFilter, ReportView, Selection, ViewState, ALL};
use crate::services::{export_view, print_view, ExportOutcome};

const HEADER_WIDTH: usize = 60;

/// Date range flags
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl RangeArgs {
    fn to_range(&self) -> PortalResult<DateRange> {
        let from = self
            .from
            .as_deref()
            .map(|s| parse_day(s, "start"))
            .transpose()?;
        let to = self.to.as_deref().map(|s| parse_day(s, "end")).transpose()?;
        Ok(DateRange::new(from, to))
    }
}

/// What to do with the filtered rows
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Show the details of one record by id
    #[arg(long, value_name = "ID")]
    pub details: Option<String>,

    /// Export the rows (file name defaults to the view's name)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub export: Option<Option<String>>,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Produce a printable document of the table
    #[arg(long)]
    pub print: bool,
}

/// Field visit report flags
#[derive(Args, Debug, Clone, Default)]
pub struct VisitsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Store id, or "all"
    #[arg(long, default_value = ALL)]
    pub store: String,

    /// Employee name, or "all"
    #[arg(long, default_value = ALL)]
    pub employee: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Payments report flags
#[derive(Args, Debug, Clone, Default)]
pub struct PaymentsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Approved, Pending, Rejected, or "all"
    #[arg(long, default_value = ALL)]
    pub status: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Returns report flags
#[derive(Args, Debug, Clone, Default)]
pub struct ReturnsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Approved, Pending, Rejected, or "all"
    #[arg(long, default_value = ALL)]
    pub status: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Handle `portal visits`
pub fn handle_visits_command(session: &Session, args: VisitsArgs) -> PortalResult<()> {
    let filter = ReportFilter::new()
        .range(args.range.to_range()?)
        .field(FieldKey::Store, Selection::parse(&args.store))
        .field(FieldKey::Employee, Selection::parse(&args.employee));

    let report = session.reports().field_visits(&filter)?;
    present(session, &report, &args.output)
}

/// Handle `portal payments`
pub fn handle_payments_command(session: &Session, args: PaymentsArgs) -> PortalResult<()> {
    let filter = ReportFilter::new()
        .range(args.range.to_range()?)
        .field(FieldKey::Status, parse_status(&args.status)?);

    let report = session.reports().payments(&filter)?;
    present(session, &report, &args.output)
}

/// Handle `portal returns`
pub fn handle_returns_command(session: &Session, args: ReturnsArgs) -> PortalResult<()> {
    let filter = ReportFilter::new()
        .range(args.range.to_range()?)
        .field(FieldKey::Status, parse_status(&args.status)?);

    let report = session.reports().returns(&filter)?;
    present(session, &report, &args.output)
}

fn parse_day(raw: &str, which: &str) -> PortalResult<chrono::NaiveDate> {
    parse_date(raw).map_err(|_| {
        PortalError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            which, raw
        ))
    })
}

fn parse_status(raw: &str) -> PortalResult<Selection> {
    match Selection::parse(raw) {
        Selection::All => Ok(Selection::All),
        Selection::Only(value) => ApprovalStatus::parse(&value)
            .map(|status| Selection::Only(status.as_str().to_string()))
            .ok_or_else(|| {
                PortalError::Validation(format!(
                    "Unknown status: {}. Use Approved, Pending, Rejected or all",
                    value
                ))
            }),
    }
}

/// Show the view, then export or print it if asked
fn present<V: ReportView>(session: &Session, view: &V, output: &OutputArgs) -> PortalResult<()> {
    let settings = &session.settings;

    match &output.details {
        Some(id) => {
            let mut state = ViewState::new(view.filter().clone());
            state.set_expanded(Some(id.clone()));
            if let Some(row) = view.expanded(&state)? {
                print!("{}", view.format_details(row, settings));
            }
        }
        None => {
            println!("{}", format_header(view.kind().title(), HEADER_WIDTH));
            println!("{}", double_separator(HEADER_WIDTH));
            println!("Filter: {}\n", view.filter());
            print!("{}", view.format_terminal(settings));
        }
    }

    if let Some(filename) = &output.export {
        let outcome = export_view(
            view,
            output.format,
            filename.as_deref(),
            settings,
            &session.downloader(),
            &session.audit_logger(),
        )?;
        println!(
            "Exported {} record(s) to: {}",
            outcome.record_count,
            outcome.path.display()
        );
        warn_unaudited(&outcome);
    }

    if output.print {
        let outcome = print_view(
            view,
            settings,
            &session.downloader(),
            &session.audit_logger(),
        )?;
        println!("Printable report saved to: {}", outcome.path.display());
        warn_unaudited(&outcome);
    }

    Ok(())
}

fn warn_unaudited(outcome: &ExportOutcome) {
    if let Some(e) = &outcome.audit_error {
        eprintln!("Warning: file saved but the audit log was not updated: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_args() {
        let args = RangeArgs {
            from: Some("2025-10-06".into()),
            to: None,
        };
        let range = args.to_range().unwrap();
        assert_eq!(range.to_string(), "from 2025-10-06");

        let bad = RangeArgs {
            from: Some("06/10/2025".into()),
            to: None,
        };
        let err = bad.to_range().unwrap_err();
        assert!(err.to_string().contains("Invalid start date format"));
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("all").unwrap(), Selection::All);
        assert_eq!(
            parse_status("pending").unwrap(),
            Selection::Only("Pending".into())
        );
        assert!(parse_status("paid").unwrap_err().is_validation());
    }
}
