//! Reports module for the franchise portal
//!
//! The reporting engine: store scoping, declarative filters, the
//! non-compliance flag, choice lists, and the three report views built on
//! top of them (field visits, payments, returns).

pub mod compliance;
pub mod field_visits;
pub mod filter;
pub mod options;
pub mod payments;
pub mod returns;
pub mod scope;
pub mod view;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use crate::config::Settings;
use crate::display::{double_separator, format_header};
use crate::error::{PortalError, PortalResult};
use crate::models::{Record, ReportKind};

pub use compliance::{is_non_compliant, non_compliant_ratings, NON_COMPLIANCE_THRESHOLD};
pub use field_visits::FieldVisitReport;
pub use filter::{DateRange, RangePolicy, ReportFilter, Selection, ALL};
pub use options::{distinct_values, employee_options, store_options};
pub use payments::PaymentReport;
pub use returns::ReturnReport;
pub use scope::scope;
pub use view::ViewState;

const PRINT_WIDTH: usize = 80;

/// What every report view offers: its rows, terminal and detail rendering, CSV export
pub trait ReportView {
    type Row: Record + Serialize + Clone;

    /// Filtered rows in source order
    fn rows(&self) -> &[Self::Row];

    /// The filter that produced the rows
    fn filter(&self) -> &ReportFilter;

    /// Table for the terminal
    fn format_terminal(&self, settings: &Settings) -> String;

    /// Detail view of one row
    fn format_details(&self, row: &Self::Row, settings: &Settings) -> String;

    /// Write the rows as CSV
    fn export_csv<W: Write>(&self, writer: &mut W, settings: &Settings) -> PortalResult<()>;

    fn kind(&self) -> ReportKind {
        <Self::Row as Record>::KIND
    }

    /// Find a visible row by id
    fn find(&self, id: &str) -> Option<&Self::Row> {
        self.rows().iter().find(|r| r.id() == id)
    }

    /// The row the view state has expanded, if any
    fn expanded(&self, state: &ViewState) -> PortalResult<Option<&Self::Row>> {
        match state.expanded() {
            None => Ok(None),
            Some(id) => self
                .find(id)
                .map(Some)
                .ok_or_else(|| not_found(self.kind(), id)),
        }
    }

    /// Printable document: heading, filter, generation time and the table
    fn format_print(&self, settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str(&format_header(self.kind().title(), PRINT_WIDTH));
        output.push('\n');
        output.push_str(&double_separator(PRINT_WIDTH));
        output.push('\n');
        output.push_str(&format!("Filter:    {}\n", self.filter()));
        output.push_str(&format!(
            "Generated: {}\n\n",
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&self.format_terminal(settings));
        output
    }
}

fn not_found(kind: ReportKind, id: &str) -> PortalError {
    match kind {
        ReportKind::FieldVisits => PortalError::visit_not_found(id),
        ReportKind::Payments => PortalError::payment_not_found(id),
        ReportKind::Returns => PortalError::return_not_found(id),
    }
}
