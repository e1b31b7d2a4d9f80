//! Return Details Report
//!
//! Return notes matching a filter. Each note can be expanded into its
//! product line items, linked through the tax invoice.

use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::filter::ReportFilter;
use super::ReportView;
use crate::config::Settings;
use crate::display::{format_date, format_rupees, separator, status_badge};
use crate::error::PortalResult;
use crate::export::{export_csv, Column};
use crate::models::{ReturnItem, ReturnNote};

/// Returns matching a filter, with the line items they may expand into
#[derive(Debug, Clone)]
pub struct ReturnReport {
    filter: ReportFilter,
    rows: Vec<ReturnNote>,
    items: Vec<ReturnItem>,
}

#[derive(Tabled)]
struct ReturnTableRow {
    #[tabled(rename = "Return ID")]
    return_id: String,
    #[tabled(rename = "Tax Invoice")]
    tax_invoice: String,
    #[tabled(rename = "Created By")]
    created_by: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Received Date")]
    received: String,
    #[tabled(rename = "Return Note ID")]
    return_note_id: String,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Tabled)]
struct ItemTableRow {
    #[tabled(rename = "Product Name")]
    product_name: String,
    #[tabled(rename = "Product ID")]
    product_id: String,
    #[tabled(rename = "Batch ID")]
    batch_id: String,
    #[tabled(rename = "Pack Size")]
    pack_size: String,
    #[tabled(rename = "Exp. Date")]
    exp_date: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Total")]
    total: String,
}

impl ReturnReport {
    /// Generate the report; `items` is every line item the caller may see
    pub fn generate(
        scoped: &[ReturnNote],
        items: &[ReturnItem],
        filter: &ReportFilter,
    ) -> PortalResult<Self> {
        let rows = filter.apply(scoped)?;
        let items = items
            .iter()
            .filter(|item| rows.iter().any(|r| r.tax_invoice == item.inv_id))
            .cloned()
            .collect();

        Ok(Self {
            filter: filter.clone(),
            rows,
            items,
        })
    }

    /// Sum of the visible return totals
    pub fn total_amount(&self) -> i64 {
        self.rows
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.total))
    }

    /// Line items of one return
    pub fn items_for(&self, note: &ReturnNote) -> Vec<&ReturnItem> {
        note.items(&self.items)
    }

    pub fn columns() -> Vec<Column<'static, ReturnNote>> {
        vec![
            Column::new("Return ID", |r: &ReturnNote| r.return_id.clone()),
            Column::new("Tax Invoice", |r: &ReturnNote| r.tax_invoice.clone()),
            Column::new("Created By", |r: &ReturnNote| r.created_by.clone()),
            Column::new("Total", |r: &ReturnNote| r.total.to_string()),
            Column::new("Received Date", |r: &ReturnNote| format_date(&r.received_date)),
            Column::new("Return Note ID", |r: &ReturnNote| r.return_note_id.clone()),
            Column::new("Status", |r: &ReturnNote| r.status.to_string()),
        ]
    }
}

impl ReportView for ReturnReport {
    type Row = ReturnNote;

    fn rows(&self) -> &[ReturnNote] {
        &self.rows
    }

    fn filter(&self) -> &ReportFilter {
        &self.filter
    }

    fn format_terminal(&self, _settings: &Settings) -> String {
        if self.rows.is_empty() {
            return "No returns match the current filters.\n".to_string();
        }

        let table_rows = self.rows.iter().map(|r| ReturnTableRow {
            return_id: r.return_id.clone(),
            tax_invoice: r.tax_invoice.clone(),
            created_by: r.created_by.clone(),
            total: format_rupees(r.total),
            received: format_date(&r.received_date),
            return_note_id: r.return_note_id.clone(),
            status: r.status.to_string(),
        });

        let mut output = Table::new(table_rows).with(Style::rounded()).to_string();
        output.push('\n');
        output.push_str(&format!(
            "{} return(s), total {}\n",
            self.rows.len(),
            format_rupees(self.total_amount())
        ));
        output
    }

    fn format_details(&self, note: &ReturnNote, _settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str(&format!("Return {}\n", note.return_id));
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!("Tax Invoice:    {}\n", note.tax_invoice));
        output.push_str(&format!("Return Note ID: {}\n", note.return_note_id));
        output.push_str(&format!("Created By:     {}\n", note.created_by));
        output.push_str(&format!(
            "Received Date:  {}\n",
            format_date(&note.received_date)
        ));
        output.push_str(&format!("Status:         {}\n", status_badge(note.status)));
        output.push_str(&format!("Total:          {}\n\n", format_rupees(note.total)));

        let items = self.items_for(note);
        if items.is_empty() {
            output.push_str("No line items recorded for this return.\n");
            return output;
        }

        let item_rows = items.iter().map(|item| ItemTableRow {
            product_name: item.product_name.clone(),
            product_id: item.product_id.clone(),
            batch_id: item.batch_id.clone(),
            pack_size: item.pack_size.clone(),
            exp_date: format_date(&item.exp_date),
            price: format_rupees(item.price),
            quantity: item.returned_quantity,
            total: format_rupees(item.total),
        });
        output.push_str(&Table::new(item_rows).with(Style::rounded()).to_string());
        output.push('\n');

        let items_total = items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.total));
        output.push_str(&format!(
            "{} item(s), total {}\n",
            items.len(),
            format_rupees(items_total)
        ));
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W, settings: &Settings) -> PortalResult<()> {
        export_csv(writer, &Self::columns(), &self.rows, settings.line_ending)
    }
}
