//! Payments Report

use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::filter::ReportFilter;
use super::ReportView;
use crate::config::Settings;
use crate::display::{format_date, format_rupees, separator, status_badge};
use crate::error::PortalResult;
use crate::export::{export_csv, Column};
use crate::models::Payment;

/// Payments matching a filter
#[derive(Debug, Clone)]
pub struct PaymentReport {
    filter: ReportFilter,
    rows: Vec<Payment>,
}

#[derive(Tabled)]
struct PaymentTableRow {
    #[tabled(rename = "Payment ID")]
    payment_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Created Date")]
    created: String,
    #[tabled(rename = "Approved Date")]
    approved: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Mode of Payment")]
    mode: String,
}

impl PaymentReport {
    pub fn generate(scoped: &[Payment], filter: &ReportFilter) -> PortalResult<Self> {
        Ok(Self {
            filter: filter.clone(),
            rows: filter.apply(scoped)?,
        })
    }

    /// Sum of the visible payment amounts
    pub fn total_amount(&self) -> i64 {
        self.rows
            .iter()
            .fold(0i64, |acc, p| acc.saturating_add(p.amount))
    }

    pub fn columns() -> Vec<Column<'static, Payment>> {
        vec![
            Column::new("Payment ID", |p: &Payment| p.payment_id.clone()),
            Column::new("Name", |p: &Payment| p.name.clone()),
            Column::new("Created Date", |p: &Payment| format_date(&p.created_date)),
            Column::new("Approved Date", |p: &Payment| {
                p.approved_date.as_deref().map(format_date).unwrap_or_default()
            }),
            Column::new("Status", |p: &Payment| p.status.to_string()),
            Column::new("Amount", |p: &Payment| p.amount.to_string()),
            Column::new("Mode of Payment", |p: &Payment| p.mode_of_payment.clone()),
        ]
    }
}

fn approved_or_dash(payment: &Payment) -> String {
    payment
        .approved_date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string())
}

impl ReportView for PaymentReport {
    type Row = Payment;

    fn rows(&self) -> &[Payment] {
        &self.rows
    }

    fn filter(&self) -> &ReportFilter {
        &self.filter
    }

    fn format_terminal(&self, _settings: &Settings) -> String {
        if self.rows.is_empty() {
            return "No payments match the current filters.\n".to_string();
        }

        let table_rows = self.rows.iter().map(|p| PaymentTableRow {
            payment_id: p.payment_id.clone(),
            name: p.name.clone(),
            created: format_date(&p.created_date),
            approved: approved_or_dash(p),
            status: p.status.to_string(),
            amount: format_rupees(p.amount),
            mode: p.mode_of_payment.clone(),
        });

        let mut output = Table::new(table_rows).with(Style::rounded()).to_string();
        output.push('\n');
        output.push_str(&format!(
            "{} payment(s), total {}\n",
            self.rows.len(),
            format_rupees(self.total_amount())
        ));
        output
    }

    fn format_details(&self, payment: &Payment, _settings: &Settings) -> String {
        let mut output = String::new();
        output.push_str(&format!("Payment {}\n", payment.payment_id));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!("Name:            {}\n", payment.name));
        output.push_str(&format!("Store:           {}\n", payment.store_id));
        output.push_str(&format!(
            "Created Date:    {}\n",
            format_date(&payment.created_date)
        ));
        output.push_str(&format!("Approved Date:   {}\n", approved_or_dash(payment)));
        output.push_str(&format!("Status:          {}\n", status_badge(payment.status)));
        output.push_str(&format!("Amount:          {}\n", format_rupees(payment.amount)));
        output.push_str(&format!("Mode of Payment: {}\n", payment.mode_of_payment));
        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W, settings: &Settings) -> PortalResult<()> {
        export_csv(writer, &Self::columns(), &self.rows, settings.line_ending)
    }
}
