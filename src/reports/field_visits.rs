//! Field Visit Report
//!
//! Lists the visits that pass the current filter, flags non-compliant ones,
//! and exports the full visit sheet to CSV.

use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::compliance::{is_non_compliant, non_compliant_ratings};
use super::filter::ReportFilter;
use super::ReportView;
use crate::config::Settings;
use crate::display::{format_timestamp, separator, truncate};
use crate::error::PortalResult;
use crate::export::{export_csv, Column};
use crate::models::VisitReport;

/// Field visits matching a filter
#[derive(Debug, Clone)]
pub struct FieldVisitReport {
    filter: ReportFilter,
    rows: Vec<VisitReport>,
}

#[derive(Tabled)]
struct VisitTableRow {
    #[tabled(rename = "Date & Time")]
    when: String,
    #[tabled(rename = "Employee")]
    employee: String,
    #[tabled(rename = "Store")]
    store: String,
    #[tabled(rename = "Ratings")]
    ratings: String,
    #[tabled(rename = "Comments")]
    comments: String,
    #[tabled(rename = "Flag")]
    flag: String,
}

impl FieldVisitReport {
    /// Generate the report from an already-scoped collection
    pub fn generate(scoped: &[VisitReport], filter: &ReportFilter) -> PortalResult<Self> {
        Ok(Self {
            filter: filter.clone(),
            rows: filter.apply(scoped)?,
        })
    }

    /// How many visible visits are non-compliant
    pub fn non_compliant_count(&self) -> usize {
        self.rows.iter().filter(|v| is_non_compliant(v)).count()
    }

    /// The export sheet, in portal column order
    pub fn columns(timestamp_format: &str) -> Vec<Column<'_, VisitReport>> {
        vec![
            Column::new("Date & Time", move |v: &VisitReport| {
                format_timestamp(&v.datetime, timestamp_format)
            }),
            Column::new("Employee Name", |v: &VisitReport| v.employee_name.clone()),
            Column::new("Employee ID", |v: &VisitReport| v.employee_id.to_string()),
            Column::new("Store ID", |v: &VisitReport| v.store_id.to_string()),
            Column::new("Store Name", |v: &VisitReport| v.store_name.clone()),
            Column::new("Local Head", |v: &VisitReport| v.local_head_name.clone()),
            Column::new("Store Env", |v: &VisitReport| v.store_environment.value.to_string()),
            Column::new("Store Env Remarks", |v: &VisitReport| {
                v.store_environment.remarks_or_empty().to_string()
            }),
            Column::new("Staff Grooming", |v: &VisitReport| v.staff_grooming.value.to_string()),
            Column::new("Grooming Remarks", |v: &VisitReport| {
                v.staff_grooming.remarks_or_empty().to_string()
            }),
            Column::new("Staff Quality", |v: &VisitReport| v.staff_quality.value.to_string()),
            Column::new("Quality Remarks", |v: &VisitReport| {
                v.staff_quality.remarks_or_empty().to_string()
            }),
            Column::new("Staff Present", |v: &VisitReport| v.staff_present.to_string()),
            Column::new("Pvt Label Pharma", |v: &VisitReport| {
                v.pvt_label_pharma.value.to_string()
            }),
            Column::new("Pharma Remarks", |v: &VisitReport| {
                v.pvt_label_pharma.remarks_or_empty().to_string()
            }),
            Column::new("Pvt Label Non-Pharma", |v: &VisitReport| {
                v.pvt_label_non_pharma.value.to_string()
            }),
            Column::new("Non-Pharma Remarks", |v: &VisitReport| {
                v.pvt_label_non_pharma.remarks_or_empty().to_string()
            }),
            Column::new("TO Replenishment", |v: &VisitReport| {
                v.tos_replenishment.to_string()
            }),
            Column::new("Outstanding Payments", |v: &VisitReport| {
                v.outstanding_payments.to_string()
            }),
            Column::new("SOP Deviations", |v: &VisitReport| {
                v.sop_deviations.clone().unwrap_or_default()
            }),
            Column::new("Other Observations", |v: &VisitReport| {
                v.other_observations.clone().unwrap_or_default()
            }),
        ]
    }
}

fn ratings_summary(visit: &VisitReport) -> String {
    format!(
        "Env {} · Groom {} · Quality {} · Pharma {} · Non-Pharma {}",
        visit.store_environment.value,
        visit.staff_grooming.value,
        visit.staff_quality.value,
        visit.pvt_label_pharma.value,
        visit.pvt_label_non_pharma.value
    )
}

fn comments_summary(visit: &VisitReport) -> String {
    let text = match (&visit.sop_deviations, &visit.other_observations) {
        (Some(sop), _) if !sop.is_empty() => sop.as_str(),
        (_, Some(other)) => other.as_str(),
        _ => "",
    };
    truncate(text, 32)
}

impl ReportView for FieldVisitReport {
    type Row = VisitReport;

    fn rows(&self) -> &[VisitReport] {
        &self.rows
    }

    fn filter(&self) -> &ReportFilter {
        &self.filter
    }

    fn format_terminal(&self, settings: &Settings) -> String {
        if self.rows.is_empty() {
            return "No field visit reports match the current filters.\n".to_string();
        }

        let table_rows = self.rows.iter().map(|v| VisitTableRow {
            when: format_timestamp(&v.datetime, &settings.timestamp_format),
            employee: format!("{} ({})", v.employee_name, v.employee_id),
            store: format!("{} ({})", v.store_name, v.store_id),
            ratings: ratings_summary(v),
            comments: comments_summary(v),
            flag: if is_non_compliant(v) {
                "Non-compliance".to_string()
            } else {
                String::new()
            },
        });

        let mut output = Table::new(table_rows).with(Style::rounded()).to_string();
        output.push('\n');
        output.push_str(&format!(
            "{} visit(s), {} non-compliant\n",
            self.rows.len(),
            self.non_compliant_count()
        ));
        output
    }

    fn format_details(&self, visit: &VisitReport, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!("Visit {}\n", visit.id));
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "Date & Time:          {}\n",
            format_timestamp(&visit.datetime, &settings.timestamp_format)
        ));
        output.push_str(&format!(
            "Employee:             {} ({})\n",
            visit.employee_name, visit.employee_id
        ));
        output.push_str(&format!(
            "Store:                {} ({})\n",
            visit.store_name, visit.store_id
        ));
        output.push_str(&format!("Local Head:           {}\n", visit.local_head_name));
        output.push_str(&format!("Staff Present:        {}\n", visit.staff_present));
        output.push_str(&format!("TO Replenishment:     {}\n", visit.tos_replenishment));
        output.push_str(&format!(
            "Outstanding Payments: {}\n\n",
            visit.outstanding_payments
        ));

        output.push_str("Ratings\n");
        for (label, rating) in visit.ratings() {
            output.push_str(&format!("  {:<22} {}", label, rating));
            if let Some(remarks) = &rating.remarks {
                output.push_str(&format!("  - {}", remarks));
            }
            output.push('\n');
        }

        let offending = non_compliant_ratings(visit);
        if !offending.is_empty() {
            output.push_str(&format!("\nNon-compliance: {}\n", offending.join(", ")));
        }

        output.push_str(&format!(
            "\nSOP Deviations:     {}\n",
            visit.sop_deviations.as_deref().unwrap_or("-")
        ));
        output.push_str(&format!(
            "Other Observations: {}\n",
            visit.other_observations.as_deref().unwrap_or("-")
        ));

        output
    }

    fn export_csv<W: Write>(&self, writer: &mut W, settings: &Settings) -> PortalResult<()> {
        let columns = Self::columns(&settings.timestamp_format);
        export_csv(writer, &columns, &self.rows, settings.line_ending)
    }
}
