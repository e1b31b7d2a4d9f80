//! Field visit report model
//!
//! A field visit is an area employee's inspection of a franchise store: five
//! ratings, a staff head-count, two checklist answers and free-text notes.

use serde::{Deserialize, Serialize};

use super::ids::{EmployeeId, StoreId};
use super::rating::Rating;
use super::record::{FieldKey, Record, ReportKind};
use super::status::{ReplenishmentStatus, YesNo};
use crate::error::PortalResult;

/// A single field visit report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitReport {
    pub id: String,
    /// ISO 8601
    pub datetime: String,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub store_id: StoreId,
    pub store_name: String,
    pub local_head_name: String,
    pub store_environment: Rating,
    pub staff_grooming: Rating,
    pub staff_quality: Rating,
    pub staff_present: u32,
    pub pvt_label_pharma: Rating,
    pub pvt_label_non_pharma: Rating,
    pub tos_replenishment: ReplenishmentStatus,
    pub outstanding_payments: YesNo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sop_deviations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_observations: Option<String>,
}

impl VisitReport {
    /// The five ratings with their display labels
    pub fn ratings(&self) -> [(&'static str, &Rating); 5] {
        [
            ("Store Environment", &self.store_environment),
            ("Staff Grooming", &self.staff_grooming),
            ("Staff Quality", &self.staff_quality),
            ("Pvt Label Pharma", &self.pvt_label_pharma),
            ("Pvt Label Non-Pharma", &self.pvt_label_non_pharma),
        ]
    }

    /// Check every rating is on the scale
    pub fn validate(&self) -> PortalResult<()> {
        for (_, rating) in self.ratings() {
            rating.validate()?;
        }
        self.timestamp()?;
        Ok(())
    }
}

impl Record for VisitReport {
    const KIND: ReportKind = ReportKind::FieldVisits;

    fn id(&self) -> &str {
        &self.id
    }

    fn raw_timestamp(&self) -> &str {
        &self.datetime
    }

    fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    fn field(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::Store => Some(self.store_id.as_str()),
            FieldKey::Employee => Some(&self.employee_name),
            FieldKey::Status => Some(self.tos_replenishment.as_str()),
            FieldKey::PaymentMode | FieldKey::CreatedBy => None,
        }
    }
}
