//! Payment model
//!
//! Payments made by the franchisee to the franchisor, with their approval state.

use serde::{Deserialize, Serialize};

use super::ids::StoreId;
use super::record::{FieldKey, Record, ReportKind};
use super::status::ApprovalStatus;
use crate::error::PortalResult;

/// A payment submitted by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub payment_id: String,
    pub store_id: StoreId,
    pub name: String,
    /// ISO 8601 date the payment was created
    pub created_date: String,
    #[serde(default)]
    pub approved_date: Option<String>,
    pub status: ApprovalStatus,
    /// Amount in whole rupees
    pub amount: i64,
    pub mode_of_payment: String,
}

impl Payment {
    /// Check the dates parse
    pub fn validate(&self) -> PortalResult<()> {
        self.timestamp()?;
        if let Some(approved) = &self.approved_date {
            super::record::parse_timestamp(approved)?;
        }
        Ok(())
    }
}

impl Record for Payment {
    const KIND: ReportKind = ReportKind::Payments;

    fn id(&self) -> &str {
        &self.id
    }

    fn raw_timestamp(&self) -> &str {
        &self.created_date
    }

    fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    fn field(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::Store => Some(self.store_id.as_str()),
            FieldKey::Status => Some(self.status.as_str()),
            FieldKey::PaymentMode => Some(&self.mode_of_payment),
            FieldKey::Employee | FieldKey::CreatedBy => None,
        }
    }
}
