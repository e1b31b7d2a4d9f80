//! Product return models
//!
//! A return note covers goods sent back against one tax invoice. The line
//! items are linked to their note through the invoice id.

use serde::{Deserialize, Serialize};

use super::ids::StoreId;
use super::record::{parse_timestamp, FieldKey, Record, ReportKind};
use super::status::ApprovalStatus;
use crate::error::PortalResult;

/// A product return raised by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnNote {
    pub id: String,
    pub return_id: String,
    pub store_id: StoreId,
    pub tax_invoice: String,
    pub created_by: String,
    /// Total value in whole rupees
    pub total: i64,
    /// ISO 8601 date the goods were received
    pub received_date: String,
    pub return_note_id: String,
    pub status: ApprovalStatus,
}

/// One product line of a return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItem {
    pub product_name: String,
    pub product_id: String,
    pub batch_id: String,
    pub pack_size: String,
    pub exp_date: String,
    pub inv_id: String,
    pub ord_id: String,
    pub price: i64,
    pub returned_quantity: u32,
    pub total: i64,
}

impl ReturnNote {
    /// Check the received date parses
    pub fn validate(&self) -> PortalResult<()> {
        self.timestamp()?;
        Ok(())
    }

    /// Line items belonging to this return, in source order
    pub fn items<'a>(&self, items: &'a [ReturnItem]) -> Vec<&'a ReturnItem> {
        items
            .iter()
            .filter(|item| item.inv_id == self.tax_invoice)
            .collect()
    }
}

impl ReturnItem {
    /// Check the expiry date parses
    pub fn validate(&self) -> PortalResult<()> {
        parse_timestamp(&self.exp_date)?;
        Ok(())
    }
}

impl Record for ReturnNote {
    const KIND: ReportKind = ReportKind::Returns;

    fn id(&self) -> &str {
        &self.id
    }

    fn raw_timestamp(&self) -> &str {
        &self.received_date
    }

    fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    fn field(&self, key: FieldKey) -> Option<&str> {
        match key {
            FieldKey::Store => Some(self.store_id.as_str()),
            FieldKey::Status => Some(self.status.as_str()),
            FieldKey::CreatedBy => Some(&self.created_by),
            FieldKey::Employee | FieldKey::PaymentMode => None,
        }
    }
}
