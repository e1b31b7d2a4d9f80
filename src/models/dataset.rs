//! The full collection of records a source hands to a session

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::payment::Payment;
use super::record::Record;
use super::returns::{ReturnItem, ReturnNote};
use super::visit::VisitReport;
use crate::error::{PortalError, PortalResult};

/// Every record the portal views read from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub field_visits: Vec<VisitReport>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub returns: Vec<ReturnNote>,
    #[serde(default)]
    pub return_items: Vec<ReturnItem>,
}

impl Dataset {
    /// Check record invariants: unique ids, parseable timestamps, ratings on scale
    pub fn validate(&self) -> PortalResult<()> {
        ensure_unique_ids(&self.field_visits)?;
        ensure_unique_ids(&self.payments)?;
        ensure_unique_ids(&self.returns)?;

        for visit in &self.field_visits {
            visit.validate().map_err(|e| in_record(visit.id(), e))?;
        }
        for payment in &self.payments {
            payment.validate().map_err(|e| in_record(payment.id(), e))?;
        }
        for note in &self.returns {
            note.validate().map_err(|e| in_record(note.id(), e))?;
        }
        for item in &self.return_items {
            item.validate().map_err(|e| in_record(&item.product_id, e))?;
        }

        Ok(())
    }
}

fn ensure_unique_ids<R: Record>(records: &[R]) -> PortalResult<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(PortalError::Validation(format!(
                "Duplicate {} id: {}",
                R::KIND,
                record.id()
            )));
        }
    }
    Ok(())
}

fn in_record(id: &str, err: PortalError) -> PortalError {
    match err {
        PortalError::Validation(msg) => PortalError::Validation(format!("{} ({})", msg, id)),
        other => other,
    }
}
