//! Non-compliance flag for field visits
//!
//! A visit is non-compliant when any of its five ratings is at or below the
//! threshold. The flag is derived on every call, never stored.

use crate::models::VisitReport;

/// Ratings at or below this value flag the visit
pub const NON_COMPLIANCE_THRESHOLD: u8 = 2;

/// Does any rating fall at or below the threshold?
pub fn is_non_compliant(visit: &VisitReport) -> bool {
    visit
        .ratings()
        .iter()
        .any(|(_, rating)| rating.value <= NON_COMPLIANCE_THRESHOLD)
}

/// Labels of the ratings that triggered the flag
pub fn non_compliant_ratings(visit: &VisitReport) -> Vec<&'static str> {
    visit
        .ratings()
        .iter()
        .filter(|(_, rating)| rating.value <= NON_COMPLIANCE_THRESHOLD)
        .map(|(label, _)| *label)
        .collect()
}
