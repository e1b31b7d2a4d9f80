//! Ordinal ratings recorded during field visits

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PortalError, PortalResult};

/// Lowest value on the rating scale
pub const RATING_MIN: u8 = 1;
/// Highest value on the rating scale
pub const RATING_MAX: u8 = 5;

/// A score on the 1-5 scale with optional remarks from the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub value: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Rating {
    /// Create a rating, rejecting values outside the scale
    pub fn new(value: u8) -> PortalResult<Self> {
        let rating = Self {
            value,
            remarks: None,
        };
        rating.validate()?;
        Ok(rating)
    }

    /// Create a rating with remarks
    pub fn with_remarks(value: u8, remarks: impl Into<String>) -> PortalResult<Self> {
        let mut rating = Self::new(value)?;
        rating.remarks = Some(remarks.into());
        Ok(rating)
    }

    /// Check the value is on the scale
    pub fn validate(&self) -> PortalResult<()> {
        if (RATING_MIN..=RATING_MAX).contains(&self.value) {
            Ok(())
        } else {
            Err(PortalError::Validation(format!(
                "Rating {} is outside {}..={}",
                self.value, RATING_MIN, RATING_MAX
            )))
        }
    }

    /// Remarks, or an empty string when none were given
    pub fn remarks_or_empty(&self) -> &str {
        self.remarks.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, RATING_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(1).is_ok());
        assert!(Rating::new(5).is_ok());
        assert!(Rating::new(0).unwrap_err().is_validation());
        assert!(Rating::new(6).unwrap_err().is_validation());
    }

    #[test]
    fn test_rating_display_and_remarks() {
        let rating = Rating::with_remarks(2, "Dust near billing counter").unwrap();
        assert_eq!(rating.to_string(), "2/5");
        assert_eq!(rating.remarks_or_empty(), "Dust near billing counter");
        assert_eq!(Rating::new(4).unwrap().remarks_or_empty(), "");
    }

    #[test]
    fn test_rating_deserialize_without_remarks() {
        let rating: Rating = serde_json::from_str(r#"{"value": 4}"#).unwrap();
        assert_eq!(rating.value, 4);
        assert!(rating.remarks.is_none());
    }
}
