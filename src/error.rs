//! Custom error types for the franchise portal
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable at the
//! interaction boundary: the CLI reports it as a message and exits.

use thiserror::Error;

/// The main error type for portal operations
#[derive(Error, Debug)]
pub enum PortalError {
    /// Malformed or missing filter input, or data violating record invariants
    #[error("Validation error: {0}")]
    Validation(String),

    /// The record source could not provide data
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    /// A requested store is outside the session's allow-list
    #[error("Not authorized to view store '{store_id}'")]
    Authorization { store_id: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl PortalError {
    /// Create a "not found" error for field visit reports
    pub fn visit_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Field visit",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payments
    pub fn payment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payment",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for returns
    pub fn return_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Return",
            identifier: identifier.into(),
        }
    }

    /// Create an authorization error for a store id
    pub fn unauthorized_store(store_id: impl Into<String>) -> Self {
        Self::Authorization {
            store_id: store_id.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization { .. })
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PortalError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for portal operations
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortalError::Validation("Date range required".into());
        assert_eq!(err.to_string(), "Validation error: Date range required");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = PortalError::visit_not_found("vr-9999");
        assert_eq!(err.to_string(), "Field visit not found: vr-9999");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_authorization_error() {
        let err = PortalError::unauthorized_store("S-9999");
        assert_eq!(err.to_string(), "Not authorized to view store 'S-9999'");
        assert!(err.is_authorization());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let portal_err: PortalError = io_err.into();
        assert!(matches!(portal_err, PortalError::Io(_)));
    }
}
