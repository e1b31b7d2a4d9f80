//! Strongly-typed identifier wrappers
//!
//! Store and employee identifiers are opaque strings supplied by the record
//! source. Newtypes keep them from being mixed up with names or other ids.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate string ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(StoreId);
define_id!(EmployeeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = StoreId::new("S-1001");
        assert_eq!(id.to_string(), "S-1001");
        assert_eq!(id.as_str(), "S-1001");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(StoreId::from("S-1001"), StoreId::new("S-1001".to_string()));
        assert_ne!(EmployeeId::from("EMP-021"), EmployeeId::from("EMP-033"));
    }

    #[test]
    fn test_id_serialization() {
        let id = EmployeeId::from("EMP-021");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"EMP-021\"");
        let deserialized: EmployeeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
