//! Store access control
//!
//! Which stores a session may see is decided outside the portal. The
//! [`AccessControl`] trait is the seam; [`StaticAccessControl`] serves the
//! list configured in settings. The list is trusted verbatim.

use crate::config::Settings;
use crate::error::{PortalError, PortalResult};
use crate::models::StoreId;

/// The stores a session is allowed to see
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowList {
    stores: Vec<StoreId>,
}

impl AllowList {
    pub fn new<I, S>(stores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StoreId>,
    {
        Self {
            stores: stores.into_iter().map(Into::into).collect(),
        }
    }

    /// Is the store on the list?
    pub fn contains(&self, store_id: &str) -> bool {
        self.stores.iter().any(|s| s.as_str() == store_id)
    }

    /// Fail with `Authorization` if the store is not on the list
    pub fn authorize(&self, store_id: &str) -> PortalResult<()> {
        if self.contains(store_id) {
            Ok(())
        } else {
            Err(PortalError::unauthorized_store(store_id))
        }
    }

    pub fn stores(&self) -> &[StoreId] {
        &self.stores
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// Supplies the allow-list for the current session
pub trait AccessControl {
    fn allowed_stores(&self) -> PortalResult<AllowList>;
}

/// Allow-list read from settings
#[derive(Debug, Clone)]
pub struct StaticAccessControl {
    allow_list: AllowList,
}

impl StaticAccessControl {
    pub fn new(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(AllowList::new(settings.allowed_store_ids.iter().cloned()))
    }
}

impl AccessControl for StaticAccessControl {
    fn allowed_stores(&self) -> PortalResult<AllowList> {
        Ok(self.allow_list.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_and_authorize() {
        let allow = AllowList::new(["S-1001", "S-2002"]);
        assert!(allow.contains("S-1001"));
        assert!(!allow.contains("S-9999"));
        assert!(allow.authorize("S-2002").is_ok());
        assert!(allow.authorize("S-9999").unwrap_err().is_authorization());
    }

    #[test]
    fn test_static_access_from_settings() {
        let access = StaticAccessControl::from_settings(&Settings::default());
        let allow = access.allowed_stores().unwrap();
        assert_eq!(allow.stores(), &[StoreId::from("S-1001")]);
    }

    #[test]
    fn test_empty_allow_list() {
        let allow = AllowList::default();
        assert!(allow.is_empty());
        assert!(!allow.contains("S-1001"));
    }
}
