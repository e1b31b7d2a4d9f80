//! Store scoping: the authorization boundary for every report view

use crate::access::AllowList;
use crate::models::Record;

/// Records whose store is on the allow-list, in input order
pub fn scope<R: Record + Clone>(records: &[R], allow_list: &AllowList) -> Vec<R> {
    records
        .iter()
        .filter(|r| allow_list.contains(r.store_id().as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures;

    #[test]
    fn test_scope_drops_other_stores() {
        let visits = fixtures::field_visits();
        let scoped = scope(&visits, &AllowList::new(["S-1001"]));

        let ids: Vec<_> = scoped.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["vr-1001", "vr-1002"]);
    }

    #[test]
    fn test_scope_is_subset_of_allow_list() {
        let visits = fixtures::field_visits();
        for allow in [
            AllowList::default(),
            AllowList::new(["S-2002"]),
            AllowList::new(["S-1001", "S-2002"]),
            AllowList::new(["S-9999"]),
        ] {
            let scoped = scope(&visits, &allow);
            assert!(scoped.iter().all(|v| allow.contains(v.store_id.as_str())));
            assert!(scoped.len() <= visits.len());
        }
    }

    #[test]
    fn test_scope_empty_allow_list() {
        assert!(scope(&fixtures::payments(), &AllowList::default()).is_empty());
    }
}
