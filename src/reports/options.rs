//! Choice lists for the filter selectors
//!
//! Always computed from the scoped collection, so a selector never offers a
//! store or employee the session cannot see.

use std::collections::HashSet;
use std::hash::Hash;

use crate::models::{StoreId, VisitReport};

/// Distinct values in order of first occurrence
pub fn distinct_values<R, T, F>(records: &[R], selector: F) -> Vec<T>
where
    F: Fn(&R) -> T,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        let value = selector(record);
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }
    values
}

/// `(store id, store name)` pairs for the store selector
pub fn store_options(visits: &[VisitReport]) -> Vec<(StoreId, String)> {
    distinct_values(visits, |v| (v.store_id.clone(), v.store_name.clone()))
}

/// Employee names for the employee selector
pub fn employee_options(visits: &[VisitReport]) -> Vec<String> {
    distinct_values(visits, |v| v.employee_name.clone())
}
