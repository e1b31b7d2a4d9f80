//! Caller-owned view state: the current filter and the expanded row

use super::filter::ReportFilter;

/// Selections for one report view within a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    filter: ReportFilter,
    expanded: Option<String>,
}

impl ViewState {
    pub fn new(filter: ReportFilter) -> Self {
        Self {
            filter,
            expanded: None,
        }
    }

    pub fn filter(&self) -> &ReportFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ReportFilter) {
        self.filter = filter;
    }

    /// Id of the record whose details are shown
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn set_expanded(&mut self, id: Option<String>) {
        self.expanded = id;
    }

    /// Expand a row, or collapse it if it is already expanded
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }
}
