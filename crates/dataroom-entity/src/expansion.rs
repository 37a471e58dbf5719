//! The set of folder ids currently shown "open" in the UI.

use std::collections::HashSet;

/// Open-folder expansion state.
///
/// Seeded with the sentinel root id, which therefore defaults to open.
/// Ids for folders absent from the current forest are harmlessly retained;
/// they simply stop mattering until a matching folder reappears.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionState {
    /// The sentinel root id.
    root_id: String,
    /// Ids of open folders.
    open: HashSet<String>,
}

impl ExpansionState {
    /// Create a fresh expansion state with only the sentinel root open.
    pub fn new(root_id: impl Into<String>) -> Self {
        let root_id = root_id.into();
        let mut open = HashSet::new();
        open.insert(root_id.clone());
        Self { root_id, open }
    }

    /// Rebuild an expansion state from a persisted id list.
    pub fn from_ids(root_id: impl Into<String>, ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            root_id: root_id.into(),
            open: ids.into_iter().collect(),
        }
    }

    /// The sentinel root id.
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Whether the given node id is open.
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    /// Mark a node id as open. No-op if already open.
    pub fn open(&mut self, id: &str) -> bool {
        self.open.insert(id.to_string())
    }

    /// Mark a node id as closed. No-op if already closed.
    pub fn close(&mut self, id: &str) -> bool {
        self.open.remove(id)
    }

    /// Flip a node id between open and closed; an unknown id opens.
    pub fn toggle(&mut self, id: &str) {
        if !self.open.remove(id) {
            self.open.insert(id.to_string());
        }
    }

    /// Restore the initial sentinel-open state.
    pub fn reset(&mut self) {
        self.open.clear();
        self.open.insert(self.root_id.clone());
    }

    /// The open ids as a sorted, duplicate-free vector for persistence.
    pub fn to_sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.open.iter().cloned().collect();
        ids.sort();
        ids
    }
}
