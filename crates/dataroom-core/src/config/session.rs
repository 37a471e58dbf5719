//! Browsing-session configuration.

use serde::{Deserialize, Serialize};

/// Settings for the per-session tree state store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Identifier of the sentinel root node. The root is always treated as
    /// expanded unless explicitly closed.
    #[serde(default = "default_root_node_id")]
    pub root_node_id: String,
    /// Display label for the sentinel root node.
    #[serde(default = "default_root_label")]
    pub root_label: String,
    /// Whether the last-built forest is persisted alongside the expansion
    /// state. Disabling this keeps only the open-folder set across reloads.
    #[serde(default = "default_true")]
    pub persist_forest: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            root_node_id: default_root_node_id(),
            root_label: default_root_label(),
            persist_forest: default_true(),
        }
    }
}

fn default_root_node_id() -> String {
    "home".to_string()
}

fn default_root_label() -> String {
    "Home".to_string()
}

fn default_true() -> bool {
    true
}
