//! Local state-persistence configuration.

use serde::{Deserialize, Serialize};

/// Settings for the per-session state persistence adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Adapter type: `"json-file"`, `"memory"`, or `"noop"`.
    #[serde(default = "default_adapter")]
    pub adapter: String,
    /// Directory holding the JSON state files for the `json-file` adapter.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            adapter: default_adapter(),
            directory: default_directory(),
        }
    }
}

fn default_adapter() -> String {
    "json-file".to_string()
}

fn default_directory() -> String {
    "data/state".to_string()
}
