//! Object-listing backend configuration.

use serde::{Deserialize, Serialize};

/// Settings for the object listing/mutation backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend type: `"memory"` or `"local"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Root directory for the local-filesystem backend.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Lifetime of signed download URLs, in seconds.
    #[serde(default = "default_signed_url_ttl")]
    pub signed_url_ttl_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            root_path: default_root_path(),
            signed_url_ttl_seconds: default_signed_url_ttl(),
        }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_root_path() -> String {
    "data/objects".to_string()
}

fn default_signed_url_ttl() -> u64 {
    900
}
