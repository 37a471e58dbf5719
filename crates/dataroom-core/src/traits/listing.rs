//! Object-listing trait: the sole input of the tree-building pipeline.

use async_trait::async_trait;

use crate::result::AppResult;

/// Storage attributes attached to a listed object.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectMeta {
    /// Size in bytes.
    pub size_bytes: u64,
    /// Last modified timestamp.
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    /// Username of the uploader (if recorded).
    pub uploaded_by: Option<String>,
    /// MIME type (if known).
    pub mime_type: Option<String>,
}

/// One entry of a flat key listing.
///
/// `key` is the full storage key including the tenant prefix, e.g.
/// `"room42/reports/q1.pdf"`. A key ending in `/` is a folder marker.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectEntry {
    /// Flat storage key.
    pub key: String,
    /// Storage attributes for the object.
    pub meta: ObjectMeta,
}

impl ObjectEntry {
    /// Create an entry with default (empty) metadata.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            meta: ObjectMeta::default(),
        }
    }

    /// Create an entry carrying the given metadata.
    pub fn with_meta(key: impl Into<String>, meta: ObjectMeta) -> Self {
        Self {
            key: key.into(),
            meta,
        }
    }
}

/// Trait for object-listing backends.
///
/// Implementations exist for an in-memory store and the local filesystem.
/// The listing order is unspecified; callers sort before building a tree.
#[async_trait]
pub trait ObjectListing: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g., "memory", "local").
    fn backend_type(&self) -> &str;

    /// Check whether the backend is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// List every key under the given tenant prefix, with metadata.
    async fn list(&self, tenant_prefix: &str) -> AppResult<Vec<ObjectEntry>>;
}
