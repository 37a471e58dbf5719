//! Object-mutation trait for move/rename/delete/download requests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;

/// A time-limited URL granting direct download access to one object.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SignedUrl {
    /// The signed URL itself.
    pub url: String,
    /// When the URL stops being honored.
    pub expires_at: DateTime<Utc>,
}

/// Trait for object-mutation backends.
///
/// Every operation either succeeds or returns an opaque failure mapped to
/// [`crate::error::ErrorKind::ExternalService`] (or `NotFound`). Callers
/// never mutate their own view of the hierarchy on success; they re-list
/// and rebuild instead.
#[async_trait]
pub trait ObjectMutation: Send + Sync + std::fmt::Debug + 'static {
    /// Move an object (or a folder subtree) to a new key.
    async fn move_object(&self, source_key: &str, destination_key: &str) -> AppResult<()>;

    /// Rename the terminal segment of a key, returning the new full key.
    async fn rename(&self, key: &str, new_name: &str) -> AppResult<String>;

    /// Delete an object (or a folder subtree).
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Produce a signed download URL for a file object.
    async fn download_url(&self, key: &str) -> AppResult<SignedUrl>;
}
