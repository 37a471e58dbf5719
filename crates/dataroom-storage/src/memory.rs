//! In-memory object store backed by a concurrent key map.
//!
//! Primary test double for the listing/mutation collaborators; also usable
//! as a scratch backend in demos. Folder moves and deletes operate on the
//! whole key prefix, matching how a flat object store treats "folders".

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use dataroom_core::error::AppError;
use dataroom_core::result::AppResult;
use dataroom_core::traits::listing::{ObjectEntry, ObjectListing, ObjectMeta};
use dataroom_core::traits::mutation::{ObjectMutation, SignedUrl};

/// In-memory object store implementing both listing and mutation.
#[derive(Debug, Clone)]
pub struct MemoryObjectStore {
    /// Map of full key → metadata.
    objects: Arc<DashMap<String, ObjectMeta>>,
    /// Lifetime stamped onto issued signed URLs.
    signed_url_ttl: Duration,
}

impl MemoryObjectStore {
    /// Create an empty store with the given signed-URL lifetime.
    pub fn new(signed_url_ttl: Duration) -> Self {
        Self {
            objects: Arc::new(DashMap::new()),
            signed_url_ttl,
        }
    }

    /// Insert (or replace) one object.
    pub fn put(&self, key: impl Into<String>, meta: ObjectMeta) {
        self.objects.insert(key.into(), meta);
    }

    /// Insert a batch of listing entries, replacing matching keys.
    pub fn seed(&self, entries: impl IntoIterator<Item = ObjectEntry>) {
        for entry in entries {
            self.objects.insert(entry.key, entry.meta);
        }
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// All keys matching `key` itself, its folder marker, or its subtree.
    fn matching_keys(&self, key: &str) -> Vec<String> {
        let trimmed = key.trim_end_matches('/');
        let marker = format!("{trimmed}/");
        self.objects
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|k| k == trimmed || k == &marker || k.starts_with(&marker))
            .collect()
    }
}

#[async_trait]
impl ObjectListing for MemoryObjectStore {
    fn backend_type(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn list(&self, tenant_prefix: &str) -> AppResult<Vec<ObjectEntry>> {
        let marker = format!("{tenant_prefix}/");
        let mut entries: Vec<ObjectEntry> = self
            .objects
            .iter()
            .filter(|entry| entry.key() == tenant_prefix || entry.key().starts_with(&marker))
            .map(|entry| ObjectEntry::with_meta(entry.key().clone(), entry.value().clone()))
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }
}

#[async_trait]
impl ObjectMutation for MemoryObjectStore {
    async fn move_object(&self, source_key: &str, destination_key: &str) -> AppResult<()> {
        let source = source_key.trim_end_matches('/');
        let destination = destination_key.trim_end_matches('/');
        let matched = self.matching_keys(source);
        if matched.is_empty() {
            return Err(AppError::not_found(format!("Object not found: {source_key}")));
        }

        for old_key in &matched {
            if let Some((_, meta)) = self.objects.remove(old_key) {
                let new_key = format!("{destination}{}", &old_key[source.len()..]);
                self.objects.insert(new_key, meta);
            }
        }
        debug!(source = source_key, destination = destination_key, moved = matched.len(), "Moved objects");
        Ok(())
    }

    async fn rename(&self, key: &str, new_name: &str) -> AppResult<String> {
        if new_name.is_empty() || new_name.contains('/') {
            return Err(AppError::validation(format!("Invalid name: {new_name:?}")));
        }
        let trimmed = key.trim_end_matches('/');
        let new_key = match trimmed.rsplit_once('/') {
            Some((parent, _)) => format!("{parent}/{new_name}"),
            None => new_name.to_string(),
        };
        self.move_object(trimmed, &new_key).await?;
        Ok(new_key)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let matched = self.matching_keys(key);
        if matched.is_empty() {
            return Err(AppError::not_found(format!("Object not found: {key}")));
        }
        for k in &matched {
            self.objects.remove(k);
        }
        debug!(key, removed = matched.len(), "Deleted objects");
        Ok(())
    }

    async fn download_url(&self, key: &str) -> AppResult<SignedUrl> {
        if !self.objects.contains_key(key) {
            return Err(AppError::not_found(format!("Object not found: {key}")));
        }
        if key.ends_with('/') {
            return Err(AppError::validation(format!("Not a file: {key}")));
        }
        let expires_at = chrono::Utc::now()
            + chrono::Duration::from_std(self.signed_url_ttl)
                .map_err(|e| AppError::internal(format!("Invalid URL lifetime: {e}")))?;
        Ok(SignedUrl {
            url: format!("memory://{key}?token={}", Uuid::new_v4()),
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ttl() -> Duration {
        Duration::from_secs(900)
    }

    fn seeded() -> MemoryObjectStore {
        let store = MemoryObjectStore::new(ttl());
        store.seed([
            ObjectEntry::new("room42/docs/"),
            ObjectEntry::new("room42/docs/report.pdf"),
            ObjectEntry::new("room42/docs/archive/old.pdf"),
            ObjectEntry::new("room42/readme.txt"),
            ObjectEntry::new("other/readme.txt"),
        ]);
        store
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_tenant_prefix_and_sorted() {
        let store = seeded();
        let entries = store.list("room42").await.unwrap();
        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "room42/docs/",
                "room42/docs/archive/old.pdf",
                "room42/docs/report.pdf",
                "room42/readme.txt",
            ]
        );
    }

    #[tokio::test]
    async fn move_rekeys_a_whole_folder_subtree() {
        let store = seeded();
        store
            .move_object("room42/docs", "room42/papers")
            .await
            .unwrap();

        let keys: Vec<String> = store
            .list("room42")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.key)
            .collect();
        assert!(keys.contains(&"room42/papers/".to_string()));
        assert!(keys.contains(&"room42/papers/report.pdf".to_string()));
        assert!(keys.contains(&"room42/papers/archive/old.pdf".to_string()));
        assert!(!keys.iter().any(|k| k.starts_with("room42/docs")));
    }

    #[tokio::test]
    async fn rename_replaces_the_terminal_segment() {
        let store = seeded();
        let new_key = store
            .rename("room42/docs/report.pdf", "final.pdf")
            .await
            .unwrap();
        assert_eq!(new_key, "room42/docs/final.pdf");

        let err = store.rename("room42/docs/final.pdf", "a/b").await.unwrap_err();
        assert_eq!(err.kind, dataroom_core::error::ErrorKind::Validation);
    }

    #[tokio::test]
    async fn delete_removes_files_and_subtrees() {
        let store = seeded();
        store.delete("room42/readme.txt").await.unwrap();
        store.delete("room42/docs").await.unwrap();

        let entries = store.list("room42").await.unwrap();
        assert!(entries.is_empty());

        let err = store.delete("room42/ghost.txt").await.unwrap_err();
        assert_eq!(err.kind, dataroom_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn download_url_is_stamped_and_rejects_folders() {
        let store = seeded();
        let signed = store.download_url("room42/readme.txt").await.unwrap();
        assert!(signed.url.starts_with("memory://room42/readme.txt?token="));
        assert!(signed.expires_at > chrono::Utc::now());

        let err = store.download_url("room42/docs/").await.unwrap_err();
        assert_eq!(err.kind, dataroom_core::error::ErrorKind::Validation);
    }
}
