//! Local filesystem object store.
//!
//! Maps a directory tree under a configured root onto flat tenant-prefixed
//! keys, so the core can run against a real directory in demos and tests.
//! Directories list as folder-marker keys (trailing `/`), files carry size
//! and modification time.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use dataroom_core::error::{AppError, ErrorKind};
use dataroom_core::result::AppResult;
use dataroom_core::traits::listing::{ObjectEntry, ObjectListing, ObjectMeta};
use dataroom_core::traits::mutation::{ObjectMutation, SignedUrl};

/// Object store rooted at a local directory.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    /// Root directory for all stored objects.
    root: PathBuf,
    /// Lifetime stamped onto issued signed URLs.
    signed_url_ttl: Duration,
}

impl LocalObjectStore {
    /// Create a local object store rooted at the given path.
    pub async fn new(root_path: &str, signed_url_ttl: Duration) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            signed_url_ttl,
        })
    }

    /// Resolve a key to an absolute path within the root.
    fn resolve(&self, key: &str) -> PathBuf {
        let clean = key.trim_start_matches('/').trim_end_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectListing for LocalObjectStore {
    fn backend_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn list(&self, tenant_prefix: &str) -> AppResult<Vec<ObjectEntry>> {
        let base = self.resolve(tenant_prefix);
        if !base.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut stack = vec![(base, tenant_prefix.trim_matches('/').to_string())];
        while let Some((dir, key_prefix)) = stack.pop() {
            let mut read_dir = fs::read_dir(&dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open directory: {}", dir.display()),
                    e,
                )
            })?;
            while let Some(dir_entry) = read_dir.next_entry().await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read directory: {}", dir.display()),
                    e,
                )
            })? {
                let name = dir_entry.file_name().to_string_lossy().into_owned();
                let key = format!("{key_prefix}/{name}");
                let file_type = match dir_entry.file_type().await {
                    Ok(ft) => ft,
                    // Broken symlinks and permission errors are skipped.
                    Err(_) => continue,
                };

                if file_type.is_dir() {
                    entries.push(ObjectEntry::new(format!("{key}/")));
                    stack.push((dir_entry.path(), key));
                } else {
                    let meta = match dir_entry.metadata().await {
                        Ok(std_meta) => ObjectMeta {
                            size_bytes: std_meta.len(),
                            last_modified: std_meta
                                .modified()
                                .ok()
                                .map(DateTime::<Utc>::from),
                            uploaded_by: None,
                            mime_type: None,
                        },
                        Err(_) => ObjectMeta::default(),
                    };
                    entries.push(ObjectEntry::with_meta(key, meta));
                }
            }
        }

        entries.sort_by(|a, b| a.key.cmp(&b.key));
        debug!(tenant = tenant_prefix, entries = entries.len(), "Listed local objects");
        Ok(entries)
    }
}

#[async_trait]
impl ObjectMutation for LocalObjectStore {
    async fn move_object(&self, source_key: &str, destination_key: &str) -> AppResult<()> {
        let source = self.resolve(source_key);
        if !source.exists() {
            return Err(AppError::not_found(format!("Object not found: {source_key}")));
        }
        let destination = self.resolve(destination_key);
        self.ensure_parent(&destination).await?;
        fs::rename(&source, &destination).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to move {source_key} to {destination_key}"),
                e,
            )
        })?;
        debug!(source = source_key, destination = destination_key, "Moved object");
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
        let path = self.resolve(key);
        let std_meta = fs::metadata(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Object not found: {key}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to stat: {key}"), e)
            }
        })?;

        let result = if std_meta.is_dir() {
            fs::remove_dir_all(&path).await
        } else {
            fs::remove_file(&path).await
        };
        result.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to delete: {key}"), e)
        })?;
        debug!(key, "Deleted object");
        Ok(())
    }

    async fn download_url(&self, key: &str) -> AppResult<SignedUrl> {
        let path = self.resolve(key);
        let std_meta = fs::metadata(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Object not found: {key}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to stat: {key}"), e)
            }
        })?;
        if std_meta.is_dir() {
            return Err(AppError::validation(format!("Not a file: {key}")));
        }

        let absolute = fs::canonicalize(&path).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to resolve: {key}"), e)
        })?;
        let expires_at = Utc::now()
            + chrono::Duration::from_std(self.signed_url_ttl)
                .map_err(|e| AppError::internal(format!("Invalid URL lifetime: {e}")))?;
        Ok(SignedUrl {
            url: format!("file://{}?token={}", absolute.display(), Uuid::new_v4()),
            expires_at,
        })
    }
}
