//! Config-driven construction of the storage collaborators.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use dataroom_core::config::persistence::PersistenceConfig;
use dataroom_core::config::storage::StorageConfig;
use dataroom_core::error::AppError;
use dataroom_core::result::AppResult;
use dataroom_core::traits::listing::ObjectListing;
use dataroom_core::traits::mutation::ObjectMutation;
use dataroom_core::traits::persistence::StatePersistence;

use crate::local::LocalObjectStore;
use crate::memory::MemoryObjectStore;
use crate::persistence::{JsonFilePersistence, MemoryPersistence, NoopPersistence};

/// Build the object listing/mutation backend named by configuration.
///
/// Both trait handles point at the same underlying store.
pub async fn build_backend(
    config: &StorageConfig,
) -> AppResult<(Arc<dyn ObjectListing>, Arc<dyn ObjectMutation>)> {
    let ttl = Duration::from_secs(config.signed_url_ttl_seconds);
    match config.backend.as_str() {
        "memory" => {
            let store = Arc::new(MemoryObjectStore::new(ttl));
            info!(backend = "memory", "Initialized object backend");
            let listing: Arc<dyn ObjectListing> = store.clone();
            let mutation: Arc<dyn ObjectMutation> = store;
            Ok((listing, mutation))
        }
        "local" => {
            let store = Arc::new(LocalObjectStore::new(&config.root_path, ttl).await?);
            info!(backend = "local", root = %config.root_path, "Initialized object backend");
            let listing: Arc<dyn ObjectListing> = store.clone();
            let mutation: Arc<dyn ObjectMutation> = store;
            Ok((listing, mutation))
        }
        other => Err(AppError::configuration(format!(
            "Unknown storage backend: {other}"
        ))),
    }
}

/// Build the state-persistence adapter named by configuration.
pub fn build_persistence(config: &PersistenceConfig) -> AppResult<Arc<dyn StatePersistence>> {
    match config.adapter.as_str() {
        "json-file" => {
            let adapter = JsonFilePersistence::new(&config.directory)?;
            info!(adapter = "json-file", directory = %config.directory, "Initialized state persistence");
            Ok(Arc::new(adapter))
        }
        "memory" => Ok(Arc::new(MemoryPersistence::new())),
        "noop" => Ok(Arc::new(NoopPersistence)),
        other => Err(AppError::configuration(format!(
            "Unknown persistence adapter: {other}"
        ))),
    }
}
