//! Shared fixture for service integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use dataroom_core::config::session::SessionConfig;
use dataroom_core::error::AppError;
use dataroom_core::result::AppResult;
use dataroom_core::traits::listing::{ObjectEntry, ObjectListing};
use dataroom_core::traits::mutation::ObjectMutation;
use dataroom_core::traits::persistence::StatePersistence;
use dataroom_service::{BrowserService, SessionContext};
use dataroom_storage::{MemoryObjectStore, MemoryPersistence};
use dataroom_store::TreeStateStore;

/// The tenant prefix every fixture session is scoped to.
pub const TENANT: &str = "room42";

/// A data room wired against in-memory collaborators.
pub struct TestRoom {
    pub objects: Arc<MemoryObjectStore>,
    pub store: Arc<TreeStateStore>,
    pub browser: BrowserService,
    pub ctx: SessionContext,
}

impl TestRoom {
    /// A room with in-memory persistence and the standard seed objects.
    pub fn new() -> Self {
        Self::with_persistence(Arc::new(MemoryPersistence::new()))
    }

    /// A room sharing the given persistence adapter (for reload tests).
    pub fn with_persistence(persistence: Arc<dyn StatePersistence>) -> Self {
        let objects = Arc::new(MemoryObjectStore::new(Duration::from_secs(900)));
        objects.seed([
            ObjectEntry::new(format!("{TENANT}/docs/")),
            ObjectEntry::new(format!("{TENANT}/docs/report.pdf")),
            ObjectEntry::new(format!("{TENANT}/docs/archive/old.pdf")),
            ObjectEntry::new(format!("{TENANT}/images/logo.png")),
            ObjectEntry::new(format!("{TENANT}/readme.txt")),
        ]);

        let store = Arc::new(TreeStateStore::new(
            &SessionConfig::default(),
            TENANT,
            persistence,
        ));
        let listing: Arc<dyn ObjectListing> = objects.clone();
        let mutation: Arc<dyn ObjectMutation> = objects.clone();
        let browser = BrowserService::new(listing, mutation, store.clone());
        let ctx = SessionContext::new(TENANT, Uuid::new_v4(), "alice");

        Self {
            objects,
            store,
            browser,
            ctx,
        }
    }
}

/// Listing wrapper that can be switched into a failing state, as if the
/// remote listing service were down.
#[derive(Debug)]
pub struct FlakyListing {
    inner: Arc<MemoryObjectStore>,
    failing: AtomicBool,
}

impl FlakyListing {
    pub fn new(inner: Arc<MemoryObjectStore>) -> Self {
        Self {
            inner,
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ObjectListing for FlakyListing {
    fn backend_type(&self) -> &str {
        "flaky"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(!self.failing.load(Ordering::SeqCst))
    }

    async fn list(&self, tenant_prefix: &str) -> AppResult<Vec<ObjectEntry>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::external_service("listing service timed out"));
        }
        self.inner.list(tenant_prefix).await
    }
}
