//! The tree state store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use dataroom_core::config::session::SessionConfig;
use dataroom_core::traits::persistence::StatePersistence;
use dataroom_entity::drag::{DragState, DraggedItem, DropTarget};
use dataroom_entity::expansion::ExpansionState;
use dataroom_entity::tree::Forest;

use crate::keys;

/// State guarded by the store's lock.
struct StoreInner {
    expansion: ExpansionState,
    forest: Forest,
    drag: DragState,
}

/// The UI's single source of truth for "is this folder open" and "what is
/// currently being dragged".
///
/// Constructed once per browsing session and shared as
/// `Arc<TreeStateStore>`. All mutations go through this store; rendering
/// components only read. Expansion state and the forest are written through
/// the injected [`StatePersistence`] adapter on every mutation; a failed
/// write is logged and the store keeps operating purely in memory for the
/// rest of the session. Drag state is never persisted.
pub struct TreeStateStore {
    inner: RwLock<StoreInner>,
    persistence: Arc<dyn StatePersistence>,
    /// Tenant prefix namespacing the persisted keys.
    scope: String,
    persist_forest: bool,
}

impl std::fmt::Debug for TreeStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeStateStore")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl TreeStateStore {
    /// Create a store for one tenant scope, rehydrating persisted state.
    ///
    /// Unreadable or corrupt persisted state falls back to the defaults:
    /// sentinel-open expansion and an empty forest. Drag state always
    /// starts idle.
    pub fn new(
        config: &SessionConfig,
        scope: impl Into<String>,
        persistence: Arc<dyn StatePersistence>,
    ) -> Self {
        let scope = scope.into();
        let expansion = rehydrate_expansion(&config.root_node_id, &scope, persistence.as_ref());
        let forest = if config.persist_forest {
            rehydrate_forest(&scope, persistence.as_ref())
        } else {
            Forest::empty()
        };

        Self {
            inner: RwLock::new(StoreInner {
                expansion,
                forest,
                drag: DragState::default(),
            }),
            persistence,
            scope,
            persist_forest: config.persist_forest,
        }
    }

    /// The sentinel root id this store was configured with.
    pub fn root_id(&self) -> String {
        self.read().expansion.root_id().to_string()
    }

    // ── Tree ───────────────────────────────────────────────

    /// Replace the stored forest wholesale.
    ///
    /// Called after every successful listing/build cycle. Racing callers
    /// are last-write-wins; no merge is attempted. Open ids referring to
    /// nodes absent from the new forest are retained untouched.
    pub fn set_tree(&self, forest: Forest) {
        let mut inner = self.write();
        inner.forest = forest;
        debug!(
            scope = %self.scope,
            nodes = inner.forest.total_nodes(),
            "Replaced stored forest"
        );
        self.write_forest(&inner);
    }

    /// Snapshot of the current forest.
    pub fn forest(&self) -> Forest {
        self.read().forest.clone()
    }

    // ── Expansion ──────────────────────────────────────────

    /// Flip a folder id between open and closed; an unknown id opens.
    pub fn toggle_node(&self, id: &str) {
        let mut inner = self.write();
        inner.expansion.toggle(id);
        self.write_expansion(&inner);
    }

    /// Mark a folder id as open. No-op if already open.
    pub fn open_node(&self, id: &str) {
        let mut inner = self.write();
        if inner.expansion.open(id) {
            self.write_expansion(&inner);
        }
    }

    /// Mark a folder id as closed. No-op if already closed.
    pub fn close_node(&self, id: &str) {
        let mut inner = self.write();
        if inner.expansion.close(id) {
            self.write_expansion(&inner);
        }
    }

    /// Whether a folder id is open. Unknown ids are closed; only the
    /// sentinel root defaults to open.
    pub fn is_node_open(&self, id: &str) -> bool {
        self.read().expansion.is_open(id)
    }

    /// The open folder ids, sorted.
    pub fn open_nodes(&self) -> Vec<String> {
        self.read().expansion.to_sorted_ids()
    }

    // ── Drag lifecycle ─────────────────────────────────────

    /// Begin a drag session, overwriting any in-flight one.
    pub fn start_drag(&self, item: DraggedItem) {
        let mut inner = self.write();
        inner.drag.dragged = Some(item);
        inner.drag.drop_target = None;
    }

    /// Record the currently hovered drop zone. Leaves the drag itself
    /// untouched.
    pub fn set_drop_target(&self, target: DropTarget) {
        self.write().drag.drop_target = Some(target);
    }

    /// Clear the hovered drop zone. Leaves the drag itself untouched.
    pub fn clear_drop_target(&self) {
        self.write().drag.drop_target = None;
    }

    /// End the drag session, keeping any recorded drop target so a drop
    /// handler can still read it; pair with [`Self::clear_drop_target`].
    /// New consumers should prefer [`Self::finish_drag`], which cannot leak
    /// hover state into the next session.
    pub fn end_drag(&self) {
        self.write().drag.dragged = None;
    }

    /// Atomically take and clear the whole drag state, returning the
    /// dragged item and final drop target of the finished session.
    pub fn finish_drag(&self) -> (Option<DraggedItem>, Option<DropTarget>) {
        let mut inner = self.write();
        let dragged = inner.drag.dragged.take();
        let target = inner.drag.drop_target.take();
        (dragged, target)
    }

    /// Snapshot of the current drag state.
    pub fn drag(&self) -> DragState {
        self.read().drag.clone()
    }

    // ── Session lifecycle ──────────────────────────────────

    /// Restore the initial sentinel-open state, clearing the forest and any
    /// in-flight drag. Used on navigating away from a data room.
    pub fn reset_state(&self) {
        let mut inner = self.write();
        inner.expansion.reset();
        inner.forest = Forest::empty();
        inner.drag = DragState::default();
        self.write_expansion(&inner);
        if let Err(err) = self.persistence.remove(&keys::forest(&self.scope)) {
            warn!(scope = %self.scope, error = %err, "Failed to clear persisted forest");
        }
    }

    // ── Internal ───────────────────────────────────────────

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    fn write_expansion(&self, inner: &StoreInner) {
        let ids = inner.expansion.to_sorted_ids();
        let payload = match serde_json::to_string(&ids) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(scope = %self.scope, error = %err, "Failed to encode expansion state");
                return;
            }
        };
        if let Err(err) = self.persistence.save(&keys::expansion(&self.scope), &payload) {
            warn!(scope = %self.scope, error = %err, "Failed to persist expansion state");
        }
    }

    fn write_forest(&self, inner: &StoreInner) {
        if !self.persist_forest {
            return;
        }
        let payload = match serde_json::to_string(&inner.forest) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(scope = %self.scope, error = %err, "Failed to encode forest");
                return;
            }
        };
        if let Err(err) = self.persistence.save(&keys::forest(&self.scope), &payload) {
            warn!(scope = %self.scope, error = %err, "Failed to persist forest");
        }
    }
}

fn rehydrate_expansion(
    root_id: &str,
    scope: &str,
    persistence: &dyn StatePersistence,
) -> ExpansionState {
    match persistence.load(&keys::expansion(scope)) {
        Ok(Some(payload)) => match serde_json::from_str::<Vec<String>>(&payload) {
            Ok(ids) => ExpansionState::from_ids(root_id, ids),
            Err(err) => {
                warn!(scope, error = %err, "Corrupt persisted expansion state, using defaults");
                ExpansionState::new(root_id)
            }
        },
        Ok(None) => ExpansionState::new(root_id),
        Err(err) => {
            warn!(scope, error = %err, "Failed to load expansion state, using defaults");
            ExpansionState::new(root_id)
        }
    }
}

fn rehydrate_forest(scope: &str, persistence: &dyn StatePersistence) -> Forest {
    match persistence.load(&keys::forest(scope)) {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(forest) => forest,
            Err(err) => {
                warn!(scope, error = %err, "Corrupt persisted forest, starting empty");
                Forest::empty()
            }
        },
        Ok(None) => Forest::empty(),
        Err(err) => {
            warn!(scope, error = %err, "Failed to load persisted forest, starting empty");
            Forest::empty()
        }
    }
}
