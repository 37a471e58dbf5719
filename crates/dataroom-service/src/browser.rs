//! The browsing service: refresh, move, rename, delete, download.

use std::sync::Arc;

use tracing::{debug, info, warn};

use dataroom_core::error::AppError;
use dataroom_core::result::AppResult;
use dataroom_core::traits::listing::ObjectListing;
use dataroom_core::traits::mutation::{ObjectMutation, SignedUrl};
use dataroom_entity::tree::{Breadcrumb, Forest, SearchHit};
use dataroom_store::TreeStateStore;
use dataroom_tree::build_forest;

use crate::context::SessionContext;

/// Orchestrates the listing and mutation collaborators around the tree
/// state store.
///
/// All methods take node ids relative to the tenant root (the ids the
/// forest carries); the service maps them onto full storage keys. On any
/// successful mutation a fresh listing is fetched and pushed into the
/// store; a failed listing leaves the previously stored forest untouched.
#[derive(Debug, Clone)]
pub struct BrowserService {
    /// Object listing collaborator.
    listing: Arc<dyn ObjectListing>,
    /// Object mutation collaborator.
    mutation: Arc<dyn ObjectMutation>,
    /// The session's tree state store.
    store: Arc<TreeStateStore>,
}

impl BrowserService {
    /// Creates a new browsing service.
    pub fn new(
        listing: Arc<dyn ObjectListing>,
        mutation: Arc<dyn ObjectMutation>,
        store: Arc<TreeStateStore>,
    ) -> Self {
        Self {
            listing,
            mutation,
            store,
        }
    }

    /// The underlying store, for read-only consumption by the renderer.
    pub fn store(&self) -> &Arc<TreeStateStore> {
        &self.store
    }

    // ── Refresh ────────────────────────────────────────────

    /// Fetch a fresh listing, rebuild the forest, and replace the stored
    /// one. On listing failure the store keeps its previous forest.
    pub async fn refresh(&self, ctx: &SessionContext) -> AppResult<Forest> {
        let entries = self.listing.list(&ctx.tenant_prefix).await.map_err(|e| {
            warn!(tenant = %ctx.tenant_prefix, error = %e, "Listing failed, keeping stale tree");
            e
        })?;

        let forest = build_forest(&entries);
        info!(
            tenant = %ctx.tenant_prefix,
            user = %ctx.username,
            entries = entries.len(),
            nodes = forest.total_nodes(),
            "Refreshed data-room tree"
        );
        self.store.set_tree(forest.clone());
        Ok(forest)
    }

    // ── Mutations ──────────────────────────────────────────

    /// Move a node into another folder (`None` = the tenant root), then
    /// refresh. Returns the node's new id.
    pub async fn move_node(
        &self,
        ctx: &SessionContext,
        node_id: &str,
        dest_folder_id: Option<&str>,
    ) -> AppResult<String> {
        let name = terminal_name(node_id);
        if let Some(dest) = dest_folder_id {
            if dest == node_id || dest.starts_with(&format!("{node_id}/")) {
                return Err(AppError::validation(format!(
                    "Cannot move {node_id} into itself"
                )));
            }
        }

        let new_id = match dest_folder_id {
            Some(dest) => format!("{dest}/{name}"),
            None => name.to_string(),
        };
        self.mutation
            .move_object(&self.full_key(ctx, node_id), &self.full_key(ctx, &new_id))
            .await
            .map_err(|e| {
                warn!(node = node_id, error = %e, "Move rejected");
                e
            })?;

        info!(user = %ctx.username, from = node_id, to = %new_id, "Moved node");
        self.refresh(ctx).await?;
        Ok(new_id)
    }

    /// Complete the in-flight drag gesture, if it ended on a usable drop
    /// target. Returns the moved node's new id, or `None` when the gesture
    /// was dropped (no drag, no target, target not a folder, or a move
    /// into the dragged subtree).
    pub async fn drop_dragged(&self, ctx: &SessionContext) -> AppResult<Option<String>> {
        let (dragged, target) = self.store.finish_drag();
        let (Some(dragged), Some(target)) = (dragged, target) else {
            debug!("Drag finished without a usable item/target pair");
            return Ok(None);
        };
        if !target.is_folder || target.id == dragged.id {
            debug!(target = %target.id, "Ignoring drop on a non-folder target");
            return Ok(None);
        }
        if target.id.starts_with(&format!("{}/", dragged.id)) {
            debug!(target = %target.id, "Ignoring drop into the dragged subtree");
            return Ok(None);
        }
        if target.id == dragged.path {
            // Dropped back onto its current parent; nothing to do.
            return Ok(None);
        }

        let dest = if target.id == self.store.root_id() {
            None
        } else {
            Some(target.id.as_str())
        };
        self.move_node(ctx, &dragged.id, dest).await.map(Some)
    }

    /// Rename a node's terminal segment, then refresh. Returns the node's
    /// new id.
    pub async fn rename_node(
        &self,
        ctx: &SessionContext,
        node_id: &str,
        new_name: &str,
    ) -> AppResult<String> {
        let new_key = self
            .mutation
            .rename(&self.full_key(ctx, node_id), new_name)
            .await
            .map_err(|e| {
                warn!(node = node_id, error = %e, "Rename rejected");
                e
            })?;

        let new_id = self.strip_tenant(ctx, &new_key);
        info!(user = %ctx.username, from = node_id, to = %new_id, "Renamed node");
        self.refresh(ctx).await?;
        Ok(new_id)
    }

    /// Delete a node (recursively for folders), then refresh.
    pub async fn delete_node(&self, ctx: &SessionContext, node_id: &str) -> AppResult<()> {
        self.mutation
            .delete(&self.full_key(ctx, node_id))
            .await
            .map_err(|e| {
                warn!(node = node_id, error = %e, "Delete rejected");
                e
            })?;

        info!(user = %ctx.username, node = node_id, "Deleted node");
        self.refresh(ctx).await?;
        Ok(())
    }

    /// Produce a signed download URL for a file node (double-click open).
    pub async fn open_file(&self, ctx: &SessionContext, node_id: &str) -> AppResult<SignedUrl> {
        let signed = self
            .mutation
            .download_url(&self.full_key(ctx, node_id))
            .await?;
        debug!(user = %ctx.username, node = node_id, "Issued download URL");
        Ok(signed)
    }

    // ── Reads for the renderer ─────────────────────────────

    /// Flip a folder open/closed.
    pub fn toggle_folder(&self, id: &str) {
        self.store.toggle_node(id);
    }

    /// Whether a folder is shown open.
    pub fn is_folder_open(&self, id: &str) -> bool {
        self.store.is_node_open(id)
    }

    /// The ancestor trail for the renderer's path bar.
    pub fn breadcrumbs(&self, node_id: &str) -> Vec<Breadcrumb> {
        self.store.forest().breadcrumbs(node_id)
    }

    /// Case-insensitive name search over the current forest.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.store.forest().search(query)
    }

    // ── Internal ───────────────────────────────────────────

    fn full_key(&self, ctx: &SessionContext, node_id: &str) -> String {
        format!("{}/{node_id}", ctx.tenant_prefix)
    }

    fn strip_tenant(&self, ctx: &SessionContext, key: &str) -> String {
        key.strip_prefix(&format!("{}/", ctx.tenant_prefix))
            .unwrap_or(key)
            .to_string()
    }
}

/// The final path segment of a node id.
fn terminal_name(node_id: &str) -> &str {
    node_id
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(node_id)
}
