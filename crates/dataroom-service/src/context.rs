//! Browsing-session context carrying the authenticated identity scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current browsing session.
///
/// Supplied by the embedding application's authentication layer; this
/// crate performs no authentication itself. The tenant prefix scopes every
/// listing and mutation key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Tenant/user prefix scoping all object keys of this data room.
    pub tenant_prefix: String,
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The username (convenience field for audit-style logging).
    pub username: String,
    /// The browsing-session ID.
    pub session_id: Uuid,
    /// When the session started.
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Creates a new session context with a fresh session ID.
    pub fn new(
        tenant_prefix: impl Into<String>,
        user_id: Uuid,
        username: impl Into<String>,
    ) -> Self {
        Self {
            tenant_prefix: tenant_prefix.into(),
            user_id,
            username: username.into(),
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}
