//! State-persistence trait modeled on per-browser local storage.

use crate::result::AppResult;

/// Key-value string persistence for session state.
///
/// The store writes through this adapter on every mutating call and reads
/// once at construction. Implementations must be cheap and synchronous;
/// a failed write is logged by the caller and otherwise ignored, so
/// implementations should not retry internally.
pub trait StatePersistence: Send + Sync + std::fmt::Debug + 'static {
    /// Load the value stored under `key`, if any.
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str) -> AppResult<()>;
}
