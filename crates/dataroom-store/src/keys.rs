//! Persistence key builders for the tree state store.
//!
//! Centralising key construction prevents typos and makes it easy to find
//! every key the store writes.

/// Prefix applied to all DataRoom persistence keys.
const PREFIX: &str = "dataroom";

/// Persistence key for the open-folder id list of one tenant scope.
pub fn expansion(scope: &str) -> String {
    format!("{PREFIX}:{scope}:expansion")
}

/// Persistence key for the last-built forest of one tenant scope.
pub fn forest(scope: &str) -> String {
    format!("{PREFIX}:{scope}:forest")
}
