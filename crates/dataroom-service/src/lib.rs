//! # dataroom-service
//!
//! The interaction layer: translates user gestures (refresh, rename,
//! delete, drag-and-drop move, download) into collaborator calls and tree
//! state store mutations. Never mutates its own view of the hierarchy on a
//! successful mutation; it re-lists and rebuilds instead.

pub mod browser;
pub mod context;

pub use browser::BrowserService;
pub use context::SessionContext;
