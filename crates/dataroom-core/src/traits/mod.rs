//! Collaborator traits consumed by the tree core.
//!
//! The traits are defined here in `dataroom-core` and implemented in
//! `dataroom-storage`; the interaction layer in `dataroom-service` only
//! ever sees `Arc<dyn Trait>`.

pub mod listing;
pub mod mutation;
pub mod persistence;

pub use listing::{ObjectEntry, ObjectListing, ObjectMeta};
pub use mutation::{ObjectMutation, SignedUrl};
pub use persistence::StatePersistence;
