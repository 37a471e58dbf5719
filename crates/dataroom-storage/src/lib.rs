//! # dataroom-storage
//!
//! Implementations of the collaborator traits defined in `dataroom-core`:
//! object listing/mutation backends (in-memory and local filesystem) and
//! state-persistence adapters (JSON file, in-memory, no-op).

pub mod factory;
pub mod local;
pub mod memory;
pub mod persistence;

pub use factory::{build_backend, build_persistence};
pub use local::LocalObjectStore;
pub use memory::MemoryObjectStore;
pub use persistence::{JsonFilePersistence, MemoryPersistence, NoopPersistence};
