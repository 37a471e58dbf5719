//! State-persistence adapters.
//!
//! Stand-ins for the per-browser local storage the store writes through:
//! a JSON file on disk for real sessions, an in-memory map for tests, and
//! a no-op adapter when persistence is unwanted.

pub mod json_file;
pub mod memory;
pub mod noop;

pub use json_file::JsonFilePersistence;
pub use memory::MemoryPersistence;
pub use noop::NoopPersistence;
