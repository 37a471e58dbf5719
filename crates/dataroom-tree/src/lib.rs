//! # dataroom-tree
//!
//! Projects a flat object-key listing into the [`dataroom_entity::Forest`]
//! hierarchy: key parsing on one side, the arena-based tree builder on the
//! other. Pure in-memory transformation; no I/O.

pub mod builder;
pub mod key;

pub use builder::build_forest;
pub use key::{KeyKind, ParsedKey};
