//! # dataroom-entity
//!
//! Domain entity models for DataRoom: the reconstructed file/folder tree,
//! the transient drag-and-drop state, and the open-folder expansion set.

pub mod drag;
pub mod expansion;
pub mod tree;

pub use drag::{DragState, DraggedItem, DropTarget};
pub use expansion::ExpansionState;
pub use tree::{Breadcrumb, Forest, NodeKind, SearchHit, TreeNode};
