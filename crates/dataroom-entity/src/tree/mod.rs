//! Tree entities for hierarchical display.

pub mod forest;
pub mod node;

pub use forest::{Breadcrumb, Forest, SearchHit};
pub use node::{NodeKind, TreeNode};
