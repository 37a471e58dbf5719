//! A node in the reconstructed file/folder hierarchy.

use serde::{Deserialize, Serialize};

use dataroom_core::traits::listing::ObjectMeta;

/// The folder/file payload of a [`TreeNode`].
///
/// Folders carry children and files carry metadata, so the "children iff
/// folder" invariant cannot be violated by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// A folder with ordered child nodes.
    Folder {
        /// Child nodes in key-listing order.
        children: Vec<TreeNode>,
    },
    /// A file leaf.
    File {
        /// Storage attributes carried over from the key listing.
        metadata: Option<ObjectMeta>,
    },
}

/// One file or folder entry in the reconstructed hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Full storage key relative to the tenant root; unique within a tree
    /// and stable across rebuilds for an unchanged underlying key.
    pub id: String,
    /// The final path segment (display name).
    pub name: String,
    /// Folder or file payload.
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl TreeNode {
    /// Create an empty folder node.
    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Folder {
                children: Vec::new(),
            },
        }
    }

    /// Create a file node carrying listing metadata.
    pub fn file(
        id: impl Into<String>,
        name: impl Into<String>,
        metadata: Option<ObjectMeta>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::File { metadata },
        }
    }

    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, NodeKind::Folder { .. })
    }

    /// The node's children; empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Folder { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    /// Mutable access to a folder's children; `None` for files.
    pub fn children_mut(&mut self) -> Option<&mut Vec<TreeNode>> {
        match &mut self.kind {
            NodeKind::Folder { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// The file metadata; `None` for folders and for files listed without
    /// attributes.
    pub fn metadata(&self) -> Option<&ObjectMeta> {
        match &self.kind {
            NodeKind::File { metadata } => metadata.as_ref(),
            NodeKind::Folder { .. } => None,
        }
    }

    /// Number of direct child folders.
    pub fn child_folder_count(&self) -> usize {
        self.children().iter().filter(|c| c.is_folder()).count()
    }

    /// Number of direct child files.
    pub fn file_count(&self) -> usize {
        self.children().iter().filter(|c| !c.is_folder()).count()
    }

    /// The id of the parent node, or `None` for a top-level node.
    pub fn parent_id(&self) -> Option<&str> {
        self.id.rsplit_once('/').map(|(parent, _)| parent)
    }
}
