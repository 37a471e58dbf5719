//! Transient drag-and-drop state.
//!
//! Never persisted: a drag session cannot meaningfully survive a reload,
//! so the store always starts (and rehydrates) with an idle [`DragState`].

use serde::{Deserialize, Serialize};

/// The node being dragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraggedItem {
    /// Node id (tenant-relative key path).
    pub id: String,
    /// Display name of the node.
    pub name: String,
    /// Whether the dragged node is a folder.
    pub is_folder: bool,
    /// Parent path of the node; empty for a top-level node.
    pub path: String,
}

impl DraggedItem {
    /// Build a dragged-item record from a node id and classification.
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_folder: bool) -> Self {
        let id = id.into();
        let path = id
            .rsplit_once('/')
            .map(|(parent, _)| parent.to_string())
            .unwrap_or_default();
        Self {
            id,
            name: name.into(),
            is_folder,
            path,
        }
    }
}

/// The drop zone currently hovered during a drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTarget {
    /// Node id of the hovered drop zone.
    pub id: String,
    /// Whether the hovered node is a folder.
    pub is_folder: bool,
}

/// State of the in-progress drag gesture, if any.
///
/// A drag is in flight exactly while `dragged` is set. `drop_target` may
/// outlive the dragged item briefly: the two-step reset lets a drop handler
/// read the final target after the drag itself has ended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// The node being dragged, if a drag is in flight.
    pub dragged: Option<DraggedItem>,
    /// The currently hovered drop zone, if any.
    pub drop_target: Option<DropTarget>,
}

impl DragState {
    /// Whether a drag session is in flight.
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }
}
