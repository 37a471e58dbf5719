//! Folds a flat key listing into a [`Forest`].
//!
//! Nodes live in an arena addressed by index, with a path→index map so
//! folder prefixes shared across keys resolve to one node. The input is
//! sorted lexicographically by key before folding, which guarantees
//! parent-before-child processing and a deterministic result: the same
//! entry set yields a structurally identical forest in any input order.

use std::collections::HashMap;

use tracing::debug;

use dataroom_core::traits::listing::{ObjectEntry, ObjectMeta};
use dataroom_entity::tree::{Forest, TreeNode};

use crate::key::ParsedKey;

/// One arena slot. Children are arena indices in insertion order.
struct ArenaNode {
    id: String,
    name: String,
    is_folder: bool,
    meta: Option<ObjectMeta>,
    children: Vec<usize>,
}

/// Arena-backed builder; use [`build_forest`] for the one-shot fold.
struct TreeArena {
    nodes: Vec<ArenaNode>,
    index: HashMap<String, usize>,
    roots: Vec<usize>,
}

impl TreeArena {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Fold one listing entry into the arena, creating any missing
    /// intermediate folder nodes along its path.
    fn insert(&mut self, entry: &ObjectEntry) {
        let parsed = ParsedKey::parse(&entry.key);
        let last = match parsed.segments.len().checked_sub(1) {
            Some(last) => last,
            None => return,
        };

        let mut path = String::new();
        let mut parent: Option<usize> = None;
        for (depth, segment) in parsed.segments.iter().enumerate() {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment);

            let is_terminal = depth == last;
            let wants_folder = !is_terminal || parsed.is_folder();

            let idx = match self.index.get(path.as_str()) {
                Some(&idx) => {
                    // A key listed as a file can reappear as the prefix of a
                    // deeper key; the shared node then becomes a folder.
                    if wants_folder && !self.nodes[idx].is_folder {
                        self.nodes[idx].is_folder = true;
                        self.nodes[idx].meta = None;
                    }
                    idx
                }
                None => {
                    let meta = if is_terminal && !wants_folder {
                        Some(entry.meta.clone())
                    } else {
                        None
                    };
                    let idx = self.nodes.len();
                    self.nodes.push(ArenaNode {
                        id: path.clone(),
                        name: segment.clone(),
                        is_folder: wants_folder,
                        meta,
                        children: Vec::new(),
                    });
                    self.index.insert(path.clone(), idx);
                    match parent {
                        Some(p) => self.nodes[p].children.push(idx),
                        None => self.roots.push(idx),
                    }
                    idx
                }
            };

            parent = Some(idx);
        }
    }

    fn materialize(&self, idx: usize) -> TreeNode {
        let slot = &self.nodes[idx];
        if slot.is_folder {
            let mut node = TreeNode::folder(&slot.id, &slot.name);
            if let Some(children) = node.children_mut() {
                children.extend(slot.children.iter().map(|&c| self.materialize(c)));
            }
            node
        } else {
            TreeNode::file(&slot.id, &slot.name, slot.meta.clone())
        }
    }

    fn into_forest(self) -> Forest {
        Forest::new(self.roots.iter().map(|&r| self.materialize(r)).collect())
    }
}

/// Build the forest for a key listing.
///
/// Idempotent over the entry set: input order does not matter, repeated
/// builds yield structurally identical forests, and an empty listing yields
/// an empty forest.
pub fn build_forest(entries: &[ObjectEntry]) -> Forest {
    let mut sorted: Vec<&ObjectEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.key.cmp(&b.key));

    let mut arena = TreeArena::new();
    for entry in sorted {
        arena.insert(entry);
    }

    debug!(
        entries = entries.len(),
        nodes = arena.nodes.len(),
        "Built forest from key listing"
    );
    arena.into_forest()
}
