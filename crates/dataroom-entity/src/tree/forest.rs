//! The forest of top-level tree nodes and read-only queries over it.

use serde::{Deserialize, Serialize};

use super::node::TreeNode;

/// One step of the ancestor trail from a top-level node down to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Node id (tenant-relative key path).
    pub id: String,
    /// Display name of the node.
    pub name: String,
}

/// One match of a name search over the forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Node id of the match.
    pub id: String,
    /// Display name of the match.
    pub name: String,
    /// Whether the match is a folder.
    pub is_folder: bool,
}

/// The reconstructed hierarchy: an ordered sequence of top-level nodes.
///
/// There is no materialized root node; consumers wrap the roots under a
/// synthetic "Home" entry when rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    /// Top-level nodes in key-listing order.
    pub roots: Vec<TreeNode>,
}

impl Forest {
    /// Create an empty forest.
    pub fn empty() -> Self {
        Self { roots: Vec::new() }
    }

    /// Create a forest from prebuilt top-level nodes.
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self { roots }
    }

    /// Whether the forest holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes (folders and files) in the forest.
    pub fn total_nodes(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            1 + node.children().iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }

    /// Find a node by id.
    ///
    /// Node ids are path-shaped, so the lookup descends only the branch
    /// whose id is a path prefix of the target instead of scanning the
    /// whole forest.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        let mut level = self.roots.as_slice();
        loop {
            let node = level
                .iter()
                .find(|n| n.id == id || is_path_prefix(&n.id, id))?;
            if node.id == id {
                return Some(node);
            }
            level = node.children();
        }
    }

    /// The ancestor trail from a top-level node down to `id`, inclusive.
    ///
    /// Returns an empty vector if `id` is not present in the forest.
    pub fn breadcrumbs(&self, id: &str) -> Vec<Breadcrumb> {
        let mut trail = Vec::new();
        let mut prefix_end = 0usize;
        loop {
            let next = match id[prefix_end..].find('/') {
                Some(slash) => prefix_end + slash,
                None => id.len(),
            };
            let ancestor_id = &id[..next];
            match self.find(ancestor_id) {
                Some(node) => trail.push(Breadcrumb {
                    id: node.id.clone(),
                    name: node.name.clone(),
                }),
                None => return Vec::new(),
            }
            if next == id.len() {
                return trail;
            }
            prefix_end = next + 1;
        }
    }

    /// Case-insensitive substring search over node names.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.to_lowercase();
        let mut hits = Vec::new();
        let mut stack: Vec<&TreeNode> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.name.to_lowercase().contains(&needle) {
                hits.push(SearchHit {
                    id: node.id.clone(),
                    name: node.name.clone(),
                    is_folder: node.is_folder(),
                });
            }
            stack.extend(node.children().iter().rev());
        }
        hits
    }
}

/// Whether `prefix` is a strict path prefix of `id` (`"a/b"` of `"a/b/c"`).
fn is_path_prefix(prefix: &str, id: &str) -> bool {
    id.len() > prefix.len() && id.starts_with(prefix) && id.as_bytes()[prefix.len()] == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Forest {
        let mut docs = TreeNode::folder("docs", "docs");
        let mut sub = TreeNode::folder("docs/archive", "archive");
        sub.children_mut()
            .unwrap()
            .push(TreeNode::file("docs/archive/old.pdf", "old.pdf", None));
        docs.children_mut().unwrap().push(sub);
        docs.children_mut()
            .unwrap()
            .push(TreeNode::file("docs/report.pdf", "report.pdf", None));
        Forest::new(vec![docs, TreeNode::file("readme.txt", "readme.txt", None)])
    }

    #[test]
    fn find_descends_by_path_prefix() {
        let forest = sample();
        assert_eq!(forest.find("docs/archive/old.pdf").unwrap().name, "old.pdf");
        assert_eq!(forest.find("docs").unwrap().children().len(), 2);
        assert!(forest.find("docs/missing.txt").is_none());
        assert!(forest.find("docsx").is_none());
    }

    #[test]
    fn breadcrumbs_walk_ancestors_in_order() {
        let forest = sample();
        let trail = forest.breadcrumbs("docs/archive/old.pdf");
        let ids: Vec<&str> = trail.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["docs", "docs/archive", "docs/archive/old.pdf"]);
        assert!(forest.breadcrumbs("nope/none").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let forest = sample();
        let hits = forest.search("PDF");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| !h.is_folder));
    }

    #[test]
    fn total_nodes_counts_every_entry() {
        assert_eq!(sample().total_nodes(), 5);
        assert_eq!(Forest::empty().total_nodes(), 0);
    }
}
