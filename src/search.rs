//! Global search across the whole tree, independent of navigation position.

use serde::Serialize;

use crate::tree::{ParentInfo, TreeNode};

/// A search hit plus the node it sits under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub node: TreeNode,
    /// Immediate parent; `None` for root-level matches
    pub parent: Option<ParentInfo>,
}

impl SearchMatch {
    pub fn parent_label(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.label.as_str())
    }
}

/// Case-insensitive substring match of `query` within `label`.
pub fn label_matches(label: &str, query: &str) -> bool {
    label.to_lowercase().contains(&query.to_lowercase())
}

/// Every node whose label contains `query`, in depth-first pre-order.
///
/// A node is tested before its children, and its children are searched
/// whether or not it matched. An empty query yields nothing.
pub fn search(root: &[TreeNode], query: &str) -> Vec<SearchMatch> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut results = Vec::new();

    fn walk(
        items: &[TreeNode],
        query: &str,
        parent: Option<&TreeNode>,
        results: &mut Vec<SearchMatch>,
    ) {
        for item in items {
            if label_matches(&item.label, query) {
                results.push(SearchMatch {
                    node: item.clone(),
                    parent: parent.map(TreeNode::parent_info),
                });
            }
            walk(&item.children, query, Some(item), results);
        }
    }

    walk(root, query, None, &mut results);
    results
}
