//! Navigator: where in the tree the user currently is.
//!
//! A `NavigatorState` pairs the breadcrumb path with the sibling set shown at
//! that position. Transitions consume the state and return the next one.
//! Malformed moves (descending into a leaf, ascending past the root, jumping
//! to a breadcrumb that does not exist) return the state unchanged.
//!
//! Ascending never pops a cached level. The level is re-derived by walking
//! from the root along the remaining path ids, so a state stays consistent
//! with whatever tree it is re-derived against.

use serde::Serialize;

use crate::tree::{PathItem, TreeNode};

/// Current navigation position
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NavigatorState {
    /// Ancestors from the root down to the current level, root-first
    pub path: Vec<PathItem>,
    /// Children of the last path element, or the root set if `path` is empty
    pub current_level: Vec<TreeNode>,
}

/// Where a value lives: the ancestor chain and the sibling array holding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub path: Vec<PathItem>,
    pub level: Vec<TreeNode>,
}

impl From<Located> for NavigatorState {
    fn from(located: Located) -> Self {
        Self {
            path: located.path,
            current_level: located.level,
        }
    }
}

impl NavigatorState {
    /// Start at the root set
    pub fn reset(root: &[TreeNode]) -> Self {
        Self {
            path: Vec::new(),
            current_level: root.to_vec(),
        }
    }

    /// Position on `value` if the tree has it, otherwise at the root.
    pub fn sync_to(root: &[TreeNode], value: &str) -> Self {
        if value.is_empty() {
            return Self::reset(root);
        }
        locate(root, value)
            .map(Self::from)
            .unwrap_or_else(|| Self::reset(root))
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Move into `node`'s children.
    ///
    /// No-op when `node` is a leaf or is not a member of the current level.
    pub fn descend(self, node: &TreeNode) -> Self {
        if !node.has_children() || !self.current_level.iter().any(|n| n.id == node.id) {
            return self;
        }

        let mut path = self.path;
        path.push(node.path_item());
        Self {
            path,
            current_level: node.children.clone(),
        }
    }

    /// Drop the last breadcrumb. No-op at the root.
    pub fn ascend_one(self, root: &[TreeNode]) -> Self {
        if self.path.is_empty() {
            return self;
        }

        let mut path = self.path;
        path.pop();
        rederive(root, path)
    }

    /// Keep breadcrumbs `0..=index` and show the level below `path[index]`.
    ///
    /// Jumping to the last breadcrumb, or past it, changes nothing.
    pub fn ascend_to(self, root: &[TreeNode], index: usize) -> Self {
        if index >= self.path.len().saturating_sub(1) {
            return self;
        }

        let mut path = self.path;
        path.truncate(index + 1);
        rederive(root, path)
    }

    /// Re-walk the current path against `root` after the tree changed.
    ///
    /// Keeps the longest prefix of the path that still resolves and picks up
    /// renamed breadcrumb labels.
    pub fn refresh(self, root: &[TreeNode]) -> Self {
        rederive(root, self.path)
    }
}

/// Walk from `root` following `path` ids.
///
/// Stops at the first id that no longer resolves to a node with children and
/// keeps only the resolved prefix of the path. Labels follow the tree.
fn rederive(root: &[TreeNode], mut path: Vec<PathItem>) -> NavigatorState {
    let mut level = root;
    let mut resolved = 0;

    for item in path.iter_mut() {
        match level.iter().find(|n| n.id == item.id) {
            Some(parent) if parent.has_children() => {
                item.label.clone_from(&parent.label);
                level = &parent.children;
                resolved += 1;
            }
            _ => break,
        }
    }

    path.truncate(resolved);
    NavigatorState {
        path,
        current_level: level.to_vec(),
    }
}

/// Find where `target` lives: depth-first, pre-order, first match wins.
///
/// `path` excludes the target itself; `level` is the sibling array that
/// contains it (the root set for top-level nodes).
pub fn locate(root: &[TreeNode], target: &str) -> Option<Located> {
    fn walk(items: &[TreeNode], target: &str, path: &mut Vec<PathItem>) -> Option<Located> {
        for item in items {
            if item.value == target {
                return Some(Located {
                    path: path.clone(),
                    level: items.to_vec(),
                });
            }

            if item.has_children() {
                path.push(item.path_item());
                if let Some(found) = walk(&item.children, target, path) {
                    return Some(found);
                }
                path.pop();
            }
        }
        None
    }

    walk(root, target, &mut Vec::new())
}
