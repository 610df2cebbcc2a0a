//! View Projector: the list a renderer should draw right now.
//!
//! Pure function of the navigator state, the query and the full tree. A
//! non-empty query always means global search; the current level is never
//! filtered locally.

use serde::Serialize;

use crate::navigator::NavigatorState;
use crate::search::{search, SearchMatch};
use crate::tree::{PathItem, TreeNode};

/// One displayed row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewItem {
    /// A node of the current level
    Entry { node: TreeNode, has_children: bool },
    /// A global search hit
    Match {
        node: TreeNode,
        parent_label: Option<String>,
    },
}

impl ViewItem {
    pub fn node(&self) -> &TreeNode {
        match self {
            ViewItem::Entry { node, .. } | ViewItem::Match { node, .. } => node,
        }
    }

    pub fn label(&self) -> &str {
        &self.node().label
    }

    /// Whether choosing this row may descend instead of select
    pub fn is_navigable(&self) -> bool {
        matches!(
            self,
            ViewItem::Entry {
                has_children: true,
                ..
            }
        )
    }
}

impl From<SearchMatch> for ViewItem {
    fn from(m: SearchMatch) -> Self {
        ViewItem::Match {
            parent_label: m.parent.map(|p| p.label),
            node: m.node,
        }
    }
}

/// Everything the renderer consumes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct View {
    pub open: bool,
    pub query: String,
    pub breadcrumbs: Vec<PathItem>,
    pub items: Vec<ViewItem>,
}

impl View {
    /// Projection of a closed control
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_search(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Combine navigation, query and tree into the displayed list.
pub fn project(nav: &NavigatorState, query: &str, root: &[TreeNode]) -> View {
    let items = if query.is_empty() {
        nav.current_level
            .iter()
            .map(|node| ViewItem::Entry {
                has_children: node.has_children(),
                node: node.clone(),
            })
            .collect()
    } else {
        search(root, query).into_iter().map(ViewItem::from).collect()
    };

    View {
        open: true,
        query: query.to_string(),
        breadcrumbs: nav.path.clone(),
        items,
    }
}
