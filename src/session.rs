//! Session: the open/close lifecycle around navigator, search and selection.
//!
//! A session owns the tree, the committed selection and the current `Phase`.
//! UI events are forwarded to its methods; `view()` returns the projection
//! to draw afterwards.
//!
//! ```text
//! Closed ──open──▶ Open{nav: reset or locate(selection), query: ""}
//! Open ──descend / ascend / jump_to / set_query──▶ Open
//! Open ──choose (select + notify) / dismiss──▶ Closed
//! ```

use tracing::{debug, trace};

use crate::navigator::NavigatorState;
use crate::selection::{NoopSink, Selection, SelectionSink};
use crate::tree::TreeNode;
use crate::view::{project, View};

/// Lifecycle state of one interaction session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    /// Open at some level. A non-empty query shows global search results on
    /// top of `nav`, which is kept unchanged underneath.
    Open { nav: NavigatorState, query: String },
}

impl Phase {
    pub fn is_open(&self) -> bool {
        matches!(self, Phase::Open { .. })
    }

    /// Navigator state when open
    pub fn navigator(&self) -> Option<&NavigatorState> {
        match self {
            Phase::Open { nav, .. } => Some(nav),
            Phase::Closed => None,
        }
    }

    /// Current query; always empty when closed
    pub fn query(&self) -> &str {
        match self {
            Phase::Open { query, .. } => query,
            Phase::Closed => "",
        }
    }

    /// Closed → Open, positioned on `selected` if the tree still has it.
    pub fn open(self, root: &[TreeNode], selected: &Selection) -> Self {
        match self {
            Phase::Closed => Phase::Open {
                nav: NavigatorState::sync_to(root, &selected.value),
                query: String::new(),
            },
            open => open,
        }
    }

    /// Descend into a node of the current level.
    ///
    /// Only valid in the level view: ignored while a query is active or when
    /// the id is not a branch on the current level.
    pub fn descend(self, node_id: u64) -> Self {
        match self {
            Phase::Open { nav, query } if query.is_empty() => {
                let Some(node) = nav.current_level.iter().find(|n| n.id == node_id).cloned()
                else {
                    return Phase::Open { nav, query };
                };
                if !node.has_children() {
                    return Phase::Open { nav, query };
                }
                Phase::Open {
                    nav: nav.descend(&node),
                    query: String::new(),
                }
            }
            other => other,
        }
    }

    /// Go up one level. Clears the query when it moves.
    pub fn ascend(self, root: &[TreeNode]) -> Self {
        match self {
            Phase::Open { nav, query } if !nav.is_root() => Phase::Open {
                nav: nav.ascend_one(root),
                query: String::new(),
            },
            other => other,
        }
    }

    /// Breadcrumb click. Clears the query when it moves.
    pub fn jump_to(self, root: &[TreeNode], index: usize) -> Self {
        match self {
            Phase::Open { nav, query } if index < nav.path.len().saturating_sub(1) => Phase::Open {
                nav: nav.ascend_to(root, index),
                query: String::new(),
            },
            other => other,
        }
    }

    /// Replace the query, keeping the navigator untouched.
    pub fn with_query(self, query: impl Into<String>) -> Self {
        match self {
            Phase::Open { nav, .. } => Phase::Open {
                nav,
                query: query.into(),
            },
            Phase::Closed => Phase::Closed,
        }
    }

    /// Re-walk the navigator against a new tree, keeping the position the
    /// user navigated to as far as it still exists.
    pub fn resync(self, root: &[TreeNode]) -> Self {
        match self {
            Phase::Open { nav, query } => Phase::Open {
                nav: nav.refresh(root),
                query,
            },
            Phase::Closed => Phase::Closed,
        }
    }
}

/// A hierarchical selector bound to one tree
#[derive(Debug)]
pub struct Session<S = NoopSink> {
    tree: Vec<TreeNode>,
    selection: Selection,
    phase: Phase,
    sink: S,
}

impl Session<NoopSink> {
    /// Create a session with no change listener
    pub fn new(tree: Vec<TreeNode>) -> Self {
        Self::with_sink(tree, NoopSink)
    }
}

impl<S: SelectionSink> Session<S> {
    /// Create a session that reports selection changes to `sink`
    pub fn with_sink(tree: Vec<TreeNode>, sink: S) -> Self {
        Self {
            tree,
            selection: Selection::empty(),
            phase: Phase::Closed,
            sink,
        }
    }

    /// Builder-style initial value from the host, without notification
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn transition(&mut self, event: &str, f: impl FnOnce(Phase, &[TreeNode], &Selection) -> Phase) {
        let phase = std::mem::take(&mut self.phase);
        self.phase = f(phase, &self.tree, &self.selection);
        trace!(event, phase = ?self.phase, "session transition");
    }

    /// Open the control, synchronized to the current selection.
    pub fn open(&mut self) {
        self.transition("open", |phase, tree, selection| phase.open(tree, selection));
        debug!(
            value = %self.selection.value,
            depth = self.phase.navigator().map(|n| n.depth()).unwrap_or(0),
            "opened"
        );
    }

    pub fn descend(&mut self, node_id: u64) {
        self.transition("descend", |phase, _, _| phase.descend(node_id));
    }

    pub fn ascend(&mut self) {
        self.transition("ascend", |phase, tree, _| phase.ascend(tree));
    }

    pub fn jump_to(&mut self, index: usize) {
        self.transition("jump_to", |phase, tree, _| phase.jump_to(tree, index));
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.transition("set_query", |phase, _, _| phase.with_query(query));
    }

    /// Commit `node` as the selection, notify, and close.
    pub fn choose(&mut self, node: &TreeNode) {
        self.selection.select(node, &mut self.sink);
        debug!(value = %self.selection.value, label = %self.selection.label, "selected");
        self.phase = Phase::Closed;
    }

    /// Close without changing the selection (e.g. click outside).
    pub fn dismiss(&mut self) {
        if self.phase.is_open() {
            debug!("dismissed");
        }
        self.phase = Phase::Closed;
    }

    /// Clear the selection and notify. Does not change the phase.
    pub fn clear(&mut self) {
        self.selection.clear(&mut self.sink);
        debug!("selection cleared");
    }

    /// Adopt a value controlled by the host. Does not notify.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.selection = Selection::from_value(&self.tree, value);
    }

    /// Swap the tree. An open session keeps its path as far as it still
    /// resolves in the new tree, and keeps its query.
    pub fn set_tree(&mut self, tree: Vec<TreeNode>) {
        self.tree = tree;
        self.selection.refresh_label(&self.tree);
        self.transition("set_tree", |phase, tree, _| phase.resync(tree));
    }

    /// What the renderer should draw now
    pub fn view(&self) -> View {
        match &self.phase {
            Phase::Open { nav, query } => project(nav, query, &self.tree),
            Phase::Closed => View::closed(),
        }
    }
}
