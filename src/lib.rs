//! treeselect - hierarchical tree-select core
//!
//! Drill-down navigation through a labelled tree, global substring search
//! across every depth, and a committed `(value, label)` selection that is
//! reported to a host-supplied sink. Rendering is left to the host: the
//! [`view::project`] function hands it the exact list to draw.

pub mod config;
pub mod error;
pub mod navigator;
pub mod options;
pub mod search;
pub mod selection;
pub mod session;
pub mod tree;
pub mod view;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, LoadedConfig};
pub use error::{TreeSelectError, TreeSelectResult};
pub use navigator::{locate, Located, NavigatorState};
pub use options::TreeSelectOptions;
pub use search::{search, SearchMatch};
pub use selection::{NoopSink, RecordingSink, Selection, SelectionSink};
pub use session::{Phase, Session};
pub use tree::{load_tree, sample_tree, ParentInfo, PathItem, TreeNode, TreeWarning};
pub use view::{project, View, ViewItem};
