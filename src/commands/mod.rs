//! Command implementations behind the CLI.

pub mod locate;
pub mod pick;
pub mod search;
pub mod tree;

use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::debug;

use treeselect::config::{self, Config};
use treeselect::tree::{load_tree, sample_tree, TreeNode};

use crate::ui::json::{emit_event, events::StartEvent};
use crate::ui::output::{print_config_warnings, print_tree_warnings};
use crate::ui::terminal::{OutputStyle, Styles};

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    /// Style for results on stdout
    pub style: OutputStyle,
    /// Style for warnings, errors and the picker on stderr
    pub stderr_style: OutputStyle,
    pub json: bool,
}

impl Context {
    /// Resolve config and terminal style for this run
    pub fn load(explicit_config: Option<&Path>, json: bool) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let loaded = config::discover(explicit_config, &cwd)?;

        let styles = Styles::detect(&loaded.config.output, json);

        if let Some(source) = &loaded.source {
            print_config_warnings(source, &loaded.warnings, styles.stderr);
        }

        Ok(Self {
            config: loaded.config,
            style: styles.stdout,
            stderr_style: styles.stderr,
            json,
        })
    }

    /// Tree from `--tree`, then `tree.path` in config, then the sample tree.
    pub fn load_tree(&self, explicit: Option<&Path>) -> Result<Vec<TreeNode>> {
        let Some(path) = explicit.or(self.config.tree.path.as_deref()) else {
            debug!("no tree file given, using sample tree");
            return Ok(sample_tree());
        };

        let (roots, warnings) =
            load_tree(path).with_context(|| format!("failed to load tree from {}", path.display()))?;
        print_tree_warnings(&path.display().to_string(), &warnings, self.stderr_style);
        Ok(roots)
    }

    /// Emit the `start` event in JSON mode
    pub fn start(&self, command: &str) -> Result<()> {
        if self.json {
            emit_event(&StartEvent::new(command))?;
        }
        Ok(())
    }
}
