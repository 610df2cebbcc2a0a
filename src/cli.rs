use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// treeselect - browse, search and pick from a category tree
#[derive(Parser, Debug)]
#[command(name = "treeselect")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Without --tree, the built-in sample category tree is used.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./treeselect.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the tree comes from
#[derive(Args, Debug, Clone, Default)]
pub struct TreeSource {
    /// Tree file (.json or .toml)
    #[arg(short, long, value_name = "FILE")]
    pub tree: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a node interactively and print its value
    Pick {
        #[command(flatten)]
        source: TreeSource,

        /// Value to start from, as if previously selected
        #[arg(long)]
        value: Option<String>,
    },

    /// Search labels across the whole tree
    Search {
        /// Case-insensitive substring to look for
        query: String,

        #[command(flatten)]
        source: TreeSource,
    },

    /// Show the breadcrumb path and level holding a value
    Locate {
        /// Node value to find
        value: String,

        #[command(flatten)]
        source: TreeSource,
    },

    /// Print the whole tree
    Tree {
        #[command(flatten)]
        source: TreeSource,
    },
}

impl Commands {
    /// Name used in `--json` events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Pick { .. } => "pick",
            Commands::Search { .. } => "search",
            Commands::Locate { .. } => "locate",
            Commands::Tree { .. } => "tree",
        }
    }
}
