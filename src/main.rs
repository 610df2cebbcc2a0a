//! treeselect CLI - browse, search and pick from a category tree
//!
//! Usage: treeselect [--json] [-v...] [--config PATH] <COMMAND>
//!
//! Commands:
//!   pick    Pick a node interactively and print its value
//!   search  Search labels across the whole tree
//!   locate  Show the breadcrumb path and level holding a value
//!   tree    Print the whole tree

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use treeselect::config::OutputConfig;

use cli::{Cli, Commands};
use commands::Context;
use ui::terminal::{OutputStyle, Styles};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.name();
    let json = cli.json;

    let ctx = match Context::load(cli.config.as_deref(), json) {
        Ok(ctx) => ctx,
        // No config to honor yet
        Err(err) => fail(&err, command, json, Styles::detect(&OutputConfig::default(), json).stderr),
    };

    if let Err(err) = run(&ctx, cli.command) {
        fail(&err, command, json, ctx.stderr_style);
    }
}

fn fail(err: &anyhow::Error, command: &str, json: bool, style: OutputStyle) -> ! {
    ui::error::print_error(err, command, json, style);
    std::process::exit(1);
}

/// `-v` turns on debug, `-vv` trace. `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "treeselect=debug",
        _ => "treeselect=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(ctx: &Context, command: Commands) -> Result<()> {
    match command {
        Commands::Pick { source, value } => {
            commands::pick::cmd_pick(ctx, source.tree.as_deref(), value.as_deref())
        }
        Commands::Search { query, source } => {
            commands::search::cmd_search(ctx, &query, source.tree.as_deref())
        }
        Commands::Locate { value, source } => {
            commands::locate::cmd_locate(ctx, &value, source.tree.as_deref())
        }
        Commands::Tree { source } => commands::tree::cmd_tree(ctx, source.tree.as_deref()),
    }
}
