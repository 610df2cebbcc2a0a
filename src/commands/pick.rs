use std::io;
use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::debug;

use treeselect::tree::TreeNode;
use treeselect::{NoopSink, SelectionSink, Session, TreeSelectError};

use super::Context;
use crate::ui::json::{emit_event, events::CompleteEvent, JsonSink};
use crate::ui::picker::{run_interactive, Outcome, Picker};

pub fn cmd_pick(ctx: &Context, tree: Option<&Path>, value: Option<&str>) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return Err(TreeSelectError::NotInteractive.into());
    }

    ctx.start("pick")?;
    let roots = ctx.load_tree(tree)?;

    if ctx.json {
        let session = run_picker(ctx, roots, value, JsonSink::new(io::stdout()))?;
        session.into_sink().finish()?;
        emit_event(&CompleteEvent::success("pick"))?;
    } else {
        let session = run_picker(ctx, roots, value, NoopSink)?;
        let selection = session.selection();
        println!("{}\t{}", selection.value, selection.label);
    }

    Ok(())
}

/// Drive the picker to a choice; dismissing is an error.
fn run_picker<S: SelectionSink>(
    ctx: &Context,
    roots: Vec<TreeNode>,
    value: Option<&str>,
    sink: S,
) -> Result<Session<S>> {
    let mut session = Session::with_sink(roots, sink);
    if let Some(value) = value {
        session.set_value(value);
    }

    let mut picker = Picker::new(session);
    let outcome = run_interactive(&mut picker, &ctx.config.ui, ctx.stderr_style)?;
    debug!(?outcome, "picker finished");

    match outcome {
        Outcome::Chosen => Ok(picker.into_session()),
        Outcome::Dismissed | Outcome::Continue => Err(TreeSelectError::Aborted.into()),
    }
}
