use std::path::Path;

use anyhow::Result;

use treeselect::tree::{depth_first, node_count};

use super::Context;
use crate::ui::json::{emit_event, events::{CompleteEvent, NodeEvent}};
use crate::ui::output::format_tree;

pub fn cmd_tree(ctx: &Context, tree: Option<&Path>) -> Result<()> {
    ctx.start("tree")?;
    let roots = ctx.load_tree(tree)?;

    if ctx.json {
        for (depth, node) in depth_first(&roots) {
            emit_event(&NodeEvent::new(depth, node))?;
        }
        emit_event(&CompleteEvent::success("tree").with_count(node_count(&roots)))?;
    } else if !roots.is_empty() {
        println!("{}", format_tree(&roots, ctx.style));
    }

    Ok(())
}
