use std::path::Path;

use anyhow::Result;

use treeselect::{locate, TreeSelectError};

use super::Context;
use crate::ui::json::{emit_event, events::{CompleteEvent, LocatedEvent}};
use crate::ui::output::format_located;

pub fn cmd_locate(ctx: &Context, value: &str, tree: Option<&Path>) -> Result<()> {
    ctx.start("locate")?;
    let roots = ctx.load_tree(tree)?;

    let not_found = || TreeSelectError::NotFound {
        value: value.to_string(),
    };
    let located = locate(&roots, value).ok_or_else(not_found)?;
    let node = located
        .level
        .iter()
        .find(|n| n.value == value)
        .ok_or_else(not_found)?;

    if ctx.json {
        emit_event(&LocatedEvent::new(node, &located.path, &located.level))?;
        emit_event(&CompleteEvent::success("locate"))?;
    } else {
        println!("{}", format_located(node, &located, ctx.style));
    }

    Ok(())
}
