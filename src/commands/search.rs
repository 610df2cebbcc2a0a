use std::path::Path;

use anyhow::Result;

use treeselect::search;

use super::Context;
use crate::ui::json::{emit_event, events::{CompleteEvent, MatchEvent}};
use crate::ui::output::format_matches;
use crate::ui::theme::{colors, paint};

pub fn cmd_search(ctx: &Context, query: &str, tree: Option<&Path>) -> Result<()> {
    ctx.start("search")?;
    let roots = ctx.load_tree(tree)?;
    let matches = search(&roots, query);

    if ctx.json {
        for m in &matches {
            emit_event(&MatchEvent::from(m))?;
        }
        emit_event(&CompleteEvent::success("search").with_count(matches.len()))?;
    } else if matches.is_empty() {
        println!(
            "{}",
            paint(&ctx.config.ui.empty_message, colors::DIM, ctx.style.color)
        );
    } else {
        println!("{}", format_matches(&matches, ctx.style));
    }

    Ok(())
}
