//! Line output for the non-interactive commands and stderr warnings.

use std::path::Path;

use treeselect::config::ConfigWarning;
use treeselect::tree::{depth_first, TreeNode, TreeWarning};
use treeselect::{Located, SearchMatch};

use crate::ui::terminal::OutputStyle;
use crate::ui::theme::{colors, paint, strong, Icons};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], style: OutputStyle) {
    let icon = paint(Icons::new(style.unicode).warning, colors::WARNING, style.color);
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{icon} Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("{icon} Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

pub fn print_tree_warnings(source: &str, warnings: &[TreeWarning], style: OutputStyle) {
    let icon = paint(Icons::new(style.unicode).warning, colors::WARNING, style.color);
    for w in warnings {
        eprintln!("{icon} {source}: {w}");
    }
}

/// Whole tree, two spaces of indent per level.
pub fn format_tree(roots: &[TreeNode], style: OutputStyle) -> String {
    depth_first(roots)
        .map(|(depth, node)| {
            format!(
                "{}{} {}",
                "  ".repeat(depth),
                node.label,
                paint(&format!("({})", node.value), colors::DIM, style.color)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per search hit, with the parent label when there is one.
pub fn format_matches(matches: &[SearchMatch], style: OutputStyle) -> String {
    matches
        .iter()
        .map(|m| {
            let value = paint(&format!("({})", m.node.value), colors::DIM, style.color);
            match m.parent_label() {
                Some(parent) => format!(
                    "{} {}  in {}",
                    m.node.label,
                    value,
                    paint(parent, colors::INFO, style.color)
                ),
                None => format!("{} {}", m.node.label, value),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Breadcrumb trail to the node, then its level with the node marked.
pub fn format_located(node: &TreeNode, located: &Located, style: OutputStyle) -> String {
    let icons = Icons::new(style.unicode);
    let separator = format!(" {} ", icons.crumb);

    let trail = located
        .path
        .iter()
        .map(|p| p.label.as_str())
        .chain(std::iter::once(node.label.as_str()))
        .collect::<Vec<_>>()
        .join(&separator);

    let mut lines = vec![strong(&trail, style.color)];
    for sibling in &located.level {
        let marker = if sibling.id == node.id {
            paint(icons.cursor, colors::SUCCESS, style.color)
        } else {
            " ".repeat(icons.cursor.chars().count())
        };
        let branch = if sibling.has_children() {
            format!(" {}", icons.branch)
        } else {
            String::new()
        };
        lines.push(format!("  {marker} {}{branch}", sibling.label));
    }
    lines.join("\n")
}
