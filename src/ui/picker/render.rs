//! Frame rendering for the picker.
//!
//! A frame is a list of lines, each already fitted to the terminal width.
//! Colors are applied after fitting so escape codes never count as width.

use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use treeselect::{TreeSelectOptions, View, ViewItem};

use crate::ui::terminal::OutputStyle;
use crate::ui::theme::{colors, paint, strong, Icons};

/// Lines used by everything except the item list
const CHROME_LINES: usize = 7;

/// Inputs that are not part of the view itself
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub options: &'a TreeSelectOptions,
    /// Label of the committed selection, empty when none
    pub selected_label: &'a str,
    pub cursor: usize,
    pub typing: bool,
    pub style: OutputStyle,
    pub size: (u16, u16),
}

/// Render `view` into terminal lines
pub fn render_frame(view: &View, frame: Frame<'_>) -> Vec<String> {
    let icons = Icons::new(frame.style.unicode);
    let color = frame.style.color;
    let width = usize::from(frame.size.0).max(20);
    let rows = usize::from(frame.size.1)
        .saturating_sub(CHROME_LINES)
        .max(3);

    let mut lines = Vec::new();
    lines.push(strong(&fit(&frame.options.title, width), color));
    lines.push(render_search_line(view, &frame, &icons, width));
    lines.push(render_context_line(view, &icons, width, color));

    let rule = icons.rule.repeat(width.min(60));
    lines.push(paint(&rule, colors::DIM, color));

    if view.items.is_empty() {
        let message = fit(&format!("  {}", frame.options.empty_message), width);
        lines.push(paint(&message, colors::DIM, color));
    } else {
        for index in visible_window(view.items.len(), frame.cursor, rows) {
            let item = &view.items[index];
            lines.push(render_item(item, index == frame.cursor, &icons, width, color));
        }
    }

    lines.push(paint(&rule, colors::DIM, color));
    let selected = frame.options.trigger_text(frame.selected_label);
    lines.push(fit(&format!("Selected: {selected}"), width));
    lines.push(paint(&fit(&help_text(view), width), colors::DIM, color));
    lines
}

fn render_search_line(view: &View, frame: &Frame<'_>, icons: &Icons, width: usize) -> String {
    let color = frame.style.color;
    if view.query.is_empty() && !frame.typing {
        let hint = fit(
            &format!("{} {}", icons.search, frame.options.search_placeholder),
            width,
        );
        return paint(&hint, colors::DIM, color);
    }
    let caret = if frame.typing { "_" } else { "" };
    fit(&format!("{} {}{caret}", icons.search, view.query), width)
}

/// Breadcrumbs while navigating, the match count while searching
fn render_context_line(view: &View, icons: &Icons, width: usize, color: bool) -> String {
    if view.is_search() {
        let noun = if view.items.len() == 1 { "match" } else { "matches" };
        return paint(
            &fit(&format!("{} {noun}", view.items.len()), width),
            colors::INFO,
            color,
        );
    }

    let separator = format!(" {} ", icons.crumb);
    let trail = std::iter::once("Top")
        .chain(view.breadcrumbs.iter().map(|p| p.label.as_str()))
        .collect::<Vec<_>>()
        .join(&separator);
    paint(&fit(&trail, width), colors::INFO, color)
}

fn render_item(item: &ViewItem, active: bool, icons: &Icons, width: usize, color: bool) -> String {
    let pad = " ".repeat(icons.cursor.width());
    let marker = if active { icons.cursor } else { pad.as_str() };
    let prefix = format!("{marker} ");
    let budget = width.saturating_sub(prefix.width());

    let (body, suffix) = match item {
        ViewItem::Entry {
            has_children: true,
            node,
        } => (node.label.as_str(), format!(" {}", icons.branch)),
        ViewItem::Match {
            parent_label: Some(parent),
            node,
        } => (node.label.as_str(), format!("  in {parent}")),
        other => (other.label(), String::new()),
    };

    let label = fit(body, budget);
    let suffix = fit(&suffix, budget.saturating_sub(label.width()));

    let label = if active {
        strong(&label, color)
    } else {
        label
    };
    let marker = if active {
        paint(marker, colors::SUCCESS, color)
    } else {
        marker.to_string()
    };
    format!("{marker} {label}{}", paint(&suffix, colors::DIM, color))
}

fn help_text(view: &View) -> String {
    let mut parts = vec!["[Enter] Choose", "[Esc] Close"];
    if view.is_search() {
        parts.push("[Ctrl+U] Clear search");
    } else {
        parts.extend(["[→] Open", "[←] Back", "[/] Search"]);
        if !view.breadcrumbs.is_empty() {
            parts.push("[Alt+1-9] Jump");
        }
    }
    parts.join("  ")
}

/// Rows `[start, end)` of a list of `len` that keep `cursor` visible.
pub fn visible_window(len: usize, cursor: usize, rows: usize) -> Range<usize> {
    if rows == 0 {
        return 0..0;
    }
    let start = cursor
        .saturating_sub(rows - 1)
        .min(len.saturating_sub(rows));
    start..(start + rows).min(len)
}

/// Cut `text` to at most `width` columns, marking the cut with `~`.
///
/// Control characters become `?` so tree labels cannot emit escape
/// sequences or line breaks into the frame.
fn fit(text: &str, width: usize) -> String {
    let text: String = text
        .chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect();
    if text.width() <= width {
        return text;
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('~');
    out
}
