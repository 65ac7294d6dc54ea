//! Frame rendering for the selection prompt.
//!
//! Turns the tree, the current window and the highlight into terminal lines.
//! Nothing here touches the terminal; the caller writes the lines.

use crate::ui::context::RenderOptions;
use crate::ui::primitives::style::Style;
use crate::ui::primitives::text::{display_width, truncate_to_width, StyledText};
use crate::ui::theme::Glyphs;

use super::paginator::Window;
use super::tree::{ChoiceTree, FlattenedRow};

/// Columns assumed when the terminal reports a width of 0
pub const FALLBACK_WIDTH: u16 = 80;

/// Last column is never written so the cursor cannot wrap
const RIGHT_MARGIN: usize = 1;

/// Everything needed to draw one frame
pub struct Frame<'a, T> {
    pub tree: &'a ChoiceTree<T>,
    pub rows: &'a [FlattenedRow],
    pub window: Window,
    pub highlight: usize,
    pub title: Option<&'a StyledText>,
    pub more_choices_text: Option<&'a StyledText>,
    pub highlight_style: Style,
    pub options: RenderOptions,
    /// Terminal width in columns
    pub width: u16,
}

/// Usable columns for a reported terminal width
pub fn usable_columns(width: u16) -> usize {
    let width = if width == 0 { FALLBACK_WIDTH } else { width };
    usize::from(width).saturating_sub(RIGHT_MARGIN).max(1)
}

/// Number of non-row lines a frame may add (title and footer)
pub fn reserved_lines(has_title: bool, has_footer: bool) -> usize {
    usize::from(has_title) + usize::from(has_footer)
}

/// Render `frame` lazily: title, visible rows, then the "more choices" hint
/// when rows are hidden below the window.
pub fn render_frame<'a, T>(
    frame: Frame<'a, T>,
    display: &'a dyn Fn(&T) -> String,
) -> impl Iterator<Item = String> + 'a {
    let columns = usable_columns(frame.width);
    let glyphs = Glyphs::new(frame.options.unicode);
    let color = frame.options.color;

    let title = frame
        .title
        .map(|t| t.truncate(columns, glyphs.ellipsis).render(color));

    let footer = frame
        .more_choices_text
        .filter(|_| frame.window.has_more_below)
        .map(|t| t.truncate(columns, glyphs.ellipsis).render(color));

    let Frame {
        tree,
        rows,
        window,
        highlight,
        highlight_style,
        ..
    } = frame;

    let visible = rows.get(window.start..window.end).unwrap_or(&[]);
    let body = visible.iter().enumerate().map(move |(offset, row)| {
        let index = window.start + offset;
        let label = tree.value(row.id).map(display).unwrap_or_default();
        let is_active = index == highlight;
        let line = render_row(
            &label,
            row,
            tree.has_children(row.id),
            tree.is_expanded(row.id),
            is_active,
            glyphs,
            columns,
        );

        if is_active {
            highlight_style.apply(&line, color)
        } else {
            line
        }
    });

    title.into_iter().chain(body).chain(footer)
}

/// Render a single row as plain text, fitted to `columns`
pub fn render_row(
    label: &str,
    row: &FlattenedRow,
    has_children: bool,
    expanded: bool,
    is_active: bool,
    glyphs: Glyphs,
    columns: usize,
) -> String {
    let cursor = if is_active { glyphs.pointer } else { " " };
    let indent = "  ".repeat(row.depth.saturating_sub(1));

    let marker = if has_children {
        if expanded {
            glyphs.expand
        } else {
            glyphs.collapse
        }
    } else if row.depth > 0 {
        if row.is_last_sibling {
            glyphs.last_branch
        } else {
            glyphs.branch
        }
    } else {
        ""
    };

    let mut prefix = format!("{} {}", cursor, indent);
    if row.depth > 0 {
        prefix.push_str("  ");
    }
    if !marker.is_empty() {
        prefix.push_str(marker);
        prefix.push(' ');
    }

    let prefix_width = display_width(&prefix);
    if prefix_width >= columns {
        return truncate_to_width(&format!("{}{}", prefix, label), columns, "");
    }

    let text = truncate_to_width(label, columns - prefix_width, glyphs.ellipsis);
    format!("{}{}", prefix, text)
}
