//! Window computation over the flattened rows.
//!
//! The highlight is kept centred where possible; near either end the window
//! is pinned so a full page stays visible.

/// Contiguous range of rows shown in one frame (`start..end`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub has_more_above: bool,
    pub has_more_below: bool,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// Compute the visible window for `highlight` among `row_count` rows.
///
/// A `page_size` of 0 is treated as 1. `highlight` past the end is clamped.
pub fn paginate(row_count: usize, page_size: usize, highlight: usize) -> Window {
    let page_size = page_size.max(1);
    if row_count == 0 {
        return Window {
            start: 0,
            end: 0,
            has_more_above: false,
            has_more_below: false,
        };
    }

    let highlight = highlight.min(row_count - 1);
    let max_start = row_count.saturating_sub(page_size);
    let start = highlight.saturating_sub(page_size / 2).min(max_start);
    let end = (start + page_size).min(row_count);

    Window {
        start,
        end,
        has_more_above: start > 0,
        has_more_below: end < row_count,
    }
}

/// Shrink `page_size` so `reserved` extra lines plus the page fit into a
/// terminal with `terminal_rows` lines, leaving the bottom line free for the
/// cursor. A frame as tall as the screen scrolls its first line out of reach
/// of the erase. Never returns less than 1.
///
/// A reported height of 0 means the terminal did not tell us; the
/// configured page size is kept as is.
pub fn effective_page_size(page_size: usize, terminal_rows: u16, reserved: usize) -> usize {
    if terminal_rows == 0 {
        return page_size.max(1);
    }
    let available = usize::from(terminal_rows).saturating_sub(reserved + 1);
    page_size.min(available).max(1)
}
