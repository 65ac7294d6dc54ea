use std::fmt;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::style::Style;

/// A text fragment with a single style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    style: Style,
}

impl StyledText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Fit into `max_columns`, keeping the style
    pub fn truncate(&self, max_columns: usize, ellipsis: &str) -> Self {
        Self {
            text: truncate_to_width(&self.text, max_columns, ellipsis),
            style: self.style,
        }
    }

    pub fn render(&self, supports_color: bool) -> String {
        self.style.apply(&self.text, supports_color)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Replace control characters (newlines, tabs, escapes) with spaces so a
/// label always occupies exactly one terminal line.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Terminal column width of `text` after sanitizing
pub fn display_width(text: &str) -> usize {
    if text.chars().any(char::is_control) {
        UnicodeWidthStr::width(sanitize(text).as_str())
    } else {
        UnicodeWidthStr::width(text)
    }
}

/// Cut `text` so it occupies at most `max_columns` columns.
///
/// When anything is cut, `ellipsis` is appended if it fits. Wide characters
/// are never split.
pub fn truncate_to_width(text: &str, max_columns: usize, ellipsis: &str) -> String {
    let text = sanitize(text);
    if UnicodeWidthStr::width(text.as_str()) <= max_columns {
        return text;
    }

    let ellipsis_width = UnicodeWidthStr::width(ellipsis);
    let (budget, suffix) = if ellipsis_width <= max_columns {
        (max_columns - ellipsis_width, ellipsis)
    } else {
        (max_columns, "")
    };

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    // Sequences such as emoji + VS16 are wider than the sum of their chars.
    while UnicodeWidthStr::width(out.as_str()) > budget && out.pop().is_some() {}
    out.push_str(suffix);
    out
}
