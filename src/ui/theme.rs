use crossterm::style::Color;

use crate::ui::primitives::style::Style;

/// Design tokens for the selection prompt.
///
/// Design constraints:
/// - Only a handful of semantic colors (`colors::*`)
/// - All markers and glyphs must be sourced from this module
pub mod colors {
    use super::Color;

    /// #3B82F6
    pub const HIGHLIGHT: Color = Color::Blue;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    /// Marks the highlighted row.
    pub const POINTER: &str = ">";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    // Nested leaves.
    pub const BRANCH: &str = "├─";
    pub const LAST_BRANCH: &str = "└─";

    pub const ELLIPSIS: &str = "…";
}

pub mod icons_ascii {
    pub const POINTER: &str = ">";

    pub const EXPAND: &str = "-";
    pub const COLLAPSE: &str = "+";

    pub const BRANCH: &str = "|-";
    pub const LAST_BRANCH: &str = "`-";

    pub const ELLIPSIS: &str = "...";
}

/// Default text shown below the list when rows are hidden.
pub const MORE_CHOICES_TEXT: &str = "(Move up and down to reveal more choices)";

/// Default highlight style for the focused row.
pub fn highlight_style() -> Style {
    Style::new().fg(colors::HIGHLIGHT)
}

/// Style used for the "more choices" hint.
pub fn hint_style() -> Style {
    Style::new().fg(colors::DIM)
}

/// Glyph set resolved once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub pointer: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub ellipsis: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                pointer: icons::POINTER,
                expand: icons::EXPAND,
                collapse: icons::COLLAPSE,
                branch: icons::BRANCH,
                last_branch: icons::LAST_BRANCH,
                ellipsis: icons::ELLIPSIS,
            }
        } else {
            Self {
                pointer: icons_ascii::POINTER,
                expand: icons_ascii::EXPAND,
                collapse: icons_ascii::COLLAPSE,
                branch: icons_ascii::BRANCH,
                last_branch: icons_ascii::LAST_BRANCH,
                ellipsis: icons_ascii::ELLIPSIS,
            }
        }
    }
}
