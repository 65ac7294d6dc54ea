use std::fmt;
use std::str::FromStr;

use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Colour and attribute descriptor applied to a rendered fragment.
///
/// Parses from a space separated description such as `"blue bold"` or
/// `"white on dark_grey underline"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Wrap `text` in ANSI sequences, or return it unchanged when colour
    /// output is disabled.
    pub fn apply(&self, text: &str, supports_color: bool) -> String {
        if !supports_color || self.is_plain() {
            return text.to_string();
        }

        let mut styled = text.stylize();
        if let Some(fg) = self.foreground {
            styled = styled.with(fg);
        }
        if let Some(bg) = self.background {
            styled = styled.on(bg);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.dim {
            styled = styled.dim();
        }
        if self.italic {
            styled = styled.italic();
        }
        if self.underline {
            styled = styled.underlined();
        }

        format!("{}", styled)
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Style::new();
        let mut words = s.split_whitespace();

        while let Some(word) = words.next() {
            match word.to_lowercase().as_str() {
                "bold" => style.bold = true,
                "dim" => style.dim = true,
                "italic" => style.italic = true,
                "underline" | "underlined" => style.underline = true,
                "default" | "none" | "plain" => {}
                "on" => {
                    let color = words
                        .next()
                        .ok_or_else(|| "expected a colour after 'on'".to_string())?;
                    style.background = Some(parse_color(color)?);
                }
                other => style.foreground = Some(parse_color(other)?),
            }
        }

        Ok(style)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(fg) = self.foreground {
            parts.push(color_name(fg));
        }
        if let Some(bg) = self.background {
            parts.push(format!("on {}", color_name(bg)));
        }
        for (on, name) in [
            (self.bold, "bold"),
            (self.dim, "dim"),
            (self.italic, "italic"),
            (self.underline, "underline"),
        ] {
            if on {
                parts.push(name.to_string());
            }
        }

        if parts.is_empty() {
            f.write_str("default")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_color(name: &str) -> Result<Color, String> {
    let lower = name.to_lowercase();
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| format!("invalid hex colour '{}'", name));
    }

    let color = match lower.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "dark_red" | "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" | "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" | "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" | "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" | "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" | "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "dark_grey" | "darkgrey" | "dark_gray" | "darkgray" => Color::DarkGrey,
        _ => return Err(format!("unknown colour '{}'", name)),
    };
    Ok(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn color_name(color: Color) -> String {
    match color {
        Color::Black => "black".into(),
        Color::Red => "red".into(),
        Color::DarkRed => "dark_red".into(),
        Color::Green => "green".into(),
        Color::DarkGreen => "dark_green".into(),
        Color::Yellow => "yellow".into(),
        Color::DarkYellow => "dark_yellow".into(),
        Color::Blue => "blue".into(),
        Color::DarkBlue => "dark_blue".into(),
        Color::Magenta => "magenta".into(),
        Color::DarkMagenta => "dark_magenta".into(),
        Color::Cyan => "cyan".into(),
        Color::DarkCyan => "dark_cyan".into(),
        Color::White => "white".into(),
        Color::Grey => "grey".into(),
        Color::DarkGrey => "dark_grey".into(),
        Color::Rgb { r, g, b } => format!("#{:02x}{:02x}{:02x}", r, g, b),
        other => format!("{:?}", other).to_lowercase(),
    }
}
