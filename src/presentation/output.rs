//! Output Rendering
//!
//! Formats prompt results and config warnings as text or JSON lines.

use serde_json::json;

use crate::config::ConfigWarning;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Line printed after a choice is confirmed
pub fn selection_line(format: OutputFormat, choice: &str) -> String {
    match format {
        OutputFormat::Text => format!("Selected {}", choice),
        OutputFormat::Json => json!({ "event": "selected", "choice": choice }).to_string(),
    }
}

/// Line printed when the prompt is dismissed; text mode stays silent
pub fn cancelled_line(format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text => None,
        OutputFormat::Json => Some(json!({ "event": "cancelled" }).to_string()),
    }
}

/// Human-readable lines for unknown-key warnings
pub fn config_warning_lines(warnings: &[ConfigWarning], unicode: bool) -> Vec<String> {
    let icon = if unicode { "⚠" } else { "!" };
    let mut lines = Vec::new();

    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        lines.push(format!("{} Unknown config key '{}' in {}", icon, w.key, location));

        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }

    lines
}

pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) {
    for line in config_warning_lines(warnings, unicode) {
        eprintln!("{}", line);
    }
}
