//! Error types for treepick
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for prompt operations
pub type PromptResult<T> = Result<T, PromptError>;

/// Main error type for prompt operations
#[derive(Error, Debug)]
pub enum PromptError {
    /// A builder setter or config file rejected a value
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// `show` was called on a prompt without any choices
    #[error("no choices to select from")]
    NoChoices,

    /// The user dismissed the prompt (Escape, Ctrl-C, closed input)
    #[error("prompt cancelled")]
    Cancelled,

    /// Reading keys from or writing to the terminal failed
    #[error("terminal I/O failure: {0}")]
    TerminalIo(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl PromptError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Whether this error came from the user dismissing the prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
