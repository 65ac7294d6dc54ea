//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PromptError, PromptResult};
use crate::ui::primitives::style::Style;
use crate::ui::widgets::selection::{SelectionMode, DEFAULT_PAGE_SIZE, MIN_PAGE_SIZE};

use super::loader::{self, ConfigWarning};

/// `[prompt]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSection {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub mode: SelectionMode,

    /// Highlight style such as `"blue bold"`; theme default when absent
    #[serde(default)]
    pub highlight: Option<Style>,

    /// Footer text; an empty string hides it
    #[serde(default)]
    pub more_choices_text: Option<String>,
}

impl Default for PromptSection {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            mode: SelectionMode::default(),
            highlight: None,
            more_choices_text: None,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PromptConfig {
    #[serde(default)]
    pub prompt: PromptSection,

    #[serde(default)]
    pub output: OutputConfig,
}

impl PromptConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PromptResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PromptResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config, or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> PromptResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (TREEPICK_* prefix)
    pub fn with_env_overrides(self) -> PromptResult<Self> {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Reject values the prompt would refuse
    pub fn validate(&self) -> PromptResult<()> {
        if self.prompt.page_size < MIN_PAGE_SIZE {
            return Err(PromptError::invalid(format!(
                "prompt.page_size must be greater or equal to {} (got {})",
                MIN_PAGE_SIZE, self.prompt.page_size
            )));
        }
        Ok(())
    }
}
