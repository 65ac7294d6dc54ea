//! Configuration module for treepick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREEPICK_*)
//! 3. Config file (`--config`, else `~/.config/treepick/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{ColorMode, OutputConfig, PromptConfig, PromptSection};
