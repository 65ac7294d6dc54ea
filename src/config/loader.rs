//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PromptError, PromptResult};
use crate::ui::widgets::selection::SelectionMode;

use super::types::{ColorMode, PromptConfig};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PromptResult<(PromptConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PromptError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: PromptConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PromptError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate()?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect::<Vec<_>>();

    for w in &warnings {
        tracing::debug!(key = %w.key, file = %w.file.display(), line = ?w.line, "unknown config key");
    }

    Ok((config, warnings))
}

/// Load `explicit` if given, else the user config file if it exists, else
/// defaults. Environment overrides are applied on top in every case.
///
/// An explicit file that cannot be read or parsed is an error; a broken user
/// config is logged and skipped.
pub fn load_or_default(explicit: Option<&Path>) -> PromptResult<(PromptConfig, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((config.with_env_overrides()?, warnings));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((config, warnings)) => return Ok((config.with_env_overrides()?, warnings)),
                Err(e) => {
                    tracing::warn!(
                        file = %user_config.display(),
                        error = %e,
                        "ignoring unreadable user config"
                    );
                }
            }
        }
    }

    Ok((PromptConfig::default().with_env_overrides()?, Vec::new()))
}

/// Apply environment variable overrides (TREEPICK_* prefix)
pub fn with_env_overrides(
    mut config: PromptConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> PromptResult<PromptConfig> {
    // TREEPICK_PAGE_SIZE
    if let Some(value) = get_env("TREEPICK_PAGE_SIZE") {
        config.prompt.page_size = value.trim().parse().map_err(|_| {
            PromptError::invalid(format!("TREEPICK_PAGE_SIZE must be a number (got '{}')", value))
        })?;
    }

    // TREEPICK_MODE
    if let Some(value) = get_env("TREEPICK_MODE") {
        config.prompt.mode = match value.trim().to_lowercase().as_str() {
            "leaf" => SelectionMode::Leaf,
            "leaf-and-group" | "leaf_and_group" | "leafandgroup" => SelectionMode::LeafAndGroup,
            _ => {
                return Err(PromptError::invalid(format!(
                    "TREEPICK_MODE must be 'leaf' or 'leaf-and-group' (got '{}')",
                    value
                )))
            }
        };
    }

    // TREEPICK_COLOR
    if let Some(value) = get_env("TREEPICK_COLOR") {
        config.output.color = match value.trim().to_lowercase().as_str() {
            "auto" => ColorMode::Auto,
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => {
                return Err(PromptError::invalid(format!(
                    "TREEPICK_COLOR must be auto, always or never (got '{}')",
                    value
                )))
            }
        };
    }

    config.validate()?;
    Ok(config)
}

/// `<config dir>/treepick/config.toml`, preferring `XDG_CONFIG_HOME`
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("treepick").join("config.toml"))
}

pub(super) fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "prompt",
        "page_size",
        "mode",
        "highlight",
        "more_choices_text",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
