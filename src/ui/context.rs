use crate::config::{ColorMode, OutputConfig};
use crate::presentation::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Output features a frame may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub unicode: bool,
}

impl RenderOptions {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self { color, unicode }
    }

    /// No ANSI styling, ASCII glyphs only
    pub fn plain() -> Self {
        Self::new(false, false)
    }

    /// Resolve from the current environment with default output settings
    pub fn detect() -> Self {
        Self::resolve(detect_capabilities(), &OutputConfig::default(), None)
    }

    pub fn resolve(
        caps: TerminalCapabilities,
        output: &OutputConfig,
        cli_color: Option<ColorWhen>,
    ) -> Self {
        let unicode = output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self { color, unicode }
    }
}
