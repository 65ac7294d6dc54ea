//! treepick - interactive tree selection prompt for the terminal
//!
//! Presents a list of choices, optionally nested into groups, and returns the
//! one the user confirms. Groups can be expanded and collapsed; long lists are
//! paged to fit the terminal.
//!
//! ```no_run
//! use treepick::{SelectionMode, SelectionPrompt};
//!
//! let choice = SelectionPrompt::new()
//!     .title("Test input")
//!     .mode(SelectionMode::Leaf)
//!     .add_choices(["one", "two", "dog", "apple"])
//!     .show_interactive()?;
//! println!("Selected {}", choice);
//! # Ok::<(), treepick::PromptError>(())
//! ```

pub mod config;
pub mod error;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use config::{ColorMode, ConfigWarning, OutputConfig, PromptConfig};
pub use error::{PromptError, PromptResult};
pub use ui::backend::{CrosstermTerminal, InputEvent, RegionHandle, Terminal};
pub use ui::context::RenderOptions;
pub use ui::primitives::style::Style;
pub use ui::primitives::text::StyledText;
pub use ui::widgets::selection::{
    ChoiceHandle, ChoiceTree, InputController, NodeId, SelectAction, SelectionMode,
    SelectionPrompt,
};
