//! Selection Prompt Widget
//!
//! Single-choice prompt over a tree of values. Groups can be expanded and
//! collapsed; the visible rows are paged to fit the terminal.
//!
//! # Module Structure
//!
//! - `tree` - arena-backed choice tree and flattening
//! - `paginator` - visible window over the flattened rows
//! - `controller` - highlight movement, expansion and confirmation
//! - `input` - key to action mapping
//! - `render` - frame rendering to plain or styled lines
//! - `prompt` - builder and the render/input loop

mod controller;
mod input;
mod paginator;
mod prompt;
mod render;
mod tree;

pub use controller::{ControllerState, InputController, SelectAction, SelectionMode};
pub use input::key_to_action;
pub use paginator::{effective_page_size, paginate, Window};
pub use prompt::{Converter, SelectionPrompt, DEFAULT_PAGE_SIZE, MIN_PAGE_SIZE};
pub use render::{render_frame, render_row, reserved_lines, usable_columns, Frame, FALLBACK_WIDTH};
pub use tree::{ChoiceHandle, ChoiceNode, ChoiceTree, FlattenedRow, NodeId};
