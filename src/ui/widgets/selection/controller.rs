//! Selection state and action handling.
//!
//! The controller owns the choice tree for the duration of one prompt run,
//! keeps the flattened rows in sync with expansion state and moves the
//! highlight. Navigation clamps at both ends; it never wraps around.

use serde::{Deserialize, Serialize};

use super::tree::{ChoiceTree, FlattenedRow, NodeId};

/// Which rows may be confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Only nodes without children
    #[default]
    Leaf,
    /// Any node, groups included
    LeafAndGroup,
}

/// Selection action, usually produced by [`super::input::key_to_action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    /// Move highlight up one row
    Up,
    /// Move highlight down one row
    Down,
    /// Move highlight up by a page
    PageUp,
    /// Move highlight down by a page
    PageDown,
    /// Jump to the first row
    Home,
    /// Jump to the last row
    End,
    /// Toggle expansion of the highlighted group
    Toggle,
    /// Collapse the parent group and move to it
    Collapse,
    /// Confirm the highlighted row
    Confirm,
    /// Abort the prompt
    Cancel,
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Running,
    Confirmed(NodeId),
    Cancelled,
}

impl ControllerState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Input-driven state machine over a [`ChoiceTree`]
#[derive(Debug)]
pub struct InputController<T> {
    tree: ChoiceTree<T>,
    mode: SelectionMode,
    page_size: usize,
    rows: Vec<FlattenedRow>,
    cursor: usize,
    state: ControllerState,
}

impl<T> InputController<T> {
    pub fn new(tree: ChoiceTree<T>, mode: SelectionMode, page_size: usize) -> Self {
        let rows = tree.flatten();
        let mut controller = Self {
            tree,
            mode,
            page_size: page_size.max(1),
            rows,
            cursor: 0,
            state: ControllerState::Running,
        };
        controller.cursor = controller.initial_cursor();
        controller
    }

    fn initial_cursor(&self) -> usize {
        if self.is_eligible(0) {
            return 0;
        }
        (0..self.rows.len())
            .find(|&i| self.is_eligible(i))
            .unwrap_or(0)
    }

    pub fn tree(&self) -> &ChoiceTree<T> {
        &self.tree
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Get flattened rows for rendering
    pub fn flattened_rows(&self) -> &[FlattenedRow] {
        &self.rows
    }

    /// Get current highlight position
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Node under the highlight, if any rows exist
    pub fn highlighted(&self) -> Option<NodeId> {
        self.rows.get(self.cursor).map(|row| row.id)
    }

    /// Page size used for PageUp/PageDown; the prompt keeps this in sync
    /// with the rendered window.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Whether the row at `index` may be confirmed under the current mode
    pub fn is_eligible(&self, index: usize) -> bool {
        match self.rows.get(index) {
            None => false,
            Some(row) => match self.mode {
                SelectionMode::LeafAndGroup => true,
                SelectionMode::Leaf => !self.tree.has_children(row.id),
            },
        }
    }

    /// Handle an action and return the resulting state.
    ///
    /// Actions after the controller finished are ignored.
    pub fn handle_action(&mut self, action: SelectAction) -> ControllerState {
        if self.state.is_finished() {
            return self.state;
        }

        match action {
            SelectAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            SelectAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
            }
            SelectAction::PageUp => {
                self.cursor = self.cursor.saturating_sub(self.page_size);
            }
            SelectAction::PageDown => {
                self.cursor = (self.cursor + self.page_size).min(self.last_index());
            }
            SelectAction::Home => {
                self.cursor = 0;
            }
            SelectAction::End => {
                self.cursor = self.last_index();
            }
            SelectAction::Toggle => {
                if let Some(id) = self.highlighted() {
                    if self.tree.toggle_expanded(id) {
                        self.rebuild_rows(id);
                    }
                }
            }
            SelectAction::Collapse => {
                if let Some(parent) = self.highlighted().and_then(|id| self.tree.parent(id)) {
                    self.tree.set_expanded(parent, false);
                    self.rebuild_rows(parent);
                }
            }
            SelectAction::Confirm => {
                if self.is_eligible(self.cursor) {
                    if let Some(id) = self.highlighted() {
                        self.state = ControllerState::Confirmed(id);
                    }
                }
            }
            SelectAction::Cancel => {
                self.state = ControllerState::Cancelled;
            }
        }

        self.state
    }

    /// Input stream ended or was interrupted
    pub fn cancel(&mut self) -> ControllerState {
        self.handle_action(SelectAction::Cancel)
    }

    fn last_index(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Re-flatten and put the highlight on `focus`, which is always visible
    /// after an expansion change.
    fn rebuild_rows(&mut self, focus: NodeId) {
        self.rows = self.tree.flatten();
        self.cursor = self
            .rows
            .iter()
            .position(|row| row.id == focus)
            .unwrap_or(self.cursor)
            .min(self.last_index());
    }

    /// Consume the controller and return the confirmed value
    pub fn into_selection(self) -> Option<T> {
        match self.state {
            ControllerState::Confirmed(id) => self.tree.into_value(id),
            _ => None,
        }
    }
}
