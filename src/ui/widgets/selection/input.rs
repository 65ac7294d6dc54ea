//! Keyboard input mapping.
//!
//! Maps crossterm key events to selection actions. Unknown keys map to
//! `None` and are ignored by the prompt loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::controller::SelectAction;

/// Convert a keyboard event to a SelectAction
pub fn key_to_action(key: KeyEvent) -> Option<SelectAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(SelectAction::Cancel),
            KeyCode::Char('p') => Some(SelectAction::Up),
            KeyCode::Char('n') => Some(SelectAction::Down),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(SelectAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectAction::Down),
        KeyCode::PageUp => Some(SelectAction::PageUp),
        KeyCode::PageDown => Some(SelectAction::PageDown),
        KeyCode::Home => Some(SelectAction::Home),
        KeyCode::End => Some(SelectAction::End),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => Some(SelectAction::Toggle),
        KeyCode::Left | KeyCode::Char('h') => Some(SelectAction::Collapse),
        KeyCode::Enter => Some(SelectAction::Confirm),
        KeyCode::Esc => Some(SelectAction::Cancel),
        _ => None,
    }
}
