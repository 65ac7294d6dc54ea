//! Reusable prompts and input helpers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use treepick::{InputEvent, RenderOptions, SelectionPrompt};

/// Choices used by the "Test input" demo
pub const SAMPLE_CHOICES: [&str; 4] = ["one", "two", "dog", "apple"];

pub fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> InputEvent {
    InputEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn keys(codes: &[KeyCode]) -> Vec<InputEvent> {
    codes.iter().copied().map(key).collect()
}

/// "Test input" prompt over the sample choices, plain ASCII output
pub fn sample_prompt() -> SelectionPrompt<&'static str> {
    SelectionPrompt::new()
        .title("Test input")
        .add_choices(SAMPLE_CHOICES)
        .render_options(RenderOptions::plain())
}

/// `fruits` group with two children, plain ASCII output
pub fn fruit_prompt() -> SelectionPrompt<&'static str> {
    SelectionPrompt::new()
        .add_choice_group("fruits", ["apple", "pear"])
        .render_options(RenderOptions::plain())
}
