//! Scenario: picking from a flat list larger than one page.

use crossterm::event::KeyCode;

use crate::common::*;

#[test]
fn scenario_down_twice_then_enter_selects_dog() {
    let mut term = ScriptedTerminal::new(keys(&[KeyCode::Down, KeyCode::Down, KeyCode::Enter]));

    let choice = sample_prompt().page_size(3).unwrap().show(&mut term).unwrap();

    assert_eq!(choice, "dog");
    assert_eq!(
        term.last_frame(),
        ["Test input", "  two", "> dog", "  apple"],
        "window should be pinned to the end with dog highlighted"
    );
}

#[test]
fn scenario_first_frame_hints_at_more_choices() {
    let mut term = ScriptedTerminal::new(keys(&[KeyCode::Esc]));
    let _ = sample_prompt().page_size(3).unwrap().show(&mut term);

    let first = &term.frames[0];
    assert_eq!(first.len(), 5);
    assert_eq!(first[1], "> one");
    assert_eq!(first[4], "(Move up and down to reveal more choices)");
}

#[test]
fn scenario_navigation_clamps_at_both_ends() {
    let mut term = ScriptedTerminal::new(keys(&[
        KeyCode::Up,
        KeyCode::Up,
        KeyCode::End,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Enter,
    ]));

    let choice = sample_prompt().show(&mut term).unwrap();
    assert_eq!(choice, "apple");
}

#[test]
fn scenario_vim_keys_move_highlight() {
    let mut term = ScriptedTerminal::new(vec![
        key(KeyCode::Char('j')),
        key(KeyCode::Char('j')),
        key(KeyCode::Char('k')),
        key(KeyCode::Enter),
    ]);

    assert_eq!(sample_prompt().show(&mut term).unwrap(), "two");
}

#[test]
fn scenario_page_down_jumps_by_page() {
    let values: Vec<String> = (1..=20).map(|i| format!("item {:02}", i)).collect();
    let prompt = treepick::SelectionPrompt::new()
        .add_choices(values)
        .page_size(5)
        .unwrap()
        .render_options(treepick::RenderOptions::plain());
    let mut term = ScriptedTerminal::new(keys(&[KeyCode::PageDown, KeyCode::PageDown, KeyCode::Enter]));

    assert_eq!(prompt.show(&mut term).unwrap(), "item 11");
    assert_eq!(term.highlighted_line(), Some("> item 11"));
}
