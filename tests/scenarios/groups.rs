//! Scenario: nested choices with expandable groups.

use crossterm::event::KeyCode;

use crate::common::*;
use treepick::SelectionMode;

#[test]
fn scenario_leaf_mode_starts_on_first_leaf() {
    let mut term = ScriptedTerminal::new(keys(&[KeyCode::Enter]));
    assert_eq!(fruit_prompt().show(&mut term).unwrap(), "apple");
}

#[test]
fn scenario_enter_on_group_in_leaf_mode_does_nothing() {
    let mut term = ScriptedTerminal::new(keys(&[KeyCode::Up, KeyCode::Enter, KeyCode::Esc]));

    let err = fruit_prompt().show(&mut term).unwrap_err();

    assert!(err.is_cancelled());
    // Up, Enter and Esc each produced a frame; Enter changed nothing.
    assert_eq!(term.frames.len(), 3);
    assert_eq!(term.frames[1], term.frames[2]);
    assert_eq!(term.frames[1][0], "> - fruits");
}

#[test]
fn scenario_collapse_then_expand_and_pick_pear() {
    let mut term = ScriptedTerminal::new(keys(&[
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Enter,
    ]));

    let choice = fruit_prompt().show(&mut term).unwrap();

    assert_eq!(choice, "pear");
    assert_eq!(term.frames[1], ["> + fruits"]);
    assert_eq!(term.frames[2].len(), 3);
}

#[test]
fn scenario_leaf_and_group_mode_selects_group() {
    let prompt = fruit_prompt().mode(SelectionMode::LeafAndGroup);
    let mut term = ScriptedTerminal::new(keys(&[KeyCode::Enter]));

    assert_eq!(prompt.show(&mut term).unwrap(), "fruits");
}

#[test]
fn scenario_nested_handles_build_deep_tree() {
    let mut prompt = treepick::SelectionPrompt::new().render_options(treepick::RenderOptions::plain());
    prompt
        .add_choice("animals")
        .add_child("mammals")
        .add_children(["dog", "cat"]);
    prompt.add_choice("plants");

    let mut term = ScriptedTerminal::new(keys(&[KeyCode::Down, KeyCode::Enter]));
    assert_eq!(prompt.show(&mut term).unwrap(), "cat");

    assert_eq!(
        term.frames[0],
        [
            "  - animals",
            "    - mammals",
            ">     |- dog",
            "      `- cat",
            "  plants",
        ]
    );
}
