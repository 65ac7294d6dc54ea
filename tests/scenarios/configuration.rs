//! Scenario: prompt settings from setters and config files.

use std::fs;

use crossterm::event::KeyCode;
use tempfile::tempdir;

use crate::common::*;
use treepick::{PromptConfig, PromptError, RenderOptions, SelectionMode, SelectionPrompt};

#[test]
fn scenario_page_size_two_is_rejected() {
    let err = sample_prompt().page_size(2).unwrap_err();

    assert!(matches!(err, PromptError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("greater or equal to 3"));
}

#[test]
fn scenario_config_file_drives_prompt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[prompt]
page_size = 3
mode = "leaf-and-group"
more_choices_text = "(more)"
"#,
    )
    .unwrap();

    let config = PromptConfig::load(&path).unwrap();
    let prompt = SelectionPrompt::new()
        .render_options(RenderOptions::plain())
        .apply_config(&config)
        .unwrap()
        .add_choice_group("fruits", ["apple", "pear", "plum", "fig"]);

    let mut term = ScriptedTerminal::new(keys(&[KeyCode::Enter]));
    assert_eq!(prompt.show(&mut term).unwrap(), "fruits");
    assert_eq!(
        term.frames[0],
        ["> - fruits", "    |- apple", "    |- pear", "(more)"]
    );
}

#[test]
fn scenario_config_file_with_small_page_size_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[prompt]\npage_size = 1\n").unwrap();

    assert!(matches!(
        PromptConfig::load(&path),
        Err(PromptError::InvalidConfiguration { .. })
    ));
}

#[test]
fn scenario_converter_labels_rows() {
    #[derive(Debug, PartialEq)]
    struct Fruit {
        name: &'static str,
        price: u32,
    }

    impl std::fmt::Display for Fruit {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name)
        }
    }

    let prompt = SelectionPrompt::new()
        .mode(SelectionMode::Leaf)
        .add_choices([
            Fruit { name: "apple", price: 3 },
            Fruit { name: "pear", price: 4 },
        ])
        .converter(|f: &Fruit| format!("{} ({}p)", f.name, f.price))
        .render_options(RenderOptions::plain());

    let mut term = ScriptedTerminal::new(keys(&[KeyCode::Down, KeyCode::Enter]));
    let fruit = prompt.show(&mut term).unwrap();

    assert_eq!(fruit, Fruit { name: "pear", price: 4 });
    assert_eq!(term.frames[0], ["> apple (3p)", "  pear (4p)"]);
}
