//! CLI Argument Parsing
//!
//! This module defines the `treepick` command line using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::ui::widgets::selection::SelectionMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Only choices without children can be selected
    Leaf,
    /// Groups can be selected too
    LeafAndGroup,
}

impl From<ModeArg> for SelectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Leaf => SelectionMode::Leaf,
            ModeArg::LeafAndGroup => SelectionMode::LeafAndGroup,
        }
    }
}

/// A `NAME=a,b,c` group given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: String,
    pub choices: Vec<String>,
}

/// treepick - pick one entry from a list or tree in the terminal
#[derive(Parser, Debug)]
#[command(name = "treepick")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Keys: Up/Down (k/j) move, Right/Space toggle a group, Left collapse, Enter select, Esc cancel."
)]
pub struct Cli {
    /// Top-level choices, in display order
    #[arg(value_name = "CHOICES", required_unless_present = "groups")]
    pub choices: Vec<String>,

    /// Title shown above the list
    #[arg(short, long)]
    pub title: Option<String>,

    /// Rows shown at once (at least 3)
    #[arg(short, long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Which rows may be selected
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Add a group of choices, e.g. `fruits=apple,pear` (repeatable)
    #[arg(short = 'g', long = "group", value_name = "NAME=A,B,C", value_parser = parse_group)]
    pub groups: Vec<GroupSpec>,

    /// Hint shown while more rows are hidden below the list
    #[arg(long, value_name = "TEXT")]
    pub more_choices: Option<String>,

    /// Config file to use instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Prompt again after each selection until cancelled
    #[arg(long)]
    pub repeat: bool,

    /// Print results as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_group(s: &str) -> Result<GroupSpec, String> {
    let (name, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=A,B,C, got '{}'", s))?;

    let name = name.trim();
    if name.is_empty() {
        return Err("group name must not be empty".to_string());
    }

    let choices: Vec<String> = rest
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();
    if choices.is_empty() {
        return Err(format!("group '{}' needs at least one choice", name));
    }

    Ok(GroupSpec {
        name: name.to_string(),
        choices,
    })
}
