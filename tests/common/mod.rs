//! Common test utilities for treepick scenario tests.
//!
//! This module provides:
//! - `ScriptedTerminal`: in-memory terminal that replays input events
//! - Fixtures: reusable prompts and key helpers

#![allow(dead_code)]

pub mod fixtures;
pub mod terminal;

pub use fixtures::*;
pub use terminal::*;
