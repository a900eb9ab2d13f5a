//! Terminal input module (frame-loop facing).
//!
//! This crate maps `crossterm` key events into [`Command`]s and provides
//! non-blocking [`InputSource`]s: the real terminal, an empty source, and a
//! scripted source for tests.

pub mod map;
pub mod source;

pub use tui_demos_types as types;

pub use map::{quit_keys, should_quit, snake_keys, Command, KeyMap};
pub use source::{InputSource, NoInput, ScriptedInput, TerminalInput, TYPE_AHEAD};
