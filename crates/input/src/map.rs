//! Key mapping from terminal events to demo commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Direction;

/// A command produced by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change the snake's heading.
    Steer(Direction),
    /// Stop the demo.
    Quit,
}

/// Maps one key event to an optional command.
pub type KeyMap = fn(KeyEvent) -> Option<Command>;

/// Snake controls: WASD (or arrows) steer, Esc quits.
pub fn snake_keys(key: KeyEvent) -> Option<Command> {
    if is_interrupt(key) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Steer(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Steer(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Steer(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Steer(Direction::Right))
        }
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Animation-only demos take no input besides a way out.
pub fn quit_keys(key: KeyEvent) -> Option<Command> {
    should_quit(key).then_some(Command::Quit)
}

/// Check if key should stop an animation demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) || is_interrupt(key)
}

/// Ctrl-C. Raw mode swallows the signal, so it arrives as a key.
fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
