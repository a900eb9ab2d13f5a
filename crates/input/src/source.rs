//! Non-blocking input sources polled once per frame.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{Command, KeyMap};

/// Keys buffered between frames; extra presses are dropped.
pub const TYPE_AHEAD: usize = 8;

/// Yields at most one command per call and never blocks.
pub trait InputSource {
    fn poll(&mut self) -> Result<Option<Command>>;
}

/// Reads key presses from the real terminal through crossterm.
///
/// Every available event is drained on each poll so the OS buffer never
/// backs up; mapped commands are queued and handed out one per frame. `Quit`
/// skips the queue.
pub struct TerminalInput {
    map: KeyMap,
    pending: ArrayVec<Command, TYPE_AHEAD>,
}

impl TerminalInput {
    pub fn new(map: KeyMap) -> Self {
        Self {
            map,
            pending: ArrayVec::new(),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Option<Command>> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match (self.map)(key) {
                Some(Command::Quit) => {
                    self.pending.clear();
                    return Ok(Some(Command::Quit));
                }
                Some(cmd) => {
                    let _ = self.pending.try_push(cmd);
                }
                None => {}
            }
        }

        if self.pending.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.pending.remove(0)))
        }
    }
}

/// Input that never produces a command.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self) -> Result<Option<Command>> {
        Ok(None)
    }
}

/// Pre-recorded input: one entry per frame, `None` meaning "no key".
///
/// Once the script runs out every poll returns `None`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<Option<Command>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Option<Command>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Option<Command>> {
        Ok(self.frames.pop_front().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn scripted_input_yields_one_entry_per_poll() {
        let mut input = ScriptedInput::new([
            None,
            Some(Command::Steer(Direction::Up)),
            Some(Command::Quit),
        ]);
        assert_eq!(input.poll().unwrap(), None);
        assert_eq!(input.poll().unwrap(), Some(Command::Steer(Direction::Up)));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.poll().unwrap(), Some(Command::Quit));
        assert_eq!(input.poll().unwrap(), None);
    }

    #[test]
    fn no_input_is_always_empty() {
        let mut input = NoInput;
        for _ in 0..3 {
            assert_eq!(input.poll().unwrap(), None);
        }
    }
}
