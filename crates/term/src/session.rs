//! Scoped ownership of the real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

/// Raw mode + alternate screen for the lifetime of the value.
///
/// Call [`TerminalSession::exit`] to restore the terminal and see errors;
/// dropping the session restores it as well, logging any failure.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, a failure must still undo raw mode.
        let session = Self { active: true };
        let mut stdout = io::stdout();
        stdout.queue(terminal::EnterAlternateScreen)?;
        stdout.queue(cursor::Hide)?;
        stdout.queue(terminal::DisableLineWrap)?;
        stdout.flush()?;
        log::debug!("terminal session entered");
        Ok(session)
    }

    pub fn exit(mut self) -> Result<()> {
        self.active = false;
        restore()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(err) = restore() {
                log::warn!("failed to restore terminal: {err:#}");
            }
        }
    }
}

fn restore() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(ResetColor)?;
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(terminal::EnableLineWrap)?;
    stdout.queue(cursor::Show)?;
    stdout.queue(terminal::LeaveAlternateScreen)?;
    stdout.flush()?;
    terminal::disable_raw_mode()?;
    log::debug!("terminal session restored");
    Ok(())
}

/// Current terminal size, or 80x24 when it cannot be queried.
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or((80, 24))
}
