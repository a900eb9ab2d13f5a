//! Console capability: the few terminal operations the demos need.
//!
//! Views and the renderer only talk to [`Console`]; the platform specifics
//! live in crossterm behind [`AnsiConsole`]. [`RecordingConsole`] keeps a log
//! of operations instead of writing anywhere.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::palette::console_color;
use crate::types::ColorIndex;

pub trait Console {
    fn set_color(&mut self, color: ColorIndex) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn move_cursor_home(&mut self) -> Result<()>;
    fn print(&mut self, ch: char) -> Result<()>;
    /// Finish the current line and move to the start of the next one.
    fn end_line(&mut self) -> Result<()>;
    fn reset_color(&mut self) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// Console that encodes every operation as crossterm commands into `out`.
pub struct AnsiConsole<W: Write> {
    out: W,
}

impl AnsiConsole<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Console for AnsiConsole<W> {
    fn set_color(&mut self, color: ColorIndex) -> Result<()> {
        self.out.queue(SetForegroundColor(console_color(color)))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn move_cursor_home(&mut self) -> Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn print(&mut self, ch: char) -> Result<()> {
        self.out.queue(Print(ch))?;
        Ok(())
    }

    fn end_line(&mut self) -> Result<()> {
        // Raw mode does not translate '\n' into a carriage return.
        self.out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn reset_color(&mut self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// One recorded console operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOp {
    SetColor(ColorIndex),
    Clear,
    Home,
    Print(char),
    EndLine,
    ResetColor,
    Flush,
}

/// In-memory console that records operations.
#[derive(Debug, Default, Clone)]
pub struct RecordingConsole {
    ops: Vec<ConsoleOp>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[ConsoleOp] {
        &self.ops
    }

    /// Printed text, with `EndLine` as `'\n'` and everything else dropped.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                ConsoleOp::Print(ch) => out.push(*ch),
                ConsoleOp::EndLine => out.push('\n'),
                _ => {}
            }
        }
        out
    }

    pub fn count(&self, op: ConsoleOp) -> usize {
        self.ops.iter().filter(|o| **o == op).count()
    }
}

impl Console for RecordingConsole {
    fn set_color(&mut self, color: ColorIndex) -> Result<()> {
        self.ops.push(ConsoleOp::SetColor(color));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.ops.push(ConsoleOp::Clear);
        Ok(())
    }

    fn move_cursor_home(&mut self) -> Result<()> {
        self.ops.push(ConsoleOp::Home);
        Ok(())
    }

    fn print(&mut self, ch: char) -> Result<()> {
        self.ops.push(ConsoleOp::Print(ch));
        Ok(())
    }

    fn end_line(&mut self) -> Result<()> {
        self.ops.push(ConsoleOp::EndLine);
        Ok(())
    }

    fn reset_color(&mut self) -> Result<()> {
        self.ops.push(ConsoleOp::ResetColor);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.ops.push(ConsoleOp::Flush);
        Ok(())
    }
}
