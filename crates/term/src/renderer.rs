//! TerminalRenderer: flushes a framebuffer to a console.
//!
//! Two presentations are supported. `Redraw` clears the screen and repaints
//! the whole grid from the top-left corner; `Append` writes the grid below
//! whatever is already on screen and lets the terminal scroll.

use anyhow::Result;

use crate::console::{AnsiConsole, Console};
use crate::fb::FrameBuffer;
use crate::types::ColorIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Redraw,
    Append,
}

pub struct TerminalRenderer<C: Console> {
    console: C,
    frames: u64,
}

impl<C: Console> TerminalRenderer<C> {
    pub fn new(console: C) -> Self {
        Self { console, frames: 0 }
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn present(&mut self, fb: &FrameBuffer, mode: Presentation) -> Result<()> {
        write_frame(&mut self.console, fb, mode)?;
        self.console.flush()?;
        self.frames += 1;
        Ok(())
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.present(fb, Presentation::Redraw)
    }

    pub fn append(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.present(fb, Presentation::Append)
    }
}

/// Encode a frame into `out` without touching the terminal.
pub fn encode_frame_into(fb: &FrameBuffer, mode: Presentation, out: &mut Vec<u8>) -> Result<()> {
    let mut console = AnsiConsole::new(out);
    write_frame(&mut console, fb, mode)
}

fn write_frame<C: Console>(console: &mut C, fb: &FrameBuffer, mode: Presentation) -> Result<()> {
    if mode == Presentation::Redraw {
        console.clear()?;
        console.move_cursor_home()?;
    }

    // Blanks print the same in any colour, so only glyphs switch colour.
    let mut current: Option<ColorIndex> = None;
    for y in 0..fb.height() {
        for cell in fb.row(y) {
            if !cell.is_blank() && current != Some(cell.color) {
                console.set_color(cell.color)?;
                current = Some(cell.color);
            }
            console.print(cell.ch)?;
        }
        if mode == Presentation::Append || y + 1 < fb.height() {
            console.end_line()?;
        }
    }

    console.reset_color()?;
    Ok(())
}
