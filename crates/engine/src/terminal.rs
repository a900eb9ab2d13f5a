//! Running a demo against the real terminal.

use anyhow::Result;

use crate::cancel::CancelToken;
use crate::frame_loop::{Demo, FrameLoop, RunReport};
use crate::input::{KeyMap, TerminalInput};
use crate::pacer::ThreadPacer;
use crate::term::{AnsiConsole, TerminalRenderer, TerminalSession};

/// Take over the terminal, run `demo` until it stops, and restore the terminal.
///
/// The terminal is restored even when the loop fails; the loop's error wins
/// over a restore error.
pub fn run_in_terminal<D: Demo + ?Sized>(
    demo: &mut D,
    keys: KeyMap,
    cancel: CancelToken,
) -> Result<RunReport> {
    let session = TerminalSession::enter()?;

    let renderer = TerminalRenderer::new(AnsiConsole::stdout());
    let mut frame_loop = FrameLoop::new(renderer, TerminalInput::new(keys), ThreadPacer)
        .with_cancel_token(cancel);
    let result = frame_loop.run(demo);

    let restored = session.exit();
    let report = result?;
    restored?;
    Ok(report)
}
