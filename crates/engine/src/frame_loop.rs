//! Frame Loop Driver: input, tick, render, sleep.

use std::time::Duration;

use anyhow::Result;

use crate::cancel::CancelToken;
use crate::input::{Command, InputSource};
use crate::pacer::Pacer;
use crate::term::{Console, FrameBuffer, Presentation, TerminalRenderer};

/// Whether the demo wants to keep going after handling a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What a tick asks of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Sleep the normal frame interval.
    Continue,
    /// Sleep the frame interval plus this extra hold.
    Hold(Duration),
    /// Render this frame, then stop.
    Finished,
}

/// A simulation plugged into the frame loop.
pub trait Demo {
    fn name(&self) -> &'static str;

    /// Time between frames.
    fn interval(&self) -> Duration;

    fn presentation(&self) -> Presentation {
        Presentation::Redraw
    }

    /// Handle one input command. Only `Quit` is understood by default.
    fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => Flow::Quit,
            _ => Flow::Continue,
        }
    }

    fn tick(&mut self) -> Step;

    fn render(&self, fb: &mut FrameBuffer);
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The cancel token was set.
    Cancelled,
    /// The user asked to quit.
    Quit,
    /// The demo reached a terminal state.
    Finished,
    /// The configured frame limit was reached.
    FrameLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub exit: LoopExit,
    /// Frames rendered.
    pub frames: u64,
}

pub struct FrameLoop<C: Console, I: InputSource, P: Pacer> {
    renderer: TerminalRenderer<C>,
    input: I,
    pacer: P,
    cancel: CancelToken,
    frame_limit: Option<u64>,
    fb: FrameBuffer,
}

impl<C: Console, I: InputSource, P: Pacer> FrameLoop<C, I, P> {
    pub fn new(renderer: TerminalRenderer<C>, input: I, pacer: P) -> Self {
        Self {
            renderer,
            input,
            pacer,
            cancel: CancelToken::new(),
            frame_limit: None,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Stop after this many rendered frames.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn renderer(&self) -> &TerminalRenderer<C> {
        &self.renderer
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// The most recently rendered frame.
    pub fn last_frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn run<D: Demo + ?Sized>(&mut self, demo: &mut D) -> Result<RunReport> {
        let interval = demo.interval();
        let presentation = demo.presentation();
        log::info!("{}: starting, {:?} per frame", demo.name(), interval);

        let mut frames = 0u64;
        let exit = loop {
            if self.cancel.is_cancelled() {
                break LoopExit::Cancelled;
            }
            if self.frame_limit.is_some_and(|limit| frames >= limit) {
                break LoopExit::FrameLimit;
            }

            // One command per frame keeps two quick turns from becoming a reversal.
            if let Some(command) = self.input.poll()? {
                if demo.apply(command) == Flow::Quit {
                    break LoopExit::Quit;
                }
            }

            let step = demo.tick();
            demo.render(&mut self.fb);
            self.renderer.present(&self.fb, presentation)?;
            frames += 1;

            match step {
                Step::Continue => self.pacer.wait(interval),
                Step::Hold(extra) => self.pacer.wait(interval + extra),
                Step::Finished => break LoopExit::Finished,
            }
        };

        log::info!("{}: stopped ({:?}) after {} frames", demo.name(), exit, frames);
        Ok(RunReport { exit, frames })
    }
}
