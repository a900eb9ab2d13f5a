//! Frame loop engine.
//!
//! Every demo is the same loop: poll input, tick the simulation, render the
//! grid, sleep. [`FrameLoop`] owns the renderer, the input source and the
//! pacer; a [`Demo`] supplies the state update and the view.
//!
//! # Example
//!
//! ```
//! use tui_demos_engine::{FireworksDemo, FrameLoop, LoopExit, RecordingPacer};
//! use tui_demos_engine::core::FireworksConfig;
//! use tui_demos_engine::input::NoInput;
//! use tui_demos_engine::term::{RecordingConsole, TerminalRenderer};
//!
//! let mut demo = FireworksDemo::new(FireworksConfig::default(), 1);
//! let renderer = TerminalRenderer::new(RecordingConsole::new());
//! let mut frame_loop = FrameLoop::new(renderer, NoInput, RecordingPacer::new())
//!     .with_frame_limit(3);
//!
//! let report = frame_loop.run(&mut demo).unwrap();
//! assert_eq!(report.exit, LoopExit::FrameLimit);
//! assert_eq!(report.frames, 3);
//! ```

pub mod cancel;
pub mod demos;
pub mod frame_loop;
pub mod pacer;
pub mod terminal;

pub use tui_demos_core as core;
pub use tui_demos_input as input;
pub use tui_demos_term as term;
pub use tui_demos_types as types;

pub use cancel::CancelToken;
pub use demos::{FireworksDemo, RainDemo, SnakeDemo};
pub use frame_loop::{Demo, Flow, FrameLoop, LoopExit, RunReport, Step};
pub use pacer::{Pacer, RecordingPacer, ThreadPacer};
pub use terminal::run_in_terminal;
