//! Terminal rendering module.
//!
//! A small, demo-oriented rendering layer. Views turn simulation state into a
//! [`FrameBuffer`] of coloured characters, and the [`TerminalRenderer`]
//! flushes that buffer through a [`Console`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep every platform call behind the `Console` capability
//! - Restore the terminal on every exit path ([`TerminalSession`])

pub mod console;
pub mod fb;
pub mod fireworks_view;
pub mod palette;
pub mod rain_view;
pub mod renderer;
pub mod session;
pub mod snake_view;

pub use tui_demos_core as core;
pub use tui_demos_types as types;

pub use console::{AnsiConsole, Console, ConsoleOp, RecordingConsole};
pub use fb::{Cell, FrameBuffer};
pub use fireworks_view::FireworksView;
pub use palette::console_color;
pub use rain_view::RainView;
pub use renderer::{encode_frame_into, Presentation, TerminalRenderer};
pub use session::{terminal_size, TerminalSession};
pub use snake_view::{status_line, SnakeView};
