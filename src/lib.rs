//! Terminal demos (workspace facade crate).
//!
//! Re-exports the member crates under short names so binaries, tests and
//! benches can use `tui_demos::{core,engine,input,term,types}`.

pub mod logging;

pub use tui_demos_core as core;
pub use tui_demos_engine as engine;
pub use tui_demos_input as input;
pub use tui_demos_term as term;
pub use tui_demos_types as types;
