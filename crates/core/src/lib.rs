//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the state and update rules of the three demos. It has
//! **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same seed replays the same animation
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: views and frame pacing live in other crates
//!
//! # Module Structure
//!
//! - [`fireworks`]: one expanding ring that relaunches once fully grown
//! - [`rain`]: per-column falling drops emitting one row per tick
//! - [`snake`]: snake on a wrapping board with growth and self-collision
//! - [`rng`]: small LCG shared by all simulations
//!
//! # Example
//!
//! ```
//! use tui_demos_core::{SnakeConfig, SnakeGame, TickOutcome};
//! use tui_demos_types::{Direction, Point};
//!
//! let config = SnakeConfig { width: 10, height: 10 };
//! let mut game = SnakeGame::from_parts(config, [Point::new(5, 5)], Direction::Right, Point::new(6, 5), 7);
//!
//! assert_eq!(game.tick(), TickOutcome::Ate);
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.len(), 2);
//! ```
//!
//! Each simulation advances by exactly one step per call to `tick`; how often
//! that happens is decided by the frame loop.

pub mod fireworks;
pub mod rain;
pub mod rng;
pub mod snake;

pub use tui_demos_types as types;

pub use fireworks::{Burst, BurstTick, Fireworks, FireworksConfig};
pub use rain::{MatrixRain, RainColumn, RainConfig};
pub use rng::{seed_from_clock, SimpleRng};
pub use snake::{GameStatus, SnakeConfig, SnakeGame, TickOutcome};
