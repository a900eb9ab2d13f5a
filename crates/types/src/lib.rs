//! Shared types module - plain data and compile-time constants
//!
//! This crate defines the fundamental types used by every demo. All types are
//! pure data structures with no external dependencies, so they can be used by
//! the simulations, the terminal views and the frame loop alike.
//!
//! # Grid Dimensions
//!
//! | Demo | Width | Height |
//! |------|-------|--------|
//! | fireworks | 80 | 25 |
//! | matrix rain | 120 | (scrolling, base drop height 40) |
//! | snake | 80 | 25 (+1 status row) |
//!
//! # Frame Timing
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIREWORKS_FRAME_MS` | 50 | Interval between burst frames |
//! | `FIREWORKS_BURST_PAUSE_MS` | 800 | Extra hold once a burst is fully grown |
//! | `RAIN_FRAME_MS` | 40 | Interval between rain rows |
//! | `SNAKE_FRAME_MS` | 80 | Interval between snake moves |
//!
//! # Colours
//!
//! Colours are 4-bit console indices in the classic attribute order
//! (0 black .. 7 grey, 8 dark grey .. 15 white). See [`ColorIndex`].
//!
//! # Examples
//!
//! ```
//! use tui_demos_types::{Direction, Point};
//!
//! let p = Point::new(79, 0).step_wrapped(Direction::Right, 80, 25);
//! assert_eq!(p, Point::new(0, 0));
//!
//! assert!(Direction::Up.is_reverse_of(Direction::Down));
//! assert!(!Direction::Up.is_reverse_of(Direction::Left));
//! ```

/// Fireworks grid width in cells
pub const FIREWORKS_WIDTH: u16 = 80;

/// Fireworks grid height in cells
pub const FIREWORKS_HEIGHT: u16 = 25;

/// Exclusive upper bound on a burst's radius; the last ring is one less
pub const FIREWORKS_MAX_RADIUS: u16 = 15;

/// Maximum distance from the ring for a cell to be lit
pub const FIREWORKS_RING_THICKNESS: f32 = 1.5;

/// Horizontal burst centre jitter: offset is drawn from `-JITTER_X..JITTER_X`
pub const FIREWORKS_JITTER_X: i32 = 10;

/// Vertical burst centre jitter: offset is drawn from `-JITTER_Y..JITTER_Y`
pub const FIREWORKS_JITTER_Y: i32 = 5;

/// Interval between fireworks frames
pub const FIREWORKS_FRAME_MS: u64 = 50;

/// Extra hold after the last ring of a burst
pub const FIREWORKS_BURST_PAUSE_MS: u64 = 800;

/// Glyph used for lit fireworks cells
pub const FIREWORKS_GLYPH: char = '*';

/// Number of rain columns
pub const RAIN_WIDTH: u16 = 120;

/// Base drop height before a column deactivates
pub const RAIN_BASE_HEIGHT: u16 = 40;

/// Random extra drop height: threshold is `BASE + rand % JITTER`
pub const RAIN_HEIGHT_JITTER: u16 = 10;

/// Per-frame chance (percent) that an inactive column starts a drop
pub const RAIN_ACTIVATION_PERCENT: u32 = 5;

/// Interval between rain rows
pub const RAIN_FRAME_MS: u64 = 40;

/// Rain glyph colour (bright green)
pub const RAIN_COLOR: ColorIndex = ColorIndex(10);

/// First printable rain glyph (`!`)
pub const RAIN_GLYPH_FIRST: u8 = 33;

/// Number of printable rain glyphs (`!` ..= `~`)
pub const RAIN_GLYPH_COUNT: u32 = 94;

/// Snake board width in cells
pub const SNAKE_WIDTH: u16 = 80;

/// Snake board height in cells
pub const SNAKE_HEIGHT: u16 = 25;

/// Interval between snake moves
pub const SNAKE_FRAME_MS: u64 = 80;

/// Points awarded per food eaten
pub const SNAKE_FOOD_POINTS: u32 = 10;

/// First body colour; segments cycle through `BASE + (x + y) % SPAN`
pub const SNAKE_BODY_COLOR_BASE: u8 = 10;

/// Number of body colours
pub const SNAKE_BODY_COLOR_SPAN: u8 = 6;

/// Food colour (yellow)
pub const SNAKE_FOOD_COLOR: ColorIndex = ColorIndex(14);

/// Status line colour (grey)
pub const STATUS_COLOR: ColorIndex = ColorIndex(7);

/// 4-bit console colour index (0..=15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorIndex(pub u8);

impl ColorIndex {
    pub const GREY: ColorIndex = ColorIndex(7);

    /// Build an index, folding out-of-range values into 0..=15.
    pub const fn new(index: u8) -> Self {
        Self(index & 0x0f)
    }

    pub const fn get(self) -> u8 {
        self.0 & 0x0f
    }
}

impl Default for ColorIndex {
    fn default() -> Self {
        Self::GREY
    }
}

/// Grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Move one cell in `dir`, wrapping each axis modulo the board size.
    ///
    /// `width` and `height` must be non-zero.
    pub fn step_wrapped(self, dir: Direction, width: u16, height: u16) -> Self {
        let (dx, dy) = dir.delta();
        let w = width as i32;
        let h = height as i32;
        Self {
            x: (self.x as i32 + dx as i32).rem_euclid(w) as u16,
            y: (self.y as i32 + dy as i32).rem_euclid(h) as u16,
        }
    }
}

/// Unit movement direction. Screen coordinates: `Up` decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` unit vector.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

/// Clamp a configured dimension to a usable, non-zero size.
pub fn clamp_dimension(value: u16) -> u16 {
    value.max(1)
}
