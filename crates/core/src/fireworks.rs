//! Fireworks simulation - one expanding ring at a time
//!
//! A burst starts at radius 1 around a centre jittered near the middle of the
//! grid and grows by one cell per tick, staying below `max_radius`. Once its
//! last ring (`max_radius - 1`) has been shown, the next tick launches a fresh
//! burst with a new centre and colour.
//!
//! A new simulation has not been ticked yet: its first tick only marks the
//! initial radius-1 ring as shown, so the first rendered frame is that ring.

use crate::rng::SimpleRng;
use crate::types::*;

/// Fireworks tunables. Defaults reproduce the classic 80x25 console demo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireworksConfig {
    pub width: u16,
    pub height: u16,
    pub max_radius: u16,
    pub ring_thickness: f32,
    pub jitter_x: i32,
    pub jitter_y: i32,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            width: FIREWORKS_WIDTH,
            height: FIREWORKS_HEIGHT,
            max_radius: FIREWORKS_MAX_RADIUS,
            ring_thickness: FIREWORKS_RING_THICKNESS,
            jitter_x: FIREWORKS_JITTER_X,
            jitter_y: FIREWORKS_JITTER_Y,
        }
    }
}

impl FireworksConfig {
    /// Guard against degenerate sizes: every dimension is at least 1 and a
    /// burst has at least one ring.
    pub fn clamped(mut self) -> Self {
        self.width = clamp_dimension(self.width);
        self.height = clamp_dimension(self.height);
        self.max_radius = self.max_radius.max(2);
        self.jitter_x = self.jitter_x.max(0);
        self.jitter_y = self.jitter_y.max(0);
        self
    }

    /// Shrink the grid to fit a terminal of the given size.
    pub fn fit_to(mut self, cols: u16, rows: u16) -> Self {
        self.width = self.width.min(cols);
        self.height = self.height.min(rows);
        self.clamped()
    }
}

/// A single burst. The centre may sit off-grid on very small grids.
///
/// `radius` is always in `1..max_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Burst {
    pub center_x: i32,
    pub center_y: i32,
    pub color: ColorIndex,
    pub radius: u16,
}

/// What a tick did to the burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstTick {
    /// The burst was not shown yet; its radius is unchanged.
    Shown,
    /// Radius grew by one.
    Grew,
    /// Radius grew to its last ring, `max_radius - 1`.
    Peaked,
    /// The previous burst showed its last ring; a new one started at radius 1.
    Relaunched,
}

#[derive(Debug, Clone)]
pub struct Fireworks {
    config: FireworksConfig,
    burst: Burst,
    shown: bool,
    launches: u64,
    rng: SimpleRng,
}

impl Fireworks {
    pub fn new(config: FireworksConfig, seed: u32) -> Self {
        let config = config.clamped();
        let mut rng = SimpleRng::new(seed);
        let burst = launch(&config, &mut rng);
        Self {
            config,
            burst,
            shown: false,
            launches: 1,
            rng,
        }
    }

    /// Start from an explicit burst (tests, replays).
    pub fn with_burst(config: FireworksConfig, burst: Burst, seed: u32) -> Self {
        let config = config.clamped();
        Self {
            config,
            burst: Burst {
                radius: burst.radius.clamp(1, config.max_radius - 1),
                ..burst
            },
            shown: false,
            launches: 1,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn config(&self) -> &FireworksConfig {
        &self.config
    }

    pub fn burst(&self) -> Burst {
        self.burst
    }

    pub fn radius(&self) -> u16 {
        self.burst.radius
    }

    /// Number of bursts launched so far, including the first.
    pub fn launches(&self) -> u64 {
        self.launches
    }

    /// Whether the current ring is the last one of its burst.
    pub fn at_peak(&self) -> bool {
        self.burst.radius + 1 >= self.config.max_radius
    }

    pub fn tick(&mut self) -> BurstTick {
        if !self.shown {
            self.shown = true;
            return BurstTick::Shown;
        }
        if self.at_peak() {
            self.burst = launch(&self.config, &mut self.rng);
            self.launches += 1;
            return BurstTick::Relaunched;
        }

        self.burst.radius += 1;
        if self.at_peak() {
            BurstTick::Peaked
        } else {
            BurstTick::Grew
        }
    }

    /// Whether cell `(x, y)` lies on the current ring.
    pub fn is_lit(&self, x: u16, y: u16) -> bool {
        let dx = (x as i32 - self.burst.center_x) as f32;
        let dy = (y as i32 - self.burst.center_y) as f32;
        (dx.hypot(dy) - self.burst.radius as f32).abs() < self.config.ring_thickness
    }
}

fn launch(config: &FireworksConfig, rng: &mut SimpleRng) -> Burst {
    let center_x = (config.width / 2) as i32 + rng.next_offset(config.jitter_x);
    let center_y = (config.height / 2) as i32 + rng.next_offset(config.jitter_y);
    let color = ColorIndex::new(1 + rng.next_range(15) as u8);
    Burst {
        center_x,
        center_y,
        color,
        radius: 1,
    }
}
