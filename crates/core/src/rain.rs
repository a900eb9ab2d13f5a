//! Matrix rain simulation - independent falling drops, one column each
//!
//! The rain is a scrolling stream: every tick produces exactly one row of
//! glyphs. A column counts how many rows its current drop has emitted and goes
//! dark again once that count passes a height threshold rolled when the drop
//! started.

use crate::rng::SimpleRng;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainConfig {
    pub width: u16,
    pub base_height: u16,
    pub height_jitter: u16,
    pub activation_percent: u32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            width: RAIN_WIDTH,
            base_height: RAIN_BASE_HEIGHT,
            height_jitter: RAIN_HEIGHT_JITTER,
            activation_percent: RAIN_ACTIVATION_PERCENT,
        }
    }
}

impl RainConfig {
    pub fn clamped(mut self) -> Self {
        self.width = clamp_dimension(self.width);
        self.activation_percent = self.activation_percent.min(100);
        self
    }

    /// Limit the column count to the terminal width.
    pub fn fit_to(mut self, cols: u16) -> Self {
        self.width = self.width.min(cols);
        self.clamped()
    }
}

/// State of one rain column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RainColumn {
    /// 0 when idle, otherwise rows emitted by the current drop plus one.
    pub counter: u16,
    /// Counter value past which the current drop ends.
    pub threshold: u16,
    /// Glyph emitted on the most recent tick.
    pub glyph: Option<char>,
}

impl RainColumn {
    pub fn is_active(&self) -> bool {
        self.counter > 0
    }
}

#[derive(Debug, Clone)]
pub struct MatrixRain {
    config: RainConfig,
    columns: Vec<RainColumn>,
    rows: u64,
    rng: SimpleRng,
}

impl MatrixRain {
    pub fn new(config: RainConfig, seed: u32) -> Self {
        let config = config.clamped();
        Self {
            columns: vec![RainColumn::default(); config.width as usize],
            config,
            rows: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }

    /// Rows emitted so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Advance every column by one row.
    pub fn tick(&mut self) {
        let config = self.config;
        for col in &mut self.columns {
            if !col.is_active() && self.rng.chance_percent(config.activation_percent) {
                col.counter = 1;
                let jitter = self.rng.next_range(config.height_jitter as u32) as u16;
                col.threshold = config.base_height.saturating_add(jitter);
            }

            if col.is_active() {
                col.glyph = Some(random_glyph(&mut self.rng));
                col.counter = col.counter.saturating_add(1);
                if col.counter > col.threshold {
                    col.counter = 0;
                }
            } else {
                col.glyph = None;
            }
        }
        self.rows += 1;
    }

    /// Number of columns that emitted a glyph on the last tick.
    pub fn lit_count(&self) -> usize {
        self.columns.iter().filter(|c| c.glyph.is_some()).count()
    }
}

fn random_glyph(rng: &mut SimpleRng) -> char {
    (RAIN_GLYPH_FIRST + rng.next_range(RAIN_GLYPH_COUNT) as u8) as char
}
