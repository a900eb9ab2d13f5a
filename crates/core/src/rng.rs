//! RNG module - small deterministic generator shared by all demos
//!
//! Every simulation owns its own [`SimpleRng`] so that the same seed replays
//! the same animation (useful for tests and benchmarks). Binaries seed it once
//! at startup with [`seed_from_clock`] so repeated runs differ.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max). Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Multiply-shift keeps the high bits; the low bits of an LCG cycle quickly.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Signed offset in `[-span, span)`.
    pub fn next_offset(&mut self, span: i32) -> i32 {
        if span <= 0 {
            return 0;
        }
        self.next_range((span * 2) as u32) as i32 - span
    }

    /// True with probability `percent / 100`.
    pub fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seed derived from the wall clock, taken once per process.
pub fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| {
            let nanos = d.as_nanos() as u64;
            (nanos ^ (nanos >> 32)) as u32
        })
        .unwrap_or(1)
}
