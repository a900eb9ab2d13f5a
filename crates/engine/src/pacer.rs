//! Frame pacing: the only place the loop suspends.

use std::time::Duration;

pub trait Pacer {
    fn wait(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records requested waits without sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    waits: Vec<Duration>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }

    pub fn total(&self) -> Duration {
        self.waits.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn wait(&mut self, duration: Duration) {
        self.waits.push(duration);
    }
}
