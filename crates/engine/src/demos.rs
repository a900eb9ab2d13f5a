//! The three demos bound to the frame loop.

use std::time::Duration;

use crate::core::{
    BurstTick, Fireworks, FireworksConfig, MatrixRain, RainConfig, SnakeConfig, SnakeGame,
    TickOutcome,
};
use crate::frame_loop::{Demo, Flow, Step};
use crate::input::Command;
use crate::term::{FireworksView, FrameBuffer, Presentation, RainView, SnakeView};
use crate::types::{FIREWORKS_BURST_PAUSE_MS, FIREWORKS_FRAME_MS, RAIN_FRAME_MS, SNAKE_FRAME_MS};

pub struct FireworksDemo {
    sim: Fireworks,
    view: FireworksView,
    interval: Duration,
    burst_pause: Duration,
}

impl FireworksDemo {
    pub fn new(config: FireworksConfig, seed: u32) -> Self {
        Self::from_sim(Fireworks::new(config, seed))
    }

    pub fn from_sim(sim: Fireworks) -> Self {
        Self {
            sim,
            view: FireworksView,
            interval: Duration::from_millis(FIREWORKS_FRAME_MS),
            burst_pause: Duration::from_millis(FIREWORKS_BURST_PAUSE_MS),
        }
    }

    pub fn sim(&self) -> &Fireworks {
        &self.sim
    }
}

impl Demo for FireworksDemo {
    fn name(&self) -> &'static str {
        "fireworks"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn tick(&mut self) -> Step {
        if self.sim.tick() == BurstTick::Relaunched {
            let burst = self.sim.burst();
            log::debug!(
                "burst #{} at ({}, {}) colour {}",
                self.sim.launches(),
                burst.center_x,
                burst.center_y,
                burst.color.get()
            );
        }

        // The last ring of a burst lingers before the next launch.
        if self.sim.at_peak() {
            Step::Hold(self.burst_pause)
        } else {
            Step::Continue
        }
    }

    fn render(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.sim, fb);
    }
}

pub struct RainDemo {
    sim: MatrixRain,
    view: RainView,
    interval: Duration,
}

impl RainDemo {
    pub fn new(config: RainConfig, seed: u32) -> Self {
        Self::from_sim(MatrixRain::new(config, seed))
    }

    pub fn from_sim(sim: MatrixRain) -> Self {
        Self {
            sim,
            view: RainView::default(),
            interval: Duration::from_millis(RAIN_FRAME_MS),
        }
    }

    pub fn sim(&self) -> &MatrixRain {
        &self.sim
    }
}

impl Demo for RainDemo {
    fn name(&self) -> &'static str {
        "matrix-rain"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn presentation(&self) -> Presentation {
        Presentation::Append
    }

    fn tick(&mut self) -> Step {
        self.sim.tick();
        Step::Continue
    }

    fn render(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.sim, fb);
    }
}

pub struct SnakeDemo {
    game: SnakeGame,
    view: SnakeView,
    interval: Duration,
}

impl SnakeDemo {
    pub fn new(config: SnakeConfig, seed: u32) -> Self {
        Self::from_game(SnakeGame::new(config, seed))
    }

    pub fn from_game(game: SnakeGame) -> Self {
        Self {
            game,
            view: SnakeView,
            interval: Duration::from_millis(SNAKE_FRAME_MS),
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }
}

impl Demo for SnakeDemo {
    fn name(&self) -> &'static str {
        "snake"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Steer(dir) => {
                if !self.game.steer(dir) {
                    log::trace!("ignored turn to {:?}", dir);
                }
                Flow::Continue
            }
            Command::Quit => Flow::Quit,
        }
    }

    fn tick(&mut self) -> Step {
        match self.game.tick() {
            TickOutcome::Moved => Step::Continue,
            TickOutcome::Ate => {
                log::debug!("ate food, score {}, length {}", self.game.score(), self.game.len());
                Step::Continue
            }
            TickOutcome::Collided => {
                log::info!("game over with score {}", self.game.score());
                Step::Finished
            }
            TickOutcome::Over => Step::Finished,
        }
    }

    fn render(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.game, fb);
    }
}
