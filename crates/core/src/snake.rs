//! Snake game state - movement, growth and self-collision on a toroidal board
//!
//! The board has no walls: moving past an edge re-enters on the opposite side.
//! The only way to lose is to run into the snake's own body.

use std::collections::VecDeque;

use crate::rng::SimpleRng;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: SNAKE_WIDTH,
            height: SNAKE_HEIGHT,
        }
    }
}

impl SnakeConfig {
    pub fn clamped(self) -> Self {
        Self {
            width: clamp_dimension(self.width),
            height: clamp_dimension(self.height),
        }
    }

    /// Shrink the board to fit a terminal, keeping one row for the status line.
    pub fn fit_to(self, cols: u16, rows: u16) -> Self {
        Self {
            width: self.width.min(cols),
            height: self.height.min(rows.saturating_sub(1)),
        }
        .clamped()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Head advanced and the tail followed.
    Moved,
    /// Head reached the food: the snake grew and scored.
    Ate,
    /// Next head hit the body; the game is now over.
    Collided,
    /// The game was already over; nothing changed.
    Over,
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    width: u16,
    height: u16,
    body: VecDeque<Point>,
    direction: Direction,
    food: Point,
    score: u32,
    status: GameStatus,
    rng: SimpleRng,
}

impl SnakeGame {
    /// New game: one segment in the middle of the board heading right.
    pub fn new(config: SnakeConfig, seed: u32) -> Self {
        let config = config.clamped();
        let mut rng = SimpleRng::new(seed);
        let food = random_cell(&mut rng, config.width, config.height);
        let mut body = VecDeque::new();
        body.push_back(Point::new(config.width / 2, config.height / 2));
        Self {
            width: config.width,
            height: config.height,
            body,
            direction: Direction::Right,
            food,
            score: 0,
            status: GameStatus::Running,
            rng,
        }
    }

    /// Build a game from explicit parts. `body` is head-first.
    ///
    /// Segments and food outside the board are wrapped onto it; an empty body
    /// starts as a single segment in the middle.
    pub fn from_parts(
        config: SnakeConfig,
        body: impl IntoIterator<Item = Point>,
        direction: Direction,
        food: Point,
        seed: u32,
    ) -> Self {
        let config = config.clamped();
        let (w, h) = (config.width, config.height);
        let wrap = |p: Point| Point::new(p.x % w, p.y % h);
        let mut body: VecDeque<Point> = body.into_iter().map(wrap).collect();
        if body.is_empty() {
            body.push_back(Point::new(w / 2, h / 2));
        }
        Self {
            width: w,
            height: h,
            body,
            direction,
            food: wrap(food),
            score: 0,
            status: GameStatus::Running,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn head(&self) -> Point {
        // Body is never empty: constructors seed it and ticks only pop after a push.
        self.body.front().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Whether `p` is occupied by a segment. Linear in the snake length.
    pub fn occupies(&self, p: Point) -> bool {
        self.body.iter().any(|&seg| seg == p)
    }

    /// Change heading. Refuses an exact reversal and any change after game over.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.is_over() || dir.is_reverse_of(self.direction) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Position the head would move to on the next tick.
    pub fn next_head(&self) -> Point {
        self.head().step_wrapped(self.direction, self.width, self.height)
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Over;
        }

        let next = self.next_head();
        if self.occupies(next) {
            self.status = GameStatus::GameOver;
            return TickOutcome::Collided;
        }

        self.body.push_front(next);

        if next == self.food {
            self.score += SNAKE_FOOD_POINTS;
            // The new food may land on the body; it becomes reachable once the tail moves on.
            self.food = random_cell(&mut self.rng, self.width, self.height);
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }
}

fn random_cell(rng: &mut SimpleRng, width: u16, height: u16) -> Point {
    Point::new(
        rng.next_range(width as u32) as u16,
        rng.next_range(height as u32) as u16,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_centered_heading_right() {
        let game = SnakeGame::new(SnakeConfig::default(), 42);
        assert_eq!(game.head(), Point::new(40, 12));
        assert_eq!(game.len(), 1);
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.score(), 0);
        assert_eq!(game.status(), GameStatus::Running);
        assert!(game.food().x < 80 && game.food().y < 25);
    }

    #[test]
    fn from_parts_wraps_out_of_range_cells() {
        let config = SnakeConfig { width: 10, height: 10 };
        let game = SnakeGame::from_parts(
            config,
            [Point::new(12, 3)],
            Direction::Up,
            Point::new(3, 15),
            1,
        );
        assert_eq!(game.head(), Point::new(2, 3));
        assert_eq!(game.food(), Point::new(3, 5));
    }

    #[test]
    fn from_parts_never_builds_an_empty_body() {
        let config = SnakeConfig { width: 10, height: 10 };
        let game = SnakeGame::from_parts(config, Vec::new(), Direction::Up, Point::new(0, 0), 1);
        assert_eq!(game.len(), 1);
        assert_eq!(game.head(), Point::new(5, 5));
    }

    #[test]
    fn steer_accepts_turns_and_same_direction() {
        let mut game = SnakeGame::new(SnakeConfig::default(), 1);
        assert!(game.steer(Direction::Right));
        assert!(game.steer(Direction::Up));
        assert_eq!(game.direction(), Direction::Up);
        assert!(game.steer(Direction::Left));
        assert_eq!(game.direction(), Direction::Left);
    }

    #[test]
    fn fit_to_reserves_status_row() {
        let c = SnakeConfig::default().fit_to(40, 20);
        assert_eq!((c.width, c.height), (40, 19));
        let c = SnakeConfig::default().fit_to(0, 1);
        assert_eq!((c.width, c.height), (1, 1));
    }
}
