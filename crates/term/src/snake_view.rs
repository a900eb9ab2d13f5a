//! SnakeView: maps the snake board plus a status line into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SnakeGame;
use crate::fb::FrameBuffer;
use crate::types::{
    ColorIndex, Point, SNAKE_BODY_COLOR_BASE, SNAKE_BODY_COLOR_SPAN, SNAKE_FOOD_COLOR, STATUS_COLOR,
};

const BODY_GLYPH: char = '█';
const FOOD_GLYPH: char = '*';

#[derive(Debug, Default, Clone, Copy)]
pub struct SnakeView;

impl SnakeView {
    /// Board rows followed by one status row.
    pub fn render_into(&self, game: &SnakeGame, fb: &mut FrameBuffer) {
        let (w, h) = (game.width(), game.height());
        fb.resize(w, h.saturating_add(1));
        fb.clear();

        let food = game.food();
        if !game.occupies(food) {
            fb.put_char(food.x, food.y, FOOD_GLYPH, SNAKE_FOOD_COLOR);
        }
        for &seg in game.body() {
            fb.put_char(seg.x, seg.y, BODY_GLYPH, body_color(seg));
        }

        let status = status_line(game);
        fb.put_str(0, h, &status, STATUS_COLOR);
    }

    pub fn render(&self, game: &SnakeGame) -> FrameBuffer {
        let mut fb = FrameBuffer::new(game.width(), game.height().saturating_add(1));
        self.render_into(game, &mut fb);
        fb
    }
}

/// Body segments shimmer through six colours by board position.
pub fn body_color(p: Point) -> ColorIndex {
    let shade = ((p.x as u32 + p.y as u32) % SNAKE_BODY_COLOR_SPAN as u32) as u8;
    ColorIndex::new(SNAKE_BODY_COLOR_BASE + shade)
}

pub fn status_line(game: &SnakeGame) -> String {
    if game.is_over() {
        format!("Game Over! Score: {}", game.score())
    } else {
        format!("Score: {}   Use WASD - ESC to quit", game.score())
    }
}
