//! FireworksView: maps the current burst into a framebuffer.
//!
//! This module is pure (no I/O).

use crate::core::Fireworks;
use crate::fb::FrameBuffer;
use crate::types::FIREWORKS_GLYPH;

#[derive(Debug, Default, Clone, Copy)]
pub struct FireworksView;

impl FireworksView {
    /// Render the ring into an existing framebuffer sized to the grid.
    pub fn render_into(&self, fireworks: &Fireworks, fb: &mut FrameBuffer) {
        let config = fireworks.config();
        fb.resize(config.width, config.height);
        fb.clear();

        let color = fireworks.burst().color;
        for y in 0..config.height {
            for x in 0..config.width {
                if fireworks.is_lit(x, y) {
                    fb.put_char(x, y, FIREWORKS_GLYPH, color);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, fireworks: &Fireworks) -> FrameBuffer {
        let config = fireworks.config();
        let mut fb = FrameBuffer::new(config.width, config.height);
        self.render_into(fireworks, &mut fb);
        fb
    }
}
