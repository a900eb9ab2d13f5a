//! RainView: one framebuffer row per rain tick.

use crate::core::MatrixRain;
use crate::fb::FrameBuffer;
use crate::types::RAIN_COLOR;

#[derive(Debug, Default, Clone, Copy)]
pub struct RainView;

impl RainView {
    pub fn render_into(&self, rain: &MatrixRain, fb: &mut FrameBuffer) {
        fb.resize(rain.columns().len() as u16, 1);
        fb.clear();
        for (x, col) in rain.columns().iter().enumerate() {
            if let Some(ch) = col.glyph {
                fb.put_char(x as u16, 0, ch, RAIN_COLOR);
            }
        }
    }

    pub fn render(&self, rain: &MatrixRain) -> FrameBuffer {
        let mut fb = FrameBuffer::new(rain.columns().len() as u16, 1);
        self.render_into(rain, &mut fb);
        fb
    }
}
