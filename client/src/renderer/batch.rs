use game_core::{Canvas, Color};

use super::font;
use super::resources::InstanceData;

/// Background behind the canvas and in the letterbox bars
pub fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = Color::BLACK.to_f32_array();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

/// Logical canvas units per font pixel
pub const TEXT_PIXEL_SIZE: f32 = 2.0;

/// Collects one quad instance per rectangle drawn in a frame
#[derive(Default)]
pub struct QuadBatch {
    instances: Vec<InstanceData>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    fn push(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.instances.push(InstanceData {
            transform: [x, y, width, height],
            tint: color.to_f32_array(),
        });
    }
}

impl Canvas for QuadBatch {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.push(x as f32, y as f32, width as f32, height as f32, color);
    }

    fn debug_text(&mut self, text: &str, x: f64, y: f64) {
        for (col, row) in font::text_pixels(text) {
            self.push(
                x as f32 + col as f32 * TEXT_PIXEL_SIZE,
                y as f32 + row as f32 * TEXT_PIXEL_SIZE,
                TEXT_PIXEL_SIZE,
                TEXT_PIXEL_SIZE,
                Color::WHITE,
            );
        }
    }
}
