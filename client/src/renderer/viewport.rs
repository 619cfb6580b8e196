/// Region of the window the logical canvas is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Largest uniform scale of `logical` that fits in `physical`, centered.
    /// The leftover strips stay at the clear color.
    pub fn fit(logical: (u32, u32), physical: (u32, u32)) -> Self {
        let (lw, lh) = (logical.0.max(1) as f32, logical.1.max(1) as f32);
        let (pw, ph) = (physical.0 as f32, physical.1 as f32);

        let scale = (pw / lw).min(ph / lh);
        let width = (lw * scale).min(pw);
        let height = (lh * scale).min(ph);

        Self {
            x: ((pw - width) / 2.0).max(0.0),
            y: ((ph - height) / 2.0).max(0.0),
            width,
            height,
        }
    }
}
