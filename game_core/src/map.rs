use glam::DVec2;

use crate::components::Side;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub max: DVec2,
}

impl Aabb {
    pub fn from_center_size(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Strict overlap on both axes; boxes that only touch do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Arena geometry: the fixed logical canvas the match is played on
#[derive(Debug, Clone)]
pub struct GameMap {
    pub width: f64,
    pub height: f64,
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self {
            width: Params::SCREEN_WIDTH as f64,
            height: Params::SCREEN_HEIGHT as f64,
        }
    }

    /// Where the ball spawns and resets
    pub fn ball_spawn(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle starting center. X is a sixth of the screen in from each side,
    /// using integer division of the canvas width.
    pub fn paddle_spawn(&self, side: Side) -> DVec2 {
        let inset = (Params::SCREEN_WIDTH / 6) as f64;
        let x = match side {
            Side::Player => inset,
            Side::Enemy => self.width - inset,
        };
        DVec2::new(x, (Params::SCREEN_HEIGHT / 2) as f64)
    }
}
