//! Read-only draw pass over the match
//!
//! The core never touches the GPU. It describes a frame as filled rectangles
//! and one line of text on a [`Canvas`] supplied by the host.

use hecs::World;

use crate::{Ball, Config, MatchState, Paddle, Params};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Normalized components for GPU upload
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

pub const PADDLE_COLOR: Color = Color::rgb(0x80, 0xa0, 0xc0);
pub const BALL_COLOR: Color = Color::rgb(0xff, 0x00, 0x00);

/// Drawing primitives provided by the host, in logical canvas units with the
/// origin at the top-left and Y pointing down
pub trait Canvas {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    /// White text in the host's fixed debug font; (x, y) is the top-left
    fn debug_text(&mut self, text: &str, x: f64, y: f64);
}

pub fn draw_paddle(canvas: &mut dyn Canvas, paddle: &Paddle, config: &Config) {
    let aabb = paddle.aabb(config);
    let size = aabb.size();
    canvas.fill_rect(aabb.min.x, aabb.min.y, size.x, size.y, PADDLE_COLOR);
}

/// The ball is drawn as the same square it collides with
pub fn draw_ball(canvas: &mut dyn Canvas, ball: &Ball, config: &Config) {
    let aabb = ball.aabb(config);
    let size = aabb.size();
    canvas.fill_rect(aabb.min.x, aabb.min.y, size.x, size.y, BALL_COLOR);
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn draw_score(canvas: &mut dyn Canvas, score: u32) {
    canvas.debug_text(&score_text(score), Params::SCORE_TEXT_X, Params::SCORE_TEXT_Y);
}

/// Paddles (player first), then the ball, then the score overlay
pub fn draw_match(world: &World, state: &MatchState, config: &Config, canvas: &mut dyn Canvas) {
    let mut paddles: [Option<Paddle>; 2] = [None; 2];
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        paddles[paddle.side.index()] = Some(*paddle);
    }
    for paddle in paddles.iter().flatten() {
        draw_paddle(canvas, paddle, config);
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        draw_ball(canvas, ball, config);
    }

    draw_score(canvas, state.score);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, GameMap, Side};
    use glam::DVec2;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Rect {
            x: f64,
            y: f64,
            width: f64,
            height: f64,
            color: Color,
        },
        Text {
            text: String,
            x: f64,
            y: f64,
        },
    }

    /// Canvas that records every call for inspection
    #[derive(Default)]
    pub(crate) struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
            self.calls.push(DrawCall::Rect {
                x,
                y,
                width,
                height,
                color,
            });
        }

        fn debug_text(&mut self, text: &str, x: f64, y: f64) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                x,
                y,
            });
        }
    }

    #[test]
    fn test_color_to_f32_array() {
        assert_eq!(Color::WHITE.to_f32_array(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(BALL_COLOR.to_f32_array(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_score_text_format() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(42), "Score: 42");
    }

    #[test]
    fn test_draw_match_emits_paddles_ball_and_score() {
        let mut world = World::new();
        let map = GameMap::new();
        let config = Config::new();
        // Spawn enemy first to check draw order does not depend on spawn order
        create_paddle(&mut world, Side::Enemy, map.paddle_spawn(Side::Enemy));
        create_paddle(&mut world, Side::Player, map.paddle_spawn(Side::Player));
        create_ball(&mut world, DVec2::new(100.0, 50.0), DVec2::ZERO);
        let state = MatchState {
            score: 3,
            ..MatchState::new()
        };

        let mut canvas = RecordingCanvas::default();
        draw_match(&world, &state, &config, &mut canvas);

        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::Rect {
                    x: 49.0,
                    y: 96.0,
                    width: 8.0,
                    height: 48.0,
                    color: PADDLE_COLOR,
                },
                DrawCall::Rect {
                    x: 263.0,
                    y: 96.0,
                    width: 8.0,
                    height: 48.0,
                    color: PADDLE_COLOR,
                },
                DrawCall::Rect {
                    x: 92.0,
                    y: 42.0,
                    width: 16.0,
                    height: 16.0,
                    color: BALL_COLOR,
                },
                DrawCall::Text {
                    text: "Score: 3".to_string(),
                    x: 160.0,
                    y: 20.0,
                },
            ]
        );
    }
}
