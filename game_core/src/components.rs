use glam::DVec2;
use rand::Rng;

use crate::{Aabb, Config, GameMap, GameRng};

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player, // left
    Enemy,  // right
}

impl Side {
    /// Slot in per-side arrays, player first
    pub fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Enemy => 1,
        }
    }
}

/// Paddle component - X is fixed at spawn, only Y moves
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: DVec2,
}

impl Paddle {
    pub fn new(side: Side, pos: DVec2) -> Self {
        Self { side, pos }
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_center_size(
            self.pos,
            DVec2::new(config.paddle_width, config.paddle_height),
        )
    }

    /// Step up and/or down by one movement step per held key.
    ///
    /// Up is applied first and down is checked against the result, so holding
    /// both keys cancels out. A step is skipped if it would push the paddle
    /// past the top or bottom of the arena.
    pub fn update(&mut self, up: bool, down: bool, config: &Config, map: &GameMap) {
        let (min_y, max_y) = config.paddle_y_range(map.height);
        if up && self.pos.y - config.movement_speed >= min_y {
            self.pos.y -= config.movement_speed;
        }
        if down && self.pos.y + config.movement_speed <= max_y {
            self.pos.y += config.movement_speed;
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    /// Spawn at the center of the arena with a random velocity
    pub fn spawn(map: &GameMap, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(map.ball_spawn(), DVec2::ZERO);
        ball.reset(map, rng);
        ball
    }

    /// Collision square of side `circle_radius` centered on the ball
    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_center_size(self.pos, DVec2::splat(config.circle_radius))
    }

    /// Snap back to center; each velocity component is drawn independently
    /// from [-1, 1)
    pub fn reset(&mut self, map: &GameMap, rng: &mut GameRng) {
        self.pos = map.ball_spawn();
        let vx = rng.0.gen::<f64>() * 2.0 - 1.0;
        let vy = rng.0.gen::<f64>() * 2.0 - 1.0;
        self.vel = DVec2::new(vx, vy);
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// One shared check for both walls: vy flips at most once per call.
    /// The position is left where it is.
    pub fn bounce_walls(&mut self, map: &GameMap, config: &Config) -> bool {
        let half = config.ball_half_extent();
        if self.pos.y - half < 0.0 || self.pos.y + half > map.height {
            self.vel.y = -self.vel.y;
            true
        } else {
            false
        }
    }

    /// Flip vx if the collision square overlaps `paddle`
    pub fn bounce_off(&mut self, paddle: &Aabb, config: &Config) -> bool {
        if self.aabb(config).overlaps(paddle) {
            self.vel.x = -self.vel.x;
            true
        } else {
            false
        }
    }

    pub fn past_right_edge(&self, map: &GameMap, config: &Config) -> bool {
        self.pos.x + config.ball_half_extent() > map.width
    }

    pub fn past_left_edge(&self, config: &Config) -> bool {
        self.pos.x - config.ball_half_extent() < 0.0
    }

    pub fn apply_speed_multiplier(&mut self, multiplier: f64) {
        self.vel *= multiplier;
    }
}

/// Movement intent for a paddle, refreshed from input every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_index_orders_player_first() {
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Enemy.index(), 1);
    }

    fn setup() -> (Config, GameMap) {
        (Config::new(), GameMap::new())
    }

    #[test]
    fn test_paddle_moves_up_and_down() {
        let (config, map) = setup();
        let mut paddle = Paddle::new(Side::Player, DVec2::new(53.0, 120.0));

        paddle.update(true, false, &config, &map);
        assert_eq!(paddle.pos.y, 116.0);

        paddle.update(false, true, &config, &map);
        paddle.update(false, true, &config, &map);
        assert_eq!(paddle.pos.y, 124.0);
        assert_eq!(paddle.pos.x, 53.0, "X never changes");
    }

    #[test]
    fn test_paddle_both_keys_cancel() {
        let (config, map) = setup();
        let mut paddle = Paddle::new(Side::Player, DVec2::new(53.0, 120.0));
        paddle.update(true, true, &config, &map);
        assert_eq!(paddle.pos.y, 120.0);
    }

    #[test]
    fn test_paddle_stops_at_top() {
        let (config, map) = setup();
        let mut paddle = Paddle::new(Side::Player, DVec2::new(53.0, 28.0));
        paddle.update(true, false, &config, &map);
        assert_eq!(paddle.pos.y, 24.0);
        paddle.update(true, false, &config, &map);
        assert_eq!(paddle.pos.y, 24.0, "Paddle should not leave the top edge");
    }

    #[test]
    fn test_paddle_stops_at_bottom() {
        let (config, map) = setup();
        let mut paddle = Paddle::new(Side::Enemy, DVec2::new(267.0, 212.0));
        paddle.update(false, true, &config, &map);
        assert_eq!(paddle.pos.y, 216.0);
        paddle.update(false, true, &config, &map);
        assert_eq!(paddle.pos.y, 216.0, "Paddle should not leave the bottom edge");
    }

    #[test]
    fn test_paddle_both_keys_at_top_moves_down() {
        let (config, map) = setup();
        let mut paddle = Paddle::new(Side::Player, DVec2::new(53.0, 24.0));
        paddle.update(true, true, &config, &map);
        assert_eq!(paddle.pos.y, 28.0, "Blocked up step does not cancel down step");
    }

    #[test]
    fn test_ball_wall_bounce_flips_once() {
        let (config, map) = setup();
        let mut ball = Ball::new(DVec2::new(160.0, 7.0), DVec2::new(1.0, -2.0));
        assert!(ball.bounce_walls(&map, &config));
        assert_eq!(ball.vel, DVec2::new(1.0, 2.0));
        assert_eq!(ball.pos.y, 7.0, "Wall bounce does not move the ball");
    }

    #[test]
    fn test_ball_no_wall_bounce_inside_arena() {
        let (config, map) = setup();
        let mut ball = Ball::new(DVec2::new(160.0, 8.0), DVec2::new(1.0, -2.0));
        assert!(!ball.bounce_walls(&map, &config));
        assert_eq!(ball.vel.y, -2.0);
    }

    #[test]
    fn test_ball_reset_centers_and_randomizes() {
        let (_, map) = setup();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(DVec2::new(400.0, -3.0), DVec2::new(9.0, 9.0));
        ball.reset(&map, &mut rng);
        assert_eq!(ball.pos, DVec2::new(160.0, 120.0));
        assert!(ball.vel.x >= -1.0 && ball.vel.x < 1.0);
        assert!(ball.vel.y >= -1.0 && ball.vel.y < 1.0);
    }

    #[test]
    fn test_ball_edges() {
        let (config, map) = setup();
        let ball = Ball::new(DVec2::new(312.5, 120.0), DVec2::ZERO);
        assert!(ball.past_right_edge(&map, &config));
        let ball = Ball::new(DVec2::new(312.0, 120.0), DVec2::ZERO);
        assert!(!ball.past_right_edge(&map, &config));
        let ball = Ball::new(DVec2::new(7.5, 120.0), DVec2::ZERO);
        assert!(ball.past_left_edge(&config));
        let ball = Ball::new(DVec2::new(8.0, 120.0), DVec2::ZERO);
        assert!(!ball.past_left_edge(&config));
    }
}
