use crate::components::{PaddleIntent, Side};
use crate::params::Params;

/// Match-wide counters owned by the controller
#[derive(Debug, Clone, Copy)]
pub struct MatchState {
    pub score: u32,
    pub speed_multiplier: f64, // starts at 1.0, only ever grows
    pub tick: u64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            score: 0,
            speed_multiplier: Params::SPEED_MULTIPLIER_START,
            tick: 0,
        }
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    /// Unbounded: there is no cap on the multiplier
    pub fn increase_speed(&mut self, amount: f64) {
        self.speed_multiplier += amount;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub paddle_hits: u8, // both paddles are checked, so this can reach 2
    pub scored: bool,
    pub ball_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.paddle_hits = 0;
        self.scored = false;
        self.ball_reset = false;
    }
}

/// Held keys for both paddles, sampled once per tick by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub player: PaddleIntent,
    pub enemy: PaddleIntent,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }
}
