/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Logical canvas (scaled by the host to the window)
    pub const SCREEN_WIDTH: u32 = 320;
    pub const SCREEN_HEIGHT: u32 = 240;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 8.0;
    pub const PADDLE_HEIGHT: f64 = 48.0;
    pub const MOVEMENT_SPEED: f64 = 4.0; // units per tick per held key

    // Ball (collision volume is a square of this side, not a circle)
    pub const CIRCLE_RADIUS: f64 = 16.0;

    // Speed ramp
    pub const SPEED_MULTIPLIER_START: f64 = 1.0;
    pub const SPEED_INCREASE: f64 = 0.00001; // added to the multiplier every tick

    // Score overlay
    pub const SCORE_TEXT_X: f64 = (Self::SCREEN_WIDTH / 2) as f64;
    pub const SCORE_TEXT_Y: f64 = 20.0;

    // Host
    pub const WINDOW_SCALE: u32 = 2;
    pub const TICKS_PER_SECOND: u32 = 60;
    pub const MAX_TICKS_PER_FRAME: u32 = 6;
}
