use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub movement_speed: f64,
    pub circle_radius: f64,
    pub speed_increase: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            movement_speed: Params::MOVEMENT_SPEED,
            circle_radius: Params::CIRCLE_RADIUS,
            speed_increase: Params::SPEED_INCREASE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Half-extent of the ball's collision square on both axes
    pub fn ball_half_extent(&self) -> f64 {
        self.circle_radius / 2.0
    }

    pub fn paddle_half_height(&self) -> f64 {
        self.paddle_height / 2.0
    }

    /// Lowest and highest paddle center Y that keep it fully on screen
    pub fn paddle_y_range(&self, arena_height: f64) -> (f64, f64) {
        let half_height = self.paddle_half_height();
        (half_height, arena_height - half_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_match_params() {
        let config = Config::new();
        assert_eq!(config.paddle_width, 8.0);
        assert_eq!(config.paddle_height, 48.0);
        assert_eq!(config.movement_speed, 4.0);
        assert_eq!(config.circle_radius, 16.0);
        assert_eq!(config.speed_increase, 0.00001);
    }

    #[test]
    fn test_config_ball_half_extent() {
        let config = Config::new();
        assert_eq!(config.ball_half_extent(), 8.0);
    }

    #[test]
    fn test_config_paddle_y_range() {
        let config = Config::new();
        assert_eq!(config.paddle_y_range(240.0), (24.0, 216.0));
    }
}
