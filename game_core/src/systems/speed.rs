use crate::{Ball, Config, MatchState};
use hecs::World;

/// Scale ball velocity by the current multiplier. Runs every tick, so the
/// effect compounds.
pub fn apply_speed_ramp(world: &mut World, state: &MatchState) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.apply_speed_multiplier(state.speed_multiplier);
    }
}

/// Grow the multiplier by the configured step
pub fn ramp_speed_multiplier(state: &mut MatchState, config: &Config) {
    state.increase_speed(config.speed_increase);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::DVec2;

    #[test]
    fn test_speed_ramp_scales_velocity() {
        let mut world = World::new();
        let ball = create_ball(&mut world, DVec2::new(160.0, 120.0), DVec2::new(0.5, -0.25));
        let state = MatchState {
            speed_multiplier: 2.0,
            ..MatchState::new()
        };

        apply_speed_ramp(&mut world, &state);

        assert_eq!(world.get::<&Ball>(ball).unwrap().vel, DVec2::new(1.0, -0.5));
    }

    #[test]
    fn test_speed_ramp_compounds() {
        let mut world = World::new();
        let ball = create_ball(&mut world, DVec2::new(160.0, 120.0), DVec2::new(1.0, 1.0));
        let state = MatchState {
            speed_multiplier: 2.0,
            ..MatchState::new()
        };

        apply_speed_ramp(&mut world, &state);
        apply_speed_ramp(&mut world, &state);
        apply_speed_ramp(&mut world, &state);

        assert_eq!(world.get::<&Ball>(ball).unwrap().vel, DVec2::new(8.0, 8.0));
    }

    #[test]
    fn test_ramp_speed_multiplier_adds_increase() {
        let mut state = MatchState::new();
        let config = Config::new();

        ramp_speed_multiplier(&mut state, &config);

        assert_eq!(state.speed_multiplier, 1.0 + config.speed_increase);
    }
}
