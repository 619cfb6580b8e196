use crate::{Ball, Config, Events, GameMap, GameRng, MatchState};
use hecs::World;

/// Score when the ball leaves past the enemy's side; reset it when it leaves
/// past either side
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.past_right_edge(map, config) {
            state.increment_score();
            events.scored = true;
            log::debug!("Point scored at tick {}, score is now {}", state.tick, state.score);

            ball.reset(map, rng);
            events.ball_reset = true;
        }

        // Checked against the post-reset position, so never fires right after a point
        if ball.past_left_edge(config) {
            log::debug!("Ball lost on the player's side at tick {}", state.tick);
            ball.reset(map, rng);
            events.ball_reset = true;
        }
    }
}
