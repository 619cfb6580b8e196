pub mod components;
pub mod config;
pub mod frame;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use frame::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one deterministic Pong tick
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
    input: &InputState,
    rng: &mut GameRng,
) {
    state.tick += 1;

    // Clear events at start of tick
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input);

    // 2. Move paddles based on intents
    move_paddles(world, map, config);

    // 3. Move ball
    move_ball(world);

    // 4. Bounce off walls and paddles
    check_collisions(world, map, config, events);

    // 5. Score / reset when the ball leaves the arena
    check_scoring(world, map, config, state, events, rng);

    // 6. Compound the ball's velocity with the current multiplier
    apply_speed_ramp(world, state);

    // 7. Grow the multiplier for next tick
    ramp_speed_multiplier(state, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: glam::DVec2) -> hecs::Entity {
    world.spawn((Paddle::new(side, pos), PaddleIntent::default()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::DVec2, vel: glam::DVec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
