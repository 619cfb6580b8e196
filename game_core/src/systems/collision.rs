use crate::{Aabb, Ball, Config, Events, GameMap, Paddle};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Snapshot paddle boxes first so the ball query can borrow mutably
    let mut paddles: [Option<Aabb>; 2] = [None; 2];
    for (_e, paddle) in world.query::<&Paddle>().iter() {
        paddles[paddle.side.index()] = Some(paddle.aabb(config));
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.bounce_walls(map, config) {
            events.ball_hit_wall = true;
        }

        // Every paddle is checked; overlapping two in one tick flips vx twice
        for paddle_box in paddles.iter().flatten() {
            if ball.bounce_off(paddle_box, config) {
                events.paddle_hits += 1;
            }
        }
    }
}
