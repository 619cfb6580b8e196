use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Copy this tick's held keys onto each paddle's intent
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        *intent = input.intent(paddle.side);
    }
}
