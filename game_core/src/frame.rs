use crate::{Canvas, InputState};

/// What the host loop drives once per display refresh.
///
/// The host calls [`FrameSink::update`] zero or more times at a fixed tick
/// rate, then [`FrameSink::draw`] once. Implementations stay passive and
/// synchronous; they never block, spawn, or perform I/O.
pub trait FrameSink {
    /// Advance the simulation by exactly one tick
    fn update(&mut self, input: &InputState);

    /// Describe the current frame; must not mutate simulation state
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Logical canvas size for the given window size
    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
}
