//! Movement System
//!
//! Moves fish by their velocity and bounces them off the tank walls.
//! Positions are never clamped: a fish may sit up to one step outside the
//! tank, and the reflection on its next move brings it back.

use hecs::World;

use crate::components::{ContainerBounds, Facing, Position, Size, Velocity};

/// Advance one axis: reverse the velocity if the fish is touching or past
/// either wall, then move.
///
/// The wall test reads the position from before the move. A fish at `x = 0`
/// with `vx = -0.5` therefore ends the tick at `x = 0.5`, but a fish that
/// crosses a wall during a move keeps its velocity and facing until the next
/// tick, one tick later than testing after the move would flip them.
/// `test_left_wall_reflection` and `test_overshoot_is_corrected_next_tick`
/// pin both halves; changing the order breaks the first.
fn step_axis(position: f64, velocity: f64, limit: f64) -> (f64, f64) {
    let velocity = if position <= 0.0 || position >= limit {
        -velocity
    } else {
        velocity
    };
    (position + velocity, velocity)
}

/// Move every fish one tick and refresh its facing.
pub fn movement_system(world: &mut World, bounds: &ContainerBounds) {
    for (_, (pos, vel, size, facing)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Size, &mut Facing)>()
    {
        // Axes are independent; a fish in a corner flips both.
        let (x, vx) = step_axis(pos.x, vel.vx, bounds.width() - size.width);
        let (y, vy) = step_axis(pos.y, vel.vy, bounds.height() - size.height);

        pos.x = x;
        pos.y = y;
        vel.vx = vx;
        vel.vy = vy;
        *facing = Facing::from_velocity(vx);
    }
}
