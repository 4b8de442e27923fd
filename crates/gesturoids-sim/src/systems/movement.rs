//! Kinematic integration system.
//!
//! Updates position from velocity once per tick using that tick's elapsed
//! time: position += velocity * (elapsed_ms / 1000). A zero delta is a valid
//! zero displacement.

use hecs::World;

use gesturoids_core::types::{Point2, Vec2};

/// Run kinematic integration for all entities with position + velocity.
pub fn run(world: &mut World, elapsed_ms: u64) {
    let dt = elapsed_ms as f64 / 1000.0;
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Point2, &Vec2)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}
