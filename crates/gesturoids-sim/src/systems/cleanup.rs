//! Cleanup system: removes entities that left the playfield.

use hecs::{Entity, World};

use gesturoids_core::components::{AsteroidBody, BulletBody};
use gesturoids_core::types::Point2;

use crate::engine::SimConfig;

/// Remove bullets above the top edge and asteroids past the bottom edge.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, config: &SimConfig, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, _bullet)) in world.query_mut::<(&Point2, &BulletBody)>() {
        if pos.y < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, _asteroid)) in world.query_mut::<(&Point2, &AsteroidBody)>() {
        if pos.y > config.canvas_height {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
