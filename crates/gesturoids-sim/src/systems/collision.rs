//! Collision systems: asteroid-ship impacts, then bullet-asteroid hits.
//!
//! Order matters for "simultaneous" kills — an asteroid that reaches the
//! ship this cycle is removed before bullets are given a chance to spend
//! themselves against it.

use std::collections::HashMap;

use hecs::{Entity, World};

use gesturoids_core::components::{AsteroidBody, BulletBody};
use gesturoids_core::constants::SHIP_HALF_WIDTH;
use gesturoids_core::entities::Spaceship;
use gesturoids_core::types::Point2;

/// Remove asteroids colliding with the ship and return their summed power.
///
/// An asteroid collides when the distance between centers is below
/// `asteroid.power + SHIP_HALF_WIDTH`. Collided asteroids are removed this
/// cycle even though they may still have positive power.
pub fn ship_impacts(world: &mut World, ship: &Spaceship, despawn_buffer: &mut Vec<Entity>) -> f64 {
    despawn_buffer.clear();

    let mut damage = 0.0;
    for (entity, (pos, body)) in world.query_mut::<(&Point2, &AsteroidBody)>() {
        if pos.distance_to(&ship.position) < body.power + SHIP_HALF_WIDTH {
            damage += body.power;
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    damage
}

/// Spend bullets against the remaining asteroids.
///
/// A bullet hits every asteroid whose power radius contains it; each
/// asteroid's power drops by the summed power of the bullets in range, and an
/// asteroid at `power <= 0` is removed. A bullet that hit anything is removed
/// — bullets do not pass through.
pub fn bullet_hits(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Snapshot asteroid geometry up front; hecs won't allow a nested query
    // over the same world.
    let asteroids: Vec<(Entity, Point2, f64)> = world
        .query_mut::<(&Point2, &AsteroidBody)>()
        .into_iter()
        .map(|(entity, (pos, body))| (entity, *pos, body.power))
        .collect();

    let mut damage: HashMap<Entity, f64> = HashMap::new();
    for (bullet, (pos, body)) in world.query_mut::<(&Point2, &BulletBody)>() {
        let mut hit = false;
        for (asteroid, asteroid_pos, radius) in &asteroids {
            if pos.distance_to(asteroid_pos) <= *radius {
                *damage.entry(*asteroid).or_insert(0.0) += body.power;
                hit = true;
            }
        }
        if hit {
            despawn_buffer.push(bullet);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Apply accumulated damage; kill asteroids that drop to zero or below.
    for (entity, dealt) in damage {
        let killed = match world.get::<&mut AsteroidBody>(entity) {
            Ok(mut body) => {
                body.power -= dealt;
                body.power <= 0.0
            }
            Err(_) => false,
        };
        if killed {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
