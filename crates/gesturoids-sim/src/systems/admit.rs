//! Admission system: inserts this cycle's spawn events into the world.
//!
//! Inputs arrive post change-edge filtering, so at most one bullet and one
//! asteroid enter the live collections per cycle.

use hecs::World;

use gesturoids_core::components::{AsteroidBody, BulletBody};
use gesturoids_core::constants::{ASTEROID_SPEED, BULLET_SPEED};
use gesturoids_core::entities::{Asteroid, Bullet};
use gesturoids_core::types::Vec2;

/// Spawn the deduplicated bullet/asteroid events, if present.
pub fn run(world: &mut World, bullet: Option<Bullet>, asteroid: Option<Asteroid>) {
    if let Some(bullet) = bullet {
        world.spawn((
            bullet.position,
            Vec2::new(0.0, -BULLET_SPEED),
            BulletBody {
                id: bullet.id,
                power: bullet.power,
            },
        ));
    }

    if let Some(asteroid) = asteroid {
        world.spawn((
            asteroid.position,
            Vec2::new(0.0, ASTEROID_SPEED),
            AsteroidBody {
                id: asteroid.id,
                power: asteroid.power,
            },
        ));
    }
}
