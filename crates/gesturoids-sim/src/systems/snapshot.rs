//! Snapshot system: queries the ECS world and builds a complete GameState.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use gesturoids_core::components::{AsteroidBody, BulletBody};
use gesturoids_core::entities::{Asteroid, Bullet, Spaceship};
use gesturoids_core::state::GameState;
use gesturoids_core::types::Point2;

/// Build a complete GameState from the current world state.
pub fn build(
    world: &World,
    elapsed_ms: u64,
    spaceship: Option<Spaceship>,
    life: f64,
    fps: f64,
) -> GameState {
    GameState {
        elapsed_ms,
        spaceship,
        bullets: build_bullets(world),
        asteroids: build_asteroids(world),
        life,
        fps,
    }
}

/// Collect live bullets, sorted by id for deterministic output.
fn build_bullets(world: &World) -> Vec<Bullet> {
    let mut bullets: Vec<Bullet> = world
        .query::<(&Point2, &BulletBody)>()
        .iter()
        .map(|(_, (pos, body))| Bullet {
            id: body.id,
            position: *pos,
            power: body.power,
        })
        .collect();

    bullets.sort_by_key(|b| b.id);
    bullets
}

/// Collect live asteroids, sorted by id for deterministic output.
fn build_asteroids(world: &World) -> Vec<Asteroid> {
    let mut asteroids: Vec<Asteroid> = world
        .query::<(&Point2, &AsteroidBody)>()
        .iter()
        .map(|(_, (pos, body))| Asteroid {
            id: body.id,
            position: *pos,
            power: body.power,
        })
        .collect();

    asteroids.sort_by_key(|a| a.id);
    asteroids
}
