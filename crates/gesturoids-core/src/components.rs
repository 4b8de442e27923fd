//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods. Game logic lives in
//! the sim crate's systems. `Point2` doubles as the position component and
//! `Vec2` as the velocity component (pixels per second).

use serde::{Deserialize, Serialize};

/// Bullet identity and payload. The entity also carries `Point2` (position)
/// and `Vec2` (velocity) components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletBody {
    pub id: u64,
    pub power: f64,
}

/// Asteroid identity and remaining power. Power doubles as the collision
/// radius, so it shrinks as the asteroid takes hits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsteroidBody {
    pub id: u64,
    pub power: f64,
}
