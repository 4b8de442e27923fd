//! Game entities. Plain data — game logic lives in the sim crate's systems.

use serde::{Deserialize, Serialize};

use crate::types::Point2;

/// Spaceship behavior mode, derived from the latest hand observation:
/// a closed fist attacks, an open palm charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipMode {
    Attack,
    Charge,
}

/// The player's ship. Recomputed from the latest hand each cycle; carried
/// forward unchanged across frames with no observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spaceship {
    pub mode: ShipMode,
    pub position: Point2,
}

/// A live bullet. `id` is derived from the simulation clock at spawn time;
/// the gun throttle guarantees uniqueness among live bullets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u64,
    pub position: Point2,
    pub power: f64,
}

/// A live asteroid. `power` doubles as remaining hit points and as the
/// collision/visual radius in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u64,
    pub position: Point2,
    pub power: f64,
}
