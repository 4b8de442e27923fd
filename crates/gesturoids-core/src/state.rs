//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_LIFE;
use crate::entities::{Asteroid, Bullet, Spaceship};

/// Complete game state handed to the render sink after each tick.
///
/// Rebuilt wholesale every cycle by the simulation engine; no partial
/// mutation from outside. Entity lists are sorted by id so identical
/// simulations serialize identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Milliseconds elapsed during the tick that produced this snapshot.
    pub elapsed_ms: u64,
    /// Absent until the first hand has been observed.
    pub spaceship: Option<Spaceship>,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    /// Remaining life, clamped to `[0, MAX_LIFE]`.
    pub life: f64,
    /// Frames per second estimate from the last non-degenerate tick.
    pub fps: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            elapsed_ms: 0,
            spaceship: None,
            bullets: Vec::new(),
            asteroids: Vec::new(),
            life: MAX_LIFE,
            fps: 0.0,
        }
    }
}
