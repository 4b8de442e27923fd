//! Simulation constants and tuning parameters.

// --- Playfield ---

/// Canvas width in pixels.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Camera frame width in pixels (hand centers arrive in this space).
pub const SOURCE_FRAME_WIDTH: f64 = 640.0;

/// Camera frame height in pixels.
pub const SOURCE_FRAME_HEIGHT: f64 = 480.0;

// --- Hand classification ---

/// Aspect-ratio threshold for open vs. closed hand: a bounding box with
/// height/width above this ratio reads as an open hand. Tunable heuristic.
pub const OPEN_CLOSE_RATIO: f64 = 1.1;

// --- Spaceship ---

/// Half the ship silhouette width (pixels). Also the ship's collision radius.
pub const SHIP_HALF_WIDTH: f64 = 24.0;

/// Vertical offset from the ship position to the muzzle (pixels).
pub const MUZZLE_OFFSET: f64 = 30.0;

// --- Gun ---

/// Minimum interval between bullet spawns while in attack mode (ms).
pub const GUN_FIRE_INTERVAL_MS: u64 = 50;

/// Power carried by each bullet.
pub const BULLET_POWER: f64 = 1.0;

/// Bullet travel speed, upward (pixels per second).
pub const BULLET_SPEED: f64 = 600.0;

// --- Asteroids ---

/// Interval between asteroid spawns (ms).
pub const ASTEROID_SPAWN_INTERVAL_MS: u64 = 100;

/// Minimum asteroid power. Power doubles as hit points and radius (pixels).
pub const ASTEROID_MIN_POWER: f64 = 5.0;

/// Maximum asteroid power.
pub const ASTEROID_MAX_POWER: f64 = 35.0;

/// Asteroid fall speed, downward (pixels per second).
pub const ASTEROID_SPEED: f64 = 120.0;

// --- Life ---

/// Starting (and maximum) life.
pub const MAX_LIFE: f64 = 1000.0;
