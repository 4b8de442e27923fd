//! Bullet and asteroid spawners.
//!
//! Both spawners are sampled once per tick and deliberately expose
//! most-recent-value semantics: until a new event is minted, `sample`
//! keeps returning the previous one. The engine runs each spawner's output
//! through its own [`ChangeEdge`](crate::edge::ChangeEdge) before admitting
//! anything into the world.
//!
//! Event ids are the simulation clock (milliseconds) at spawn time. Both
//! throttle intervals are far above 1 ms, so ids are unique per kind among
//! live entities.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gesturoids_core::constants::{
    ASTEROID_MAX_POWER, ASTEROID_MIN_POWER, ASTEROID_SPAWN_INTERVAL_MS, BULLET_POWER,
    GUN_FIRE_INTERVAL_MS, MUZZLE_OFFSET,
};
use gesturoids_core::entities::{Asteroid, Bullet, ShipMode, Spaceship};
use gesturoids_core::types::Point2;

use crate::engine::SimConfig;

/// Rate-limited bullet generator, active only while the ship attacks.
#[derive(Debug, Default)]
pub struct GunSpawner {
    last_fire_ms: Option<u64>,
    latest: Option<Bullet>,
}

impl GunSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the gun at the current simulation clock.
    ///
    /// Mints a new bullet when the ship is in attack mode and at least
    /// [`GUN_FIRE_INTERVAL_MS`] has passed since the previous spawn; in every
    /// other case the previous bullet is re-delivered (latest-value
    /// semantics, deduplicated downstream).
    pub fn sample(&mut self, clock_ms: u64, ship: Option<&Spaceship>) -> Option<Bullet> {
        if let Some(ship) = ship {
            let due = self
                .last_fire_ms
                .map_or(true, |last| clock_ms - last >= GUN_FIRE_INTERVAL_MS);
            if ship.mode == ShipMode::Attack && due {
                self.last_fire_ms = Some(clock_ms);
                self.latest = Some(Bullet {
                    id: clock_ms,
                    position: Point2::new(ship.position.x, ship.position.y - MUZZLE_OFFSET),
                    power: BULLET_POWER,
                });
            }
        }
        self.latest
    }
}

/// Periodic asteroid generator, independent of ship state.
#[derive(Debug, Default)]
pub struct AsteroidSpawner {
    next_spawn_ms: u64,
    latest: Option<Asteroid>,
}

impl AsteroidSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the asteroid generator at the current simulation clock.
    ///
    /// Fires every [`ASTEROID_SPAWN_INTERVAL_MS`] with a uniformly random x
    /// across the playfield and power drawn from the configured range; the
    /// next interval is measured from the actual spawn clock, so a slow tick
    /// never produces more than one event.
    pub fn sample(
        &mut self,
        clock_ms: u64,
        rng: &mut ChaCha8Rng,
        config: &SimConfig,
    ) -> Option<Asteroid> {
        if clock_ms >= self.next_spawn_ms {
            self.next_spawn_ms = clock_ms + ASTEROID_SPAWN_INTERVAL_MS;
            self.latest = Some(Asteroid {
                id: clock_ms,
                position: Point2::new(rng.gen_range(0.0..config.canvas_width), 0.0),
                power: rng.gen_range(ASTEROID_MIN_POWER..=ASTEROID_MAX_POWER),
            });
        }
        self.latest
    }
}
