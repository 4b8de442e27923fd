//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and all cross-tick state. Each
//! call to [`SimulationEngine::tick`] folds one frame-clock delta and the
//! latest hand observation into the next `GameState`. Completely headless
//! (no camera, no canvas), enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gesturoids_core::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MAX_LIFE, SOURCE_FRAME_HEIGHT, SOURCE_FRAME_WIDTH,
};
use gesturoids_core::entities::Spaceship;
use gesturoids_core::hand::Hand;
use gesturoids_core::state::GameState;

use crate::edge::ChangeEdge;
use crate::spawn::{AsteroidSpawner, GunSpawner};
use crate::systems;
use crate::tracker;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same tick inputs = same simulation.
    pub seed: u64,
    /// Render surface width in pixels.
    pub canvas_width: f64,
    /// Render surface height in pixels.
    pub canvas_height: f64,
    /// Camera frame width in pixels (hand coordinates arrive in this space).
    pub source_width: f64,
    /// Camera frame height in pixels.
    pub source_height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            source_width: SOURCE_FRAME_WIDTH,
            source_height: SOURCE_FRAME_HEIGHT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    rng: ChaCha8Rng,
    /// Accumulated simulation clock in milliseconds.
    clock_ms: u64,
    /// Last derived ship pose, carried forward across observation gaps.
    spaceship: Option<Spaceship>,
    life: f64,
    fps: f64,
    gun: GunSpawner,
    asteroid_spawner: AsteroidSpawner,
    bullet_edge: ChangeEdge<u64>,
    asteroid_edge: ChangeEdge<u64>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            clock_ms: 0,
            spaceship: None,
            life: MAX_LIFE,
            fps: 0.0,
            gun: GunSpawner::new(),
            asteroid_spawner: AsteroidSpawner::new(),
            bullet_edge: ChangeEdge::new(),
            asteroid_edge: ChangeEdge::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `elapsed_ms` is the frame-clock delta (0 on the first frame);
    /// `hands` is the perception adapter's latest completed observation,
    /// sampled once — it may be stale or empty.
    pub fn tick(&mut self, elapsed_ms: u64, hands: &[Hand]) -> GameState {
        self.clock_ms += elapsed_ms;

        // 1. Resolve the current ship: new pose if a hand is in view,
        //    else carry the previous one forward.
        if let Some(ship) = tracker::track(hands, &self.config) {
            self.spaceship = Some(ship);
        }

        // 2. Sample both spawners (latest-value signals) and edge-filter
        //    each channel independently so a repeated sample is never
        //    admitted twice.
        let bullet_latest = self.gun.sample(self.clock_ms, self.spaceship.as_ref());
        let asteroid_latest =
            self.asteroid_spawner
                .sample(self.clock_ms, &mut self.rng, &self.config);
        let bullet_spawn = self.bullet_edge.filter(bullet_latest, |b| b.id);
        let asteroid_spawn = self.asteroid_edge.filter(asteroid_latest, |a| a.id);

        // 3. Advance every live entity by this tick's delta, exactly once.
        systems::movement::run(&mut self.world, elapsed_ms);

        // 4. Asteroid-ship impacts: collided asteroids are removed even with
        //    power remaining; their summed power drains life, clamped at 0.
        if let Some(ship) = self.spaceship {
            let damage =
                systems::collision::ship_impacts(&mut self.world, &ship, &mut self.despawn_buffer);
            self.life = (self.life - damage).max(0.0);
        }

        // 5. Bullet hits among the remaining asteroids.
        systems::collision::bullet_hits(&mut self.world, &mut self.despawn_buffer);

        // 6. Cull bullets above the top edge and asteroids past the bottom.
        systems::cleanup::run(&mut self.world, &self.config, &mut self.despawn_buffer);

        // 7. Admit this cycle's spawn events — at most one of each.
        systems::admit::run(&mut self.world, bullet_spawn, asteroid_spawn);

        // 8. A zero delta carries the previous fps rather than dividing by it.
        if elapsed_ms > 0 {
            self.fps = 1000.0 / elapsed_ms as f64;
        }

        systems::snapshot::build(&self.world, elapsed_ms, self.spaceship, self.life, self.fps)
    }

    /// Get the current simulation clock (ms).
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Get the remaining life.
    pub fn life(&self) -> f64 {
        self.life
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place a bullet directly into the world (for testing).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, id: u64, x: f64, y: f64, power: f64) {
        use gesturoids_core::components::BulletBody;
        use gesturoids_core::constants::BULLET_SPEED;
        use gesturoids_core::types::{Point2, Vec2};

        self.world.spawn((
            Point2::new(x, y),
            Vec2::new(0.0, -BULLET_SPEED),
            BulletBody { id, power },
        ));
    }

    /// Place an asteroid directly into the world (for testing).
    #[cfg(test)]
    pub fn spawn_test_asteroid(&mut self, id: u64, x: f64, y: f64, power: f64) {
        use gesturoids_core::components::AsteroidBody;
        use gesturoids_core::constants::ASTEROID_SPEED;
        use gesturoids_core::types::{Point2, Vec2};

        self.world.spawn((
            Point2::new(x, y),
            Vec2::new(0.0, ASTEROID_SPEED),
            AsteroidBody { id, power },
        ));
    }
}
