//! Render sinks — consumers of `GameState` snapshots.
//!
//! Drawing is purely observational: a sink receives each snapshot by shared
//! reference and must not influence the simulation. Pixel rendering lives
//! behind this trait, outside the kernel.

use gesturoids_core::constants::MAX_LIFE;
use gesturoids_core::state::GameState;

/// A drawing surface fed one snapshot per tick.
pub trait RenderSink: Send {
    fn draw(&mut self, state: &GameState);
}

/// Discards every frame. For tests and headless benchmarks.
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw(&mut self, _state: &GameState) {}
}

/// Logs a one-line scene summary every `every` frames.
pub struct LogSink {
    every: u64,
    frame: u64,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frame: 0,
        }
    }
}

impl RenderSink for LogSink {
    fn draw(&mut self, state: &GameState) {
        self.frame += 1;
        if self.frame % self.every != 0 {
            return;
        }

        let ship = match &state.spaceship {
            Some(ship) => format!("{:?} at ({:.0}, {:.0})", ship.mode, ship.position.x, ship.position.y),
            None => "not yet sighted".into(),
        };
        log::info!(
            "frame {}: ship {}, {} bullets, {} asteroids, life {:.0}%, {:.1} fps",
            self.frame,
            ship,
            state.bullets.len(),
            state.asteroids.len(),
            state.life / MAX_LIFE * 100.0,
            state.fps,
        );
    }
}
