//! Game loop thread — drives the simulation at the display cadence and
//! hands each snapshot to the render sink.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots are pushed to
//! the sink and stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use gesturoids_core::hand::Hand;
use gesturoids_core::state::GameState;
use gesturoids_sim::engine::{SimConfig, SimulationEngine};

use crate::render::RenderSink;

/// Nominal frame duration at the target 60 Hz refresh.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Monotonic tick source: elapsed milliseconds between consecutive calls.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous call; 0 on the first call, so the
    /// first delta is never used as a divisor.
    pub fn tick(&mut self) -> u64 {
        let now = Instant::now();
        let elapsed = match self.last {
            Some(prev) => now.duration_since(prev).as_millis() as u64,
            None => 0,
        };
        self.last = Some(now);
        elapsed
    }
}

/// Spawns the game loop in a new thread.
///
/// `hands` is the perception adapter's latest-observation slot, sampled once
/// per tick (never awaited). Returns the command sender for the owner to use.
pub fn spawn_game_loop(
    config: SimConfig,
    mut sink: Box<dyn RenderSink>,
    hands: Arc<Mutex<Vec<Hand>>>,
    latest_snapshot: Arc<Mutex<Option<GameState>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("gesturoids-game-loop".into())
        .spawn(move || {
            run_game_loop(config, sink.as_mut(), cmd_rx, &hands, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    sink: &mut dyn RenderSink,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    hands: &Mutex<Vec<Hand>>,
    latest_snapshot: &Mutex<Option<GameState>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut clock = FrameClock::new();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Sample the latest completed observation (may be stale or empty)
        let observed: Vec<Hand> = match hands.lock() {
            Ok(slot) => slot.clone(),
            Err(_) => Vec::new(),
        };

        // 3. Advance one tick with the measured frame delta
        let elapsed_ms = clock.tick();
        let snapshot = engine.tick(elapsed_ms, &observed);

        // 4. Hand the snapshot to the render sink (fire-and-forget)
        sink.draw(&snapshot);

        // 5. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 6. Sleep until the next frame
        next_tick_time += FRAME_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
