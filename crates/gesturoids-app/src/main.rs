//! Headless GESTUROIDS run: scripted camera, logging render sink.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use gesturoids_app::game_loop::{self, GameLoopCommand};
use gesturoids_app::perception::{PerceptionAdapter, PerceptionConfig};
use gesturoids_app::render::LogSink;
use gesturoids_app::scripted::ScriptedDetector;
use gesturoids_core::detector::DetectorConfig;
use gesturoids_sim::engine::SimConfig;

/// How long the demo runs before tearing everything down.
const RUN_DURATION: Duration = Duration::from_secs(10);

fn main() {
    env_logger::init();

    let detector = ScriptedDetector::new(DetectorConfig::default());
    let adapter = PerceptionAdapter::spawn(Box::new(detector), PerceptionConfig::default());

    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(
        SimConfig::default(),
        Box::new(LogSink::new(60)),
        adapter.hands(),
        latest_snapshot.clone(),
    );

    std::thread::sleep(RUN_DURATION);

    // Teardown must reach both threads: the tick loop via the command
    // channel, the self-rescheduling detection loop via its stop token.
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    adapter.stop();

    if let Ok(lock) = latest_snapshot.lock() {
        if let Some(state) = lock.as_ref() {
            log::info!(
                "final state: {} bullets, {} asteroids, life {:.0}",
                state.bullets.len(),
                state.asteroids.len(),
                state.life
            );
        }
    };
}
