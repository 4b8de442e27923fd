//! Perception adapter thread — wraps the external hand-detection model.
//!
//! Runs a tight detect loop decoupled from the frame rate: as soon as one
//! detection completes, the next is issued. The latest completed hand list
//! is published into a single shared slot; the game loop samples it once per
//! tick. One writer (this thread), one reader (the game loop).
//!
//! Failure policy: a failed detection is logged and retried with exponential
//! backoff; after [`PerceptionConfig::max_retries`] consecutive failures the
//! loop terminates, leaving the last published observation in place — the
//! ship freezes at its last pose while the rest of the game keeps running.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use gesturoids_core::detector::HandDetector;
use gesturoids_core::hand::Hand;

/// Retry policy for the detection loop.
#[derive(Debug, Clone)]
pub struct PerceptionConfig {
    /// Consecutive failures tolerated before the adapter gives up.
    pub max_retries: u32,
    /// First backoff delay; doubles per failure up to `max_backoff`.
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(5),
        }
    }
}

/// Handle to the running perception thread.
pub struct PerceptionAdapter {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    hands: Arc<Mutex<Vec<Hand>>>,
}

impl PerceptionAdapter {
    /// Spawn the detection loop over the given detector.
    pub fn spawn(detector: Box<dyn HandDetector>, config: PerceptionConfig) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let hands: Arc<Mutex<Vec<Hand>>> = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let stop = stop.clone();
            let hands = hands.clone();
            std::thread::Builder::new()
                .name("gesturoids-perception".into())
                .spawn(move || run_detection_loop(detector, &config, &hands, &stop))
                .expect("Failed to spawn perception thread")
        };

        Self {
            stop,
            handle: Some(handle),
            hands,
        }
    }

    /// The latest-observation slot shared with the game loop.
    pub fn hands(&self) -> Arc<Mutex<Vec<Hand>>> {
        self.hands.clone()
    }

    /// Signal the detection loop to stop and wait for it to finish.
    pub fn stop(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_detection_loop(
    mut detector: Box<dyn HandDetector>,
    config: &PerceptionConfig,
    hands: &Mutex<Vec<Hand>>,
    stop: &AtomicBool,
) {
    let mut failures = 0u32;
    let mut backoff = config.initial_backoff;

    while !stop.load(Ordering::Relaxed) {
        match detector.detect() {
            Ok(detections) => {
                failures = 0;
                backoff = config.initial_backoff;

                let observed: Vec<Hand> = detections.iter().map(Hand::from_detection).collect();
                if let Ok(mut slot) = hands.lock() {
                    *slot = observed;
                }
            }
            Err(err) => {
                failures += 1;
                log::error!(
                    "hand detection failed ({failures}/{}): {err}",
                    config.max_retries
                );
                if failures >= config.max_retries {
                    log::error!("perception adapter giving up; ship holds its last pose");
                    return;
                }
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(config.max_backoff);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::AtomicU32;

    use gesturoids_core::detector::{DetectError, Detection};
    use gesturoids_core::hand::HandMode;

    /// Always reports one closed hand; counts calls.
    struct FixedDetector {
        calls: Arc<AtomicU32>,
    }

    impl HandDetector for FixedDetector {
        fn detect(&mut self) -> Result<Vec<Detection>, DetectError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            std::thread::sleep(Duration::from_millis(1));
            Ok(vec![Detection {
                bbox: (100.0, 120.0, 80.0, 60.0),
                class: 1,
                score: 0.9,
            }])
        }
    }

    /// Always fails; counts calls.
    struct BrokenDetector {
        calls: Arc<AtomicU32>,
    }

    impl HandDetector for BrokenDetector {
        fn detect(&mut self) -> Result<Vec<Detection>, DetectError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Err(DetectError::Model("camera unplugged".into()))
        }
    }

    #[test]
    fn test_latest_observation_is_published() {
        let calls = Arc::new(AtomicU32::new(0));
        let adapter = PerceptionAdapter::spawn(
            Box::new(FixedDetector {
                calls: calls.clone(),
            }),
            PerceptionConfig::default(),
        );

        let slot = adapter.hands();
        // Give the loop a few iterations.
        std::thread::sleep(Duration::from_millis(50));

        {
            let observed = slot.lock().unwrap();
            assert_eq!(observed.len(), 1);
            assert_eq!(observed[0].mode, HandMode::Close);
        }
        assert!(calls.load(Ordering::Relaxed) > 1, "loop should re-request");

        adapter.stop();
    }

    #[test]
    fn test_stop_token_terminates_loop() {
        let calls = Arc::new(AtomicU32::new(0));
        let adapter = PerceptionAdapter::spawn(
            Box::new(FixedDetector {
                calls: calls.clone(),
            }),
            PerceptionConfig::default(),
        );

        std::thread::sleep(Duration::from_millis(10));
        // stop() joins; returning at all proves the loop observed the token.
        adapter.stop();

        let after_stop = calls.load(Ordering::Relaxed);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(calls.load(Ordering::Relaxed), after_stop);
    }

    #[test]
    fn test_broken_detector_exhausts_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let adapter = PerceptionAdapter::spawn(
            Box::new(BrokenDetector {
                calls: calls.clone(),
            }),
            PerceptionConfig {
                max_retries: 3,
                initial_backoff: Duration::from_millis(1),
                max_backoff: Duration::from_millis(4),
            },
        );

        let slot = adapter.hands();
        // stop() joins the already-terminated loop.
        std::thread::sleep(Duration::from_millis(50));
        adapter.stop();

        assert_eq!(calls.load(Ordering::Relaxed), 3);
        assert!(slot.lock().unwrap().is_empty());
    }
}
