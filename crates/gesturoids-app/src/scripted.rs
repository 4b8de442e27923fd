//! Scripted hand detector — a stand-in for the camera + model.
//!
//! Sweeps a synthetic hand back and forth across the camera frame, closing
//! the fist on a fixed cadence, so the whole pipeline runs headless. Each
//! `detect` call sleeps briefly to imitate model inference latency.

use std::time::Duration;

use gesturoids_core::constants::{SOURCE_FRAME_HEIGHT, SOURCE_FRAME_WIDTH};
use gesturoids_core::detector::{DetectError, DetectorConfig, Detection, HandDetector};

/// Imitated model inference latency per call.
const INFERENCE_LATENCY: Duration = Duration::from_millis(33);

/// Frames per open/close alternation.
const MODE_PERIOD: u64 = 30;

pub struct ScriptedDetector {
    config: DetectorConfig,
    frame: u64,
}

impl ScriptedDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config, frame: 0 }
    }
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self) -> Result<Vec<Detection>, DetectError> {
        std::thread::sleep(INFERENCE_LATENCY);
        self.frame += 1;

        let phase = self.frame as f64 * 0.05;
        let mut x = SOURCE_FRAME_WIDTH * (0.5 + 0.4 * phase.sin());
        if self.config.flip_horizontal {
            x = SOURCE_FRAME_WIDTH - x;
        }
        let y = SOURCE_FRAME_HEIGHT * (0.6 + 0.2 * (phase * 0.3).cos());

        let closed = (self.frame / MODE_PERIOD) % 2 == 0;
        let (width, height) = if closed { (80.0, 60.0) } else { (60.0, 90.0) };

        Ok(vec![Detection {
            bbox: (x, y, width, height),
            class: 1,
            score: 0.85,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesturoids_core::hand::{Hand, HandMode};

    #[test]
    fn test_scripted_hand_stays_in_frame() {
        let mut detector = ScriptedDetector::new(DetectorConfig::default());
        for _ in 0..50 {
            let detections = detector.detect().unwrap();
            let (x, y, _, _) = detections[0].bbox;
            assert!((0.0..=SOURCE_FRAME_WIDTH).contains(&x));
            assert!((0.0..=SOURCE_FRAME_HEIGHT).contains(&y));
        }
    }

    #[test]
    fn test_scripted_hand_alternates_modes() {
        let mut detector = ScriptedDetector::new(DetectorConfig::default());
        let mut seen_open = false;
        let mut seen_close = false;
        for _ in 0..(MODE_PERIOD * 2 + 1) {
            let detections = detector.detect().unwrap();
            match Hand::from_detection(&detections[0]).mode {
                HandMode::Open => seen_open = true,
                HandMode::Close => seen_close = true,
            }
        }
        assert!(seen_open && seen_close);
    }
}
