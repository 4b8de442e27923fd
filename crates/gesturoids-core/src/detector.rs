//! The perception collaborator boundary.
//!
//! The hand-detection model is an external black box. This module pins down
//! its contract: a configuration record, a raw detection record, and a trait
//! the adapter polls in a tight loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration handed to the detection model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Mirror the frame horizontally (natural for selfie-style video).
    pub flip_horizontal: bool,
    /// Maximum number of boxes to detect per frame.
    pub max_boxes: u32,
    /// IoU threshold for non-max suppression.
    pub iou_threshold: f64,
    /// Confidence threshold for predictions.
    pub score_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            flip_horizontal: true,
            max_boxes: 20,
            iou_threshold: 0.5,
            score_threshold: 0.6,
        }
    }
}

/// One raw prediction from the model: bounding box (x, y, width, height) in
/// camera-frame pixels, class label, and confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: (f64, f64, f64, f64),
    pub class: u32,
    pub score: f64,
}

/// Failure of a single detection call.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The frame source yielded no frame.
    #[error("frame source unavailable: {0}")]
    FrameSource(String),
    /// The model itself failed.
    #[error("detection model failed: {0}")]
    Model(String),
}

/// A hand-detection model over a live frame source. Single-shot per call; the
/// perception adapter re-invokes it as soon as the previous call completes.
pub trait HandDetector: Send {
    fn detect(&mut self) -> Result<Vec<Detection>, DetectError>;
}
