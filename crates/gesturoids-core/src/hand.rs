//! Hand observations as produced by the perception collaborator.

use serde::{Deserialize, Serialize};

use crate::constants::OPEN_CLOSE_RATIO;
use crate::detector::Detection;
use crate::types::{Point2, Vec2};

/// Open/closed silhouette of a detected hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandMode {
    Open,
    Close,
}

/// A single observed hand. Ephemeral — consumed per observation, never stored
/// across frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub mode: HandMode,
    /// Center of the bounding box, in camera-frame coordinates.
    pub center: Point2,
    /// Bounding box extent.
    pub dimension: Vec2,
}

impl Hand {
    /// Build a hand from a raw detection box.
    ///
    /// A tall box (height/width above [`OPEN_CLOSE_RATIO`]) reads as an open
    /// hand, a squat one as a fist.
    pub fn from_detection(detection: &Detection) -> Self {
        let (x, y, width, height) = detection.bbox;
        Self {
            mode: classify_mode(width, height),
            center: Point2::new(x, y),
            dimension: Vec2::new(width, height),
        }
    }
}

fn classify_mode(width: f64, height: f64) -> HandMode {
    if height / width > OPEN_CLOSE_RATIO {
        HandMode::Open
    } else {
        HandMode::Close
    }
}
