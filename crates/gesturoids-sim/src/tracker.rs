//! Spaceship tracking — derives the ship pose from the latest hand list.

use gesturoids_core::constants::SHIP_HALF_WIDTH;
use gesturoids_core::entities::{ShipMode, Spaceship};
use gesturoids_core::hand::{Hand, HandMode};
use gesturoids_core::types::Point2;

use crate::engine::SimConfig;

/// Derive the current ship pose from the latest hand observation.
///
/// Returns `None` when no hand is in view; the caller carries the previous
/// ship forward. Otherwise takes the first hand (the model orders detections
/// by confidence), maps a closed fist to attack mode and an open palm to
/// charge mode, and scales the hand center from camera-frame space into
/// canvas space, clamped so the ship stays inside the playfield.
pub fn track(hands: &[Hand], config: &SimConfig) -> Option<Spaceship> {
    let hand = hands.first()?;

    let mode = match hand.mode {
        HandMode::Close => ShipMode::Attack,
        HandMode::Open => ShipMode::Charge,
    };

    let x = (hand.center.x / config.source_width * config.canvas_width)
        .clamp(SHIP_HALF_WIDTH, config.canvas_width - SHIP_HALF_WIDTH);
    let y = (hand.center.y / config.source_height * config.canvas_height)
        .clamp(SHIP_HALF_WIDTH, config.canvas_height - SHIP_HALF_WIDTH);

    Some(Spaceship {
        mode,
        position: Point2::new(x, y),
    })
}
