//! Simulation engine for GESTUROIDS.
//!
//! Owns the hecs ECS world, folds the frame clock, the latest hand
//! observation, and two independent spawners into one state transition per
//! tick, and produces a `GameState` snapshot for the render sink.

pub mod edge;
pub mod engine;
pub mod spawn;
pub mod systems;
pub mod tracker;

pub use gesturoids_core as core;
pub use engine::SimulationEngine;
