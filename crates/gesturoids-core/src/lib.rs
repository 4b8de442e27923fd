//! Core types and definitions for the GESTUROIDS simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, hand detections, game entities, the state snapshot, and
//! constants. It has no dependency on any runtime or windowing framework.

pub mod components;
pub mod constants;
pub mod detector;
pub mod entities;
pub mod hand;
pub mod state;
pub mod types;
