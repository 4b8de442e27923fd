//! GESTUROIDS runtime shell.
//!
//! Wires the simulation engine to a frame clock, a perception adapter
//! thread, and a render sink. The simulation core holds no reference to
//! any of these; teardown reaches both threads explicitly.

pub mod game_loop;
pub mod perception;
pub mod render;
pub mod scripted;

pub use gesturoids_core as core;
