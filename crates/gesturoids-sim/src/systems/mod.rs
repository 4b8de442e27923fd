//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They hold no state — cross-tick state lives in the engine.

pub mod admit;
pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
