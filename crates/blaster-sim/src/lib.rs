//! Simulation world for the blaster game.
//!
//! Owns the hecs arena of actors, the ship, the score ledger and the RNG,
//! runs the per-tick systems, and produces `FrameSnapshot`s. Completely
//! headless, enabling deterministic testing.

pub mod engine;
pub mod error;
pub mod scene;
pub mod ship;
pub mod systems;
pub mod world_setup;

pub use blaster_core as core;
pub use engine::{GameWorld, SimConfig};
pub use error::SimError;
