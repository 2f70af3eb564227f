//! Systems that operate on the scene each tick.
//!
//! Systems are functions over `&mut Scene`. They do not own state; all
//! state lives in components, the ship slot, and the world's counters.

pub mod actors;
pub mod collision;
pub mod pilot;
pub mod reap;
pub mod snapshot;
pub mod spawner;
