//! Alien AI for the blaster simulation.
//!
//! Implements the per-species flight state machine, engagement rolls,
//! and drop tables. Pure functions over plain data; no ECS dependency.

pub mod fsm;
pub mod profiles;

pub use blaster_core as core;

#[cfg(test)]
mod tests;
