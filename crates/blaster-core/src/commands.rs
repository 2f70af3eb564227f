//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and consumed at tick boundaries; the ship polls at
//! most one per tick.

use serde::{Deserialize, Serialize};

use crate::enums::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// A key was pressed.
    Press { key: Key },
}
