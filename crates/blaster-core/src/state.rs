//! Score ledger and the frame snapshot handed to the embedding game loop.

use serde::{Deserialize, Serialize};

use crate::constants::STARTING_LIVES;
use crate::enums::*;
use crate::events::SoundCue;
use crate::types::{Body, SimTime};

/// Score, lives and level. Survives `clean_up`/`init` cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub score: u32,
    pub lives: u32,
    /// Current level, starting at 1.
    pub level: u32,
}

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub status: TickStatus,
    /// Formatted one-line status text for the status display.
    pub status_line: String,
    pub ledger: Ledger,
    pub ship: ShipView,
    /// Live actors in registry order.
    pub actors: Vec<ActorView>,
    pub aliens_left: i32,
    pub aliens_on_screen: i32,
    pub sounds: Vec<SoundCue>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub x: f64,
    pub y: f64,
    pub health: i32,
    pub cabbage_energy: i32,
    pub torpedoes: i32,
    pub alive: bool,
}

/// One actor as a renderer would draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub kind: ActorKind,
    pub body: Body,
    pub alive: bool,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
        }
    }
}

impl Ledger {
    pub fn increase_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn inc_lives(&mut self) {
        self.lives += 1;
    }

    pub fn dec_lives(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }
}
