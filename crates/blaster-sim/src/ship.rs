//! The player's ship.
//!
//! Lives in its own slot on the world rather than in the actor arena: it is
//! read every tick and is never reaped.

use blaster_core::constants::*;
use blaster_core::enums::{Key, ProjectileKind};
use blaster_core::types::Body;

#[derive(Debug, Clone)]
pub struct Ship {
    body: Body,
    health: i32,
    cabbage_energy: i32,
    torpedoes: i32,
    alive: bool,
}

/// A shot the ship wants spawned this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipShot {
    pub kind: ProjectileKind,
    pub x: f64,
    pub y: f64,
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

impl Ship {
    pub fn new() -> Self {
        Self {
            body: Body::new(SHIP_START_X, SHIP_START_Y, SHIP_SIZE, DEPTH_SHIP),
            health: SHIP_MAX_HEALTH,
            cabbage_energy: SHIP_MAX_ENERGY,
            torpedoes: 0,
            alive: true,
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn cabbage_energy(&self) -> i32 {
        self.cabbage_energy
    }

    pub fn torpedoes(&self) -> i32 {
        self.torpedoes
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// One tick of ship behaviour given the key polled this tick.
    pub fn update(&mut self, key: Option<Key>) -> Option<ShipShot> {
        if !self.alive {
            return None;
        }
        if self.cabbage_energy < SHIP_MAX_ENERGY {
            self.cabbage_energy += 1;
        }
        let key = key?;
        let shot = self.fire(key);
        self.steer(key);
        shot
    }

    /// Apply damage (negative heals). Dies at zero, never exceeds the cap.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 {
            self.alive = false;
        }
        self.health = self.health.min(SHIP_MAX_HEALTH);
    }

    pub fn add_torpedoes(&mut self, count: i32) {
        self.torpedoes += count;
    }

    fn fire(&mut self, key: Key) -> Option<ShipShot> {
        let kind = match key {
            Key::FirePrimary if self.cabbage_energy >= CABBAGE_ENERGY_COST => {
                self.cabbage_energy -= CABBAGE_ENERGY_COST;
                ProjectileKind::Cabbage
            }
            Key::FireSecondary if self.torpedoes > 0 => {
                self.torpedoes -= 1;
                ProjectileKind::Torpedo
            }
            _ => return None,
        };
        Some(ShipShot {
            kind,
            x: self.body.x() + SHIP_SHOT_OFFSET,
            y: self.body.y(),
        })
    }

    fn steer(&mut self, key: Key) {
        let (x, y) = (self.body.x(), self.body.y());
        match key {
            Key::Down if y >= SHIP_STEP => self.body.move_to(x, y - SHIP_STEP),
            Key::Up if y < VIEW_HEIGHT - SHIP_STEP => self.body.move_to(x, y + SHIP_STEP),
            Key::Left if x >= SHIP_STEP => self.body.move_to(x - SHIP_STEP, y),
            Key::Right if x < VIEW_WIDTH - SHIP_STEP => self.body.move_to(x + SHIP_STEP, y),
            _ => {}
        }
    }

    #[cfg(test)]
    pub(crate) fn set_cabbage_energy(&mut self, energy: i32) {
        self.cabbage_energy = energy;
    }

    #[cfg(test)]
    pub(crate) fn move_to(&mut self, x: f64, y: f64) {
        self.body.move_to(x, y);
    }
}
