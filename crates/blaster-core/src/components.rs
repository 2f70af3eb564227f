//! ECS components for hecs actor entities.
//!
//! Payloads are plain data. Behaviour lives in the simulation systems and in
//! the alien AI crate, not here.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// State every actor carries regardless of species.
///
/// Health is only meaningful for the ship and aliens, but is stored uniformly.
/// The score is what the actor is worth when it is reaped; it stays zero
/// until the actor earns it (e.g. an alien that flies off screen is worth
/// nothing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    kind: ActorKind,
    health: i32,
    alive: bool,
    score: u32,
}

/// Per-family payload. Exactly one per actor entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Star,
    Explosion(Explosion),
    Projectile(Projectile),
    Goodie(GoodieKind),
    Alien(AlienState),
}

/// Short-lived visual left where an alien died.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub ticks_left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Direction of flight. For torpedoes this is also the allegiance.
    pub travel: Travel,
}

/// Flight state of an alien.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlienState {
    pub kind: AlienKind,
    pub heading: Heading,
    /// Ticks left on the current heading before a new one is drawn.
    pub steps_left: i32,
    /// Units travelled per tick along each axis.
    pub speed: f64,
}

impl Vitals {
    pub fn new(kind: ActorKind, health: i32) -> Self {
        Self {
            kind,
            health,
            alive: true,
            score: 0,
        }
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Subtract from health. Negative amounts heal. No death detection here.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

impl Projectile {
    /// Player-side shots: cabbages and right-travelling torpedoes.
    pub fn is_friendly(&self) -> bool {
        match self.kind {
            ProjectileKind::Cabbage => true,
            ProjectileKind::Turnip => false,
            ProjectileKind::Torpedo => self.travel == Travel::Right,
        }
    }

    pub fn is_enemy(&self) -> bool {
        !self.is_friendly()
    }
}

impl Role {
    pub fn kind(&self) -> ActorKind {
        match self {
            Role::Star => ActorKind::Star,
            Role::Explosion(_) => ActorKind::Explosion,
            Role::Projectile(p) => p.kind.into(),
            Role::Goodie(g) => (*g).into(),
            Role::Alien(a) => a.kind.into(),
        }
    }

    pub fn is_friendly_projectile(&self) -> bool {
        matches!(self, Role::Projectile(p) if p.is_friendly())
    }

    pub fn is_enemy_projectile(&self) -> bool {
        matches!(self, Role::Projectile(p) if p.is_enemy())
    }
}
