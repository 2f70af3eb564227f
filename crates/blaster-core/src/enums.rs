//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Identity of an actor species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Ship,
    Star,
    Explosion,
    Cabbage,
    Turnip,
    Torpedo,
    ExtraLife,
    Repair,
    TorpedoRefill,
    Smallgon,
    Smoregon,
    Snagglegon,
}

/// Projectile species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Player shot, always travels right.
    Cabbage,
    /// Alien shot, always travels left.
    Turnip,
    /// Either side; allegiance follows its travel direction.
    Torpedo,
}

/// Pickup species dropped by dying aliens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoodieKind {
    ExtraLife,
    Repair,
    TorpedoRefill,
}

/// Alien species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlienKind {
    Smallgon,
    Smoregon,
    Snagglegon,
}

/// Horizontal travel direction of a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Travel {
    Left,
    Right,
}

/// An alien's current heading. Aliens only ever fly leftward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    DownLeft,
    Left,
    UpLeft,
}

/// Keys the player can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Fire a cabbage.
    FirePrimary,
    /// Fire a torpedo.
    FireSecondary,
}

/// Result of `init`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitStatus {
    #[default]
    Continue,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickStatus {
    #[default]
    Continue,
    LevelComplete,
    PlayerDied,
}

impl ActorKind {
    pub fn is_alien(self) -> bool {
        matches!(
            self,
            ActorKind::Smallgon | ActorKind::Smoregon | ActorKind::Snagglegon
        )
    }

    pub fn is_goodie(self) -> bool {
        matches!(
            self,
            ActorKind::ExtraLife | ActorKind::Repair | ActorKind::TorpedoRefill
        )
    }

    pub fn is_projectile(self) -> bool {
        matches!(
            self,
            ActorKind::Cabbage | ActorKind::Turnip | ActorKind::Torpedo
        )
    }
}

impl From<ProjectileKind> for ActorKind {
    fn from(kind: ProjectileKind) -> Self {
        match kind {
            ProjectileKind::Cabbage => ActorKind::Cabbage,
            ProjectileKind::Turnip => ActorKind::Turnip,
            ProjectileKind::Torpedo => ActorKind::Torpedo,
        }
    }
}

impl From<GoodieKind> for ActorKind {
    fn from(kind: GoodieKind) -> Self {
        match kind {
            GoodieKind::ExtraLife => ActorKind::ExtraLife,
            GoodieKind::Repair => ActorKind::Repair,
            GoodieKind::TorpedoRefill => ActorKind::TorpedoRefill,
        }
    }
}

impl From<AlienKind> for ActorKind {
    fn from(kind: AlienKind) -> Self {
        match kind {
            AlienKind::Smallgon => ActorKind::Smallgon,
            AlienKind::Smoregon => ActorKind::Smoregon,
            AlienKind::Snagglegon => ActorKind::Snagglegon,
        }
    }
}

impl Travel {
    /// Facing in degrees a sprite moving this way is drawn with.
    pub fn facing(self) -> u16 {
        match self {
            Travel::Right => 0,
            Travel::Left => 180,
        }
    }

    /// Sign of the x step.
    pub fn sign(self) -> f64 {
        match self {
            Travel::Right => 1.0,
            Travel::Left => -1.0,
        }
    }
}

impl Heading {
    pub const ALL: [Heading; 3] = [Heading::DownLeft, Heading::Left, Heading::UpLeft];

    /// Vertical component of a step (-1, 0 or +1).
    pub fn dy(self) -> f64 {
        match self {
            Heading::DownLeft => -1.0,
            Heading::Left => 0.0,
            Heading::UpLeft => 1.0,
        }
    }
}
