//! Species-specific behavioral profiles.
//!
//! Consolidates per-species parameters for the alien FSM and the
//! collision reactions in the simulation.

use blaster_core::enums::{AlienKind, GoodieKind, ProjectileKind, Travel};

/// How a species moves between heading changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Any of the three leftward headings, held for a random step budget.
    Drift,
    /// Diagonals only, reversing at the floor and ceiling. Does not spend
    /// its step budget.
    Bounce,
}

/// What a species does when it decides to ram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamStyle {
    /// Ignores the ram roll.
    None,
    /// Straight-left charge at `RAM_SPEED` for a full screen width.
    Charge,
}

/// Drop rolled when an alien is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTable {
    Nothing,
    /// One-in-`odds` chance, then a fair pick between the two goodies.
    EitherOf {
        odds: u32,
        first: GoodieKind,
        second: GoodieKind,
    },
    /// One-in-`odds` chance of this goodie.
    OneInN { odds: u32, goodie: GoodieKind },
}

/// The projectile a species fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub kind: ProjectileKind,
    pub travel: Travel,
}

/// Behavioral profile for an alien species.
#[derive(Debug, Clone, Copy)]
pub struct AlienProfile {
    /// Health at level 1.
    pub base_health: i32,
    /// Points awarded when destroyed.
    pub death_score: u32,
    /// Damage the alien takes when the ship flies into it.
    pub ram_self_damage: i32,
    /// Damage the ship takes when it flies into the alien.
    pub ship_damage: i32,
    pub shot: Shot,
    pub ram: RamStyle,
    pub movement: Movement,
    pub drop: DropTable,
}

/// Get the behavioral profile for a given species.
pub fn get_profile(kind: AlienKind) -> AlienProfile {
    use blaster_core::constants::*;

    let turnip = Shot {
        kind: ProjectileKind::Turnip,
        travel: Travel::Left,
    };

    match kind {
        AlienKind::Smallgon => AlienProfile {
            base_health: SMALLGON_BASE_HEALTH,
            death_score: ALIEN_SCORE,
            ram_self_damage: RAM_SELF_DAMAGE,
            ship_damage: SMALLGON_SHIP_DAMAGE,
            shot: turnip,
            ram: RamStyle::None,
            movement: Movement::Drift,
            drop: DropTable::Nothing,
        },
        AlienKind::Smoregon => AlienProfile {
            base_health: SMOREGON_BASE_HEALTH,
            death_score: ALIEN_SCORE,
            ram_self_damage: RAM_SELF_DAMAGE,
            ship_damage: SMOREGON_SHIP_DAMAGE,
            shot: turnip,
            ram: RamStyle::Charge,
            movement: Movement::Drift,
            drop: DropTable::EitherOf {
                odds: 3,
                first: GoodieKind::Repair,
                second: GoodieKind::TorpedoRefill,
            },
        },
        AlienKind::Snagglegon => AlienProfile {
            base_health: SNAGGLEGON_BASE_HEALTH,
            death_score: SNAGGLEGON_SCORE,
            ram_self_damage: RAM_SELF_DAMAGE,
            ship_damage: SNAGGLEGON_SHIP_DAMAGE,
            shot: Shot {
                kind: ProjectileKind::Torpedo,
                travel: Travel::Left,
            },
            ram: RamStyle::None,
            movement: Movement::Bounce,
            drop: DropTable::OneInN {
                odds: 6,
                goodie: GoodieKind::ExtraLife,
            },
        },
    }
}
