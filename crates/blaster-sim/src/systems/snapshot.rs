//! Snapshot system: builds the status line and the `FrameSnapshot`.

use hecs::{Entity, World};

use blaster_core::components::Vitals;
use blaster_core::enums::TickStatus;
use blaster_core::events::SoundCue;
use blaster_core::state::{ActorView, FrameSnapshot, Ledger, ShipView};
use blaster_core::types::{Body, SimTime};

use crate::scene::LevelCounters;
use crate::ship::Ship;

/// One-line status text. Health and cabbage energy are shown as
/// percentages of their caps.
pub fn status_line(ledger: &Ledger, ship: &Ship) -> String {
    format!(
        "Lives: {}   Health: {}%   Score: {}   Level: {}   Cabbages: {:02}%   Torpedoes: {}",
        ledger.lives,
        ship.health() * 2,
        ledger.score,
        ledger.level,
        ship.cabbage_energy() * 10 / 3,
        ship.torpedoes()
    )
}

pub fn ship_view(ship: &Ship) -> ShipView {
    ShipView {
        x: ship.body().x(),
        y: ship.body().y(),
        health: ship.health(),
        cabbage_energy: ship.cabbage_energy(),
        torpedoes: ship.torpedoes(),
        alive: ship.is_alive(),
    }
}

/// Actors in registry order, as a renderer would draw them.
pub fn actor_views(world: &World, registry: &[Entity]) -> Vec<ActorView> {
    registry
        .iter()
        .filter_map(|&entity| {
            let body = *world.get::<&Body>(entity).ok()?;
            let vitals = *world.get::<&Vitals>(entity).ok()?;
            Some(ActorView {
                kind: vitals.kind(),
                body,
                alive: vitals.is_alive(),
            })
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    registry: &[Entity],
    ship: Option<&Ship>,
    ledger: &Ledger,
    counters: &LevelCounters,
    time: SimTime,
    status: TickStatus,
    status_line: String,
    sounds: Vec<SoundCue>,
) -> FrameSnapshot {
    FrameSnapshot {
        time,
        status,
        status_line,
        ledger: *ledger,
        ship: ship.map(ship_view).unwrap_or_default(),
        actors: actor_views(world, registry),
        aliens_left: counters.aliens_left,
        aliens_on_screen: counters.on_screen,
        sounds,
    }
}
