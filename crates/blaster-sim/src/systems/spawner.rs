//! Spawner system: random stars and level-paced alien arrivals.

use rand::Rng;

use blaster_alien_ai::fsm::one_in;
use blaster_core::constants::*;
use blaster_core::enums::AlienKind;

use crate::scene::Scene;
use crate::world_setup;

pub fn run(scene: &mut Scene) {
    maybe_spawn_star(scene);
    maybe_spawn_alien(scene);
}

fn maybe_spawn_star(scene: &mut Scene) {
    if !one_in(scene.rng, STAR_SPAWN_ODDS) {
        return;
    }
    let y = world_setup::random_coordinate(scene.rng, VIEW_HEIGHT);
    let size = world_setup::random_star_size(scene.rng);
    let star = world_setup::spawn_star(scene.actors, VIEW_WIDTH - 1.0, y, size);
    scene.register(star);
}

/// Spawn weights for each species at `level`, in roll order.
pub fn alien_weights(level: u32) -> [(AlienKind, u32); 3] {
    [
        (AlienKind::Smallgon, SMALLGON_WEIGHT),
        (
            AlienKind::Smoregon,
            SMOREGON_WEIGHT_BASE + SMOREGON_WEIGHT_PER_LEVEL * level,
        ),
        (
            AlienKind::Snagglegon,
            SNAGGLEGON_WEIGHT_BASE + SNAGGLEGON_WEIGHT_PER_LEVEL * level,
        ),
    ]
}

/// Map an inclusive roll in `0..=total` onto a species. The top value falls
/// through to the last species.
pub fn pick_alien(weights: &[(AlienKind, u32); 3], roll: u32) -> AlienKind {
    let mut threshold = 0;
    for &(kind, weight) in weights {
        threshold += weight;
        if roll < threshold {
            return kind;
        }
    }
    weights[weights.len() - 1].0
}

fn maybe_spawn_alien(scene: &mut Scene) {
    if !scene.counters.has_room() {
        return;
    }
    let level = scene.ledger.level;
    let weights = alien_weights(level);
    let total: u32 = weights.iter().map(|(_, w)| w).sum();
    let kind = pick_alien(&weights, scene.rng.gen_range(0..=total));
    let y = world_setup::random_coordinate(scene.rng, VIEW_HEIGHT);

    let alien = world_setup::spawn_alien(scene.actors, scene.rng, kind, VIEW_WIDTH - 1.0, y, level);
    scene.register(alien);
    scene.counters.on_screen += 1;
    log::debug!(
        "{kind:?} entered at y={y} ({} on screen, {} left)",
        scene.counters.on_screen,
        scene.counters.aliens_left
    );
}
