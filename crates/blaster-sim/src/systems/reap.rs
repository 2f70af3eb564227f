//! Reap system: removes dead actors at the end of the tick.
//!
//! A dead alien that earned points is swapped in place for an explosion;
//! every other dead actor is despawned and its registry slot erased.

use blaster_core::events::SoundCue;

use crate::scene::Scene;
use crate::world_setup;

pub fn run(scene: &mut Scene) {
    let mut i = 0;
    while i < scene.registry.len() {
        let entity = scene.registry[i];
        let Some(vitals) = scene.vitals(entity) else {
            // Stale handle; nothing left to despawn.
            scene.registry.remove(i);
            continue;
        };
        if vitals.is_alive() {
            i += 1;
            continue;
        }

        let kind = vitals.kind();
        if kind.is_alien() {
            scene.counters.on_screen -= 1;
            if vitals.score() != 0 {
                scene.counters.aliens_left -= 1;
                scene.ledger.increase_score(vitals.score());
                scene.play(SoundCue::Death);
                log::debug!(
                    "{kind:?} reaped for {} points, {} aliens left",
                    vitals.score(),
                    scene.counters.aliens_left
                );

                let body = scene.body(entity);
                let _ = scene.actors.despawn(entity);
                if let Some(body) = body {
                    scene.registry[i] =
                        world_setup::spawn_explosion(scene.actors, body.x(), body.y());
                    i += 1;
                    continue;
                }
                scene.registry.remove(i);
                continue;
            }
        } else if kind.is_goodie() && vitals.score() != 0 {
            scene.ledger.increase_score(vitals.score());
        }

        let _ = scene.actors.despawn(entity);
        scene.registry.remove(i);
    }
}
