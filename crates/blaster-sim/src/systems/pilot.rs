//! Ship update: polls the key for this tick and launches any shot.

use blaster_core::enums::{Key, ProjectileKind, Travel};
use blaster_core::events::SoundCue;

use crate::scene::Scene;
use crate::world_setup;

pub fn run(scene: &mut Scene, key: Option<Key>) {
    let Some(shot) = scene.ship.update(key) else {
        return;
    };
    let entity =
        world_setup::spawn_projectile(scene.actors, shot.kind, Travel::Right, shot.x, shot.y);
    scene.register(entity);
    scene.play(match shot.kind {
        ProjectileKind::Torpedo => SoundCue::Torpedo,
        _ => SoundCue::PlayerShoot,
    });
}
