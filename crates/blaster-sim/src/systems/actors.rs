//! Per-actor update pass.
//!
//! Walks the registry in order. Each actor is checked against the ship,
//! updated, then checked against the ship again. Actors spawned during the
//! pass are appended to the registry and get their first update later in
//! the same pass.

use hecs::Entity;

use blaster_alien_ai::fsm::{self, AlienAction, AlienContext};
use blaster_alien_ai::profiles::Shot;
use blaster_core::components::{AlienState, Explosion, Projectile, Role, Vitals};
use blaster_core::constants::*;
use blaster_core::enums::ProjectileKind;
use blaster_core::events::SoundCue;
use blaster_core::types::Body;
use glam::DVec2;

use crate::scene::{Party, Scene};
use crate::world_setup;

pub fn run(scene: &mut Scene) {
    let mut i = 0;
    while i < scene.registry.len() {
        let entity = scene.registry[i];
        scene.collide(Party::Actor(entity), Party::Ship);
        update_actor(scene, entity);
        scene.collide(Party::Actor(entity), Party::Ship);
        i += 1;
    }
}

/// Kind-specific behaviour for one tick. Dead actors wait for the reaper.
pub fn update_actor(scene: &mut Scene, entity: Entity) {
    let (Some(role), Some(vitals)) = (scene.role(entity), scene.vitals(entity)) else {
        return;
    };
    if !vitals.is_alive() {
        return;
    }
    match role {
        Role::Star => update_star(scene, entity),
        Role::Explosion(explosion) => update_explosion(scene, entity, explosion),
        Role::Projectile(projectile) => update_projectile(scene, entity, projectile),
        Role::Goodie(_) => update_goodie(scene, entity),
        Role::Alien(alien) => update_alien(scene, entity, alien, vitals.health()),
    }
}

fn update_star(scene: &mut Scene, entity: Entity) {
    let Ok((body, vitals)) = scene.actors.query_one_mut::<(&mut Body, &mut Vitals)>(entity) else {
        return;
    };
    if body.x() <= 0.0 {
        vitals.kill();
    } else {
        body.move_by(-STAR_SPEED, 0.0);
    }
}

fn update_explosion(scene: &mut Scene, entity: Entity, explosion: Explosion) {
    let Ok((body, vitals, role)) = scene
        .actors
        .query_one_mut::<(&mut Body, &mut Vitals, &mut Role)>(entity)
    else {
        return;
    };
    if explosion.ticks_left == 0 {
        vitals.kill();
        return;
    }
    body.set_size(body.size * EXPLOSION_GROWTH);
    *role = Role::Explosion(Explosion {
        ticks_left: explosion.ticks_left - 1,
    });
}

/// Motion parameters: (units per tick, whether the sprite spins).
fn projectile_motion(kind: ProjectileKind) -> (f64, bool) {
    match kind {
        ProjectileKind::Cabbage => (CABBAGE_SPEED, true),
        ProjectileKind::Turnip => (TURNIP_SPEED, true),
        ProjectileKind::Torpedo => (TORPEDO_SPEED, false),
    }
}

fn update_projectile(scene: &mut Scene, entity: Entity, projectile: Projectile) {
    let Ok((body, vitals)) = scene.actors.query_one_mut::<(&mut Body, &mut Vitals)>(entity) else {
        return;
    };
    if body.x() < 0.0 || body.x() > VIEW_WIDTH - 1.0 {
        vitals.kill();
        return;
    }
    let (speed, spins) = projectile_motion(projectile.kind);
    if spins {
        body.set_facing(i32::from(body.facing) + PROJECTILE_SPIN);
    }
    body.move_by(projectile.travel.sign() * speed, 0.0);
}

fn update_goodie(scene: &mut Scene, entity: Entity) {
    let cull = scene.cull_offscreen_goodies;
    let Ok((body, vitals)) = scene.actors.query_one_mut::<(&mut Body, &mut Vitals)>(entity) else {
        return;
    };
    body.move_by(-GOODIE_DRIFT, -GOODIE_DRIFT);
    if cull && (body.x() < 0.0 || body.y() < 0.0) {
        vitals.kill();
    }
}

fn update_alien(scene: &mut Scene, entity: Entity, alien: AlienState, health: i32) {
    let Some(body) = scene.body(entity) else {
        return;
    };
    let ctx = AlienContext {
        state: alien,
        pos: body.pos,
        health,
        level: scene.ledger.level,
        ship_pos: scene.ship.body().pos,
    };
    let update = fsm::evaluate(&ctx, scene.rng);

    if let Ok((body, role)) = scene.actors.query_one_mut::<(&mut Body, &mut Role)>(entity) {
        body.pos = update.new_pos;
        *role = Role::Alien(update.new_state);
    }

    match update.action {
        AlienAction::Destroyed { score } => scene.destroy_alien(entity, alien.kind, score),
        AlienAction::Escaped => {
            scene.kill(entity);
            log::debug!("{:?} escaped off the left edge", alien.kind);
        }
        AlienAction::Fired(shot) => fire_alien_shot(scene, body.pos, shot),
        AlienAction::Moved => {}
    }
}

fn fire_alien_shot(scene: &mut Scene, from: DVec2, shot: Shot) {
    let entity = world_setup::spawn_projectile(
        scene.actors,
        shot.kind,
        shot.travel,
        from.x - ALIEN_SHOT_OFFSET,
        from.y,
    );
    scene.register(entity);
    let cue = match shot.kind {
        ProjectileKind::Torpedo => SoundCue::Torpedo,
        _ => SoundCue::AlienShoot,
    };
    scene.play(cue);
}
