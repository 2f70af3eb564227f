//! Actor spawn factories.
//!
//! Each factory creates one hecs entity with its component bundle
//! (`Body`, `Vitals`, `Role`) and returns the handle. Registering the handle
//! in tick order is the caller's job.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use blaster_alien_ai::fsm;
use blaster_core::components::*;
use blaster_core::constants::*;
use blaster_core::enums::*;
use blaster_core::types::Body;

/// Seed the playfield with stars at random positions.
pub fn spawn_initial_stars(world: &mut World, rng: &mut ChaCha8Rng) -> Vec<Entity> {
    (0..STAR_COUNT)
        .map(|_| {
            let x = random_coordinate(rng, VIEW_WIDTH);
            let y = random_coordinate(rng, VIEW_HEIGHT);
            let size = random_star_size(rng);
            spawn_star(world, x, y, size)
        })
        .collect()
}

/// Whole-unit coordinate in `0..extent`.
pub fn random_coordinate(rng: &mut ChaCha8Rng, extent: f64) -> f64 {
    rng.gen_range(0..extent as i32) as f64
}

/// Star size in `0.05..=0.50`.
pub fn random_star_size(rng: &mut ChaCha8Rng) -> f64 {
    let (low, high) = STAR_SIZE_HUNDREDTHS;
    rng.gen_range(low..=high) as f64 / 100.0
}

pub fn spawn_star(world: &mut World, x: f64, y: f64, size: f64) -> Entity {
    world.spawn((
        Body::new(x, y, size, DEPTH_STAR),
        Vitals::new(ActorKind::Star, 0),
        Role::Star,
    ))
}

pub fn spawn_explosion(world: &mut World, x: f64, y: f64) -> Entity {
    world.spawn((
        Body::new(x, y, EXPLOSION_SIZE, DEPTH_EXPLOSION),
        Vitals::new(ActorKind::Explosion, 0),
        Role::Explosion(Explosion {
            ticks_left: EXPLOSION_TICKS,
        }),
    ))
}

/// Spawn a projectile. Torpedoes face their direction of travel; the
/// spinning kinds start at facing 0.
pub fn spawn_projectile(
    world: &mut World,
    kind: ProjectileKind,
    travel: Travel,
    x: f64,
    y: f64,
) -> Entity {
    let mut body = Body::new(x, y, PROJECTILE_SIZE, DEPTH_PROJECTILE);
    if kind == ProjectileKind::Torpedo {
        body.facing = travel.facing();
    }
    world.spawn((
        body,
        Vitals::new(kind.into(), 0),
        Role::Projectile(Projectile { kind, travel }),
    ))
}

pub fn spawn_goodie(world: &mut World, kind: GoodieKind, x: f64, y: f64) -> Entity {
    world.spawn((
        Body::new(x, y, GOODIE_SIZE, DEPTH_GOODIE),
        Vitals::new(kind.into(), 0),
        Role::Goodie(kind),
    ))
}

/// Spawn an alien at `(x, y)` with level-scaled health and a fresh flight plan.
pub fn spawn_alien(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: AlienKind,
    x: f64,
    y: f64,
    level: u32,
) -> Entity {
    let state = fsm::initial_state(kind, rng);
    world.spawn((
        Body::new(x, y, ALIEN_SIZE, DEPTH_ALIEN),
        Vitals::new(kind.into(), fsm::scaled_health(kind, level)),
        Role::Alien(state),
    ))
}
