//! Mutable view over everything a tick touches.
//!
//! `Scene` splits the borrows of `GameWorld` so systems can mutate the actor
//! arena, the ship, the ledger and the RNG side by side.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use blaster_core::components::{Role, Vitals};
use blaster_core::constants::*;
use blaster_core::enums::ActorKind;
use blaster_core::events::SoundCue;
use blaster_core::state::Ledger;
use blaster_core::types::Body;

use crate::ship::Ship;

/// One side of a collision: the ship slot or an arena actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Ship,
    Actor(Entity),
}

/// Level-scoped alien bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounters {
    /// Aliens still to destroy before the level is cleared.
    pub aliens_left: i32,
    pub on_screen: i32,
    /// Concurrent alien cap for this level.
    pub max_on_screen: i32,
}

/// Copy of the parts of an actor a collision check needs.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub kind: ActorKind,
    pub body: Body,
    pub alive: bool,
    pub enemy_projectile: bool,
}

pub struct Scene<'a> {
    pub actors: &'a mut World,
    /// Tick order of the actors in the arena.
    pub registry: &'a mut Vec<Entity>,
    pub ship: &'a mut Ship,
    pub ledger: &'a mut Ledger,
    pub counters: &'a mut LevelCounters,
    pub rng: &'a mut ChaCha8Rng,
    pub sounds: &'a mut Vec<SoundCue>,
    pub cull_offscreen_goodies: bool,
}

impl LevelCounters {
    pub fn for_level(level: u32) -> Self {
        Self {
            aliens_left: ALIENS_TO_CLEAR_BASE + ALIENS_TO_CLEAR_PER_LEVEL * level as i32,
            on_screen: 0,
            max_on_screen: (MAX_ALIENS_BASE + MAX_ALIENS_PER_LEVEL * level as f64) as i32,
        }
    }

    /// Whether another alien may enter the screen.
    pub fn has_room(&self) -> bool {
        self.on_screen < self.max_on_screen.min(self.aliens_left)
    }
}

impl Scene<'_> {
    /// Append a freshly spawned actor to the tick order.
    pub fn register(&mut self, entity: Entity) -> Entity {
        self.registry.push(entity);
        entity
    }

    pub fn vitals(&self, entity: Entity) -> Option<Vitals> {
        self.actors.get::<&Vitals>(entity).ok().map(|v| *v)
    }

    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.actors.get::<&Body>(entity).ok().map(|b| *b)
    }

    pub fn role(&self, entity: Entity) -> Option<Role> {
        self.actors.get::<&Role>(entity).ok().map(|r| *r)
    }

    pub fn probe(&self, party: Party) -> Option<Probe> {
        match party {
            Party::Ship => Some(Probe {
                kind: ActorKind::Ship,
                body: *self.ship.body(),
                alive: self.ship.is_alive(),
                enemy_projectile: false,
            }),
            Party::Actor(entity) => {
                let vitals = self.vitals(entity)?;
                let body = self.body(entity)?;
                let role = self.role(entity)?;
                Some(Probe {
                    kind: vitals.kind(),
                    body,
                    alive: vitals.is_alive(),
                    enemy_projectile: role.is_enemy_projectile(),
                })
            }
        }
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.vitals(entity).is_some_and(|v| v.is_alive())
    }

    pub fn kill(&mut self, entity: Entity) {
        if let Ok(mut vitals) = self.actors.get::<&mut Vitals>(entity) {
            vitals.kill();
        }
    }

    pub fn set_score(&mut self, entity: Entity, score: u32) {
        if let Ok(mut vitals) = self.actors.get::<&mut Vitals>(entity) {
            vitals.set_score(score);
        }
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }
}
