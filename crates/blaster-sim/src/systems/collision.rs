//! Proximity collisions and the reactions they trigger.
//!
//! `collide(striker, target)` fires only the target's reaction. Callers that
//! want both sides to react must call it both ways round.

use hecs::Entity;

use blaster_alien_ai::fsm;
use blaster_alien_ai::profiles::get_profile;
use blaster_core::components::{Projectile, Role, Vitals};
use blaster_core::constants::*;
use blaster_core::enums::*;
use blaster_core::events::SoundCue;

use crate::scene::{Party, Probe, Scene};
use crate::world_setup;

impl Scene<'_> {
    /// If both parties are alive and their centres are closer than
    /// `COLLISION_FACTOR` of their summed radii, let `target` react to
    /// `striker`. Returns whether a reaction fired.
    pub fn collide(&mut self, striker: Party, target: Party) -> bool {
        let (Some(a), Some(b)) = (self.probe(striker), self.probe(target)) else {
            return false;
        };
        if !(a.alive && b.alive) || !a.body.overlaps(&b.body) {
            return false;
        }
        self.react(target, striker, a);
        true
    }

    fn react(&mut self, reactor: Party, striker: Party, other: Probe) {
        let entity = match reactor {
            Party::Ship => {
                // Let the other object decide what happens to the ship.
                if other.kind.is_alien() || other.enemy_projectile || other.kind.is_goodie() {
                    self.collide(Party::Ship, striker);
                }
                return;
            }
            Party::Actor(entity) => entity,
        };
        let Some(role) = self.role(entity) else {
            return;
        };
        match role {
            Role::Star | Role::Explosion(_) => {}
            Role::Projectile(projectile) => self.projectile_hit(entity, projectile, striker, other),
            Role::Goodie(goodie) => self.goodie_collected(entity, goodie, striker),
            Role::Alien(alien) => self.alien_rammed(entity, alien.kind, striker),
        }
    }

    fn projectile_hit(&mut self, entity: Entity, projectile: Projectile, striker: Party, other: Probe) {
        let damage = match (projectile.kind, projectile.travel) {
            (ProjectileKind::Cabbage, _) => other.kind.is_alien().then_some(CABBAGE_DAMAGE),
            (ProjectileKind::Turnip, _) => Some(TURNIP_DAMAGE),
            (ProjectileKind::Torpedo, Travel::Right) => {
                other.kind.is_alien().then_some(TORPEDO_DAMAGE)
            }
            (ProjectileKind::Torpedo, Travel::Left) => {
                (other.kind == ActorKind::Ship).then_some(TORPEDO_DAMAGE)
            }
        };
        if let Some(damage) = damage {
            self.take_damage(striker, damage);
            self.kill(entity);
        }
    }

    fn goodie_collected(&mut self, entity: Entity, goodie: GoodieKind, striker: Party) {
        self.kill(entity);
        self.set_score(entity, GOODIE_SCORE);
        self.play(SoundCue::Goodie);
        match goodie {
            GoodieKind::ExtraLife => self.ledger.inc_lives(),
            GoodieKind::Repair => self.take_damage(striker, -REPAIR_AMOUNT),
            GoodieKind::TorpedoRefill => self.ship.add_torpedoes(TORPEDO_REFILL_AMOUNT),
        }
        log::debug!("{goodie:?} collected");
    }

    /// The ship flew into an alien. Checked for death here as well as in the
    /// alien's update so a rammed alien cannot score twice.
    fn alien_rammed(&mut self, entity: Entity, kind: AlienKind, striker: Party) {
        let profile = get_profile(kind);
        self.take_damage(Party::Actor(entity), profile.ram_self_damage);
        self.take_damage(striker, profile.ship_damage);
        if self.vitals(entity).is_some_and(|v| v.health() <= 0) {
            self.destroy_alien(entity, kind, profile.death_score);
        }
    }

    /// Damage a party. Negative amounts heal.
    pub fn take_damage(&mut self, party: Party, amount: i32) {
        match party {
            Party::Ship => self.ship.take_damage(amount),
            Party::Actor(entity) => {
                let Ok(mut vitals) = self.actors.get::<&mut Vitals>(entity) else {
                    return;
                };
                vitals.take_damage(amount);
                // The killing blow is silent; the death sound plays at reap.
                let survived_hit = vitals.kind().is_alien() && vitals.health() > 0;
                drop(vitals);
                if survived_hit {
                    self.play(SoundCue::Blast);
                }
            }
        }
    }

    /// Mark an alien dead with its score and roll its drop.
    pub fn destroy_alien(&mut self, entity: Entity, kind: AlienKind, score: u32) {
        self.set_score(entity, score);
        self.kill(entity);
        let Some(body) = self.body(entity) else {
            return;
        };
        if let Some(goodie) = fsm::roll_drop(get_profile(kind).drop, self.rng) {
            let dropped = world_setup::spawn_goodie(self.actors, goodie, body.x(), body.y());
            self.register(dropped);
            log::debug!("{kind:?} dropped {goodie:?}");
        }
        log::debug!("{kind:?} destroyed for {score} points");
    }
}

/// Let every live friendly projectile react to every actor it touches.
/// A projectile stops checking as soon as it is spent.
pub fn sweep_friendly_projectiles(scene: &mut Scene) {
    let mut i = 0;
    while i < scene.registry.len() {
        let projectile = scene.registry[i];
        let friendly = scene
            .role(projectile)
            .is_some_and(|r| r.is_friendly_projectile());
        if friendly {
            let mut j = 0;
            while j < scene.registry.len() && scene.is_alive(projectile) {
                let other = scene.registry[j];
                scene.collide(Party::Actor(other), Party::Actor(projectile));
                j += 1;
            }
        }
        i += 1;
    }
}
