//! Game world: the core of the blaster.
//!
//! `GameWorld` owns the hecs arena of actors, the ship slot, the ledger and
//! the RNG, processes queued key presses, runs all systems, and produces
//! `FrameSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use blaster_core::commands::PlayerCommand;
use blaster_core::constants::STARTING_LIVES;
use blaster_core::enums::{InitStatus, Key, TickStatus};
use blaster_core::events::SoundCue;
use blaster_core::state::{FrameSnapshot, Ledger};
use blaster_core::types::SimTime;

use crate::error::SimError;
use crate::scene::{LevelCounters, Scene};
use crate::ship::Ship;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same game.
    pub seed: u64,
    /// Level the first `init` starts on.
    pub starting_level: u32,
    pub starting_lives: u32,
    /// Kill goodies that drift past the left or bottom edge. Off by default:
    /// uncollected goodies otherwise linger in the registry.
    pub cull_offscreen_goodies: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_level: 1,
            starting_lives: STARTING_LIVES,
            cull_offscreen_goodies: false,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.starting_level == 0 {
            return Err(SimError::InvalidConfig(
                "starting_level must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// The game world. Owns the actor arena and all level state.
pub struct GameWorld {
    config: SimConfig,
    actors: World,
    /// Tick order of the live actors.
    registry: Vec<Entity>,
    /// `None` before `init` and after `clean_up`.
    ship: Option<Ship>,
    ledger: Ledger,
    counters: LevelCounters,
    rng: ChaCha8Rng,
    time: SimTime,
    command_queue: VecDeque<PlayerCommand>,
    sounds: Vec<SoundCue>,
}

impl GameWorld {
    /// Create a world with the given config. Call `init` before ticking.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            actors: World::new(),
            registry: Vec::new(),
            ship: None,
            ledger: Ledger {
                score: 0,
                lives: config.starting_lives,
                level: config.starting_level,
            },
            counters: LevelCounters::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            sounds: Vec::new(),
            config,
        })
    }

    /// Set up the current level: a fresh ship, a field of stars and the
    /// level's alien counters. Score and lives carry over.
    pub fn init(&mut self) -> InitStatus {
        self.clean_up();
        self.ship = Some(Ship::new());
        self.registry = world_setup::spawn_initial_stars(&mut self.actors, &mut self.rng);
        self.counters = LevelCounters::for_level(self.ledger.level);
        log::info!(
            "level {} ready: {} aliens to clear, at most {} at once",
            self.ledger.level,
            self.counters.aliens_left,
            self.counters.max_on_screen
        );
        InitStatus::Continue
    }

    /// Queue a player command for the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the game by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> Result<FrameSnapshot, SimError> {
        let ship = self.ship.as_ref().ok_or(SimError::NotInitialized)?;
        let status_line = systems::snapshot::status_line(&self.ledger, ship);
        log::trace!("{status_line}");

        let key = self.poll_key();
        let mut scene = self.scene().ok_or(SimError::NotInitialized)?;
        // 1. Stars and aliens enter on the right
        systems::spawner::run(&mut scene);
        // 2. Shots already in flight
        systems::collision::sweep_friendly_projectiles(&mut scene);
        // 3. Ship moves and fires
        systems::pilot::run(&mut scene, key);
        // 4. Every actor: collide with the ship, update, collide again
        systems::actors::run(&mut scene);
        // 5. Shots fired or moved this tick
        systems::collision::sweep_friendly_projectiles(&mut scene);
        // 6. Remove the dead
        systems::reap::run(&mut scene);

        let status = self.resolve_outcome();
        self.time.advance();

        Ok(systems::snapshot::build_snapshot(
            &self.actors,
            &self.registry,
            self.ship.as_ref(),
            &self.ledger,
            &self.counters,
            self.time,
            status,
            status_line,
            std::mem::take(&mut self.sounds),
        ))
    }

    /// Drop the ship and every actor. Safe to call repeatedly.
    pub fn clean_up(&mut self) {
        self.actors.clear();
        self.registry.clear();
        self.ship = None;
        self.counters = LevelCounters::default();
    }

    /// Move on to the next level, keeping score and lives.
    pub fn advance_level(&mut self) -> InitStatus {
        self.clean_up();
        self.ledger.level += 1;
        self.init()
    }

    pub fn is_initialized(&self) -> bool {
        self.ship.is_some()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn counters(&self) -> &LevelCounters {
        &self.counters
    }

    /// Live actors in tick order.
    pub fn registry(&self) -> &[Entity] {
        &self.registry
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the actor arena.
    pub fn world(&self) -> &World {
        &self.actors
    }

    /// The ship polls at most one key per tick.
    fn poll_key(&mut self) -> Option<Key> {
        self.command_queue
            .pop_front()
            .map(|PlayerCommand::Press { key }| key)
    }

    fn resolve_outcome(&mut self) -> TickStatus {
        if self.counters.aliens_left <= 0 {
            self.sounds.push(SoundCue::FinishedLevel);
            log::info!(
                "level {} complete, score {}",
                self.ledger.level,
                self.ledger.score
            );
            return TickStatus::LevelComplete;
        }
        if self.ship.as_ref().is_some_and(Ship::is_alive) {
            return TickStatus::Continue;
        }
        self.ledger.dec_lives();
        log::info!("ship destroyed, {} lives left", self.ledger.lives);
        TickStatus::PlayerDied
    }

    /// Split the world into the borrows systems work on.
    pub(crate) fn scene(&mut self) -> Option<Scene<'_>> {
        let ship = self.ship.as_mut()?;
        Some(Scene {
            actors: &mut self.actors,
            registry: &mut self.registry,
            ship,
            ledger: &mut self.ledger,
            counters: &mut self.counters,
            rng: &mut self.rng,
            sounds: &mut self.sounds,
            cull_offscreen_goodies: self.config.cull_offscreen_goodies,
        })
    }

    /// Spawn and register an alien as if the spawner had placed it.
    #[cfg(test)]
    pub(crate) fn spawn_alien_at(
        &mut self,
        kind: blaster_core::enums::AlienKind,
        x: f64,
        y: f64,
    ) -> Entity {
        let alien = world_setup::spawn_alien(
            &mut self.actors,
            &mut self.rng,
            kind,
            x,
            y,
            self.ledger.level,
        );
        self.registry.push(alien);
        self.counters.on_screen += 1;
        alien
    }

    #[cfg(test)]
    pub(crate) fn spawn_projectile_at(
        &mut self,
        kind: blaster_core::enums::ProjectileKind,
        travel: blaster_core::enums::Travel,
        x: f64,
        y: f64,
    ) -> Entity {
        let projectile = world_setup::spawn_projectile(&mut self.actors, kind, travel, x, y);
        self.registry.push(projectile);
        projectile
    }

    #[cfg(test)]
    pub(crate) fn spawn_goodie_at(
        &mut self,
        kind: blaster_core::enums::GoodieKind,
        x: f64,
        y: f64,
    ) -> Entity {
        let goodie = world_setup::spawn_goodie(&mut self.actors, kind, x, y);
        self.registry.push(goodie);
        goodie
    }

    /// Remove every actor but keep the ship, for tests that need a quiet field.
    #[cfg(test)]
    pub(crate) fn clear_actors(&mut self) {
        self.actors.clear();
        self.registry.clear();
        self.counters.on_screen = 0;
    }

    #[cfg(test)]
    pub(crate) fn vitals(&self, entity: Entity) -> Option<blaster_core::components::Vitals> {
        self.actors
            .get::<&blaster_core::components::Vitals>(entity)
            .ok()
            .map(|v| *v)
    }

    #[cfg(test)]
    pub(crate) fn role(&self, entity: Entity) -> Option<blaster_core::components::Role> {
        self.actors
            .get::<&blaster_core::components::Role>(entity)
            .ok()
            .map(|r| *r)
    }

    #[cfg(test)]
    pub(crate) fn body(&self, entity: Entity) -> Option<blaster_core::types::Body> {
        self.actors
            .get::<&blaster_core::types::Body>(entity)
            .ok()
            .map(|b| *b)
    }

    #[cfg(test)]
    pub(crate) fn ship_mut(&mut self) -> Option<&mut Ship> {
        self.ship.as_mut()
    }

    #[cfg(test)]
    pub(crate) fn counters_mut(&mut self) -> &mut LevelCounters {
        &mut self.counters
    }

    #[cfg(test)]
    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}
