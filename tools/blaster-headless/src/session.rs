//! Drives a `GameWorld` through a whole game the way a front end would:
//! feed keys, tick at the nominal rate, and react to level outcomes.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use blaster_core::commands::PlayerCommand;
use blaster_core::constants::TICK_RATE;
use blaster_core::enums::{Key, TickStatus};
use blaster_core::state::Ledger;
use blaster_sim::GameWorld;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

const KEYS: [Key; 6] = [
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::FirePrimary,
    Key::FireSecondary,
];

/// Random key presser standing in for a keyboard.
pub struct Pilot {
    rng: ChaCha8Rng,
    /// Chance of pressing any key on a given tick.
    press_odds: f64,
}

impl Pilot {
    pub fn new(seed: u64, press_odds: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            press_odds: press_odds.clamp(0.0, 1.0),
        }
    }

    pub fn next_key(&mut self) -> Option<Key> {
        if !self.rng.gen_bool(self.press_odds) {
            return None;
        }
        Some(KEYS[self.rng.gen_range(0..KEYS.len())])
    }
}

pub struct SessionOptions {
    pub max_ticks: u64,
    /// Log the status line every this many ticks. Zero disables it.
    pub report_every: u64,
    /// Sleep between ticks to hold the nominal tick rate.
    pub realtime: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub ticks: u64,
    pub levels_cleared: u32,
    pub deaths: u32,
    pub game_over: bool,
    pub ledger: Ledger,
}

/// Play until the tick limit or until the last life is lost.
pub fn run(
    world: &mut GameWorld,
    pilot: &mut Pilot,
    options: &SessionOptions,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary {
        ticks: 0,
        levels_cleared: 0,
        deaths: 0,
        game_over: false,
        ledger: *world.ledger(),
    };
    world.init();
    let mut next_tick_time = Instant::now();

    while summary.ticks < options.max_ticks {
        if let Some(key) = pilot.next_key() {
            world.queue_command(PlayerCommand::Press { key });
        }
        let snapshot = world
            .tick()
            .with_context(|| format!("tick {} failed", summary.ticks))?;
        summary.ticks += 1;

        if options.report_every > 0 && summary.ticks % options.report_every == 0 {
            log::info!("{}", snapshot.status_line);
        }

        match snapshot.status {
            TickStatus::Continue => {}
            TickStatus::LevelComplete => {
                summary.levels_cleared += 1;
                world.advance_level();
            }
            TickStatus::PlayerDied => {
                summary.deaths += 1;
                if world.ledger().lives == 0 {
                    log::info!("game over after {} ticks", summary.ticks);
                    summary.game_over = true;
                    break;
                }
                world.init();
            }
        }

        if options.realtime {
            pace(&mut next_tick_time);
        }
    }

    summary.ledger = *world.ledger();
    world.clean_up();
    Ok(summary)
}

fn pace(next_tick_time: &mut Instant) {
    *next_tick_time += TICK_DURATION;
    let now = Instant::now();
    if *next_tick_time > now {
        std::thread::sleep(*next_tick_time - now);
    } else if now - *next_tick_time > TICK_DURATION * 2 {
        // Too far behind; reset to avoid a catch-up spiral.
        *next_tick_time = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blaster_sim::SimConfig;

    fn options(max_ticks: u64) -> SessionOptions {
        SessionOptions {
            max_ticks,
            report_every: 0,
            realtime: false,
        }
    }

    #[test]
    fn test_idle_pilot_never_presses() {
        let mut pilot = Pilot::new(1, 0.0);
        assert!((0..100).all(|_| pilot.next_key().is_none()));
    }

    #[test]
    fn test_eager_pilot_always_presses() {
        let mut pilot = Pilot::new(1, 1.0);
        assert!((0..100).all(|_| pilot.next_key().is_some()));
    }

    #[test]
    fn test_session_respects_tick_limit_and_cleans_up() {
        let mut world = GameWorld::new(SimConfig::default()).unwrap();
        let mut pilot = Pilot::new(3, 0.5);
        let summary = run(&mut world, &mut pilot, &options(250)).unwrap();

        assert!(summary.ticks <= 250);
        assert!(summary.game_over || summary.ticks == 250);
        assert!(!world.is_initialized());
    }

    #[test]
    fn test_sessions_are_reproducible() {
        let play = || {
            let mut world = GameWorld::new(SimConfig {
                seed: 9,
                ..Default::default()
            })
            .unwrap();
            let mut pilot = Pilot::new(4, 0.6);
            run(&mut world, &mut pilot, &options(1500)).unwrap()
        };
        assert_eq!(play(), play());
    }
}
