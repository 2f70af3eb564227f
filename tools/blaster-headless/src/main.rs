//! blaster-headless: runs the blaster game world without a screen.
//!
//! A seeded random pilot plays through levels while the world's status line
//! is logged. Useful for soak testing and for reproducing a seed.
//!
//! Usage:
//!   blaster-headless --seed 7 --ticks 5000
//!   RUST_LOG=debug blaster-headless --config game.json --realtime

mod logging;
mod session;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use blaster_core::constants::TICK_RATE;
use blaster_sim::{GameWorld, SimConfig};

use crate::session::{Pilot, SessionOptions};

#[derive(Parser)]
#[command(name = "blaster-headless")]
#[command(about = "Play the blaster game world headlessly with a random pilot")]
struct Args {
    /// JSON file holding a `SimConfig`; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// World RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting level (overrides the config file)
    #[arg(long)]
    level: Option<u32>,

    /// Starting lives (overrides the config file)
    #[arg(long)]
    lives: Option<u32>,

    /// Remove goodies that drift off screen
    #[arg(long)]
    cull_goodies: bool,

    /// Maximum number of ticks to play
    #[arg(long, default_value_t = 5000)]
    ticks: u64,

    /// Seed for the pilot's key presses
    #[arg(long, default_value_t = 1)]
    pilot_seed: u64,

    /// Chance the pilot presses a key on each tick
    #[arg(long, default_value_t = 0.6)]
    press_odds: f64,

    /// Log the status line every N ticks (0 to disable)
    #[arg(long, default_value_t = TICK_RATE as u64)]
    report_every: u64,

    /// Hold the nominal tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    if !args.press_odds.is_finite() {
        bail!("--press-odds must be a finite number, got {}", args.press_odds);
    }
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(level) = args.level {
        config.starting_level = level;
    }
    if let Some(lives) = args.lives {
        config.starting_lives = lives;
    }
    config.cull_offscreen_goodies |= args.cull_goodies;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(&args)?;
    log::info!("starting with {config:?}");
    let mut world = GameWorld::new(config)?;
    let mut pilot = Pilot::new(args.pilot_seed, args.press_odds);
    let options = SessionOptions {
        max_ticks: args.ticks,
        report_every: args.report_every,
        realtime: args.realtime,
    };

    let summary = session::run(&mut world, &mut pilot, &options)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
