//! Simulation constants and tuning parameters.

/// Nominal tick rate (Hz) of the external clock driving `tick`.
pub const TICK_RATE: u32 = 20;

// --- View ---

/// Playfield width in units.
pub const VIEW_WIDTH: f64 = 256.0;

/// Playfield height in units.
pub const VIEW_HEIGHT: f64 = 256.0;

// --- Collision ---

/// Collision radius per unit of sprite size.
pub const RADIUS_PER_SIZE: f64 = 8.0;

/// Fraction of the summed radii under which two actors collide.
pub const COLLISION_FACTOR: f64 = 0.75;

// --- Ship ---

pub const SHIP_START_X: f64 = 0.0;
pub const SHIP_START_Y: f64 = 128.0;
pub const SHIP_SIZE: f64 = 1.0;

/// Health cap. Repairs never take the ship above this.
pub const SHIP_MAX_HEALTH: i32 = 50;

/// Cabbage energy cap; regenerates by one per tick.
pub const SHIP_MAX_ENERGY: i32 = 30;

/// Energy spent per cabbage.
pub const CABBAGE_ENERGY_COST: i32 = 5;

/// Distance moved per directional key press.
pub const SHIP_STEP: f64 = 6.0;

/// Horizontal offset from the ship at which its shots appear.
pub const SHIP_SHOT_OFFSET: f64 = 12.0;

pub const STARTING_LIVES: u32 = 3;

// --- Projectiles ---

pub const PROJECTILE_SIZE: f64 = 0.5;
pub const CABBAGE_SPEED: f64 = 8.0;
pub const TURNIP_SPEED: f64 = 6.0;
pub const TORPEDO_SPEED: f64 = 8.0;

/// Degrees cabbages and turnips spin per tick.
pub const PROJECTILE_SPIN: i32 = 20;

pub const CABBAGE_DAMAGE: i32 = 2;
pub const TURNIP_DAMAGE: i32 = 2;
pub const TORPEDO_DAMAGE: i32 = 8;

// --- Goodies ---

pub const GOODIE_SIZE: f64 = 0.5;

/// Diagonal drift per tick, applied down and to the left.
pub const GOODIE_DRIFT: f64 = 0.75;

pub const GOODIE_SCORE: u32 = 100;
pub const REPAIR_AMOUNT: i32 = 10;
pub const TORPEDO_REFILL_AMOUNT: i32 = 5;

// --- Aliens ---

pub const ALIEN_SIZE: f64 = 1.5;
pub const ALIEN_SPEED: f64 = 2.0;

/// Speed of a ramming smoregon.
pub const RAM_SPEED: f64 = 5.0;

/// Upper bound of a freshly drawn step budget (lower bound is 1).
pub const MAX_FLIGHT_PLAN: i32 = 32;

/// Vertical half-band in which an alien considers the ship lined up.
pub const ENGAGEMENT_BAND: f64 = 4.0;

/// Horizontal offset from the alien at which its shots appear.
pub const ALIEN_SHOT_OFFSET: f64 = 14.0;

/// Damage an alien takes when the ship flies into it.
pub const RAM_SELF_DAMAGE: i32 = 100;

pub const SMALLGON_BASE_HEALTH: i32 = 5;
pub const SMOREGON_BASE_HEALTH: i32 = 5;
pub const SNAGGLEGON_BASE_HEALTH: i32 = 10;

/// Health bonus per level above the first, as a fraction of base health.
pub const ALIEN_HEALTH_PER_LEVEL: f64 = 0.1;

pub const SMALLGON_SHIP_DAMAGE: i32 = 5;
pub const SMOREGON_SHIP_DAMAGE: i32 = 5;
pub const SNAGGLEGON_SHIP_DAMAGE: i32 = 15;

pub const ALIEN_SCORE: u32 = 250;
pub const SNAGGLEGON_SCORE: u32 = 1000;

// --- Stars & explosions ---

pub const STAR_COUNT: usize = 30;
pub const STAR_SPEED: f64 = 1.0;

/// One star spawns per this many ticks on average.
pub const STAR_SPAWN_ODDS: u32 = 15;

/// Star size is drawn from this range in hundredths.
pub const STAR_SIZE_HUNDREDTHS: (u32, u32) = (5, 50);

pub const EXPLOSION_SIZE: f64 = 1.0;
pub const EXPLOSION_TICKS: u32 = 3;
pub const EXPLOSION_GROWTH: f64 = 1.5;

// --- Draw depths ---

pub const DEPTH_SHIP: u8 = 0;
pub const DEPTH_EXPLOSION: u8 = 0;
pub const DEPTH_PROJECTILE: u8 = 1;
pub const DEPTH_GOODIE: u8 = 1;
pub const DEPTH_ALIEN: u8 = 1;
pub const DEPTH_STAR: u8 = 3;

// --- Level pacing ---

/// Aliens to destroy to clear level `L` is `BASE + PER_LEVEL * L`.
pub const ALIENS_TO_CLEAR_BASE: i32 = 6;
pub const ALIENS_TO_CLEAR_PER_LEVEL: i32 = 4;

/// Concurrent alien cap for level `L` is `floor(BASE + PER_LEVEL * L)`.
pub const MAX_ALIENS_BASE: f64 = 4.0;
pub const MAX_ALIENS_PER_LEVEL: f64 = 0.5;

// --- Alien spawn weights ---

pub const SMALLGON_WEIGHT: u32 = 60;
pub const SMOREGON_WEIGHT_BASE: u32 = 20;
pub const SMOREGON_WEIGHT_PER_LEVEL: u32 = 5;
pub const SNAGGLEGON_WEIGHT_BASE: u32 = 5;
pub const SNAGGLEGON_WEIGHT_PER_LEVEL: u32 = 10;
