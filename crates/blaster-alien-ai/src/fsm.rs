//! Alien flight finite state machine.
//!
//! Pure functions that compute heading changes, engagement decisions and
//! movement for one alien per tick. No ECS dependency; randomness comes
//! from the caller's RNG so the simulation stays deterministic per seed.

use glam::DVec2;
use rand::Rng;

use blaster_core::components::AlienState;
use blaster_core::constants::*;
use blaster_core::enums::{AlienKind, GoodieKind, Heading};

use crate::profiles::{get_profile, DropTable, Movement, RamStyle, Shot};

/// Input to the FSM for a single alien.
pub struct AlienContext {
    pub state: AlienState,
    pub pos: DVec2,
    pub health: i32,
    pub level: u32,
    pub ship_pos: DVec2,
}

/// What the alien did this tick, beyond updating its own flight state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlienAction {
    /// Health ran out. The caller awards `score`, kills it and rolls its drop.
    Destroyed { score: u32 },
    /// Flew off the left edge; dies worth nothing.
    Escaped,
    /// Fired instead of moving.
    Fired(Shot),
    Moved,
}

/// Output from the FSM.
pub struct AlienUpdate {
    pub new_state: AlienState,
    pub new_pos: DVec2,
    pub action: AlienAction,
}

/// True with probability `1 / odds`.
pub fn one_in<R: Rng + ?Sized>(rng: &mut R, odds: u32) -> bool {
    rng.gen_range(1..=odds.max(1)) == 1
}

/// Level-scaled health: `base * (1 + 0.1 * (level - 1))`, truncated.
pub fn scaled_health(kind: AlienKind, level: u32) -> i32 {
    let base = get_profile(kind).base_health as f64;
    let bonus = ALIEN_HEALTH_PER_LEVEL * level.saturating_sub(1) as f64;
    (base * (1.0 + bonus)) as i32
}

/// Denominator of the per-tick shoot and ram chances: `20 / level + 5`.
pub fn engagement_odds(level: u32) -> u32 {
    20 / level.max(1) + 5
}

/// Flight state for a freshly spawned alien.
pub fn initial_state<R: Rng + ?Sized>(kind: AlienKind, rng: &mut R) -> AlienState {
    let movement = get_profile(kind).movement;
    let (heading, steps_left) = fresh_heading(movement, rng);
    let heading = match movement {
        Movement::Drift => heading,
        Movement::Bounce => Heading::DownLeft,
    };
    AlienState {
        kind,
        heading,
        steps_left,
        speed: ALIEN_SPEED,
    }
}

/// Draw a new heading and step budget in `1..=MAX_FLIGHT_PLAN`.
pub fn fresh_heading<R: Rng + ?Sized>(movement: Movement, rng: &mut R) -> (Heading, i32) {
    let heading = match movement {
        Movement::Drift => Heading::ALL[rng.gen_range(0..Heading::ALL.len())],
        Movement::Bounce => {
            if rng.gen_bool(0.5) {
                Heading::DownLeft
            } else {
                Heading::UpLeft
            }
        }
    };
    (heading, rng.gen_range(1..=MAX_FLIGHT_PLAN))
}

/// Draw a heading that is not `excluded`, with a fresh step budget.
///
/// Bounce movers have only one diagonal left, so they simply reverse.
pub fn heading_other_than<R: Rng + ?Sized>(
    movement: Movement,
    excluded: Heading,
    rng: &mut R,
) -> (Heading, i32) {
    let heading = match (movement, excluded) {
        (Movement::Bounce, Heading::DownLeft) => Heading::UpLeft,
        (Movement::Bounce, _) => Heading::DownLeft,
        (Movement::Drift, _) => {
            let options: Vec<Heading> = Heading::ALL
                .into_iter()
                .filter(|h| *h != excluded)
                .collect();
            options[rng.gen_range(0..options.len())]
        }
    };
    (heading, rng.gen_range(1..=MAX_FLIGHT_PLAN))
}

/// Roll a drop table.
pub fn roll_drop<R: Rng + ?Sized>(table: DropTable, rng: &mut R) -> Option<GoodieKind> {
    match table {
        DropTable::Nothing => None,
        DropTable::EitherOf {
            odds,
            first,
            second,
        } => {
            if !one_in(rng, odds) {
                return None;
            }
            if one_in(rng, 2) {
                Some(first)
            } else {
                Some(second)
            }
        }
        DropTable::OneInN { odds, goodie } => one_in(rng, odds).then_some(goodie),
    }
}

/// Whether the ship is ahead of the alien (to its left) and lined up
/// within `ENGAGEMENT_BAND` vertically.
pub fn ship_in_sights(alien: DVec2, ship: DVec2) -> bool {
    ship.x < alien.x && ship.y >= alien.y - ENGAGEMENT_BAND && ship.y <= alien.y + ENGAGEMENT_BAND
}

/// Evaluate one tick of the FSM for one alien.
pub fn evaluate<R: Rng + ?Sized>(ctx: &AlienContext, rng: &mut R) -> AlienUpdate {
    let profile = get_profile(ctx.state.kind);
    let mut state = ctx.state;

    if ctx.health <= 0 {
        return AlienUpdate {
            new_state: state,
            new_pos: ctx.pos,
            action: AlienAction::Destroyed {
                score: profile.death_score,
            },
        };
    }

    if ctx.pos.x <= 0.0 {
        return AlienUpdate {
            new_state: state,
            new_pos: ctx.pos,
            action: AlienAction::Escaped,
        };
    }

    if state.steps_left <= 0 {
        (state.heading, state.steps_left) = fresh_heading(profile.movement, rng);
    }

    if ctx.pos.y <= 0.0 {
        (state.heading, state.steps_left) =
            heading_other_than(profile.movement, Heading::DownLeft, rng);
    } else if ctx.pos.y >= VIEW_HEIGHT - 1.0 {
        (state.heading, state.steps_left) =
            heading_other_than(profile.movement, Heading::UpLeft, rng);
    }

    // Shooting ends the tick; the ram roll only happens when the shot roll fails.
    if ship_in_sights(ctx.pos, ctx.ship_pos) {
        let odds = engagement_odds(ctx.level);
        if one_in(rng, odds) {
            return AlienUpdate {
                new_state: state,
                new_pos: ctx.pos,
                action: AlienAction::Fired(profile.shot),
            };
        } else if one_in(rng, odds) {
            ram(&mut state, profile.ram);
        }
    }

    let new_pos = advance(&mut state, profile.movement, ctx.pos);
    AlienUpdate {
        new_state: state,
        new_pos,
        action: AlienAction::Moved,
    }
}

fn ram(state: &mut AlienState, style: RamStyle) {
    match style {
        RamStyle::None => {}
        RamStyle::Charge => {
            state.heading = Heading::Left;
            state.speed = RAM_SPEED;
            state.steps_left = VIEW_WIDTH as i32;
        }
    }
}

/// Apply one step of movement along the current heading.
fn advance(state: &mut AlienState, movement: Movement, pos: DVec2) -> DVec2 {
    // Bounce movers never spend their budget.
    if movement == Movement::Drift {
        state.steps_left -= 1;
    }
    pos + DVec2::new(-state.speed, state.heading.dy() * state.speed)
}
