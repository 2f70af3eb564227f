//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{COLLISION_FACTOR, RADIUS_PER_SIZE};

/// Placement of an actor on screen.
///
/// Screen space is `VIEW_WIDTH` x `VIEW_HEIGHT` units with the origin at the
/// lower-left corner; x grows to the right and y grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    /// Sprite facing in degrees, `0..360`. Cosmetic for everything but sprites.
    pub facing: u16,
    /// Radius scaling factor.
    pub size: f64,
    /// Draw depth (0 = front).
    pub depth: u8,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl Body {
    pub fn new(x: f64, y: f64, size: f64, depth: u8) -> Self {
        Self {
            pos: DVec2::new(x, y),
            facing: 0,
            size,
            depth,
        }
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pos = DVec2::new(x, y);
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.pos += DVec2::new(dx, dy);
    }

    /// Set the facing, wrapping into `0..360`.
    pub fn set_facing(&mut self, degrees: i32) {
        self.facing = degrees.rem_euclid(360) as u16;
    }

    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    /// Collision radius derived from size.
    pub fn radius(&self) -> f64 {
        RADIUS_PER_SIZE * self.size
    }

    /// Euclidean distance between centres.
    pub fn distance_to(&self, other: &Body) -> f64 {
        self.pos.distance(other.pos)
    }

    /// Strictly closer than `COLLISION_FACTOR` of the summed radii.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.distance_to(other) < COLLISION_FACTOR * (self.radius() + other.radius())
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Elapsed time in seconds at the nominal tick rate.
    pub fn elapsed_secs(&self) -> f64 {
        self.tick as f64 / crate::constants::TICK_RATE as f64
    }
}
