use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use super::grid::{Grid, Point};
use super::snapshot::Rgb;

/// Fill color of the food cell
pub const FOOD_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Pulse speed in radians per second of wall-clock time
const PULSE_RATE: f32 = 6.0;
/// Peak deviation of the pulse scale from 1.0
const PULSE_DEPTH: f32 = 0.15;

/// A single piece of food on the grid
///
/// The generator is seeded once at construction and reused for every
/// spawn, so the spawn sequence stays unpredictable across a session
/// instead of collapsing onto a short reseeded cycle.
#[derive(Debug)]
pub struct Food {
    pub(crate) position: Point,
    rng: StdRng,
    age: Duration,
}

impl Food {
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(StdRng::from_entropy(), grid)
    }

    /// Build over a caller-supplied generator. Lets tests pin the spawn
    /// sequence.
    pub fn with_rng(rng: StdRng, grid: Grid) -> Self {
        let mut food = Self {
            position: Point::new(0, 0),
            rng,
            age: Duration::ZERO,
        };
        food.spawn(grid);
        food
    }

    /// Place the food on a uniformly random cell of the grid
    pub fn spawn(&mut self, grid: Grid) {
        let x = self.rng.gen_range(0..grid.cells_x());
        let y = self.rng.gen_range(0..grid.cells_y());
        self.position = Point::new(x * grid.cell, y * grid.cell);
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Advance the cosmetic pulse. No effect on collision geometry.
    pub fn animate(&mut self, elapsed: Duration) {
        self.age += elapsed;
    }

    /// Render scale factor for the current pulse phase
    pub fn pulse(&self) -> f32 {
        1.0 + PULSE_DEPTH * (self.age.as_secs_f32() * PULSE_RATE).sin()
    }
}
