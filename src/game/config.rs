use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::grid::Grid;

/// Compiled-in game parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub window_width: i32,
    /// Playfield height in pixels
    pub window_height: i32,
    /// Edge length of one grid cell in pixels
    pub cell_size: i32,
    /// Wall-clock time between grid steps, in milliseconds
    pub move_interval_ms: u64,
    /// Points awarded per food consumed
    pub score_increment: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            cell_size: 20,
            move_interval_ms: 120,
            score_increment: 10,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom playfield size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            ..Default::default()
        }
    }

    /// The playfield derived from the window dimensions
    pub fn grid(&self) -> Grid {
        Grid::new(self.window_width, self.window_height, self.cell_size)
    }

    pub fn move_interval(&self) -> Duration {
        Duration::from_millis(self.move_interval_ms)
    }

    /// A small playfield for tests
    pub fn small() -> Self {
        Self::new(200, 200)
    }
}
