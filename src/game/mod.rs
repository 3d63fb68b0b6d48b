//! Core simulation module
//!
//! Everything in here is free of I/O and terminal dependencies: the
//! shell feeds decoded commands and elapsed time in, and takes a
//! renderable snapshot out.

pub mod command;
pub mod config;
pub mod controller;
pub mod food;
pub mod grid;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use command::{Command, Direction};
pub use config::GameConfig;
pub use controller::{CollisionKind, GameController, Phase, StepReport};
pub use food::Food;
pub use grid::{Grid, Point};
pub use snake::Snake;
pub use snapshot::{CellSprite, FoodSprite, FrameSnapshot, Rgb};
