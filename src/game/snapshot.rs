//! The read-only boundary handed to the presentation layer each frame.
//!
//! The core describes what occupies the grid and with what color; the
//! renderer decides glyphs, shapes and layout on its own.

use super::controller::Phase;
use super::grid::Point;

/// An RGB fill color, independent of any rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One occupied snake cell, ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSprite {
    pub position: Point,
    pub color: Rgb,
}

/// The food cell plus its cosmetic pulse scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodSprite {
    pub position: Point,
    /// Visual scale only; collision uses the unscaled cell
    pub scale: f32,
    pub color: Rgb,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Snake cells in body order, head first
    pub snake: Vec<CellSprite>,
    pub food: FoodSprite,
    pub score: u32,
    pub phase: Phase,
}
