//! Classic grid snake for the terminal
//!
//! The simulation core (`game` module) is free of any I/O so it can be
//! driven and tested on its own; the `input`, `render` and `app`
//! modules wrap it in a crossterm/ratatui surface that feeds decoded
//! commands in and draws the core's frame snapshots out.

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
