//! Deterministic 20×20 grid snake.
//!
//! The simulation lives in [`game`], [`physics`], and [`food`] and is driven
//! one fixed tick at a time; everything it needs from the outside world is a
//! queued direction, a tick call, or a reset. The remaining modules are the
//! terminal host: crossterm input, ratatui rendering, and high-score
//! persistence.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod physics;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod timestep;
pub mod ui;
