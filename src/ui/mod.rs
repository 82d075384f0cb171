//! Terminal UI widgets layered over the board.

pub mod hud;
pub mod menu;
