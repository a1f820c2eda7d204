//! GUI module for the Gomoku game
//!
//! A native egui/eframe front end consuming the engine through the
//! place / winner / choose-move contract.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameMode, GameOutcome, GameState};
