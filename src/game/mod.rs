//! Core Connect Four game logic: board, players, rules and an immutable
//! game state.

mod board;
mod player;
pub mod rules;
mod state;

pub use board::{Board, Cell, LegalActions, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};
