//! # Connect Four Minimax
//!
//! Connect Four on a fixed 6x7 board against a depth-limited minimax
//! opponent that occasionally plays a random column.
//!
//! ## Modules
//!
//! - [`game`] : Board model, players, rules engine and immutable game state
//! - [`ai`] : Agent trait, bounded minimax search, random agent
//! - [`ui`] : Terminal UI and line-oriented text loop
//! - [`config`] : TOML configuration loading and validation
//! - [`error`] : Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
