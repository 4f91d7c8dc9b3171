//! Front ends: a ratatui game view and a line-oriented text loop.

mod app;
mod game_view;
pub mod text;

pub use app::App;
