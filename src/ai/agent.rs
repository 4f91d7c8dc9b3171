use crate::error::SearchError;
use crate::game::GameState;

/// Universal interface for automated players.
pub trait Agent {
    /// Select a column for the player to move in `state`.
    ///
    /// Fails with [`SearchError::NoLegalMoves`] on a terminal state.
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
