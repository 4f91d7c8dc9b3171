use super::{rules, Board, LegalActions, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
    InProgress,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// A board snapshot paired with its outcome. Terminal states are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    outcome: GameOutcome,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            outcome: GameOutcome::InProgress,
        }
    }

    /// Wrap an existing board, computing its outcome
    pub fn from_board(board: Board) -> Self {
        GameState {
            board,
            outcome: rules::outcome(&board),
        }
    }

    /// Player to move, derived from the board
    pub fn current_player(&self) -> Player {
        self.board.to_move()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move for the player to move and return the new state
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let board = self
            .board
            .place(self.current_player().to_cell(), column)?;
        Ok(GameState::from_board(board))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
