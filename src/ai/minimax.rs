use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::agent::Agent;
use crate::error::SearchError;
use crate::game::{rules, Board, Cell, GameState, Player};

/// Depth past which a non-terminal position scores 0 without expanding.
/// With a cutoff of 2 the search sees at most 3 plies below the root.
pub const SEARCH_CUTOFF: usize = 2;

/// Chance that the opponent ignores the search and plays a random legal column.
pub const RANDOM_MOVE_PROBABILITY: f64 = 0.3;

/// Value of `board` for X, assuming X is about to place a token.
pub fn best_value_for_maximizer(board: &Board, depth: usize) -> Result<i32, SearchError> {
    if rules::is_terminal(board) {
        return Ok(rules::utility(board)?);
    }
    if depth > SEARCH_CUTOFF {
        return Ok(0);
    }

    let mut best = i32::MIN;
    for column in board.legal_columns() {
        let child = board.place(Cell::X, column)?;
        best = best.max(best_value_for_minimizer(&child, depth + 1)?);
    }
    Ok(best)
}

/// Value of `board` for X, assuming O is about to place a token.
pub fn best_value_for_minimizer(board: &Board, depth: usize) -> Result<i32, SearchError> {
    if rules::is_terminal(board) {
        return Ok(rules::utility(board)?);
    }
    if depth > SEARCH_CUTOFF {
        return Ok(0);
    }

    let mut best = i32::MAX;
    for column in board.legal_columns() {
        let child = board.place(Cell::O, column)?;
        best = best.min(best_value_for_maximizer(&child, depth + 1)?);
    }
    Ok(best)
}

/// How the opponent arrived at its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Chosen by minimax; `value` is the searched value of the resulting board.
    Searched { value: i32 },
    /// Chosen uniformly at random by the override.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub column: usize,
    pub kind: DecisionKind,
}

/// Deterministic minimax move for the player to move on `board`.
///
/// The root value is computed first, then legal columns are tried in
/// ascending order and the first whose child value equals the root value
/// wins. Children are re-searched from depth 0, which can see one ply
/// further than the root did; if no child matches, the best-valued child
/// is played instead.
pub fn search_move(board: &Board) -> Result<Decision, SearchError> {
    let legal = board.legal_columns();
    if legal.is_empty() || rules::is_terminal(board) {
        return Err(SearchError::NoLegalMoves);
    }

    let player = board.to_move();
    let target = match player {
        Player::X => best_value_for_maximizer(board, 0)?,
        Player::O => best_value_for_minimizer(board, 0)?,
    };

    let mut fallback: Option<(usize, i32)> = None;
    for column in legal {
        let child = board.place(player.to_cell(), column)?;
        let value = match player {
            Player::X => best_value_for_minimizer(&child, 0)?,
            Player::O => best_value_for_maximizer(&child, 0)?,
        };
        if value == target {
            debug!(?player, column, target, "search matched target value");
            return Ok(Decision {
                column,
                kind: DecisionKind::Searched { value },
            });
        }

        let improves = match (player, fallback) {
            (_, None) => true,
            (Player::X, Some((_, best))) => value > best,
            (Player::O, Some((_, best))) => value < best,
        };
        if improves {
            fallback = Some((column, value));
        }
    }

    let (column, value) = fallback.ok_or(SearchError::NoLegalMoves)?;
    debug!(?player, column, value, target, "no child matched target, using best child");
    Ok(Decision {
        column,
        kind: DecisionKind::Searched { value },
    })
}

/// Depth-limited minimax opponent with a random-move override.
pub struct MinimaxAgent {
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new() -> Self {
        MinimaxAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        MinimaxAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a column for the player to move.
    ///
    /// With probability [`RANDOM_MOVE_PROBABILITY`] a uniformly random legal
    /// column is played and the search is skipped entirely.
    pub fn select_move(&mut self, state: &GameState) -> Result<Decision, SearchError> {
        let legal = state.legal_actions();
        if legal.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let roll: f64 = self.rng.random();
        if roll < RANDOM_MOVE_PROBABILITY {
            let column = legal[self.rng.random_range(0..legal.len())];
            info!(column, roll, "random override");
            return Ok(Decision {
                column,
                kind: DecisionKind::Random,
            });
        }

        search_move(state.board())
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        self.select_move(state).map(|decision| decision.column)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
