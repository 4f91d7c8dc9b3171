//! Win, terminal and utility evaluation over a [`Board`] snapshot.

use super::{Board, Cell, GameOutcome, Player, COLS, ROWS, WIN_LENGTH};
use crate::error::RulesError;

/// Direction vectors as (row, col) steps: right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Find a player with `WIN_LENGTH` tokens in a line.
///
/// Cells are scanned in row-major order and each direction is tried in turn,
/// so if both players have a line (impossible in legal play) the one reported
/// depends on scan order, not on who completed it first.
pub fn winner(board: &Board) -> Option<Player> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let cell = board.get(row, col);
            let Some(player) = cell.player() else {
                continue;
            };
            if DIRECTIONS
                .iter()
                .any(|&(dr, dc)| run_matches(board, row, col, dr, dc, cell))
            {
                return Some(player);
            }
        }
    }
    None
}

/// True when `WIN_LENGTH` cells starting at (row, col) along (dr, dc) all hold `cell`.
fn run_matches(board: &Board, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
    (1..WIN_LENGTH as isize).all(|step| {
        let r = row as isize + dr * step;
        let c = col as isize + dc * step;
        r >= 0
            && c >= 0
            && (r as usize) < ROWS
            && (c as usize) < COLS
            && board.get(r as usize, c as usize) == cell
    })
}

/// True once someone has won or the board is full
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.legal_columns().is_empty()
}

/// Score of a finished game: +1 for an X win, -1 for an O win, 0 for a draw.
pub fn utility(board: &Board) -> Result<i32, RulesError> {
    match outcome(board) {
        GameOutcome::Winner(Player::X) => Ok(1),
        GameOutcome::Winner(Player::O) => Ok(-1),
        GameOutcome::Draw => Ok(0),
        GameOutcome::InProgress => Err(RulesError::NotTerminal),
    }
}

pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = winner(board) {
        GameOutcome::Winner(player)
    } else if board.legal_columns().is_empty() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
