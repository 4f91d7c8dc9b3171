//! Line-oriented game loop: the human plays X from stdin, the minimax
//! opponent answers as O.

use std::io::{BufRead, Write};

use tracing::info;

use crate::ai::{DecisionKind, MinimaxAgent};
use crate::error::PlayError;
use crate::game::{GameOutcome, GameState, Player, COLS};

/// Play one game over the given streams and return how it ended.
///
/// End of input abandons the game and returns `GameOutcome::InProgress`.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    agent: &mut MinimaxAgent,
    announce_random_moves: bool,
) -> Result<GameOutcome, PlayError> {
    let mut state = GameState::initial();
    info!("game started");

    while !state.is_terminal() {
        let Some(column) = read_move(&mut input, &mut output, &state)? else {
            info!("input closed, abandoning game");
            return Ok(state.outcome());
        };
        state = state.apply_move(column)?;

        if !state.is_terminal() {
            let decision = agent.select_move(&state)?;
            if decision.kind == DecisionKind::Random && announce_random_moves {
                writeln!(output, "I'm a crazy AI making a random move!")?;
            }
            state = state.apply_move(decision.column)?;
        }

        write_board(&mut output, &state)?;
        match state.outcome() {
            GameOutcome::Winner(Player::O) => writeln!(output, "AI wins!")?,
            GameOutcome::Winner(Player::X) => writeln!(output, "Player wins!")?,
            GameOutcome::Draw => writeln!(output, "It's a draw!")?,
            GameOutcome::InProgress => {}
        }
    }

    info!(outcome = ?state.outcome(), "game finished");
    Ok(state.outcome())
}

/// Prompt until the human names a playable column. `None` on end of input.
fn read_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    state: &GameState,
) -> Result<Option<usize>, PlayError> {
    let mut line = String::new();
    loop {
        write!(output, "Enter move: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(column) if column < COLS => {
                if state.board().is_column_full(column) {
                    writeln!(output, "Column {column} is full")?;
                    continue;
                }
                return Ok(Some(column));
            }
            _ => writeln!(output, "Please enter a column number 0-{}", COLS - 1)?,
        }
    }
}

fn write_board<W: Write>(output: &mut W, state: &GameState) -> Result<(), PlayError> {
    write!(output, "{}", state.board())?;
    let footer: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();
    writeln!(output, "{}", footer.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cell};
    use std::io::Cursor;

    fn play(script: &str, seed: u64) -> (GameOutcome, String) {
        let mut agent = MinimaxAgent::seeded(seed);
        let mut output = Vec::new();
        let outcome = run(Cursor::new(script), &mut output, &mut agent, true).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (outcome, output) = play("abc\n9\n-1\n3\n", 1);

        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(output.matches("Please enter a column number 0-6").count(), 3);
        // One prompt per line read plus the one that hit end of input
        assert_eq!(output.matches("Enter move: ").count(), 5);
        assert!(output.contains("0 1 2 3 4 5 6"));
    }

    #[test]
    fn test_human_move_and_reply_are_rendered() {
        let (_, output) = play("3\n", 9);
        let rows: Vec<&str> = output
            .lines()
            .filter(|line| line.len() == 2 * COLS - 1 && !line.starts_with('0'))
            .collect();
        let bottom = rows.last().unwrap();
        assert_eq!(bottom.matches('X').count(), 1);
        assert_eq!(
            output.lines().filter(|l| l.contains('O')).count(),
            1,
            "opponent should have placed exactly one token"
        );
    }

    #[test]
    fn test_full_column_reprompts() {
        let mut board = Board::new();
        for _ in 0..3 {
            board = board.place(Cell::X, 0).unwrap();
            board = board.place(Cell::O, 0).unwrap();
        }
        let state = GameState::from_board(board);

        let mut input = Cursor::new("0\n2\n");
        let mut output = Vec::new();
        let column = read_move(&mut input, &mut output, &state).unwrap();

        assert_eq!(column, Some(2));
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Column 0 is full"));
    }

    #[test]
    fn test_scripted_game_reaches_terminal_state() {
        // Cycling through every column always finds a playable one
        let script = "0\n1\n2\n3\n4\n5\n6\n".repeat(30);
        let (outcome, output) = play(&script, 3);

        assert!(outcome.is_terminal(), "game should finish, got {outcome:?}");
        let ending = match outcome {
            GameOutcome::Winner(Player::O) => "AI wins!",
            GameOutcome::Winner(Player::X) => "Player wins!",
            GameOutcome::Draw => "It's a draw!",
            GameOutcome::InProgress => unreachable!(),
        };
        assert!(output.contains(ending));
    }
}
