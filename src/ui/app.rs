use crate::ai::{DecisionKind, MinimaxAgent};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{info, warn};

/// Terminal front end: the human plays X, the minimax opponent replies as O.
pub struct App {
    game_state: GameState,
    agent: MinimaxAgent,
    announce_random_moves: bool,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(agent: MinimaxAgent, announce_random_moves: bool) -> Self {
        App {
            game_state: GameState::initial(),
            agent,
            announce_random_moves,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let column = c as usize - '0' as usize;
                if column < COLS {
                    self.selected_column = column;
                    self.play_turn();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_turn();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::initial();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
                info!("game restarted");
            }
            _ => {}
        }
    }

    /// Drop the human's token in the selected column, then let the opponent reply
    fn play_turn(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move(self.selected_column) {
            Ok(next) => self.game_state = next,
            Err(MoveError::ColumnFull { column }) => {
                self.message = Some(format!("Column {column} is full!"));
                return;
            }
            Err(err) => {
                self.message = Some(err.to_string());
                return;
            }
        }

        if !self.game_state.is_terminal() {
            self.opponent_turn();
        }

        if let Some(text) = outcome_message(self.game_state.outcome()) {
            info!(outcome = ?self.game_state.outcome(), "game finished");
            self.message = Some(text.to_string());
        }
    }

    fn opponent_turn(&mut self) {
        let decision = match self.agent.select_move(&self.game_state) {
            Ok(decision) => decision,
            Err(err) => {
                warn!(%err, "opponent could not move");
                self.message = Some(format!("Opponent error: {err}"));
                return;
            }
        };

        match self.game_state.apply_move(decision.column) {
            Ok(next) => {
                self.game_state = next;
                self.message = Some(
                    if decision.kind == DecisionKind::Random && self.announce_random_moves {
                        format!("I'm a crazy AI making a random move! (column {})", decision.column)
                    } else {
                        format!("Opponent played column {}", decision.column)
                    },
                );
            }
            Err(err) => {
                warn!(%err, column = decision.column, "opponent chose an unplayable column");
                self.message = Some(format!("Opponent error: {err}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

fn outcome_message(outcome: GameOutcome) -> Option<&'static str> {
    match outcome {
        GameOutcome::Winner(Player::X) => Some("Player wins!"),
        GameOutcome::Winner(Player::O) => Some("AI wins!"),
        GameOutcome::Draw => Some("It's a draw!"),
        GameOutcome::InProgress => None,
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MinimaxAgent::new(), true)
    }
}
