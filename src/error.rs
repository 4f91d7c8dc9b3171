use std::path::PathBuf;

/// Errors raised when placing a token or parsing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range")]
    InvalidColumn { column: usize },

    #[error("only X or O tokens can be placed")]
    InvalidPlayer,

    #[error("game is already over")]
    GameOver,

    #[error("invalid symbol {symbol:?} at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },

    #[error("row {row} has {len} cells, expected {expected}")]
    RowLength { row: usize, len: usize, expected: usize },
}

/// Errors raised when the rules engine is asked something the board
/// cannot answer yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("utility requested on a non-terminal board")]
    NotTerminal,
}

/// Errors that can occur while searching for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("move error: {0}")]
    Move(#[from] MoveError),

    #[error("rules error: {0}")]
    Rules(#[from] RulesError),
}

/// Errors that end an interactive game early.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("opponent failed to move: {0}")]
    Search(#[from] SearchError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::ColumnFull { column: 3 };
        assert_eq!(err.to_string(), "column 3 is full");

        let err = MoveError::InvalidSymbol {
            row: 1,
            col: 4,
            symbol: '?',
        };
        assert_eq!(err.to_string(), "invalid symbol '?' at row 1, column 4");

        let err = MoveError::RowLength {
            row: 0,
            len: 5,
            expected: 7,
        };
        assert_eq!(err.to_string(), "row 0 has 5 cells, expected 7");
    }

    #[test]
    fn test_search_error_wraps_sources() {
        let err: SearchError = MoveError::InvalidColumn { column: 9 }.into();
        assert_eq!(err.to_string(), "move error: column 9 is out of range");

        let err: SearchError = RulesError::NotTerminal.into();
        assert_eq!(
            err.to_string(),
            "rules error: utility requested on a non-terminal board"
        );
    }

    #[test]
    fn test_play_error_display() {
        let err: PlayError = SearchError::NoLegalMoves.into();
        assert_eq!(err.to_string(), "opponent failed to move: no legal moves available");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("logging.filter must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: logging.filter must not be empty"
        );
    }
}
