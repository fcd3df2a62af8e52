//! Error types for the gomoku environment

use thiserror::Error;

use crate::gomoku::Action;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The action is not a member of the state's legal positions, either because the cell is
    /// taken or because it lies outside the board.
    #[error("invalid move: {action} is not a legal position")]
    InvalidMove { action: Action },

    #[error("game already over")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid action '{input}': {reason}")]
    ParseAction { input: String, reason: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
