//! Errors raised while applying moves.

use crate::config::ConfigError;
use shogi_core::{Color, NotationError, PieceKind, SfenError};
use thiserror::Error;

/// Error type for move execution and game operations.
///
/// Every variant except [`GameError::KingNotFound`] is a validation failure:
/// the game is left exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move string could not be parsed.
    #[error(transparent)]
    InvalidNotation(#[from] NotationError),

    /// The position string could not be parsed.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// The rules configuration has out-of-range values.
    #[error("invalid rules: {0}")]
    InvalidConfig(String),

    /// The piece belongs to the side that is not on move.
    #[error("it is {side_to_move}'s turn, cannot move a {mover} piece")]
    WrongTurn { mover: Color, side_to_move: Color },

    /// The mover is in check and the move does not answer it.
    #[error("{0} is in check and must resolve it")]
    MustResolveCheck(Color),

    /// The destination is not reachable for the piece, or the drop is not allowed.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A drop names a kind the mover does not hold.
    #[error("{color} has no {kind} in hand")]
    EmptyHand { color: Color, kind: PieceKind },

    /// A king is missing during check evaluation. This signals a broken
    /// position, not a game outcome.
    #[error("no {0} king on the board")]
    KingNotFound(Color),

    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

impl From<SfenError> for GameError {
    fn from(e: SfenError) -> Self {
        GameError::InvalidPosition(e.to_string())
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        GameError::InvalidConfig(e.to_string())
    }
}
