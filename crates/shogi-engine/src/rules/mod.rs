//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait. The [`Game`](crate::Game)
//! controller is rule-agnostic in how it validates and classifies moves: it
//! delegates that to the active rule set.

mod standard;

pub use standard::StandardShogi;

use crate::movegen::MoveEffects;
use crate::{GameError, Position};
use shogi_core::{Color, Move};
use std::fmt;

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Nobody is in check and the game continues.
    InProgress,
    /// The given side is in check but can still answer it.
    Check(Color),
    /// The given side has won, by checkmate or resignation.
    Win(Color),
    /// The game is drawn by repetition.
    Draw,
    /// The game was abandoned without a result.
    Aborted,
}

impl GameStatus {
    /// Returns true if no further moves can be made.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Win(_) | GameStatus::Draw | GameStatus::Aborted)
    }

    /// Returns the winner, if there is one.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Win(color) => Some(color),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{} in check", color),
            GameStatus::Win(color) => write!(f, "{} wins", color),
            GameStatus::Draw => write!(f, "draw"),
            GameStatus::Aborted => write!(f, "aborted"),
        }
    }
}

/// Trait for implementing shogi rule sets.
///
/// # Example
///
/// ```
/// use shogi_engine::StandardShogi;
/// use shogi_engine::rules::RuleSet;
///
/// let rules = StandardShogi::default();
/// let position = rules.initial_position();
/// let moves = rules.generate_moves(&position);
/// assert_eq!(moves.len(), 30);
/// ```
pub trait RuleSet {
    /// Returns the initial position for this rule set.
    fn initial_position(&self) -> Position;

    /// Generates every move the side to move may play.
    fn generate_moves(&self, position: &Position) -> Vec<Move>;

    /// Validates and applies a move, returning the new position and what
    /// the move did.
    fn make_move(&self, position: &Position, m: Move)
        -> Result<(Position, MoveEffects), GameError>;

    /// Returns true if the given move is legal in the position.
    fn is_legal(&self, position: &Position, m: Move) -> bool {
        self.make_move(position, m).is_ok()
    }

    /// Returns true if the side to move is in check.
    fn is_check(&self, position: &Position) -> bool;

    /// Classifies the position for the side to move.
    ///
    /// Repetition needs the game history and is left to
    /// [`Game`](crate::Game).
    fn status(&self, position: &Position) -> Result<GameStatus, GameError>;
}
