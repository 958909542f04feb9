//! Move representation.

use crate::{PieceKind, Square};
use std::fmt;
use thiserror::Error;

/// Error returned when a move string cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid move notation: '{0}'")]
pub struct NotationError(pub String);

/// A shogi move request: either a board move or a drop from hand.
///
/// Promotion is not part of the request; the executor decides it from the
/// piece and the squares involved.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move the piece standing on `from` to `to`.
    Board { from: Square, to: Square },
    /// Place a piece of `kind` from the mover's hand onto `to`.
    Drop { kind: PieceKind, to: Square },
}

impl Move {
    /// Creates a board move.
    #[inline]
    pub const fn board(from: Square, to: Square) -> Self {
        Move::Board { from, to }
    }

    /// Creates a drop.
    #[inline]
    pub const fn drop(kind: PieceKind, to: Square) -> Self {
        Move::Drop { kind, to }
    }

    /// Returns the origin square, or `None` for drops.
    #[inline]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Board { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match self {
            Move::Board { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// Returns true if this is a drop.
    #[inline]
    pub const fn is_drop(self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    /// Returns the coordinate notation (e.g. `"g3g4"`, `"P*e5"`).
    pub fn to_notation(self) -> String {
        match self {
            Move::Board { from, to } => format!("{}{}", from, to),
            Move::Drop { kind, to } => {
                format!("{}*{}", kind.base_char().to_ascii_uppercase(), to)
            }
        }
    }

    /// Parses coordinate notation: `"<from><to>"` or `"<PIECE>*<to>"`.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        let invalid = || NotationError(s.to_string());

        if let Some((piece, to)) = s.split_once('*') {
            let mut chars = piece.chars();
            let kind = match (chars.next(), chars.next()) {
                (Some(c), None) => PieceKind::from_sfen_char(c).map(|(kind, _)| kind),
                _ => None,
            }
            .filter(|kind| kind.is_droppable())
            .ok_or_else(invalid)?;
            let to = Square::from_algebraic(to).ok_or_else(invalid)?;
            return Ok(Move::Drop { kind, to });
        }

        if s.len() != 4 || !s.is_ascii() {
            return Err(invalid());
        }
        let from = Square::from_algebraic(&s[0..2]).ok_or_else(invalid)?;
        let to = Square::from_algebraic(&s[2..4]).ok_or_else(invalid)?;
        if from == to {
            return Err(invalid());
        }
        Ok(Move::Board { from, to })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
