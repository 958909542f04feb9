//! SFEN-style position notation parsing and serialization.
//!
//! A record has up to four whitespace-separated fields:
//! `<placement> [<side> [<hands> [<move number>]]]`. The placement lists
//! row 9 first; within a row, squares run from file a to file i. Digits
//! count empty squares, uppercase letters are Black, lowercase are White,
//! and `+` marks the following piece as promoted.

use crate::{Color, PieceKind};
use thiserror::Error;

/// Errors that can occur when parsing SFEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SfenError {
    #[error("invalid SFEN: expected 1 to 4 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid side to move: expected 'b' or 'w', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid pieces in hand: {0}")]
    InvalidHands(String),

    #[error("invalid move number: {0}")]
    InvalidMoveNumber(String),
}

/// Parsed SFEN data.
///
/// This struct holds the validated SFEN fields. The engine is responsible
/// for converting this into its internal position representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfenParser {
    /// Piece placement (e.g. "lnsgkgsnl/1b5r1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL")
    pub piece_placement: String,
    /// Side to move.
    pub side_to_move: Color,
    /// Pieces in hand (e.g. "2Pb", "-")
    pub hands: String,
    /// Move number, starting at 1.
    pub move_number: u32,
}

impl SfenParser {
    /// The standard starting position.
    pub const STARTPOS: &'static str =
        "lnsgkgsnl/1b5r1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

    /// Parses an SFEN string.
    ///
    /// Missing trailing fields take their defaults: Black to move, empty
    /// hands, move number 1. A side field of `-` also means Black.
    pub fn parse(sfen: &str) -> Result<Self, SfenError> {
        let parts: Vec<&str> = sfen.split_whitespace().collect();

        if parts.is_empty() || parts.len() > 4 {
            return Err(SfenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        Self::validate_piece_placement(piece_placement)?;

        let side_to_move = match parts.get(1).copied() {
            None | Some("-") => Color::Black,
            Some("b") => Color::Black,
            Some("w") => Color::White,
            Some(other) => return Err(SfenError::InvalidSideToMove(other.to_string())),
        };

        let hands = parts.get(2).copied().unwrap_or("-");
        Self::validate_hands(hands)?;

        let move_number = match parts.get(3) {
            Some(n) => n
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| SfenError::InvalidMoveNumber(n.to_string()))?,
            None => 1,
        };

        Ok(SfenParser {
            piece_placement: piece_placement.to_string(),
            side_to_move,
            hands: hands.to_string(),
            move_number,
        })
    }

    fn validate_piece_placement(placement: &str) -> Result<(), SfenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 9 {
            return Err(SfenError::InvalidPiecePlacement(format!(
                "expected 9 rows, got {}",
                rows.len()
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            let row_number = 9 - i;
            let mut squares = 0;
            let mut promoted = false;
            for c in row.chars() {
                if let Some(digit) = c.to_digit(10).filter(|_| !promoted) {
                    squares += digit;
                } else if c == '+' && !promoted {
                    promoted = true;
                } else {
                    match PieceKind::from_sfen_char(c) {
                        Some((kind, _)) if !promoted || kind.can_promote() => {
                            squares += 1;
                            promoted = false;
                        }
                        _ => {
                            return Err(SfenError::InvalidPiecePlacement(format!(
                                "invalid character '{}' in row {}",
                                c, row_number
                            )))
                        }
                    }
                }
            }
            if promoted {
                return Err(SfenError::InvalidPiecePlacement(format!(
                    "dangling '+' in row {}",
                    row_number
                )));
            }
            if squares != 9 {
                return Err(SfenError::InvalidPiecePlacement(format!(
                    "row {} has {} squares, expected 9",
                    row_number, squares
                )));
            }
        }

        Ok(())
    }

    fn validate_hands(hands: &str) -> Result<(), SfenError> {
        Self::hand_entries(hands).map(|_| ())
    }

    /// Decodes a hands field into `(color, kind, count)` entries.
    fn hand_entries(hands: &str) -> Result<Vec<(Color, PieceKind, u32)>, SfenError> {
        if hands == "-" {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut count: Option<u32> = None;
        for c in hands.chars() {
            if let Some(digit) = c.to_digit(10) {
                let next = count.unwrap_or(0) * 10 + digit;
                if next == 0 || next > 18 {
                    return Err(SfenError::InvalidHands(hands.to_string()));
                }
                count = Some(next);
                continue;
            }
            match PieceKind::from_sfen_char(c) {
                Some((kind, color)) if kind.is_droppable() => {
                    entries.push((color, kind, count.take().unwrap_or(1)));
                }
                _ => return Err(SfenError::InvalidHands(hands.to_string())),
            }
        }
        if count.is_some() || entries.is_empty() {
            return Err(SfenError::InvalidHands(hands.to_string()));
        }

        Ok(entries)
    }

    /// Returns the pieces in hand as `(color, kind, count)` entries.
    ///
    /// Fails with [`SfenError::InvalidHands`] if `hands` was modified after
    /// parsing into something malformed.
    pub fn hand_counts(&self) -> Result<Vec<(Color, PieceKind, u32)>, SfenError> {
        Self::hand_entries(&self.hands)
    }

    /// Converts the parsed SFEN back to an SFEN string.
    pub fn to_sfen(&self) -> String {
        format!(
            "{} {} {} {}",
            self.piece_placement,
            self.side_to_move.to_sfen_char(),
            self.hands,
            self.move_number
        )
    }
}

impl Default for SfenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
