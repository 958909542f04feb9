//! Move generation.
//!
//! This module is layered the way a move is reasoned about:
//! - [`catalog`] maps each piece kind to its movement modes
//! - [`generator`] expands modes into on-board candidate squares
//! - [`filter`] applies occupancy and ray blocking to those candidates
//!
//! On top of that it provides attack sets, drop bands, pseudo-legal move
//! listing and mechanical move application.

pub mod catalog;
pub mod filter;
pub mod generator;

use crate::{Position, SquareSet};
use shogi_core::{Color, Move, Piece, PieceKind, Square};

pub use catalog::{is_sliding_kind, movement_modes, Movement};
pub use filter::{filter_candidates, legal_destinations};
pub use generator::generate_candidates;

/// Returns the union of every square `by` could move a piece to, ignoring turn.
pub fn attacked_squares(position: &Position, by: Color) -> SquareSet {
    position
        .pieces_of(by)
        .fold(SquareSet::EMPTY, |attacks, (sq, piece)| {
            attacks | filter_candidates(position, piece, sq, generate_candidates(piece, sq))
        })
}

/// Returns true if the given square is attacked by the given color.
pub fn is_square_attacked(position: &Position, sq: Square, by: Color) -> bool {
    position.pieces_of(by).any(|(from, piece)| {
        filter_candidates(
            position,
            piece,
            from,
            generate_candidates(piece, from) & SquareSet::from_square(sq),
        )
        .contains(sq)
    })
}

/// Returns true if the king of the given color is on the board and attacked.
pub fn is_king_attacked(position: &Position, king_color: Color) -> bool {
    match position.king_square(king_color) {
        Some(sq) => is_square_attacked(position, sq, king_color.opposite()),
        None => false,
    }
}

/// Returns the squares where `color` may drop a piece of `kind`.
///
/// The square must be empty, and pawns and lances may not be dropped on the
/// last rank nor knights on the last two, where they could never move.
pub fn drop_destinations(position: &Position, color: Color, kind: PieceKind) -> SquareSet {
    let dead_ranks = match kind {
        PieceKind::Pawn | PieceKind::Lance => SquareSet::far_ranks(color, 1),
        PieceKind::Knight => SquareSet::far_ranks(color, 2),
        _ => SquareSet::EMPTY,
    };
    !position.occupied() - dead_ranks
}

/// Returns the promotion band of `color`: the `depth` ranks farthest from it.
#[inline]
pub fn promotion_zone(color: Color, depth: u8) -> SquareSet {
    SquareSet::far_ranks(color, depth)
}

/// Generates every pseudo-legal move for the side to move: board moves that
/// pass the legality filter and drops into the allowed bands. Moves that
/// leave the mover's king attacked are included.
pub fn generate_moves(position: &Position) -> Vec<Move> {
    let us = position.side_to_move;
    let mut moves = Vec::new();

    for (from, _) in position.pieces_of(us) {
        for to in legal_destinations(position, from) {
            moves.push(Move::board(from, to));
        }
    }

    for kind in position.hand(us).kinds() {
        for to in drop_destinations(position, us, kind) {
            moves.push(Move::drop(kind, to));
        }
    }

    moves
}

/// What a move did to the board, for move records and notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffects {
    /// The piece as it stood before moving (or as dropped).
    pub piece: Piece,
    /// Kind of the captured piece as it stood on the board.
    pub captured: Option<PieceKind>,
    /// True if the mover promoted.
    pub promoted: bool,
}

/// Applies a move mechanically and returns the new position.
///
/// No rules are checked beyond what is needed to carry the move out: the
/// origin must hold a piece of the side to move, the destination must not
/// hold one of its own, and a dropped kind must be in hand. Returns `None`
/// otherwise. A captured piece is demoted into the mover's hand; a
/// promotable piece promotes when its origin or destination lies in the
/// `promotion_zone_depth`-deep band.
pub fn make_move(
    position: &Position,
    m: Move,
    promotion_zone_depth: u8,
) -> Option<(Position, MoveEffects)> {
    let mut new_pos = position.clone();
    let us = position.side_to_move;

    let effects = match m {
        Move::Board { from, to } => {
            let piece = position.piece_at(from).filter(|p| p.color == us)?;
            let target = position.piece_at(to);
            if target.is_some_and(|t| t.color == us) {
                return None;
            }

            new_pos.remove(from);
            if let Some(captured) = target {
                new_pos.hand_mut(us).push(captured.kind);
            }

            let zone = promotion_zone(us, promotion_zone_depth);
            let promoted_kind = piece
                .kind
                .promote()
                .filter(|_| zone.contains(from) || zone.contains(to));
            let kind = promoted_kind.unwrap_or(piece.kind);
            new_pos.put(to, Piece::new(us, kind));

            MoveEffects {
                piece,
                captured: target.map(|t| t.kind),
                promoted: promoted_kind.is_some(),
            }
        }
        Move::Drop { kind, to } => {
            if position.piece_at(to).is_some() || !new_pos.hand_mut(us).take(kind) {
                return None;
            }
            let piece = Piece::new(us, kind);
            new_pos.put(to, piece);

            MoveEffects {
                piece,
                captured: None,
                promoted: false,
            }
        }
    };

    new_pos.move_number += 1;
    new_pos.side_to_move = us.opposite();

    Some((new_pos, effects))
}
