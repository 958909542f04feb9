//! Legality filter: applies board occupancy to geometric candidates.

use shogi_core::{Piece, Square};

use super::catalog::movement_modes;
use super::generator::generate_candidates;
use crate::{Position, SquareSet};

/// Narrows `candidates` to the squares `piece` on `from` may actually move to.
///
/// Step and jump destinations survive unless they hold a piece of the same
/// color. Sliding destinations are found by walking each ray outward from
/// `from`: the walk stops at the first occupied square, which is kept only
/// when it holds an opponent piece.
pub fn filter_candidates(
    position: &Position,
    piece: Piece,
    from: Square,
    candidates: SquareSet,
) -> SquareSet {
    let own = position.occupied_by(piece.color);
    let occupied = position.occupied();
    let mut legal = SquareSet::EMPTY;

    for &movement in movement_modes(piece.kind) {
        for (file_delta, rank_delta) in movement.directions_for(piece.color) {
            if movement.is_sliding() {
                let mut current = from;
                while let Some(next) = current.offset(file_delta, rank_delta) {
                    if candidates.contains(next) && !own.contains(next) {
                        legal.set(next);
                    }
                    if occupied.contains(next) {
                        break;
                    }
                    current = next;
                }
            } else if let Some(to) = from.offset(file_delta, rank_delta) {
                if candidates.contains(to) && !own.contains(to) {
                    legal.set(to);
                }
            }
        }
    }

    legal
}

/// Returns the squares the piece standing on `from` can move to, ignoring
/// whose turn it is and whether its own king would be left in check.
pub fn legal_destinations(position: &Position, from: Square) -> SquareSet {
    match position.piece_at(from) {
        Some(piece) => filter_candidates(position, piece, from, generate_candidates(piece, from)),
        None => SquareSet::EMPTY,
    }
}
