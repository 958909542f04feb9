//! Geometric candidate generation, blind to occupancy.

use shogi_core::{Piece, Square};

use super::catalog::movement_modes;
use crate::SquareSet;

/// Returns every square `piece` could reach from `from` on an empty board.
///
/// Step and jump modes contribute at most one square per direction; sliding
/// modes contribute the whole ray up to the board edge. Squares off the
/// board are dropped, never wrapped.
pub fn generate_candidates(piece: Piece, from: Square) -> SquareSet {
    let mut candidates = SquareSet::EMPTY;

    for &movement in movement_modes(piece.kind) {
        for (file_delta, rank_delta) in movement.directions_for(piece.color) {
            if movement.is_sliding() {
                let mut current = from;
                while let Some(next) = current.offset(file_delta, rank_delta) {
                    candidates.set(next);
                    current = next;
                }
            } else if let Some(to) = from.offset(file_delta, rank_delta) {
                candidates.set(to);
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shogi_core::{Color, PieceKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn squares(list: &[&str]) -> SquareSet {
        list.iter().map(|s| sq(s)).collect()
    }

    #[test]
    fn pawn_steps_forward_by_color() {
        let black = Piece::new(Color::Black, PieceKind::Pawn);
        let white = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(generate_candidates(black, Square::E5), squares(&["e6"]));
        assert_eq!(generate_candidates(white, Square::E5), squares(&["e4"]));
    }

    #[test]
    fn pawn_on_last_rank_has_no_candidates() {
        let black = Piece::new(Color::Black, PieceKind::Pawn);
        assert!(generate_candidates(black, Square::E9).is_empty());
    }

    #[test]
    fn knight_jumps_two_forward() {
        let black = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(
            generate_candidates(black, sq("b1")),
            squares(&["a3", "c3"])
        );
        // clipped on the a-file
        assert_eq!(generate_candidates(black, Square::A1), squares(&["b3"]));
        let white = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(
            generate_candidates(white, sq("h9")),
            squares(&["g7", "i7"])
        );
    }

    #[test]
    fn silver_and_gold_shapes() {
        let silver = Piece::new(Color::Black, PieceKind::Silver);
        assert_eq!(
            generate_candidates(silver, Square::E5),
            squares(&["d6", "e6", "f6", "d4", "f4"])
        );
        let gold = Piece::new(Color::White, PieceKind::Gold);
        assert_eq!(
            generate_candidates(gold, Square::E5),
            squares(&["d4", "e4", "f4", "d5", "f5", "e6"])
        );
    }

    #[test]
    fn king_in_corner() {
        let king = Piece::new(Color::Black, PieceKind::King);
        assert_eq!(
            generate_candidates(king, Square::A1),
            squares(&["a2", "b1", "b2"])
        );
    }

    #[test]
    fn lance_slides_to_edge() {
        let lance = Piece::new(Color::Black, PieceKind::Lance);
        assert_eq!(
            generate_candidates(lance, Square::E5),
            squares(&["e6", "e7", "e8", "e9"])
        );
    }

    #[test]
    fn rook_covers_file_and_rank() {
        let rook = Piece::new(Color::Black, PieceKind::Rook);
        assert_eq!(generate_candidates(rook, Square::E5).count(), 16);
    }

    #[test]
    fn dragon_and_horse_add_single_steps() {
        let dragon = Piece::new(Color::Black, PieceKind::Dragon);
        assert_eq!(generate_candidates(dragon, Square::E5).count(), 20);
        let horse = Piece::new(Color::Black, PieceKind::Horse);
        // 16 diagonal squares from e5 plus the four orthogonal neighbours
        assert_eq!(generate_candidates(horse, Square::E5).count(), 20);
    }

    fn any_piece() -> impl Strategy<Value = Piece> {
        (0usize..14, prop::bool::ANY).prop_map(|(kind, black)| {
            let color = if black { Color::Black } else { Color::White };
            Piece::new(color, PieceKind::ALL[kind])
        })
    }

    proptest! {
        #[test]
        fn candidates_stay_on_board_and_never_alias_origin(
            piece in any_piece(),
            index in 0u8..81,
        ) {
            let from = Square::from_index(index).unwrap();
            let candidates = generate_candidates(piece, from);
            prop_assert!(!candidates.contains(from));
            prop_assert_eq!(candidates - SquareSet::FULL, SquareSet::EMPTY);
            for to in candidates {
                prop_assert!(to.index() < 81);
            }
        }
    }
}
