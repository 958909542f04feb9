//! Check and checkmate detection.

use shogi_core::{Color, Move};

use crate::config::MateDetection;
use crate::error::GameError;
use crate::movegen::{
    attacked_squares, generate_moves, is_king_attacked, legal_destinations, make_move,
};
use crate::rules::GameStatus;
use crate::{Position, SquareSet};

/// Returns true if `m` can be carried out and leaves the mover's king unattacked.
pub fn leaves_king_safe(position: &Position, m: Move, promotion_zone_depth: u8) -> bool {
    let us = position.side_to_move;
    match make_move(position, m, promotion_zone_depth) {
        Some((after, _)) => !is_king_attacked(&after, us),
        None => false,
    }
}

/// Returns the squares the king of the side to move can safely go to.
///
/// Starts from the king's filtered destinations minus the opponent's attack
/// set, then replays each one so that squares still covered once the king
/// has stepped off its ray, or guarded pieces it would capture, drop out.
pub fn king_escapes(position: &Position, promotion_zone_depth: u8) -> Result<SquareSet, GameError> {
    let us = position.side_to_move;
    let king = position.king_square(us).ok_or(GameError::KingNotFound(us))?;
    let attacks = attacked_squares(position, us.opposite());

    Ok((legal_destinations(position, king) - attacks)
        .into_iter()
        .filter(|&to| leaves_king_safe(position, Move::board(king, to), promotion_zone_depth))
        .collect())
}

/// Classifies the position for the side to move.
///
/// Returns [`GameStatus::InProgress`] if its king is not attacked,
/// [`GameStatus::Check`] if it is attacked but can be answered, and
/// [`GameStatus::Win`] for the opponent otherwise. What counts as an answer
/// depends on `mate_detection`.
///
/// # Errors
///
/// Returns [`GameError::KingNotFound`] if the side to move has no king.
pub fn evaluate(
    position: &Position,
    mate_detection: MateDetection,
    promotion_zone_depth: u8,
) -> Result<GameStatus, GameError> {
    let us: Color = position.side_to_move;
    let king = position.king_square(us).ok_or(GameError::KingNotFound(us))?;

    if !attacked_squares(position, us.opposite()).contains(king) {
        return Ok(GameStatus::InProgress);
    }

    let can_respond = match mate_detection {
        MateDetection::KingEscape => !king_escapes(position, promotion_zone_depth)?.is_empty(),
        MateDetection::AnyResponse => generate_moves(position)
            .into_iter()
            .any(|m| leaves_king_safe(position, m, promotion_zone_depth)),
    };

    Ok(if can_respond {
        GameStatus::Check(us)
    } else {
        GameStatus::Win(us.opposite())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shogi_core::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn eval(sfen: &str, mode: MateDetection) -> Result<GameStatus, GameError> {
        evaluate(&Position::from_sfen(sfen).unwrap(), mode, 3)
    }

    #[test]
    fn startpos_in_progress() {
        assert_eq!(
            evaluate(&Position::startpos(), MateDetection::KingEscape, 3),
            Ok(GameStatus::InProgress)
        );
    }

    #[test]
    fn missing_king_is_reported() {
        assert_eq!(
            eval("4k4/9/9/9/9/9/9/9/9 b", MateDetection::KingEscape),
            Err(GameError::KingNotFound(Color::Black))
        );
    }

    #[test]
    fn simple_check() {
        // White rook on e9 checks the black king on e1 down the open file
        assert_eq!(
            eval("k3r4/9/9/9/9/9/9/9/4K4 b", MateDetection::KingEscape),
            Ok(GameStatus::Check(Color::Black))
        );
    }

    #[test]
    fn king_on_e1_with_no_escape_loses() {
        // Gold e2 backed by pawn e3 covers d1, f1, d2, f2; e2 itself is guarded.
        assert_eq!(
            eval("4k4/9/9/9/9/9/4p4/4g4/4K4 b", MateDetection::KingEscape),
            Ok(GameStatus::Win(Color::White))
        );
    }

    #[test]
    fn retreat_along_checking_ray_is_not_an_escape() {
        // Rook a5 checks king e5 along the rank; f5 stays on the ray.
        let position = Position::from_sfen("4k4/9/9/9/r3K4/9/9/9/9 b").unwrap();
        let escapes = king_escapes(&position, 3).unwrap();
        assert!(!escapes.contains(sq("f5")));
        assert!(!escapes.contains(sq("d5")));
        assert!(escapes.contains(sq("e6")));
        assert!(escapes.contains(sq("f6")));
    }

    #[test]
    fn capturing_guarded_checker_is_not_an_escape() {
        // Gold e2 checks, guarded by the lance on e9 through an open file.
        let position = Position::from_sfen("4l4/9/9/9/9/9/9/4g4/4K4 b").unwrap();
        let escapes = king_escapes(&position, 3).unwrap();
        assert!(!escapes.contains(sq("e2")));
    }

    #[test]
    fn king_escape_mode_ignores_capture_by_other_piece() {
        // Mate by king moves alone, but the black rook on a2 can take e2.
        let sfen = "4k4/9/9/9/9/9/4p4/R3g4/4K4 b";
        assert_eq!(
            eval(sfen, MateDetection::KingEscape),
            Ok(GameStatus::Win(Color::White))
        );
        assert_eq!(
            eval(sfen, MateDetection::AnyResponse),
            Ok(GameStatus::Check(Color::Black))
        );
    }

    #[test]
    fn any_response_counts_interposing_drops() {
        // Lance e9 checks down the file; the king is boxed in by its own pieces.
        let sfen = "k3l4/9/9/9/9/9/9/3P1P3/3GKG3 b G";
        assert_eq!(
            eval(sfen, MateDetection::KingEscape),
            Ok(GameStatus::Win(Color::White))
        );
        assert_eq!(
            eval(sfen, MateDetection::AnyResponse),
            Ok(GameStatus::Check(Color::Black))
        );
    }

    #[test]
    fn white_can_be_mated_too() {
        // Black gold e8 backed by pawn e7 against the white king on e9
        assert_eq!(
            eval("4k4/4G4/4P4/9/9/9/9/9/4K4 w", MateDetection::KingEscape),
            Ok(GameStatus::Win(Color::Black))
        );
    }
}
