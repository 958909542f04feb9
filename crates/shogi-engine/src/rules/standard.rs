//! Standard shogi rules.

use super::{GameStatus, RuleSet};
use crate::check::{evaluate, leaves_king_safe};
use crate::config::{MateDetection, RulesConfig};
use crate::movegen::{
    drop_destinations, generate_moves, is_king_attacked, legal_destinations, make_move,
    MoveEffects,
};
use crate::{GameError, Position};
use shogi_core::{Move, PieceKind};

/// Standard shogi rules, tuned by a [`RulesConfig`].
///
/// - Standard piece movement and drops
/// - Automatic promotion in the far zone
/// - Captured pieces demote into the capturer's hand
/// - Check and checkmate detection
///
/// The double-pawn and pawn-drop-mate restrictions are not enforced.
#[derive(Debug, Clone, Default)]
pub struct StandardShogi {
    config: RulesConfig,
}

impl StandardShogi {
    /// Creates a rule set with the given configuration.
    pub fn new(config: RulesConfig) -> Self {
        StandardShogi { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl RuleSet for StandardShogi {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        generate_moves(position)
            .into_iter()
            .filter(|&m| self.make_move(position, m).is_ok())
            .collect()
    }

    /// Validates a move in the order: turn, check restriction, reachability
    /// or drop band, own king safety. Then applies it.
    fn make_move(
        &self,
        position: &Position,
        m: Move,
    ) -> Result<(Position, MoveEffects), GameError> {
        let us = position.side_to_move;

        let moving_kind = match m {
            Move::Board { from, .. } => {
                let piece = position
                    .piece_at(from)
                    .ok_or_else(|| GameError::IllegalMove(format!("no piece on {}", from)))?;
                if piece.color != us {
                    return Err(GameError::WrongTurn {
                        mover: piece.color,
                        side_to_move: us,
                    });
                }
                piece.kind
            }
            Move::Drop { kind, .. } => kind,
        };

        let in_check = is_king_attacked(position, us);
        if in_check
            && self.config.mate_detection == MateDetection::KingEscape
            && (m.is_drop() || moving_kind != PieceKind::King)
        {
            return Err(GameError::MustResolveCheck(us));
        }

        match m {
            Move::Board { from, to } => {
                if !legal_destinations(position, from).contains(to) {
                    return Err(GameError::IllegalMove(format!(
                        "{} on {} cannot reach {}",
                        moving_kind, from, to
                    )));
                }
            }
            Move::Drop { kind, to } => {
                if !position.hand(us).contains(kind) {
                    return Err(GameError::EmptyHand { color: us, kind });
                }
                if !drop_destinations(position, us, kind).contains(to) {
                    return Err(GameError::IllegalMove(format!(
                        "{} cannot be dropped on {}",
                        kind, to
                    )));
                }
            }
        }

        if !leaves_king_safe(position, m, self.config.promotion_zone_depth) {
            return Err(if in_check {
                GameError::MustResolveCheck(us)
            } else {
                GameError::IllegalMove(format!("{} leaves the {} king attacked", m, us))
            });
        }

        make_move(position, m, self.config.promotion_zone_depth)
            .ok_or_else(|| GameError::IllegalMove(m.to_notation()))
    }

    fn is_check(&self, position: &Position) -> bool {
        is_king_attacked(position, position.side_to_move)
    }

    fn status(&self, position: &Position) -> Result<GameStatus, GameError> {
        evaluate(
            position,
            self.config.mate_detection,
            self.config.promotion_zone_depth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shogi_core::{Color, SfenParser};

    fn pos(sfen: &str) -> Position {
        Position::from_sfen(sfen).unwrap()
    }

    fn mv(s: &str) -> Move {
        Move::from_notation(s).unwrap()
    }

    #[test]
    fn initial_position() {
        let rules = StandardShogi::default();
        assert_eq!(rules.initial_position().to_sfen(), SfenParser::STARTPOS);
    }

    #[test]
    fn startpos_has_thirty_moves() {
        let rules = StandardShogi::default();
        assert_eq!(rules.generate_moves(&Position::startpos()).len(), 30);
    }

    #[test]
    fn wrong_turn_is_rejected() {
        let rules = StandardShogi::default();
        assert_eq!(
            rules.make_move(&Position::startpos(), mv("e7e6")),
            Err(GameError::WrongTurn {
                mover: Color::White,
                side_to_move: Color::Black,
            })
        );
    }

    #[test]
    fn empty_origin_is_illegal() {
        let rules = StandardShogi::default();
        assert!(matches!(
            rules.make_move(&Position::startpos(), mv("e5e6")),
            Err(GameError::IllegalMove(_))
        ));
    }

    #[test]
    fn unreachable_destination_is_illegal() {
        let rules = StandardShogi::default();
        assert!(matches!(
            rules.make_move(&Position::startpos(), mv("e3e5")),
            Err(GameError::IllegalMove(_))
        ));
    }

    #[test]
    fn drop_without_piece_in_hand_is_illegal() {
        let rules = StandardShogi::default();
        assert_eq!(
            rules.make_move(&Position::startpos(), mv("P*e5")),
            Err(GameError::EmptyHand {
                color: Color::Black,
                kind: PieceKind::Pawn,
            })
        );
    }

    #[test]
    fn pawn_drop_on_last_rank_is_illegal() {
        let rules = StandardShogi::default();
        let position = pos("4k4/9/9/9/9/9/9/9/4K4 b P");
        assert!(matches!(
            rules.make_move(&position, mv("P*a9")),
            Err(GameError::IllegalMove(_))
        ));
        assert!(rules.make_move(&position, mv("P*a8")).is_ok());
    }

    #[test]
    fn knight_drop_on_last_two_ranks_is_illegal() {
        let rules = StandardShogi::default();
        let position = pos("4k4/9/9/9/9/9/9/9/4K4 b N");
        assert!(!rules.is_legal(&position, mv("N*a9")));
        assert!(!rules.is_legal(&position, mv("N*a8")));
        assert!(rules.is_legal(&position, mv("N*a7")));
    }

    #[test]
    fn drop_is_applied() {
        let rules = StandardShogi::default();
        let position = pos("4k4/9/9/9/9/9/9/9/4K4 b S");
        let (after, effects) = rules.make_move(&position, mv("S*e5")).unwrap();
        assert_eq!(after.to_sfen(), "4k4/9/9/9/4S4/9/9/9/4K4 w - 2");
        assert!(!effects.promoted);
        assert_eq!(effects.captured, None);
    }

    #[test]
    fn in_check_only_king_moves_answer() {
        let rules = StandardShogi::default();
        // Rook e9 checks king e1; the gold on a1 could interpose but may not
        let position = pos("k3r4/9/9/9/9/9/9/9/G3K4 b");
        assert_eq!(
            rules.make_move(&position, mv("a1a2")),
            Err(GameError::MustResolveCheck(Color::Black))
        );
        assert!(rules.make_move(&position, mv("e1d1")).is_ok());
    }

    #[test]
    fn in_check_drop_is_rejected() {
        let rules = StandardShogi::default();
        let position = pos("k3r4/9/9/9/9/9/9/9/4K4 b G");
        assert_eq!(
            rules.make_move(&position, mv("G*e2")),
            Err(GameError::MustResolveCheck(Color::Black))
        );
    }

    #[test]
    fn king_move_staying_in_check_is_rejected() {
        let rules = StandardShogi::default();
        let position = pos("k3r4/9/9/9/9/9/9/9/4K4 b");
        assert_eq!(
            rules.make_move(&position, mv("e1e2")),
            Err(GameError::MustResolveCheck(Color::Black))
        );
    }

    #[test]
    fn any_response_allows_interposing() {
        let rules = StandardShogi::new(RulesConfig {
            mate_detection: MateDetection::AnyResponse,
            ..RulesConfig::default()
        });
        let position = pos("k3r4/9/9/9/9/9/9/9/4K4 b G");
        assert!(rules.make_move(&position, mv("G*e2")).is_ok());
        // Dropping elsewhere does not answer the check
        assert_eq!(
            rules.make_move(&position, mv("G*a2")),
            Err(GameError::MustResolveCheck(Color::Black))
        );
    }

    #[test]
    fn pinned_piece_may_not_expose_king() {
        let rules = StandardShogi::default();
        // Black silver e2 is pinned against king e1 by the rook on e9
        let position = pos("k3r4/9/9/9/9/9/9/4S4/4K4 b");
        assert!(!rules.is_check(&position));
        assert!(matches!(
            rules.make_move(&position, mv("e2d3")),
            Err(GameError::IllegalMove(_))
        ));
        assert!(rules.make_move(&position, mv("e2e3")).is_ok());
    }

    #[test]
    fn status_delegates_to_detector() {
        let rules = StandardShogi::default();
        assert_eq!(
            rules.status(&pos("4k4/9/9/9/9/9/4p4/4g4/4K4 b")),
            Ok(GameStatus::Win(Color::White))
        );
        assert_eq!(rules.status(&Position::startpos()), Ok(GameStatus::InProgress));
    }
}
