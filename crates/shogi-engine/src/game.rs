//! Full game management with history tracking.
//!
//! The [`Game`] struct owns the current position and everything needed to
//! decide the outcome: the rule set, the repetition counts and the move
//! history. A move either fully succeeds or leaves the game untouched.

use crate::config::RulesConfig;
use crate::movegen::is_king_attacked;
use crate::repetition::RepetitionTracker;
use crate::rules::{GameStatus, RuleSet, StandardShogi};
use crate::{GameError, Position};
use shogi_core::{Color, Move, PieceKind, Square};
use tracing::{debug, info};

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move as played.
    pub mov: Move,
    /// Side that made the move.
    pub color: Color,
    /// Kind of the moving piece before any promotion.
    pub piece: PieceKind,
    /// Origin square, `None` for drops.
    pub from: Option<Square>,
    /// Destination square.
    pub to: Square,
    /// Kind of the captured piece as it stood on the board.
    pub captured: Option<PieceKind>,
    /// True if the piece promoted on this move.
    pub promoted: bool,
    /// True if the piece came from the hand.
    pub dropped: bool,
    /// SFEN of the position before the move.
    pub sfen_before: String,
    /// SFEN of the position after the move.
    pub sfen_after: String,
}

/// A complete shogi game with history tracking.
///
/// Unlike [`Position`], which represents a single board state, `Game` tracks
/// the history needed for repetition detection and enforces that no moves
/// are accepted once the game has ended.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Starting position.
    start_pos: Position,
    /// Current status, updated after every move.
    status: GameStatus,
    /// Occurrence counts of every position reached.
    repetitions: RepetitionTracker,
    /// Move history.
    moves: Vec<MoveRecord>,
    rules: StandardShogi,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position and rules.
    pub fn new() -> Self {
        Self::from_rules(StandardShogi::default())
    }

    /// Creates a new game from the starting position with the given rules.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if a rule value is out of range.
    pub fn with_config(config: RulesConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::from_rules(StandardShogi::new(config)))
    }

    fn from_rules(rules: StandardShogi) -> Self {
        let position = rules.initial_position();
        Game {
            repetitions: RepetitionTracker::new(
                position.repetition_key(),
                rules.config().repetition_limit,
            ),
            start_pos: position.clone(),
            position,
            status: GameStatus::InProgress,
            moves: Vec::new(),
            rules,
        }
    }

    /// Creates a game from a custom starting position.
    ///
    /// The position is classified right away, so a game can start in check
    /// or already decided.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidConfig`] if a rule value is out of range
    /// - [`GameError::KingNotFound`] if either side has no king
    /// - [`GameError::InvalidPosition`] if the side not to move is in check
    pub fn from_position(position: Position, config: RulesConfig) -> Result<Self, GameError> {
        config.validate()?;

        for color in Color::ALL {
            if position.king_square(color).is_none() {
                return Err(GameError::KingNotFound(color));
            }
        }
        let waiting = position.side_to_move.opposite();
        if is_king_attacked(&position, waiting) {
            return Err(GameError::InvalidPosition(format!(
                "{} king is attacked but it is {}'s turn",
                waiting, position.side_to_move
            )));
        }

        let rules = StandardShogi::new(config);
        let status = rules.status(&position)?;
        Ok(Game {
            repetitions: RepetitionTracker::new(
                position.repetition_key(),
                config.repetition_limit,
            ),
            start_pos: position.clone(),
            position,
            status,
            moves: Vec::new(),
            rules,
        })
    }

    /// Creates a game from an SFEN string with the default rules.
    pub fn from_sfen(sfen: &str) -> Result<Self, GameError> {
        Self::from_position(Position::from_sfen(sfen)?, RulesConfig::default())
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        &self.start_pos
    }

    /// Returns the rules configuration.
    pub fn config(&self) -> &RulesConfig {
        self.rules.config()
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Returns every legal move in the current position, or none once the
    /// game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.rules.generate_moves(&self.position)
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.rules.is_check(&self.position)
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns how many times the current position has occurred.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.count(&self.position.repetition_key())
    }

    /// Returns the SFEN of the current position.
    pub fn to_sfen(&self) -> String {
        self.position.to_sfen()
    }

    /// Validates and plays a move, returning the resulting status.
    ///
    /// On error the game is unchanged.
    pub fn apply(&mut self, m: Move) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let mover = self.position.side_to_move;
        let (position, effects) = self
            .rules
            .make_move(&self.position, m)
            .map_err(|e| {
                debug!(%mover, mv = %m, error = %e, "move rejected");
                e
            })?;
        let mut status = self.rules.status(&position)?;

        let record = MoveRecord {
            mov: m,
            color: mover,
            piece: effects.piece.kind,
            from: m.from(),
            to: m.to(),
            captured: effects.captured,
            promoted: effects.promoted,
            dropped: m.is_drop(),
            sfen_before: self.position.to_sfen(),
            sfen_after: position.to_sfen(),
        };

        if self.repetitions.record(position.repetition_key()) && !status.is_terminal() {
            status = GameStatus::Draw;
        }

        debug!(%mover, mv = %m, sfen = %record.sfen_after, "move applied");
        if status.is_terminal() {
            info!(%status, ply = self.moves.len() + 1, "game over");
        }

        self.position = position;
        self.status = status;
        self.moves.push(record);
        Ok(status)
    }

    /// Parses and plays a move in `e3e4` / `P*e5` notation.
    pub fn apply_notation(&mut self, notation: &str) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        let m = Move::from_notation(notation)?;
        self.apply(m)
    }

    /// Ends the game with a win for the opponent of `color`.
    pub fn resign(&mut self, color: Color) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        self.status = GameStatus::Win(color.opposite());
        info!(%color, status = %self.status, "resigned");
        Ok(self.status)
    }

    /// Ends the game without a result.
    pub fn abort(&mut self) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        self.status = GameStatus::Aborted;
        info!("game aborted");
        Ok(self.status)
    }
}
