//! Shogi rules engine.
//!
//! This crate provides:
//! - [`SquareSet`] - 81-bit set of board squares
//! - [`Position`] - board, hands, side to move and move number
//! - [`Game`] - complete game management with history and repetition tracking
//! - [`RuleSet`] - trait for rule sets, with [`StandardShogi`] as the default
//! - Move generation, check and checkmate detection
//! - [`RulesConfig`] - TOML-loadable rule parameters
//!
//! # Architecture
//!
//! Move generation is split into a movement catalog, a geometric candidate
//! generator and an occupancy filter (see [`movegen`]). The rule set layers
//! turn order, check handling and king safety on top, and [`Game`] adds
//! history, repetition and terminal status.
//!
//! # Example
//!
//! ```
//! use shogi_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.apply_notation("g3g4").unwrap();
//! game.apply_notation("c7c6").unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! println!("Position: {}", game.to_sfen());
//! ```

pub mod check;
mod config;
mod error;
mod game;
pub mod movegen;
mod position;
mod repetition;
pub mod rules;
mod square_set;

pub use config::{ConfigError, MateDetection, RulesConfig};
pub use error::GameError;
pub use game::{Game, MoveRecord};
pub use movegen::{
    attacked_squares, drop_destinations, generate_moves, is_king_attacked, legal_destinations,
    make_move, MoveEffects,
};
pub use position::{Hand, Position};
pub use repetition::RepetitionTracker;
pub use rules::{GameStatus, RuleSet, StandardShogi};
pub use square_set::SquareSet;
