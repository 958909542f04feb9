//! Shogi Replay - plays a list of moves and prints each position.
//!
//! Moves use `e3e4` for board moves and `P*e5` for drops. Every position is
//! printed as SFEN, followed by the final game status.

use anyhow::Context;
use clap::Parser;
use shogi_core::SfenParser;
use shogi_engine::{Game, GameStatus, Position, RulesConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shogi Replay - validates and replays a move list.
#[derive(Parser)]
#[command(name = "shogi-replay")]
#[command(about = "Replays shogi moves and prints each resulting position")]
struct Args {
    /// Starting position in SFEN
    #[arg(long, default_value = SfenParser::STARTPOS)]
    sfen: String,

    /// Path to a TOML rules configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the legal moves of the final position
    #[arg(long)]
    list_moves: bool,

    /// Moves to play, e.g. `g3g4 c7c6 P*e5`
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RulesConfig::load(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => RulesConfig::default(),
    };
    tracing::info!(?config, "rules loaded");

    let mut game = new_game(&args.sfen, config)?;
    println!("0. {}", game.to_sfen());

    for line in replay(&mut game, &args.moves)? {
        println!("{}", line);
    }
    println!("{}", game.status());

    if args.list_moves {
        let moves: Vec<String> = game.legal_moves().iter().map(|m| m.to_notation()).collect();
        println!("{}", moves.join(" "));
    }

    Ok(())
}

fn new_game(sfen: &str, config: RulesConfig) -> anyhow::Result<Game> {
    let position = Position::from_sfen(sfen).with_context(|| format!("parsing '{}'", sfen))?;
    Ok(Game::from_position(position, config)?)
}

/// Plays `moves` in order and returns one line per ply.
///
/// Stops at the first rejected move with an error naming it.
fn replay(game: &mut Game, moves: &[String]) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(moves.len());

    for notation in moves {
        let ply = game.ply_count() + 1;
        let status = game
            .apply_notation(notation)
            .with_context(|| format!("move {} ({})", ply, notation))?;

        let mut line = format!("{}. {} {}", ply, notation, game.to_sfen());
        if status != GameStatus::InProgress {
            line.push_str(&format!(" [{}]", status));
        }
        lines.push(line);
    }

    Ok(lines)
}
