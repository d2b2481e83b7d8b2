use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use xiangqi_core::{perft, Move, Xiangqi, START_FEN};
use xiangqi_referee::{Referee, RefereeConfig};

/// Inspect a Xiangqi position: legal moves, check status and outcome.
#[derive(Parser, Debug)]
struct Arguments {
    #[clap(short, long, default_value = START_FEN)]
    fen: String,

    /// JSON referee config (oracleColor, maxAttempts)
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Moves to play first, e.g. 7-1>7-4
    #[clap(short, long, num_args = 1..)]
    moves: Vec<String>,

    /// Count leaf nodes to this depth
    #[clap(short, long)]
    depth: Option<u8>,

    /// Print the flat snapshot sent to the move oracle
    #[clap(short, long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let arguments = Arguments::parse();

    let config = match &arguments.config {
        Some(path) => RefereeConfig::load(path)?,
        None => RefereeConfig::default(),
    };
    let mut referee = Referee::with_game(Xiangqi::from_fen(&arguments.fen)?, config)?;

    for text in &arguments.moves {
        let mv = Move::parse(text).ok_or_else(|| format!("cannot parse move '{text}'"))?;
        referee.play(mv)?;
    }

    let game = referee.game();
    print!("{}", game.board());
    println!("{}", game.fen());

    let check = if game.in_check() { "in check" } else { "to play" };
    println!("{} {check} - {} legal moves", game.turn(), game.moves().len());
    println!("outcome: {}", game.outcome());
    if referee.oracle_to_move() {
        println!("waiting on oracle ({})", referee.config().oracle_color);
    }

    if let Some(depth) = arguments.depth {
        println!("perft({depth}) = {}", perft(game.board(), game.turn(), depth));
    }

    if arguments.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    }

    Ok(())
}
