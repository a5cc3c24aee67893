use std::str::FromStr;

use clap::Parser;
use lianliankan::{BoardStatus, Game, GameMode, MoveOutcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Deal a board and play it out with hints
#[derive(Parser, Debug)]
#[command(name = "solver")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board preset: easy, normal or hard
    #[arg(short, long, default_value = "normal", value_parser = GameMode::from_str)]
    mode: GameMode,

    /// Seed for dealing and shuffling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many reshuffles
    #[arg(short, long, default_value_t = 10)]
    reshuffles: usize,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = args.mode.config();
    let mut game = match args.seed {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    };

    info!(mode = %args.mode, seed = ?args.seed, "dealt");
    println!("{}", game.board());

    let mut matches = 0usize;
    let mut reshuffles = 0usize;
    let mut status = game.status();

    while status != BoardStatus::Cleared {
        if status == BoardStatus::Stuck {
            if reshuffles == args.reshuffles {
                warn!(reshuffles, remaining = game.board().active_count(), "out of reshuffles");
                println!("stuck after {matches} matches, {} tiles left", game.board().active_count());
                std::process::exit(1);
            }
            reshuffles += 1;
            status = game.reshuffle();
            info!(reshuffles, ?status, "reshuffled");
            println!("{}", game.board());
            continue;
        }

        let Some((a, b)) = game.hint() else {
            status = BoardStatus::Stuck;
            continue;
        };

        game.select(a).expect("hinted tile is on the board");
        match game.select(b) {
            Ok(MoveOutcome::Matched { path, status: after }) => {
                matches += 1;
                println!("{path}");
                println!("{}", game.board());
                game.acknowledge();
                status = after;
            }
            other => unreachable!("hinted pair did not match: {other:?}"),
        }
    }

    println!("cleared in {matches} matches with {reshuffles} reshuffles");
}
