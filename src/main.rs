//! Analyze a position and print the engine's reply.
//!
//! Usage: `chess_ai [FEN] [MILLISECONDS]`. Both arguments are optional and
//! default to the starting position and one second. Log output goes to
//! stderr, filtered by the `CHESS_AI_LOG` environment variable (an
//! `EnvFilter` directive such as `debug` or `chess_ai=trace`).

use std::process::ExitCode;
use std::time::Duration;

use chess_ai::board::STARTING_FEN;
use chess_ai::{request_ai_move, AiReply, Board, SearchConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_BUDGET_MS: u64 = 1000;
const LOG_ENV: &str = "CHESS_AI_LOG";

/// Install a stderr subscriber. The library logs through `log`, which the
/// subscriber picks up via its `tracing-log` bridge.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        eprintln!("logger unavailable: {err}");
    }
}

fn main() -> ExitCode {
    init_logging();

    let mut args = std::env::args().skip(1);
    let fen = args.next().unwrap_or_else(|| STARTING_FEN.to_string());
    let budget_ms = match args.next().map(|arg| arg.parse::<u64>()) {
        None => DEFAULT_BUDGET_MS,
        Some(Ok(ms)) => ms,
        Some(Err(err)) => {
            eprintln!("invalid time budget: {err}");
            return ExitCode::FAILURE;
        }
    };

    let board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid FEN: {err}");
            return ExitCode::FAILURE;
        }
    };

    match request_ai_move(&board, &SearchConfig::default(), Duration::from_millis(budget_ms)) {
        AiReply::Move(result) => {
            println!("bestmove {}", result.best_move);
            println!(
                "score {} depth {} nodes {} time {}ms",
                result.score,
                result.depth,
                result.nodes,
                result.elapsed.as_millis()
            );
        }
        AiReply::Outcome(outcome) => println!("game over: {outcome}"),
    }
    ExitCode::SUCCESS
}
