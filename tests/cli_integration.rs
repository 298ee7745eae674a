use std::process::Command;

use chess_ai::Board;

fn run_cli_logged(args: &[&str], filter: &str) -> (bool, String, String) {
    let exe = env!("CARGO_BIN_EXE_chess_ai");
    let output = Command::new(exe)
        .args(args)
        .env("CHESS_AI_LOG", filter)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run the binary");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn run_cli(args: &[&str]) -> (bool, String) {
    let (ok, stdout, _) = run_cli_logged(args, "off");
    (ok, stdout)
}

#[test]
fn cli_returns_legal_move() {
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let (ok, stdout) = run_cli(&[fen, "50"]);
    assert!(ok);

    let bestmove = stdout
        .lines()
        .find_map(|line| line.strip_prefix("bestmove "))
        .expect("no bestmove line");
    let mut board = Board::from_fen(fen);
    assert!(board.parse_move(bestmove.trim()).is_ok(), "illegal move {bestmove}");
}

#[test]
fn cli_reports_finished_game() {
    let (ok, stdout) = run_cli(&["7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", "50"]);
    assert!(ok);
    assert!(stdout.contains("game over: stalemate"), "{stdout}");
}

#[test]
fn cli_rejects_bad_input() {
    let (ok, _) = run_cli(&["not a fen"]);
    assert!(!ok);
    let (ok, _) = run_cli(&["4k3/8/8/8/8/8/8/4K3 w - - 0 1", "soon"]);
    assert!(!ok);
}

#[test]
fn cli_log_level_comes_from_environment() {
    let args = ["4k3/8/8/8/8/8/8/3QK3 w - - 0 1", "50"];

    let (ok, stdout, stderr) = run_cli_logged(&args, "debug");
    assert!(ok);
    assert!(stderr.contains("depth 1 score"), "{stderr}");
    assert!(!stdout.contains("depth 1 score"), "{stdout}");

    let (ok, _, stderr) = run_cli_logged(&args, "off");
    assert!(ok);
    assert!(stderr.is_empty(), "{stderr}");
}
