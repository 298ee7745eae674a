//! Search tests to verify the engine finds correct moves in various positions.

use std::time::{Duration, Instant};

use chess_ai::board::search::search;
use chess_ai::{find_best_move, AiReply, Board, CancelToken, GameOutcome, Score, SearchConfig};

fn best_move(fen: &str, depth: u32) -> String {
    let board = Board::from_fen(fen);
    match find_best_move(&board, &SearchConfig::depth(depth)) {
        AiReply::Move(result) => result.best_move.to_string(),
        AiReply::Outcome(outcome) => panic!("no move in {fen}: {outcome}"),
    }
}

/// Test that the engine finds a simple mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    assert_eq!(best_move("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 4), "e1e8");
}

/// Test that the engine finds a simple mate in 1 with queen
#[test]
fn finds_mate_in_one_queen() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4";
    assert_eq!(best_move(fen, 4), "h5f7", "Should find Qxf7# (scholar's mate)");
}

/// Test that the engine avoids giving away material
#[test]
fn avoids_hanging_queen() {
    let fen = "r1bqkbnr/pppppppp/2n5/8/4P3/5Q2/PPPP1PPP/RNB1KBNR w KQkq - 0 3";
    let mv = best_move(fen, 3);
    assert_ne!(mv, "f3c6", "Should not hang the queen on c6");
    assert_ne!(mv, "f3f7", "Should not hang the queen on f7");
}

/// Test that the engine takes an undefended queen
#[test]
fn captures_free_queen() {
    let fen = "rnb1kbnr/pppp1ppp/8/4p3/3qP3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 4";
    assert_eq!(best_move(fen, 3), "f3d4");
}

/// Test that search handles single legal move positions
#[test]
fn single_legal_move() {
    // The rook checks along the first rank and the bishop covers b2
    assert_eq!(best_move("8/8/8/8/8/b7/8/K5rk w - - 0 1", 4), "a1a2");
}

/// Test that search reports checkmate instead of a move
#[test]
fn no_move_in_checkmate() {
    let mut board =
        Board::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1");
    assert!(board.legal_moves().is_empty());
    assert_eq!(
        find_best_move(&board, &SearchConfig::depth(4)),
        AiReply::Outcome(GameOutcome::Checkmate {
            winner: chess_ai::Color::Black
        })
    );
    assert!(search(&mut board, &SearchConfig::depth(4), &CancelToken::new()).is_none());
}

/// Test iterative deepening produces legal moves at every depth
#[test]
fn iterative_deepening_consistency() {
    let mut board = Board::new();
    let legal = board.legal_moves();
    for depth in [1, 2, 3, 4] {
        let result = search(&mut board, &SearchConfig::depth(depth), &CancelToken::new())
            .expect("start position has moves");
        assert_eq!(result.depth, depth);
        assert!(legal.contains(&result.best_move), "depth {depth}");
    }
}

/// Test that a tiny budget still produces a legal move
#[test]
fn tiny_budget_returns_legal_move() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let board = Board::from_fen(fen);
    for budget in [Duration::ZERO, Duration::from_millis(1), Duration::from_millis(5)] {
        let reply = find_best_move(&board, &SearchConfig::timed(budget));
        let AiReply::Move(result) = reply else {
            panic!("expected a move, got {reply:?}");
        };
        assert!(result.depth >= 1);
        assert!(board.clone().legal_moves().contains(&result.best_move));
    }
}

/// Test that a time budget bounds the search
#[test]
fn time_budget_is_respected() {
    let board = Board::new();
    let start = Instant::now();
    let reply = find_best_move(&board, &SearchConfig::timed(Duration::from_millis(200)));
    assert!(matches!(reply, AiReply::Move(_)));
    assert!(start.elapsed() < Duration::from_secs(10));
}

/// Test that color-flipped positions give the same answer
#[test]
fn mirrored_search_agrees() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 2 3";
    let mut board = Board::from_fen(fen);
    let mut mirror = board.mirrored();
    let config = SearchConfig::depth(3);

    let original = search(&mut board, &config, &CancelToken::new()).unwrap();
    let flipped = search(&mut mirror, &config, &CancelToken::new()).unwrap();
    assert_eq!(original.best_move.to_string(), "f3f7");
    assert_eq!(flipped.best_move, original.best_move.flip_vertical());
    assert_eq!(original.score, Score::Mate(1));
    assert_eq!(flipped.score, original.score);
}
