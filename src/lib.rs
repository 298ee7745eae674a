//! A chess rules engine with an alpha-beta searching opponent.
//!
//! [`board`] holds the rules: position state, move generation, evaluation
//! and the search. [`engine`] runs searches on a background thread and
//! exposes the handful of calls a game front end needs.
//!
//! ```
//! use std::time::Duration;
//! use chess_ai::{request_ai_move, AiReply, Board, SearchConfig};
//!
//! let board = Board::new();
//! let reply = request_ai_move(&board, &SearchConfig::depth(2), Duration::from_millis(200));
//! assert!(matches!(reply, AiReply::Move(_)));
//! ```

pub mod board;
pub mod engine;
pub(crate) mod zobrist;

pub use board::{
    Board, Color, DrawReason, GameOutcome, GameStatus, Move, Piece, Score, SearchConfig,
    SearchResult, Square, UndoToken,
};
pub use engine::{
    apply_human_move, find_best_move, game_status, legal_moves_for_display, request_ai_move,
    AiReply, CancelToken, SearchController, SearchJob,
};
