//! Chess board representation and game logic.
//!
//! Uses bitboards alongside a mailbox for move generation and evaluation.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_ai::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use eval::EvalWeights;
pub use fen::STARTING_FEN;
pub use search::{Score, SearchConfig, SearchResult};
pub use state::{Board, UndoToken};
pub use status::{DrawReason, GameOutcome, GameStatus};
pub use types::{
    Bitboard, BitboardIter, CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece,
    Square, MAX_MOVES,
};
