//! Core chess types.
//!
//! - `Piece` and `Color`
//! - `Square`, a single board square
//! - `Bitboard`, a 64-bit square set
//! - `Move`, `MoveKind` and `MoveList`
//! - `CastlingRights` and `CastleSide`

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList, MAX_MOVES};
pub use piece::{Color, Piece};
pub use square::Square;
