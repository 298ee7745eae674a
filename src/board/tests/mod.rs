//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generator node counts
//! - `draw.rs` - Game status and draw detection
//! - `make_unmake.rs` - Apply/revert correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `search.rs` - Search results against an unpruned reference
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Move};

/// Play moves given in coordinate notation.
pub(super) fn play(board: &mut Board, moves: &[&str]) -> Vec<Move> {
    moves
        .iter()
        .map(|notation| {
            let mv = board.parse_move(notation).expect("legal move");
            let _ = board.apply(mv);
            mv
        })
        .collect()
}
