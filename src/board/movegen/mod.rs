//! Move generation and attack queries.
//!
//! Moves are generated pseudo-legally per piece kind and filtered for king
//! safety by playing each one and testing whether the mover is left in check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};
use super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

/// Which moves a generator pass produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GenMode {
    All,
    /// Captures and promotions only.
    Tactical,
}

impl GenMode {
    fn target_mask(self, board: &Board, color: Color) -> Bitboard {
        match self {
            GenMode::All => !board.occupancy(color),
            GenMode::Tactical => board.occupancy(!color),
        }
    }
}

impl Board {
    /// Capture if `to` is occupied, otherwise a quiet move.
    #[inline]
    fn plain_move(&self, from: Square, to: Square) -> Move {
        if self.piece_at(to).is_some() {
            Move::capture(from, to)
        } else {
            Move::quiet(from, to)
        }
    }

    fn generate(&self, color: Color, mode: GenMode) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pawn_moves(color, mode, &mut moves);
        self.generate_knight_moves(color, mode, &mut moves);
        self.generate_slider_moves(color, mode, &mut moves);
        self.generate_king_moves(color, mode, &mut moves);
        moves
    }

    /// Drop moves that leave the mover's king attacked.
    fn retain_legal(&mut self, moves: &mut MoveList) {
        let us = self.side_to_move;
        moves.retain(|mv| {
            let token = self.apply(*mv);
            let legal = !self.in_check(us);
            self.revert(*mv, token);
            legal
        });
    }

    /// Moves obeying piece movement rules, castling availability and en
    /// passant eligibility, without checking king safety.
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> MoveList {
        self.generate(self.side_to_move, GenMode::All)
    }

    /// All legal moves for the side to move. The board is restored before
    /// returning.
    pub fn legal_moves(&mut self) -> MoveList {
        let mut moves = self.pseudo_legal_moves();
        self.retain_legal(&mut moves);
        moves
    }

    /// Legal captures and promotions, the quiescence move set.
    pub fn tactical_moves(&mut self) -> MoveList {
        let mut moves = self.generate(self.side_to_move, GenMode::Tactical);
        self.retain_legal(&mut moves);
        moves
    }

    /// Number of pseudo-legal moves `color` would have if it were to move.
    #[must_use]
    pub fn pseudo_legal_count(&self, color: Color) -> usize {
        self.generate(color, GenMode::All).len()
    }

    /// Whether any piece of `by` attacks `sq` under the current occupancy.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.attackers_of(sq, by).count() > 0
    }

    /// Pieces of `by` attacking `sq`.
    #[must_use]
    pub fn attackers_of(&self, sq: Square, by: Color) -> Bitboard {
        let occupied = self.occupied();
        let queens = self.pieces(by, Piece::Queen);
        (pawn_attacks(!by, sq) & self.pieces(by, Piece::Pawn))
            | (knight_attacks(sq) & self.pieces(by, Piece::Knight))
            | (king_attacks(sq) & self.pieces(by, Piece::King))
            | (bishop_attacks(sq, occupied) & (self.pieces(by, Piece::Bishop) | queens))
            | (rook_attacks(sq, occupied) & (self.pieces(by, Piece::Rook) | queens))
    }

    /// Whether `color`'s king is attacked. A side without a king is never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .map_or(false, |king| self.is_square_attacked(king, !color))
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let token = self.apply(mv);
            nodes += self.perft(depth - 1);
            self.revert(mv, token);
        }
        nodes
    }
}
