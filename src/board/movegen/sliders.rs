use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Color, MoveList, Piece, Square};
use super::GenMode;

impl Board {
    pub(super) fn generate_slider_moves(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        let targets = mode.target_mask(self, color);
        let occupied = self.occupied();
        let sliders: [(Piece, fn(Square, Bitboard) -> Bitboard); 3] = [
            (Piece::Bishop, bishop_attacks),
            (Piece::Rook, rook_attacks),
            (Piece::Queen, queen_attacks),
        ];
        for (piece, attacks) in sliders {
            for from in self.pieces(color, piece) {
                for to in attacks(from, occupied) & targets {
                    moves.push(self.plain_move(from, to));
                }
            }
        }
    }
}
