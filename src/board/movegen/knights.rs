use super::super::attack_tables::knight_attacks;
use super::super::{Board, Color, MoveList, Piece};
use super::GenMode;

impl Board {
    pub(super) fn generate_knight_moves(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        let targets = mode.target_mask(self, color);
        for from in self.pieces(color, Piece::Knight) {
            for to in knight_attacks(from) & targets {
                moves.push(self.plain_move(from, to));
            }
        }
    }
}
