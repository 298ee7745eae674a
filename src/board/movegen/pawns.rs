use super::super::attack_tables::pawn_attacks;
use super::super::{Board, Color, Move, MoveKind, MoveList, Piece, Square};
use super::GenMode;

fn push_promotions(from: Square, to: Square, capture: bool, moves: &mut MoveList) {
    for piece in Piece::PROMOTIONS {
        moves.push(Move::promotion(from, to, piece, capture));
    }
}

impl Board {
    /// Pawn pushes, captures, promotions and en passant. In tactical mode
    /// only captures and promotions are produced. En passant is only offered
    /// to the side to move.
    pub(super) fn generate_pawn_moves(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        let enemies = self.occupancy(!color);
        let step = color.pawn_push();
        let promotion_rank = color.promotion_rank();

        for from in self.pieces(color, Piece::Pawn) {
            if let Some(to) = from.offset(step, 0) {
                if self.piece_at(to).is_none() {
                    if to.rank() == promotion_rank {
                        push_promotions(from, to, false, moves);
                    } else if mode == GenMode::All {
                        moves.push(Move::quiet(from, to));
                        if from.rank() == color.pawn_start_rank() {
                            if let Some(double) = to.offset(step, 0) {
                                if self.piece_at(double).is_none() {
                                    moves.push(Move::new(from, double, MoveKind::DoublePawnPush));
                                }
                            }
                        }
                    }
                }
            }

            let attacks = pawn_attacks(color, from);
            for to in attacks & enemies {
                if to.rank() == promotion_rank {
                    push_promotions(from, to, true, moves);
                } else {
                    moves.push(Move::capture(from, to));
                }
            }

            if color == self.side_to_move {
                if let Some(ep) = self.en_passant {
                    if attacks.contains(ep) {
                        moves.push(Move::new(from, ep, MoveKind::EnPassant));
                    }
                }
            }
        }
    }
}
