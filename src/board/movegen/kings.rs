use super::super::attack_tables::king_attacks;
use super::super::{Board, CastleSide, Color, Move, MoveKind, MoveList, Piece, Square};
use super::GenMode;

impl Board {
    pub(super) fn generate_king_moves(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        let Some(from) = self.king_square(color) else {
            return;
        };
        for to in king_attacks(from) & mode.target_mask(self, color) {
            moves.push(self.plain_move(from, to));
        }
        if mode == GenMode::All {
            self.generate_castles(color, from, moves);
        }
    }

    /// Castling: right held, rook at home, path to the rook empty, and the
    /// king neither in check nor crossing or landing on an attacked square.
    fn generate_castles(&self, color: Color, king: Square, moves: &mut MoveList) {
        let home = Square::at(color.back_rank(), 4);
        if king != home || !self.castling.any(color) {
            return;
        }
        let them = !color;
        if self.is_square_attacked(king, them) {
            return;
        }
        for side in CastleSide::BOTH {
            if !self.castling.has(color, side) {
                continue;
            }
            let rook_home = side.rook_home(color);
            if self.piece_at(rook_home) != Some((color, Piece::Rook)) {
                continue;
            }
            let (lo, hi) = if rook_home.file() < king.file() {
                (rook_home.file() + 1, king.file())
            } else {
                (king.file() + 1, rook_home.file())
            };
            let rank = color.back_rank();
            if (lo..hi).any(|file| self.piece_at(Square::at(rank, file)).is_some()) {
                continue;
            }
            let (king_to, transit) = side.destinations(color);
            if self.is_square_attacked(transit, them) || self.is_square_attacked(king_to, them) {
                continue;
            }
            let kind = match side {
                CastleSide::King => MoveKind::CastleKingside,
                CastleSide::Queen => MoveKind::CastleQueenside,
            };
            moves.push(Move::new(king, king_to, kind));
        }
    }
}
