//! Hanging pieces: attacked by the opponent and not defended.

use crate::board::{Board, Color, Piece};

// A hanging piece costs this fraction of its value.
const HANGING_DIVISOR: i32 = 4;

impl Board {
    /// Penalty (as a non-positive score) for `color`'s undefended pieces under attack.
    pub(crate) fn threat_score(&self, color: Color) -> i32 {
        let them = !color;
        let mut score = 0;
        for piece in [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
            for sq in self.pieces(color, piece) {
                if self.is_square_attacked(sq, them) && !self.is_square_attacked(sq, color) {
                    score -= piece.value() / HANGING_DIVISOR;
                }
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefended_attacked_piece_is_penalized() {
        // The black rook on d5 is attacked by the white bishop and undefended.
        let board = Board::from_fen("4k3/8/8/3r4/8/5B2/8/4K3 w - - 0 1");
        assert_eq!(board.threat_score(Color::Black), -Piece::Rook.value() / HANGING_DIVISOR);
        assert_eq!(board.threat_score(Color::White), 0);
    }

    #[test]
    fn defended_piece_is_not_hanging() {
        let board = Board::from_fen("4k3/4r3/8/4r3/8/8/4R3/4K3 w - - 0 1");
        assert_eq!(board.threat_score(Color::Black), 0);
    }
}
