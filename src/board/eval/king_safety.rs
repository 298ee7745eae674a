//! King safety: pawn shield, open files, attacked king zone, check and
//! forfeited castling.

use crate::board::attack_tables::king_attacks;
use crate::board::{Bitboard, Board, Color, Piece, Square};

const SHIELD_PAWN_BONUS: i32 = 10;
const OPEN_FILE_PENALTY: i32 = 15;
const ZONE_ATTACK_PENALTY: i32 = 5;
const IN_CHECK_PENALTY: i32 = 50;
const LOST_CASTLING_PENALTY: i32 = 20;

impl Board {
    /// King safety of `color`, higher is safer.
    pub(crate) fn king_safety_score(&self, color: Color) -> i32 {
        let Some(king) = self.king_square(color) else {
            return 0;
        };
        let them = !color;
        let mut score = 0;

        if self.in_check(color) {
            score -= IN_CHECK_PENALTY;
        }

        // Own pawns on the three squares directly in front of the king.
        let own_pawns = self.pieces(color, Piece::Pawn);
        for df in -1..=1 {
            if let Some(sq) = king.offset(color.pawn_push(), df) {
                if own_pawns.contains(sq) {
                    score += SHIELD_PAWN_BONUS;
                }
            }
        }

        // Files around the king with no pawn of either color.
        let all_pawns = own_pawns | self.pieces(them, Piece::Pawn);
        let lo = king.file().saturating_sub(1);
        let hi = (king.file() + 1).min(7);
        for file in lo..=hi {
            if (all_pawns & Bitboard::file(file)).is_empty() {
                score -= OPEN_FILE_PENALTY;
            }
        }

        let zone = king_attacks(king) | Bitboard::from_square(king);
        let attacked = zone
            .iter()
            .filter(|&sq| self.is_square_attacked(sq, them))
            .count() as i32;
        score -= ZONE_ATTACK_PENALTY * attacked;

        let home = Square::at(color.back_rank(), 4);
        if king == home && !self.castling.any(color) {
            score -= LOST_CASTLING_PENALTY;
        }

        score
    }
}
