//! Zobrist hashing for chess positions.
//!
//! Provides incrementally updatable 64-bit position hashes, used for
//! repetition detection.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastleSide, CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece][square]
    piece_keys: [[[u64; 64]; 6]; 2],
    black_to_move_key: u64,
    // castling_keys[color][side]: 0 = kingside, 1 = queenside
    castling_keys: [[u64; 2]; 2],
    // Only the file of the en passant target matters.
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.index()]
    }

    #[inline]
    pub(crate) fn side(&self) -> u64 {
        self.black_to_move_key
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file() as usize]
    }

    /// Combined key of every right present in `rights`.
    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        let mut key = 0;
        for color in Color::BOTH {
            for (i, side) in CastleSide::BOTH.into_iter().enumerate() {
                if rights.has(color, side) {
                    key ^= self.castling_keys[color.index()][i];
                }
            }
        }
        key
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_distinct() {
        let a = ZOBRIST.piece(Color::White, Piece::Pawn, Square::A1);
        let b = ZOBRIST.piece(Color::Black, Piece::Pawn, Square::A1);
        assert_ne!(a, b);
        assert_ne!(ZOBRIST.side(), 0);
    }

    #[test]
    fn castling_key_is_xor_of_rights() {
        let mut white_king = CastlingRights::none();
        white_king.set(Color::White, CastleSide::King);
        let mut black_queen = CastlingRights::none();
        black_queen.set(Color::Black, CastleSide::Queen);
        let mut both = white_king;
        both.set(Color::Black, CastleSide::Queen);
        assert_eq!(
            ZOBRIST.castling(both),
            ZOBRIST.castling(white_king) ^ ZOBRIST.castling(black_queen)
        );
        assert_eq!(ZOBRIST.castling(CastlingRights::none()), 0);
    }
}
