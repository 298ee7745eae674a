//! Castling rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// Which rook a castle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// Home square of the rook for this side.
    #[must_use]
    pub fn rook_home(self, color: Color) -> Square {
        let rank = color.back_rank();
        let file = match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        };
        Square::at(rank, file)
    }

    /// (king destination, rook destination).
    #[must_use]
    pub fn destinations(self, color: Color) -> (Square, Square) {
        let rank = color.back_rank();
        let (king_file, rook_file) = match self {
            CastleSide::King => (6, 5),
            CastleSide::Queen => (2, 3),
        };
        (Square::at(rank, king_file), Square::at(rank, rook_file))
    }
}

/// Castling rights as a four-bit set (white king/queen side, black king/queen side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(0b1111)
    }

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::King) => 1 << 0,
            (Color::White, CastleSide::Queen) => 1 << 1,
            (Color::Black, CastleSide::King) => 1 << 2,
            (Color::Black, CastleSide::Queen) => 1 << 3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// True if `color` keeps at least one right.
    #[inline]
    #[must_use]
    pub const fn any(self, color: Color) -> bool {
        self.has(color, CastleSide::King) || self.has(color, CastleSide::Queen)
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit(color, side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit(color, side);
    }

    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::King);
        self.remove(color, CastleSide::Queen);
    }

    /// Drop any right tied to a rook home square being vacated or captured on.
    pub fn touch(&mut self, sq: Square) {
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if side.rook_home(color) == sq {
                    self.remove(color, side);
                }
            }
        }
    }

    /// Same rights with the colors swapped.
    #[must_use]
    pub const fn swap_colors(self) -> Self {
        CastlingRights(((self.0 & 0b0011) << 2) | ((self.0 & 0b1100) >> 2))
    }
}
