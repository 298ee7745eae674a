//! Attack lookups for move generation.
//!
//! Leapers use precomputed tables. Sliders walk precomputed rays and cut each
//! one at its first blocker: for rays pointing to higher indices the blocker
//! is the lowest set bit, for the others it is the highest.

mod tables;

use tables::{
    EAST, KING_ATTACKS, KNIGHT_ATTACKS, NORTH, NORTH_EAST, NORTH_WEST, PAWN_ATTACKS, RAYS, SOUTH,
    SOUTH_EAST, SOUTH_WEST, WEST,
};

use super::types::{Bitboard, Color, Square};

#[inline]
fn positive_ray(dir: usize, sq: usize, occupied: u64) -> u64 {
    let ray = RAYS[dir][sq];
    let blockers = ray & occupied;
    if blockers == 0 {
        ray
    } else {
        ray ^ RAYS[dir][blockers.trailing_zeros() as usize]
    }
}

#[inline]
fn negative_ray(dir: usize, sq: usize, occupied: u64) -> u64 {
    let ray = RAYS[dir][sq];
    let blockers = ray & occupied;
    if blockers == 0 {
        ray
    } else {
        ray ^ RAYS[dir][63 - blockers.leading_zeros() as usize]
    }
}

#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    Bitboard(KNIGHT_ATTACKS[sq.index()])
}

#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    Bitboard(KING_ATTACKS[sq.index()])
}

/// Squares a pawn of `color` standing on `sq` attacks.
#[inline]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    Bitboard(PAWN_ATTACKS[color.index()][sq.index()])
}

pub(crate) fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let (s, occ) = (sq.index(), occupied.0);
    Bitboard(
        positive_ray(NORTH, s, occ)
            | positive_ray(EAST, s, occ)
            | negative_ray(SOUTH, s, occ)
            | negative_ray(WEST, s, occ),
    )
}

pub(crate) fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let (s, occ) = (sq.index(), occupied.0);
    Bitboard(
        positive_ray(NORTH_EAST, s, occ)
            | positive_ray(NORTH_WEST, s, occ)
            | negative_ray(SOUTH_WEST, s, occ)
            | negative_ray(SOUTH_EAST, s, occ),
    )
}

#[inline]
pub(crate) fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}
