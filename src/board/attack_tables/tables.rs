//! Precomputed attack tables for leapers and sliding rays.

use once_cell::sync::Lazy;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Ray directions as (rank step, file step). The first four walk towards
/// higher square indices, the last four towards lower ones.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),   // north
    (1, 1),   // north-east
    (0, 1),   // east
    (1, -1),  // north-west
    (-1, 0),  // south
    (-1, -1), // south-west
    (0, -1),  // west
    (-1, 1),  // south-east
];

pub(crate) const NORTH: usize = 0;
pub(crate) const NORTH_EAST: usize = 1;
pub(crate) const EAST: usize = 2;
pub(crate) const NORTH_WEST: usize = 3;
pub(crate) const SOUTH: usize = 4;
pub(crate) const SOUTH_WEST: usize = 5;
pub(crate) const WEST: usize = 6;
pub(crate) const SOUTH_EAST: usize = 7;

fn leaper_table(deltas: &[(i8, i8)]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    for (sq, slot) in attacks.iter_mut().enumerate() {
        let r = (sq / 8) as i8;
        let f = (sq % 8) as i8;
        let mut mask = 0u64;
        for &(dr, df) in deltas {
            let nr = r + dr;
            let nf = f + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << (nr * 8 + nf);
            }
        }
        *slot = mask;
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// `PAWN_ATTACKS[color][sq]`: squares a pawn of `color` on `sq` attacks.
pub(crate) static PAWN_ATTACKS: Lazy<[[u64; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

/// `RAYS[dir][sq]`: every square from `sq` (exclusive) to the board edge.
pub(crate) static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[0u64; 64]; 8];
    for (dir, &(dr, df)) in DIRECTIONS.iter().enumerate() {
        for sq in 0..64 {
            let mut r = (sq / 8) as i8 + dr;
            let mut f = (sq % 8) as i8 + df;
            let mut mask = 0u64;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                mask |= 1u64 << (r * 8 + f);
                r += dr;
                f += df;
            }
            rays[dir][sq] = mask;
        }
    }
    rays
});
