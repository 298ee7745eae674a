//! Search scores.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of evaluating a search node, from the side to move's view.
///
/// Every `Mated` score is below every `Value`, which is below every `Mate`.
/// Among mates the shorter one is better; among forced losses the longer one
/// is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Score {
    /// The side to move is checkmated this many plies from the root.
    Mated(u32),
    /// Heuristic value in centipawns.
    Value(i32),
    /// The side to move delivers mate this many plies from the root.
    Mate(u32),
}

impl Score {
    /// Above any reachable score.
    pub const INFINITY: Score = Score::Mate(0);
    /// Below any reachable score.
    pub const NEG_INFINITY: Score = Score::Mated(0);
    pub const DRAW: Score = Score::Value(0);

    #[must_use]
    pub fn is_mate(self) -> bool {
        !matches!(self, Score::Value(_))
    }

    fn rank(self) -> (u8, i64) {
        match self {
            Score::Mated(ply) => (0, i64::from(ply)),
            Score::Value(cp) => (1, i64::from(cp)),
            Score::Mate(ply) => (2, -i64::from(ply)),
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Mated(ply) => Score::Mate(ply),
            Score::Value(cp) => Score::Value(-cp),
            Score::Mate(ply) => Score::Mated(ply),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Mated(ply) => write!(f, "mated in {ply} plies"),
            Score::Value(cp) => write!(f, "{cp} cp"),
            Score::Mate(ply) => write!(f, "mate in {ply} plies"),
        }
    }
}
