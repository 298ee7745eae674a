//! Transposition table for caching search results.
//!
//! Entries are keyed by the Zobrist hash and hold the score of a negamax
//! node together with the kind of bound a fail-soft search produced there.
//! Mate scores are stored as a distance from the node so that a hit at a
//! different ply can be translated back.

use std::mem;

use super::Score;
use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bound {
    Exact,
    /// The node failed high: its value is at least the score.
    Lower,
    /// The node failed low: its value is at most the score.
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    key: u64,
    depth: u32,
    score: Score,
    bound: Bound,
    best_move: Option<Move>,
}

impl Entry {
    /// The stored score seen from `ply`, if it settles a node searched with
    /// the window `(alpha, beta)`.
    pub(crate) fn cutoff(&self, alpha: Score, beta: Score, ply: u32) -> Option<Score> {
        let score = from_table(self.score, ply);
        match self.bound {
            Bound::Exact => Some(score),
            Bound::Lower if score >= beta => Some(score),
            Bound::Upper if score <= alpha => Some(score),
            _ => None,
        }
    }
}

/// Convert a root-relative mate score to a distance from the node at `ply`.
fn to_table(score: Score, ply: u32) -> Score {
    match score {
        Score::Mate(n) => Score::Mate(n.saturating_sub(ply)),
        Score::Mated(n) => Score::Mated(n.saturating_sub(ply)),
        value => value,
    }
}

fn from_table(score: Score, ply: u32) -> Score {
    match score {
        Score::Mate(n) => Score::Mate(n + ply),
        Score::Mated(n) => Score::Mated(n + ply),
        value => value,
    }
}

/// Fixed-size, direct-mapped table owned by a single search.
pub(crate) struct TranspositionTable {
    slots: Vec<Option<Entry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a table of about `size_mb` megabytes. Zero disables it.
    pub(crate) fn new(size_mb: usize) -> Self {
        if size_mb == 0 {
            return TranspositionTable {
                slots: Vec::new(),
                mask: 0,
            };
        }
        let slot_size = mem::size_of::<Option<Entry>>();
        let mut num_slots = (size_mb * 1024 * 1024) / slot_size;
        // Power of two for mask indexing
        num_slots = num_slots.next_power_of_two() / 2;
        if num_slots == 0 {
            num_slots = 1024;
        }
        TranspositionTable {
            slots: vec![None; num_slots],
            mask: num_slots - 1,
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        !self.slots.is_empty()
    }

    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Entry for `key` searched to exactly `depth` plies.
    ///
    /// Deeper entries are not used, so a hit returns what a search of this
    /// depth would have found.
    pub(crate) fn probe(&self, key: u64, depth: u32) -> Option<Entry> {
        let entry = (*self.slots.get(self.index(key))?)?;
        (entry.key == key && entry.depth == depth).then_some(entry)
    }

    /// Best move stored for `key` at any depth.
    pub(crate) fn best_move(&self, key: u64) -> Option<Move> {
        let entry = (*self.slots.get(self.index(key))?)?;
        if entry.key == key {
            entry.best_move
        } else {
            None
        }
    }

    /// Record a node's result. `score` is relative to the root, `ply` is the
    /// node's distance from it. A slot holding a different position is only
    /// replaced by a search at least as deep.
    pub(crate) fn store(&mut self, key: u64, depth: u32, ply: u32, score: Score, bound: Bound, best_move: Option<Move>) {
        if !self.is_enabled() {
            return;
        }
        let index = self.index(key);
        let slot = &mut self.slots[index];
        if let Some(old) = slot {
            if old.key != key && old.depth > depth {
                return;
            }
        }
        *slot = Some(Entry {
            key,
            depth,
            score: to_table(score, ply),
            bound,
            best_move,
        });
    }
}
