//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening, keeping only fully completed rounds
//! - Fail-soft negamax alpha-beta search
//! - Quiescence search with stand-pat and check evasions
//! - Move ordering (MVV-LVA, killer moves, table moves)
//! - Transposition table and repetition draws
//! - Cooperative cancellation and a wall-clock budget

mod iterative;
mod negamax;
mod ordering;
mod quiescence;
mod score;
mod tt;

use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::CancelToken;

use super::eval::EvalWeights;
use super::{Board, Move};
use ordering::KillerTable;
use tt::TranspositionTable;

pub use score::Score;

/// Nodes between two checks of the cancel token and deadline.
const POLL_INTERVAL: u64 = 1024;

/// Search limits and tuning switches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Deepest iteration to run.
    pub max_depth: u32,
    /// Wall-clock budget. `None` searches until `max_depth` or cancellation.
    pub time_budget: Option<Duration>,
    /// Maximum number of plies quiescence search extends past the horizon.
    pub quiescence_depth: u32,
    /// Order quiet moves that caused cutoffs at the same ply first.
    pub killer_moves: bool,
    /// Give quiet checks, central pawn moves and pawns about to promote an
    /// ordering bonus.
    pub quiet_move_bonus: bool,
    /// Transposition table size in megabytes. Zero disables the table.
    pub hash_mb: usize,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 64,
            time_budget: None,
            quiescence_depth: 8,
            killer_moves: true,
            quiet_move_bonus: true,
            hash_mb: 16,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Fixed-depth search without a time budget.
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            ..SearchConfig::default()
        }
    }

    /// Search deepening until `budget` runs out.
    #[must_use]
    pub fn timed(budget: Duration) -> Self {
        SearchConfig {
            time_budget: Some(budget),
            ..SearchConfig::default()
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    #[must_use]
    pub fn with_quiescence_depth(mut self, depth: u32) -> Self {
        self.quiescence_depth = depth;
        self
    }

    #[must_use]
    pub fn with_killer_moves(mut self, enabled: bool) -> Self {
        self.killer_moves = enabled;
        self
    }

    #[must_use]
    pub fn with_quiet_move_bonus(mut self, enabled: bool) -> Self {
        self.quiet_move_bonus = enabled;
        self
    }

    #[must_use]
    pub fn with_hash_mb(mut self, hash_mb: usize) -> Self {
        self.hash_mb = hash_mb;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Outcome of the deepest fully completed iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: Score,
    /// Depth of the iteration that produced `best_move`.
    pub depth: u32,
    /// Nodes visited over all iterations so far.
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Run iterative deepening on `board` and return the best move of the last
/// completed round, or `None` when the side to move has no legal move.
///
/// The board is restored before returning.
pub fn search(board: &mut Board, config: &SearchConfig, cancel: &CancelToken) -> Option<SearchResult> {
    search_with_progress(board, config, cancel, |_| {})
}

/// Like [`search`], calling `on_iteration` after every completed round.
pub fn search_with_progress<F>(
    board: &mut Board,
    config: &SearchConfig,
    cancel: &CancelToken,
    on_iteration: F,
) -> Option<SearchResult>
where
    F: FnMut(&SearchResult),
{
    let mut searcher = Searcher::new(board, config, cancel);
    searcher.iterative_deepening(on_iteration)
}

/// Per-search state threaded through the recursion.
pub(crate) struct Searcher<'a> {
    board: &'a mut Board,
    config: &'a SearchConfig,
    cancel: &'a CancelToken,
    start: Instant,
    deadline: Option<Instant>,
    killers: KillerTable,
    tt: TranspositionTable,
    nodes: u64,
    // Set once the current round must be abandoned.
    aborted: bool,
    // The first round always runs to completion.
    abortable: bool,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(board: &'a mut Board, config: &'a SearchConfig, cancel: &'a CancelToken) -> Self {
        let start = Instant::now();
        Searcher {
            board,
            config,
            cancel,
            start,
            deadline: config.time_budget.map(|budget| start + budget),
            killers: KillerTable::new(),
            tt: TranspositionTable::new(config.hash_mb),
            nodes: 0,
            aborted: false,
            abortable: false,
        }
    }

    fn out_of_time(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }

    fn should_stop(&self) -> bool {
        self.cancel.is_cancelled() || self.out_of_time()
    }

    /// Count a node and, every `POLL_INTERVAL` nodes, check whether the
    /// round has to be abandoned. Returns true once it has.
    #[inline]
    fn visit(&mut self) -> bool {
        self.nodes += 1;
        if self.abortable && !self.aborted && self.nodes % POLL_INTERVAL == 0 && self.should_stop() {
            self.aborted = true;
        }
        self.aborted
    }

    #[inline]
    fn evaluate(&self) -> Score {
        Score::Value(self.board.evaluate_with(&self.config.weights))
    }
}
