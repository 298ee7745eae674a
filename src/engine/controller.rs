//! Background search management.

use std::panic;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info};
use parking_lot::Mutex;

use super::CancelToken;
use crate::board::search::{search_with_progress, SearchConfig, SearchResult};
use crate::board::{Board, GameOutcome};

/// Search thread stack size (32 MB)
const SEARCH_STACK_SIZE: usize = 32 * 1024 * 1024;

/// What the engine answers when asked to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiReply {
    Move(SearchResult),
    /// The side to move has no move to play.
    Outcome(GameOutcome),
}

impl AiReply {
    #[must_use]
    pub fn best_move(&self) -> Option<crate::board::Move> {
        match self {
            AiReply::Move(result) => Some(result.best_move),
            AiReply::Outcome(_) => None,
        }
    }
}

/// Answer for a finished search on `board`. A search only comes back empty
/// when the side to move has no legal move.
fn reply_for(board: &Board, result: Option<SearchResult>) -> AiReply {
    match result {
        Some(result) => AiReply::Move(result),
        None => {
            let side = board.side_to_move();
            AiReply::Outcome(if board.in_check(side) {
                GameOutcome::Checkmate { winner: !side }
            } else {
                GameOutcome::Stalemate
            })
        }
    }
}

/// Shared between a job handle and its worker thread.
#[derive(Default)]
struct JobState {
    best_so_far: Mutex<Option<SearchResult>>,
    reply: Mutex<Option<AiReply>>,
}

/// A search running on its own thread.
///
/// Dropping the job cancels the search without waiting for it.
pub struct SearchJob {
    cancel: CancelToken,
    state: Arc<JobState>,
    handle: Option<JoinHandle<AiReply>>,
}

impl SearchJob {
    /// Ask the worker to stop. It finishes the first round regardless and
    /// answers with the last completed one.
    pub fn cancel(&self) {
        if !self.is_finished() {
            debug!("search cancelled");
        }
        self.cancel.cancel();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.reply.lock().is_some()
    }

    /// The reply if the search has finished, without blocking.
    #[must_use]
    pub fn poll(&self) -> Option<AiReply> {
        *self.state.reply.lock()
    }

    /// Result of the deepest round completed so far.
    #[must_use]
    pub fn best_so_far(&self) -> Option<SearchResult> {
        *self.state.best_so_far.lock()
    }

    /// Block until the worker finishes and return its reply.
    ///
    /// # Panics
    /// Re-raises a panic from the search thread.
    pub fn wait(mut self) -> AiReply {
        let handle = self.handle.take();
        match handle.map(JoinHandle::join) {
            Some(Ok(reply)) => reply,
            Some(Err(payload)) => panic::resume_unwind(payload),
            None => unreachable!("search job joined twice"),
        }
    }
}

impl Drop for SearchJob {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel.cancel();
        }
    }
}

/// Starts searches on a private copy of the board.
pub struct SearchController;

impl SearchController {
    /// Spawn a search of `board` and return at once.
    ///
    /// # Panics
    /// Panics if the operating system refuses to create the thread.
    #[must_use]
    pub fn start(board: &Board, config: SearchConfig) -> SearchJob {
        Self::start_with_callback(board, config, |_| {})
    }

    /// Like [`SearchController::start`], calling `on_complete` from the
    /// worker thread with the reply once the search ends.
    ///
    /// # Panics
    /// Panics if the operating system refuses to create the thread.
    #[must_use]
    pub fn start_with_callback<F>(board: &Board, config: SearchConfig, on_complete: F) -> SearchJob
    where
        F: FnOnce(AiReply) + Send + 'static,
    {
        let mut search_board = board.clone();
        let cancel = CancelToken::new();
        let state = Arc::new(JobState::default());

        info!(
            "search started: {} depth {} budget {:?}",
            search_board.to_fen(),
            config.max_depth,
            config.time_budget
        );

        let worker_cancel = cancel.clone();
        let worker_state = Arc::clone(&state);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let result = search_with_progress(&mut search_board, &config, &worker_cancel, |progress| {
                    *worker_state.best_so_far.lock() = Some(*progress);
                });
                let reply = reply_for(&search_board, result);
                match &reply {
                    AiReply::Move(result) => info!(
                        "search finished: {} score {} depth {} nodes {} in {:?}",
                        result.best_move, result.score, result.depth, result.nodes, result.elapsed
                    ),
                    AiReply::Outcome(outcome) => info!("search finished: {outcome}"),
                }
                *worker_state.reply.lock() = Some(reply);
                on_complete(reply);
                reply
            })
            .expect("failed to spawn search thread");

        SearchJob {
            cancel,
            state,
            handle: Some(handle),
        }
    }
}

/// Search `board` on a worker thread and block until it answers.
#[must_use]
pub fn find_best_move(board: &Board, config: &SearchConfig) -> AiReply {
    SearchController::start(board, config.clone()).wait()
}
