use super::ordering::{order_moves, OrderContext};
use super::tt::Bound;
use super::{Score, Searcher};
use crate::board::Move;

/// Half-move clock value at which the fifty-move rule applies.
const FIFTY_MOVE_PLIES: u32 = 100;

impl Searcher<'_> {
    /// Score a node where the game may already be over: mate or stalemate
    /// when there is no legal move, a draw under the fifty-move rule or with
    /// insufficient material.
    pub(super) fn terminal_score(&self, has_moves: bool, ply: u32) -> Option<Score> {
        if !has_moves {
            let side = self.board.side_to_move();
            return Some(if self.board.in_check(side) {
                Score::Mated(ply)
            } else {
                Score::DRAW
            });
        }
        if self.board.halfmove_clock() >= FIFTY_MOVE_PLIES || self.board.is_insufficient_material() {
            return Some(Score::DRAW);
        }
        None
    }

    /// A table entry for this node would be valid wherever the position
    /// recurs: no node below it can reach the fifty-move limit.
    fn cacheable(&self, depth: u32) -> bool {
        self.tt.is_enabled() && depth > 0 && self.board.halfmove_clock() + depth < FIFTY_MOVE_PLIES
    }

    /// Fail-soft negamax alpha-beta search of `depth` plies.
    ///
    /// The returned value is meaningless once `self.aborted` is set.
    pub(super) fn negamax(&mut self, depth: u32, mut alpha: Score, beta: Score, ply: u32) -> Score {
        if self.visit() {
            return Score::DRAW;
        }

        let moves = self.board.legal_moves();
        if let Some(score) = self.terminal_score(!moves.is_empty(), ply) {
            return score;
        }
        // The root may stand on a repeated position; anything below it that
        // repeats is scored as a draw.
        if ply > 0 && self.board.repetition_count() >= 2 {
            return Score::DRAW;
        }
        if depth == 0 {
            return self.quiescence(alpha, beta, ply, 0);
        }

        let key = self.board.hash();
        let cacheable = self.cacheable(depth);
        if cacheable {
            if let Some(score) = self
                .tt
                .probe(key, depth)
                .and_then(|entry| entry.cutoff(alpha, beta, ply))
            {
                return score;
            }
        }

        let ctx = OrderContext {
            killers: self.config.killer_moves.then_some(&self.killers),
            ply: ply as usize,
            quiet_bonus: self.config.quiet_move_bonus,
            first: self.tt.best_move(key),
        };
        let moves = order_moves(self.board, moves, &ctx);

        let original_alpha = alpha;
        let mut best = Score::NEG_INFINITY;
        let mut best_move = None;
        for mv in moves {
            let token = self.board.apply(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha, ply + 1);
            self.board.revert(mv, token);
            if self.aborted {
                return best;
            }

            if score > best {
                best = score;
                best_move = Some(mv);
                if score > alpha {
                    alpha = score;
                }
            }
            if alpha >= beta {
                if self.config.killer_moves && !mv.is_tactical() {
                    self.killers.record(ply as usize, mv);
                }
                break;
            }
        }

        if cacheable {
            let bound = if best <= original_alpha {
                Bound::Upper
            } else if best >= beta {
                Bound::Lower
            } else {
                Bound::Exact
            };
            self.tt.store(key, depth, ply, best, bound, best_move);
        }
        best
    }

    /// Search every root move to `depth` with a full window. The move found
    /// best in the previous round is tried first.
    ///
    /// Returns `None` if the round was abandoned or there is no legal move.
    pub(super) fn search_root(&mut self, depth: u32, previous_best: Option<Move>) -> Option<(Move, Score)> {
        self.nodes += 1;
        let moves = self.board.legal_moves();
        let ctx = OrderContext {
            killers: self.config.killer_moves.then_some(&self.killers),
            ply: 0,
            quiet_bonus: self.config.quiet_move_bonus,
            first: previous_best,
        };
        let moves = order_moves(self.board, moves, &ctx);

        let mut alpha = Score::NEG_INFINITY;
        let beta = Score::INFINITY;
        let mut best: Option<(Move, Score)> = None;
        for mv in moves {
            let token = self.board.apply(mv);
            let score = -self.negamax(depth - 1, -beta, -alpha, 1);
            self.board.revert(mv, token);
            if self.aborted {
                return None;
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
                if score > alpha {
                    alpha = score;
                }
            }
        }
        best
    }
}
