use super::ordering::tactical_score;
use super::{Score, Searcher};
use crate::board::{Move, MoveList};

impl Searcher<'_> {
    /// Quiescence search over captures and promotions.
    ///
    /// The side to move may stand pat on the static evaluation unless it is
    /// in check, in which case every evasion is searched and having none is
    /// mate. Extension stops after `quiescence_depth` plies.
    pub(super) fn quiescence(&mut self, mut alpha: Score, beta: Score, ply: u32, qdepth: u32) -> Score {
        if self.visit() {
            return Score::DRAW;
        }

        let side = self.board.side_to_move();
        let at_cap = qdepth >= self.config.quiescence_depth;

        let (moves, mut best) = if self.board.in_check(side) {
            let evasions = self.board.legal_moves();
            if evasions.is_empty() {
                return Score::Mated(ply);
            }
            if at_cap {
                return self.evaluate();
            }
            (evasions, Score::NEG_INFINITY)
        } else {
            let stand_pat = self.evaluate();
            if stand_pat >= beta || at_cap {
                return stand_pat;
            }
            if stand_pat > alpha {
                alpha = stand_pat;
            }
            (self.board.tactical_moves(), stand_pat)
        };

        for mv in self.by_mvv_lva(moves) {
            let token = self.board.apply(mv);
            let score = -self.quiescence(-beta, -alpha, ply + 1, qdepth + 1);
            self.board.revert(mv, token);
            if self.aborted {
                return best;
            }

            if score > best {
                best = score;
                if score > alpha {
                    alpha = score;
                }
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Tactical moves by MVV-LVA, quiet evasions after them in generation order.
    fn by_mvv_lva(&self, moves: MoveList) -> MoveList {
        let mut moves = moves;
        let board = &*self.board;
        moves.sort_by_cached_key(|&mv: &Move| {
            std::cmp::Reverse(if mv.is_tactical() {
                tactical_score(board, mv)
            } else {
                0
            })
        });
        moves
    }
}
