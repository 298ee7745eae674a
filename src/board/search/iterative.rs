use log::{debug, trace};

use super::{SearchResult, Searcher};

impl Searcher<'_> {
    /// Deepen one ply at a time until the depth limit, the deadline, a
    /// cancellation or a proven mate. Abandoned rounds are discarded.
    pub(super) fn iterative_deepening<F>(&mut self, mut on_iteration: F) -> Option<SearchResult>
    where
        F: FnMut(&SearchResult),
    {
        let mut completed: Option<SearchResult> = None;

        for depth in 1..=self.config.max_depth.max(1) {
            if depth > 1 && self.should_stop() {
                trace!("stopping before depth {depth}");
                break;
            }
            self.abortable = depth > 1;

            let previous_best = completed.map(|result| result.best_move);
            let Some((best_move, score)) = self.search_root(depth, previous_best) else {
                if self.aborted {
                    trace!("abandoned depth {depth} after {} nodes", self.nodes);
                }
                break;
            };

            let result = SearchResult {
                best_move,
                score,
                depth,
                nodes: self.nodes,
                elapsed: self.start.elapsed(),
            };
            debug!(
                "depth {depth} score {score} nodes {} best {best_move} time {:?}",
                self.nodes, result.elapsed
            );
            on_iteration(&result);
            completed = Some(result);

            if score.is_mate() {
                break;
            }
        }

        if let Some(result) = completed.as_mut() {
            result.nodes = self.nodes;
            result.elapsed = self.start.elapsed();
        }
        completed
    }
}
