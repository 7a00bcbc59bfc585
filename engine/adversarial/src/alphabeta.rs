//! Alpha-beta pruning over the minimax tree.
//!
//! `alpha` is the value the maximizer can already guarantee on the path to
//! the root, `beta` the value the minimizers can already hold it to. Both are
//! passed by value into each child; only the parent updates them after the
//! child returns. Pruning happens on strict `beta < alpha` so that ties are
//! still explored and the root action matches plain minimax exactly.

use engine_core::GameState;

use crate::evaluator::Evaluator;
use crate::search::{Search, SearchResult};
use crate::turn::NodeKind;

impl<'a, E, C> Search<'a, E, C> {
    pub(crate) fn alphabeta<S>(
        &mut self,
        state: &S,
        ply: u32,
        mut alpha: f64,
        mut beta: f64,
    ) -> SearchResult<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if let Some(leaf) = self.enter(state, ply) {
            return leaf;
        }

        let turn = self.turns.turn(ply);
        match turn.kind {
            NodeKind::Maximizer => {
                let mut best = SearchResult::leaf(f64::NEG_INFINITY);
                for action in state.legal_actions(turn.agent) {
                    let child = state.successor(turn.agent, &action);
                    let value = self.alphabeta(&child, ply + 1, alpha, beta).value;
                    if value >= best.value {
                        best = SearchResult::new(value, action);
                    }
                    if value >= alpha {
                        alpha = value;
                    }
                    if beta < alpha {
                        self.stats.prunes += 1;
                        return best;
                    }
                }
                best
            }
            NodeKind::Adversary => {
                let mut best = SearchResult::leaf(f64::INFINITY);
                for action in state.legal_actions(turn.agent) {
                    let child = state.successor(turn.agent, &action);
                    let value = self.alphabeta(&child, ply + 1, alpha, beta).value;
                    if value < best.value {
                        best = SearchResult::new(value, action);
                    }
                    if value <= beta {
                        beta = value;
                    }
                    if beta < alpha {
                        self.stats.prunes += 1;
                        return best;
                    }
                }
                best
            }
        }
    }
}
