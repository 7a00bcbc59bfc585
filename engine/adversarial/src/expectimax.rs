//! Expectimax: adversaries are chance nodes instead of minimizers.
//!
//! An adversary node backs up the expectation of its children under the
//! search's [`ChanceModel`](crate::chance::ChanceModel). The action it reports
//! is only a label (the first legal action); the controlled agent never acts
//! on it.

use engine_core::GameState;

use crate::chance::ChanceModel;
use crate::evaluator::Evaluator;
use crate::search::{Search, SearchResult};
use crate::turn::NodeKind;

impl<'a, E, C> Search<'a, E, C> {
    pub(crate) fn expectimax<S>(&mut self, state: &S, ply: u32) -> SearchResult<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
        C: ChanceModel,
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
                    let value = self.expectimax(&child, ply + 1).value;
                    if value >= best.value {
                        best = SearchResult::new(value, action);
                    }
                }
                best
            }
            NodeKind::Adversary => {
                let actions = state.legal_actions(turn.agent);
                // An adversary with nowhere to go has no distribution to average.
                if actions.is_empty() {
                    return self.evaluate(state);
                }

                let values: Vec<f64> = actions
                    .iter()
                    .map(|action| {
                        let child = state.successor(turn.agent, action);
                        self.expectimax(&child, ply + 1).value
                    })
                    .collect();

                let value = self.chance().expectation(turn.agent, &values);
                let label = actions.into_iter().next();
                SearchResult {
                    value,
                    action: label,
                }
            }
        }
    }
}
