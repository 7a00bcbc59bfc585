//! Minimax: the controlled agent maximizes, every adversary minimizes.
//!
//! Ties are broken asymmetrically: a max node keeps the last action reaching
//! the best value (`>=`), a min node keeps the first (`<`).

use engine_core::GameState;

use crate::evaluator::Evaluator;
use crate::search::{Search, SearchResult};
use crate::turn::NodeKind;

impl<'a, E, C> Search<'a, E, C> {
    pub(crate) fn minimax<S>(&mut self, state: &S, ply: u32) -> SearchResult<S::Action>
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
                    let value = self.minimax(&child, ply + 1).value;
                    if value >= best.value {
                        best = SearchResult::new(value, action);
                    }
                }
                best
            }
            NodeKind::Adversary => {
                let mut best = SearchResult::leaf(f64::INFINITY);
                for action in state.legal_actions(turn.agent) {
                    let child = state.successor(turn.agent, &action);
                    let value = self.minimax(&child, ply + 1).value;
                    if value < best.value {
                        best = SearchResult::new(value, action);
                    }
                }
                best
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StrategyKind;
    use crate::search::run_search;
    use crate::test_utils::{branch, leaf, RecordingEvaluator};

    #[test]
    fn test_two_agent_depth_one() {
        // max over (min(3, 12, 8), min(2, 4, 6), min(14, 5, 2)) = 3 via "a"
        let state = branch(vec![
            ("a", branch(vec![("a1", leaf(3.0)), ("a2", leaf(12.0)), ("a3", leaf(8.0))])),
            ("b", branch(vec![("b1", leaf(2.0)), ("b2", leaf(4.0)), ("b3", leaf(6.0))])),
            ("c", branch(vec![("c1", leaf(14.0)), ("c2", leaf(5.0)), ("c3", leaf(2.0))])),
        ])
        .into_state(2);

        let evaluator = RecordingEvaluator::new();
        let (result, stats) = run_search(StrategyKind::Minimax, 1, &state, &evaluator);

        assert_eq!(result.value, 3.0);
        assert_eq!(result.action, Some("a"));
        assert_eq!(evaluator.calls(), 9);
        assert_eq!(stats.nodes, 13);
    }

    #[test]
    fn test_max_tie_prefers_later_action() {
        let state = branch(vec![("first", leaf(5.0)), ("second", leaf(5.0))]).into_state(1);

        let (result, _) = run_search(StrategyKind::Minimax, 1, &state, &RecordingEvaluator::new());
        assert_eq!(result.action, Some("second"));
    }

    #[test]
    fn test_min_tie_prefers_first_action() {
        // Three agents, depth 1: root max, then two adversary layers.
        let adversary = |a: f64, b: f64| branch(vec![("x", leaf(a)), ("y", leaf(b))]);
        let state = branch(vec![(
            "go",
            branch(vec![("first", adversary(4.0, 4.0)), ("second", adversary(4.0, 4.0))]),
        )])
        .into_state(3);

        // Inspect the first adversary node directly: ply 1 of the same search.
        let go = engine_core::GameState::successor(&state, 0, &"go");
        let evaluator = RecordingEvaluator::new();
        let mut search = crate::search::Search::new(
            StrategyKind::Minimax,
            1,
            &evaluator,
            &crate::chance::UniformChance,
        );
        search.run(&state);
        let result = search.minimax(&go, 1);

        assert_eq!(result.value, 4.0);
        assert_eq!(result.action, Some("first"));
    }

    #[test]
    fn test_multiple_adversaries_all_minimize() {
        // Adversary 1 then adversary 2; both pick the smaller branch.
        let state = branch(vec![
            (
                "left",
                branch(vec![
                    ("l1", branch(vec![("p", leaf(10.0)), ("q", leaf(7.0))])),
                    ("l2", branch(vec![("p", leaf(6.0)), ("q", leaf(9.0))])),
                ]),
            ),
            (
                "right",
                branch(vec![
                    ("r1", branch(vec![("p", leaf(8.0)), ("q", leaf(20.0))])),
                    ("r2", branch(vec![("p", leaf(11.0)), ("q", leaf(30.0))])),
                ]),
            ),
        ])
        .into_state(3);

        let (result, _) = run_search(StrategyKind::Minimax, 1, &state, &RecordingEvaluator::new());

        // left: min(min(10,7), min(6,9)) = 6, right: min(8, 11) = 8
        assert_eq!(result.value, 8.0);
        assert_eq!(result.action, Some("right"));
    }

    #[test]
    fn test_adversary_without_moves_keeps_sentinel() {
        let state = branch(vec![("stuck", branch(vec![])), ("fine", branch(vec![("x", leaf(1.0))]))])
            .into_state(2);

        let (result, _) = run_search(StrategyKind::Minimax, 1, &state, &RecordingEvaluator::new());

        // The stuck adversary reports +inf, which the maximizer happily takes.
        assert_eq!(result.value, f64::INFINITY);
        assert_eq!(result.action, Some("stuck"));
    }

    #[test]
    fn test_maximizer_without_moves_keeps_sentinel() {
        let state = branch(vec![]).into_state(2);

        let (result, stats) = run_search(StrategyKind::Minimax, 2, &state, &RecordingEvaluator::new());

        assert_eq!(result.value, f64::NEG_INFINITY);
        assert!(result.action.is_none());
        assert_eq!(stats.evaluations, 0);
    }

    #[test]
    fn test_deeper_search_sees_later_rounds() {
        // Depth 1 stops after the adversary; depth 2 sees the trap below "bait".
        let state = branch(vec![
            (
                "bait",
                branch(vec![(
                    "g",
                    branch(vec![("m", branch(vec![("g", leaf(-50.0))]))]).valued(10.0),
                )]),
            ),
            (
                "safe",
                branch(vec![(
                    "g",
                    branch(vec![("m", branch(vec![("g", leaf(1.0))]))]).valued(2.0),
                )]),
            ),
        ])
        .into_state(2);

        let evaluator = RecordingEvaluator::new();
        let (shallow, _) = run_search(StrategyKind::Minimax, 1, &state, &evaluator);
        assert_eq!(shallow.action, Some("bait"));
        assert_eq!(shallow.value, 10.0);

        let (deep, _) = run_search(StrategyKind::Minimax, 2, &state, &evaluator);
        assert_eq!(deep.action, Some("safe"));
        assert_eq!(deep.value, 1.0);
    }
}
