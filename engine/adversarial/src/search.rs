//! Search driver shared by the three strategies.
//!
//! A [`Search`] owns the per-run statistics and the turn model; the
//! strategies themselves live in `minimax`, `alphabeta` and `expectimax` as
//! recursive methods on it. Every recursive call advances the ply by exactly
//! one and first checks whether the state is a leaf.

use engine_core::GameState;
use tracing::trace;

use crate::chance::{ChanceModel, UniformChance};
use crate::config::StrategyKind;
use crate::evaluator::Evaluator;
use crate::leaf::should_self_evaluate;
use crate::turn::TurnModel;

/// Value of a node and the action that achieves it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    pub value: f64,
    /// `None` at leaves, and at nodes whose agent had no legal action.
    pub action: Option<A>,
}

impl<A> SearchResult<A> {
    pub fn new(value: f64, action: A) -> Self {
        Self {
            value,
            action: Some(action),
        }
    }

    /// Result without an action: a leaf value or an unbeaten sentinel.
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            action: None,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls, leaves included.
    pub nodes: u64,
    /// Evaluator invocations.
    pub evaluations: u64,
    /// Sibling loops cut short by alpha-beta.
    pub prunes: u64,
    /// Deepest ply reached.
    pub max_ply: u32,
}

/// One search over a game tree.
pub struct Search<'a, E, C = UniformChance> {
    strategy: StrategyKind,
    depth: u32,
    evaluator: &'a E,
    chance: &'a C,
    pub(crate) turns: TurnModel,
    pub(crate) stats: SearchStats,
}

impl<'a, E, C> Search<'a, E, C> {
    pub fn new(strategy: StrategyKind, depth: u32, evaluator: &'a E, chance: &'a C) -> Self {
        Self {
            strategy,
            depth,
            evaluator,
            chance,
            turns: TurnModel::new(1, depth),
            stats: SearchStats::default(),
        }
    }

    /// Run the configured strategy from `state` at ply 0.
    pub fn run<S>(&mut self, state: &S) -> SearchResult<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
        C: ChanceModel,
    {
        self.turns = TurnModel::new(state.num_agents(), self.depth);
        self.stats = SearchStats::default();

        let result = match self.strategy {
            StrategyKind::Minimax => self.minimax(state, 0),
            StrategyKind::AlphaBeta => self.alphabeta(state, 0, f64::NEG_INFINITY, f64::INFINITY),
            StrategyKind::Expectimax => self.expectimax(state, 0),
        };

        trace!(
            strategy = %self.strategy,
            depth = self.turns.depth_limit(),
            value = result.value,
            nodes = self.stats.nodes,
            evaluations = self.stats.evaluations,
            prunes = self.stats.prunes,
            "Search complete"
        );

        result
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub(crate) fn chance(&self) -> &C {
        self.chance
    }

    /// Count the node and score it if the search stops here.
    pub(crate) fn enter<S>(&mut self, state: &S, ply: u32) -> Option<SearchResult<S::Action>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if self.turns.is_cutoff(ply) || should_self_evaluate(state) {
            let turn = self.turns.turn(ply);
            trace!(agent = turn.agent, depth = turn.depth, ply, "Leaf evaluated");
            return Some(self.evaluate(state));
        }
        None
    }

    pub(crate) fn evaluate<S>(&mut self, state: &S) -> SearchResult<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats.evaluations += 1;
        SearchResult::leaf(self.evaluator.evaluate(state))
    }
}

/// Convenience function to run a single search with uniform adversaries.
pub fn run_search<S, E>(
    strategy: StrategyKind,
    depth: u32,
    state: &S,
    evaluator: &E,
) -> (SearchResult<S::Action>, SearchStats)
where
    S: GameState,
    E: Evaluator<S>,
{
    let mut search = Search::new(strategy, depth, evaluator, &UniformChance);
    let result = search.run(state);
    (result, search.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{branch, leaf, Marker, Node, RecordingEvaluator};

    fn two_by_two() -> Node {
        branch(vec![
            ("left", branch(vec![("a", leaf(3.0)), ("b", leaf(5.0))])),
            ("right", branch(vec![("c", leaf(2.0)), ("d", leaf(9.0))])),
        ])
    }

    #[test]
    fn test_zero_depth_evaluates_root_once() {
        let state = two_by_two().valued(42.0).into_state(2);
        for strategy in [
            StrategyKind::Minimax,
            StrategyKind::AlphaBeta,
            StrategyKind::Expectimax,
        ] {
            let evaluator = RecordingEvaluator::new();
            let (result, stats) = run_search(strategy, 0, &state, &evaluator);

            assert_eq!(evaluator.seen(), vec![42.0]);
            assert_eq!(result.value, 42.0);
            assert!(result.action.is_none());
            assert_eq!(stats.nodes, 1);
            assert_eq!(stats.evaluations, 1);
        }
    }

    #[test]
    fn test_stats_reset_between_runs() {
        let state = two_by_two().into_state(2);
        let evaluator = RecordingEvaluator::new();
        let mut search = Search::new(StrategyKind::Minimax, 1, &evaluator, &UniformChance);

        search.run(&state);
        let first = search.stats().clone();
        search.run(&state);

        assert_eq!(search.stats(), &first);
        assert_eq!(first.nodes, 7);
        assert_eq!(first.evaluations, 4);
        assert_eq!(first.max_ply, 2);
    }

    #[test]
    fn test_leaf_predicate_short_circuits_with_depth_left() {
        for marker in [
            Marker::Win,
            Marker::Lose,
            Marker::VulnerableAdversary(3),
            Marker::PowerItem,
            Marker::Consumable,
        ] {
            let state = branch(vec![("a", leaf(1.0)), ("b", leaf(2.0))])
                .valued(7.0)
                .marked(marker)
                .into_state(2);

            for strategy in [
                StrategyKind::Minimax,
                StrategyKind::AlphaBeta,
                StrategyKind::Expectimax,
            ] {
                let evaluator = RecordingEvaluator::new();
                let (result, stats) = run_search(strategy, 3, &state, &evaluator);

                assert_eq!(evaluator.seen(), vec![7.0], "{marker:?} under {strategy}");
                assert!(result.action.is_none());
                assert_eq!(stats.nodes, 1);
            }
        }
    }

    #[test]
    fn test_marked_child_is_not_expanded() {
        // The win below "a" would be explored further without the predicate.
        let state = branch(vec![
            (
                "a",
                branch(vec![("x", leaf(-100.0))])
                    .valued(5.0)
                    .marked(Marker::Win),
            ),
            ("b", branch(vec![("y", leaf(1.0))])),
        ])
        .into_state(2);

        let evaluator = RecordingEvaluator::new();
        let (result, _) = run_search(StrategyKind::Minimax, 2, &state, &evaluator);

        assert!(!evaluator.seen().contains(&-100.0));
        assert_eq!(result.value, 5.0);
        assert_eq!(result.action, Some("a"));
    }
}
