//! Search-backed agent for the controlled player.

use engine_core::{Agent, AgentIndex, GameState, CONTROLLED_AGENT};
use tracing::debug;

use crate::chance::{ChanceModel, UniformChance};
use crate::config::{ConfigError, SearchConfig, StrategyKind};
use crate::evaluator::{Evaluator, EvaluatorKind};
use crate::search::{Search, SearchStats};

/// Outcome of one decision at the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<A> {
    /// Backed-up value of the root.
    pub value: f64,
    pub action: Option<A>,
    pub stats: SearchStats,
}

/// Plays the controlled agent by running a search on every turn.
#[derive(Debug, Clone)]
pub struct SearchAgent<E = EvaluatorKind, C = UniformChance> {
    strategy: StrategyKind,
    depth: u32,
    evaluator: E,
    chance: C,
    last_stats: SearchStats,
}

impl SearchAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self::custom(config.strategy, config.depth, config.evaluator)
    }

    /// Parse loosely typed settings and build the agent.
    pub fn from_settings(strategy: &str, evaluator: &str, depth: i64) -> Result<Self, ConfigError> {
        SearchConfig::from_settings(strategy, evaluator, depth).map(Self::new)
    }
}

impl<E> SearchAgent<E> {
    /// Agent with a caller-supplied evaluator.
    pub fn custom(strategy: StrategyKind, depth: u32, evaluator: E) -> Self {
        Self {
            strategy,
            depth,
            evaluator,
            chance: UniformChance,
            last_stats: SearchStats::default(),
        }
    }
}

impl<E, C> SearchAgent<E, C> {
    /// Replace the chance model used by expectimax adversary nodes.
    pub fn with_chance<C2: ChanceModel>(self, chance: C2) -> SearchAgent<E, C2> {
        SearchAgent {
            strategy: self.strategy,
            depth: self.depth,
            evaluator: self.evaluator,
            chance,
            last_stats: self.last_stats,
        }
    }

    pub fn strategy(&self) -> StrategyKind {
        self.strategy
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Statistics of the most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// Search from `state` and report the root value alongside the action.
    ///
    /// When the search reaches no decision (depth zero, a leaf root, or every
    /// option scored the sentinel) but the controlled agent can still move,
    /// the first legal action is played.
    pub fn decide<S>(&mut self, state: &S) -> Decision<S::Action>
    where
        S: GameState,
        E: Evaluator<S>,
        C: ChanceModel,
    {
        let mut search = Search::new(self.strategy, self.depth, &self.evaluator, &self.chance);
        let result = search.run(state);
        let stats = search.stats().clone();

        let action = match result.action {
            Some(action) => Some(action),
            None => {
                let fallback = state.legal_actions(CONTROLLED_AGENT).into_iter().next();
                if fallback.is_some() {
                    debug!(
                        strategy = %self.strategy,
                        depth = self.depth,
                        "Search returned no action, playing first legal action"
                    );
                }
                fallback
            }
        };

        debug!(
            strategy = %self.strategy,
            depth = self.depth,
            value = result.value,
            action = ?action,
            nodes = stats.nodes,
            prunes = stats.prunes,
            "Decision made"
        );

        self.last_stats = stats.clone();
        Decision {
            value: result.value,
            action,
            stats,
        }
    }
}

impl<S, E, C> Agent<S> for SearchAgent<E, C>
where
    S: GameState,
    E: Evaluator<S>,
    C: ChanceModel,
{
    fn index(&self) -> AgentIndex {
        CONTROLLED_AGENT
    }

    fn select_action(&mut self, state: &S) -> Option<S::Action> {
        self.decide(state).action
    }
}
