//! Depth-limited adversarial search for one agent against many adversaries.
//!
//! This crate searches any game implementing the `engine-core`
//! [`GameState`](engine_core::GameState) trait. Agent 0 is the controlled
//! agent and maximizes; every other agent is an adversary that moves after it
//! in index order.
//!
//! # Strategies
//!
//! - **Minimax**: adversaries minimize.
//! - **Alpha-beta**: minimax with pruning; same root value and action.
//! - **Expectimax**: adversaries are chance nodes, backing up the expectation
//!   under a [`ChanceModel`] (uniform by default).
//!
//! Depth counts full rounds: a depth of `d` with `n` agents explores `d * n`
//! plies before handing states to the [`Evaluator`]. States where the score
//! is about to change (win, loss, capturable adversary, item underfoot) are
//! evaluated immediately whatever depth is left.
//!
//! # Usage
//!
//! ```rust,ignore
//! use adversarial::{SearchAgent, SearchConfig, StrategyKind};
//! use engine_core::Agent;
//! use games_gridchase::GridState;
//!
//! let state = GridState::from_layout_name("small", 2)?;
//! let mut agent = SearchAgent::new(
//!     SearchConfig::default()
//!         .with_strategy(StrategyKind::AlphaBeta)
//!         .with_depth(3),
//! );
//!
//! let action = agent.select_action(&state);
//! println!("Playing {action:?}, searched {} nodes", agent.last_stats().nodes);
//! ```

pub mod agent;
mod alphabeta;
pub mod chance;
pub mod config;
pub mod evaluator;
mod expectimax;
pub mod leaf;
mod minimax;
pub mod search;
pub mod turn;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main types
pub use agent::{Decision, SearchAgent};
pub use chance::{ChanceModel, UniformChance};
pub use config::{ConfigError, SearchConfig, StrategyKind};
pub use evaluator::{
    better_evaluation, score_evaluation, Evaluator, EvaluatorKind, ScoreTable, BETTER_TABLE,
    SCORE_TABLE,
};
pub use leaf::should_self_evaluate;
pub use search::{run_search, Search, SearchResult, SearchStats};
pub use turn::{NodeKind, Turn, TurnModel};
