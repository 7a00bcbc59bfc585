//! Search configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::evaluator::EvaluatorKind;

/// Errors raised while building a search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown search strategy '{0}', expected one of minimax, alphabeta, expectimax")]
    UnknownStrategy(String),

    #[error("unknown evaluator '{0}', expected one of better, score")]
    UnknownEvaluator(String),

    #[error("search depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    #[error("search depth {0} exceeds the maximum of {max}", max = u32::MAX)]
    DepthTooLarge(i64),
}

/// Which tree walker the agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alphabeta",
            StrategyKind::Expectimax => "expectimax",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(StrategyKind::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(StrategyKind::AlphaBeta),
            "expectimax" => Ok(StrategyKind::Expectimax),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Configuration for one search agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: StrategyKind,

    /// Leaf scoring function.
    pub evaluator: EvaluatorKind,

    /// Number of full rounds (every agent moves once) searched before the
    /// evaluator takes over. Zero evaluates the current state directly.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Minimax,
            evaluator: EvaluatorKind::Better,
            depth: 2,
        }
    }
}

impl SearchConfig {
    /// Build a configuration from loosely typed settings (config files, CLI).
    ///
    /// Unknown names and out-of-range depths are rejected here so a bad setting
    /// never reaches the search.
    pub fn from_settings(strategy: &str, evaluator: &str, depth: i64) -> Result<Self, ConfigError> {
        let strategy = strategy.parse()?;
        let evaluator = evaluator.parse()?;
        if depth < 0 {
            return Err(ConfigError::NegativeDepth(depth));
        }
        let depth = u32::try_from(depth).map_err(|_| ConfigError::DepthTooLarge(depth))?;

        Ok(Self {
            strategy,
            evaluator,
            depth,
        })
    }

    /// Builder pattern: set strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder pattern: set evaluator.
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Builder pattern: set depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}
