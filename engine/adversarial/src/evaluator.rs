//! State evaluators used at leaves and depth cutoffs.
//!
//! An evaluator is a pure function of a state: no recursion, no side effects.
//! Two hand-tuned scoring tables are provided and selected by name through
//! [`EvaluatorKind`]; any `Fn(&S) -> f64` closure also works as an evaluator.

use std::fmt;
use std::str::FromStr;

use engine_core::GameState;

use crate::config::ConfigError;
use crate::leaf::{on_consumable, on_power_item, on_vulnerable_adversary};

/// Trait for leaf evaluators.
pub trait Evaluator<S: GameState> {
    /// Score `state` from the controlled agent's point of view.
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Bonus table for one scoring function. Rules are checked top to bottom and
/// the first match wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTable {
    pub lose: f64,
    pub win: f64,
    pub vulnerable_adversary: f64,
    pub power_item: f64,
    pub consumable: f64,
    /// Added when no other rule matched.
    pub idle: f64,
}

/// Canonical table: small per-step penalty biases the search toward progress.
pub const BETTER_TABLE: ScoreTable = ScoreTable {
    lose: -1000.0,
    win: 1000.0,
    vulnerable_adversary: 100.0,
    power_item: 20.0,
    consumable: 10.0,
    idle: -1.0,
};

/// Flat item bonuses and no step penalty.
pub const SCORE_TABLE: ScoreTable = ScoreTable {
    lose: -1000.0,
    win: 1000.0,
    vulnerable_adversary: 200.0,
    power_item: 150.0,
    consumable: 150.0,
    idle: 0.0,
};

impl ScoreTable {
    pub fn apply<S: GameState>(&self, state: &S) -> f64 {
        let score = state.score();

        let bonus = if state.is_lose() {
            self.lose
        } else if state.is_win() {
            self.win
        } else if on_vulnerable_adversary(state) {
            self.vulnerable_adversary
        } else if on_power_item(state) {
            self.power_item
        } else if on_consumable(state) {
            self.consumable
        } else {
            self.idle
        };

        score + bonus
    }
}

/// Score bonuses from [`BETTER_TABLE`].
pub fn better_evaluation<S: GameState>(state: &S) -> f64 {
    BETTER_TABLE.apply(state)
}

/// Score bonuses from [`SCORE_TABLE`].
pub fn score_evaluation<S: GameState>(state: &S) -> f64 {
    SCORE_TABLE.apply(state)
}

/// Named evaluators selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    #[default]
    Better,
    Score,
}

impl EvaluatorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluatorKind::Better => "better",
            EvaluatorKind::Score => "score",
        }
    }

    pub fn table(self) -> &'static ScoreTable {
        match self {
            EvaluatorKind::Better => &BETTER_TABLE,
            EvaluatorKind::Score => &SCORE_TABLE,
        }
    }
}

impl<S: GameState> Evaluator<S> for EvaluatorKind {
    fn evaluate(&self, state: &S) -> f64 {
        self.table().apply(state)
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "better" => Ok(EvaluatorKind::Better),
            "score" => Ok(EvaluatorKind::Score),
            _ => Err(ConfigError::UnknownEvaluator(s.to_string())),
        }
    }
}
