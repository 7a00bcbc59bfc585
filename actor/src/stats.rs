//! Run statistics and the end-of-run summary.
//!
//! This module tracks, across all games of a run:
//! - Outcomes (wins, losses, timeouts)
//! - Scores and game lengths
//! - Search effort (nodes expanded, alpha-beta prunes)
//!
//! The summary is serializable so `--json` can print it for scripts.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Loss,
    /// Move cap reached with the game still running.
    Timeout,
}

/// Result of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub score: i64,
    /// Controlled-agent moves played
    pub moves: u32,
    /// Search nodes across every decision of the game
    pub nodes: u64,
    pub prunes: u64,
}

/// Aggregated statistics for a run.
#[derive(Debug)]
pub struct RunStats {
    games: u32,
    wins: u32,
    losses: u32,
    timeouts: u32,
    total_score: i64,
    total_moves: u64,
    total_nodes: u64,
    total_prunes: u64,
    start_time: Instant,
}

/// Serializable summary for logs and JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub layout: String,
    pub strategy: String,
    pub evaluator: String,
    pub depth: u32,
    pub ghost_policy: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub timeouts: u32,
    pub win_rate: f64,
    pub average_score: f64,
    pub average_moves: f64,
    pub nodes_per_move: f64,
    pub total_prunes: u64,
    pub runtime_seconds: f64,
}

/// Identifies what was run, copied into the summary.
#[derive(Debug, Clone)]
pub struct RunLabel {
    pub layout: String,
    pub strategy: String,
    pub evaluator: String,
    pub depth: u32,
    pub ghost_policy: String,
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            games: 0,
            wins: 0,
            losses: 0,
            timeouts: 0,
            total_score: 0,
            total_moves: 0,
            total_nodes: 0,
            total_prunes: 0,
            start_time: Instant::now(),
        }
    }

    /// Record a finished game.
    pub fn record(&mut self, game: &GameRecord) {
        self.games += 1;
        match game.outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Timeout => self.timeouts += 1,
        }
        self.total_score += game.score;
        self.total_moves += u64::from(game.moves);
        self.total_nodes += game.nodes;
        self.total_prunes += game.prunes;
    }

    pub fn summary(&self, label: RunLabel) -> RunSummary {
        let per_game = |total: f64| {
            if self.games > 0 {
                total / self.games as f64
            } else {
                0.0
            }
        };

        let nodes_per_move = if self.total_moves > 0 {
            self.total_nodes as f64 / self.total_moves as f64
        } else {
            0.0
        };

        RunSummary {
            layout: label.layout,
            strategy: label.strategy,
            evaluator: label.evaluator,
            depth: label.depth,
            ghost_policy: label.ghost_policy,
            games: self.games,
            wins: self.wins,
            losses: self.losses,
            timeouts: self.timeouts,
            win_rate: per_game(self.wins as f64),
            average_score: per_game(self.total_score as f64),
            average_moves: per_game(self.total_moves as f64),
            nodes_per_move,
            total_prunes: self.total_prunes,
            runtime_seconds: self.start_time.elapsed().as_secs_f64(),
        }
    }
}
