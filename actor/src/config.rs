//! Configuration for the actor binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use adversarial::SearchConfig;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::policy::GhostPolicyKind;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_layout() -> String {
    CENTRAL_CONFIG.common.layout.clone()
}

fn default_strategy() -> String {
    CENTRAL_CONFIG.search.strategy.clone()
}

fn default_evaluator() -> String {
    CENTRAL_CONFIG.search.evaluator.clone()
}

fn default_depth() -> i64 {
    CENTRAL_CONFIG.search.depth
}

fn default_ghost_policy() -> String {
    CENTRAL_CONFIG.game.ghost_policy.clone()
}

fn default_max_ghosts() -> usize {
    CENTRAL_CONFIG.game.max_ghosts
}

fn default_num_games() -> u32 {
    CENTRAL_CONFIG.game.num_games
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.game.seed
}

fn default_max_moves() -> u32 {
    CENTRAL_CONFIG.game.max_moves
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "actor")]
#[command(about = "Gridchase actor - plays games with a search agent against ghosts")]
#[command(
    long_about = "Actor that plays grid chase games with a minimax, alpha-beta or
expectimax agent against scripted ghosts and reports win rate and scores.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Built-in layout name (tiny, small, trapped, open) or layout file path
    #[arg(long, default_value_t = default_layout())]
    pub layout: String,

    /// Search strategy (minimax, alphabeta, expectimax)
    #[arg(long, default_value_t = default_strategy())]
    pub strategy: String,

    /// Leaf evaluator (better, score)
    #[arg(long, default_value_t = default_evaluator())]
    pub evaluator: String,

    /// Search depth in full rounds
    #[arg(long, default_value_t = default_depth(), allow_negative_numbers = true)]
    pub depth: i64,

    /// Ghost policy (random, directional)
    #[arg(long, default_value_t = default_ghost_policy())]
    pub ghost_policy: String,

    /// Maximum number of ghosts seated from the layout
    #[arg(long, default_value_t = default_max_ghosts())]
    pub max_ghosts: usize,

    /// Number of games to play
    #[arg(long, default_value_t = default_num_games())]
    pub num_games: u32,

    /// Seed for the ghost policies
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Controlled-agent moves before a game counts as a timeout
    #[arg(long, default_value_t = default_max_moves())]
    pub max_moves: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.layout.is_empty() {
            return Err(anyhow!("layout cannot be empty"));
        }

        if self.num_games == 0 {
            return Err(anyhow!("num_games must be greater than 0"));
        }

        if self.max_moves == 0 {
            return Err(anyhow!("max_moves must be greater than 0"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        self.search_config()?;
        self.ghost_policy()?;

        Ok(())
    }

    /// Typed search settings.
    pub fn search_config(&self) -> Result<SearchConfig> {
        SearchConfig::from_settings(&self.strategy, &self.evaluator, self.depth)
            .context("invalid search configuration")
    }

    pub fn ghost_policy(&self) -> Result<GhostPolicyKind> {
        self.ghost_policy.parse()
    }
}
