//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_layout() -> String {
    defaults::layout().into()
}
fn d_strategy() -> String {
    defaults::strategy().into()
}
fn d_evaluator() -> String {
    defaults::evaluator().into()
}
fn d_depth() -> i64 {
    defaults::depth()
}
fn d_ghost_policy() -> String {
    defaults::ghost_policy().into()
}
fn d_max_ghosts() -> usize {
    defaults::max_ghosts()
}
fn d_num_games() -> u32 {
    defaults::num_games()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_max_moves() -> u32 {
    defaults::max_moves()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub game: GameConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// Built-in layout name or path to a layout file
    #[serde(default = "d_layout")]
    pub layout: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            layout: defaults::layout().into(),
        }
    }
}

/// Search settings as written in the file.
///
/// Kept loosely typed: names and depth are validated when the search agent
/// is built, so a typo fails there with a precise error.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchSection {
    #[serde(default = "d_strategy")]
    pub strategy: String,
    #[serde(default = "d_evaluator")]
    pub evaluator: String,
    #[serde(default = "d_depth")]
    pub depth: i64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            strategy: defaults::strategy().into(),
            evaluator: defaults::evaluator().into(),
            depth: defaults::depth(),
        }
    }
}

/// Game loop configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    #[serde(default = "d_ghost_policy")]
    pub ghost_policy: String,
    #[serde(default = "d_max_ghosts")]
    pub max_ghosts: usize,
    #[serde(default = "d_num_games")]
    pub num_games: u32,
    /// Seed for the ghost policies
    #[serde(default = "d_seed")]
    pub seed: u64,
    #[serde(default = "d_max_moves")]
    pub max_moves: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ghost_policy: defaults::ghost_policy().into(),
            max_ghosts: defaults::max_ghosts(),
            num_games: defaults::num_games(),
            seed: defaults::seed(),
            max_moves: defaults::max_moves(),
        }
    }
}
