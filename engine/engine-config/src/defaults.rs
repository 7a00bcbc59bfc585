//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so the binary and the
//! checked-in documentation of every key can never drift apart.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
    game: GameDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    layout: String,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    strategy: String,
    evaluator: String,
    depth: i64,
}

#[derive(Debug, Deserialize)]
struct GameDefaults {
    ghost_policy: String,
    max_ghosts: usize,
    num_games: u32,
    seed: u64,
    max_moves: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn layout() -> &'static str {
    &DEFAULTS.common.layout
}

// Search
pub fn strategy() -> &'static str {
    &DEFAULTS.search.strategy
}
pub fn evaluator() -> &'static str {
    &DEFAULTS.search.evaluator
}
pub fn depth() -> i64 {
    DEFAULTS.search.depth
}

// Game
pub fn ghost_policy() -> &'static str {
    &DEFAULTS.game.ghost_policy
}
pub fn max_ghosts() -> usize {
    DEFAULTS.game.max_ghosts
}
pub fn num_games() -> u32 {
    DEFAULTS.game.num_games
}
pub fn seed() -> u64 {
    DEFAULTS.game.seed
}
pub fn max_moves() -> u32 {
    DEFAULTS.game.max_moves
}
