//! Centralized configuration loading from config.toml.
//!
//! This crate provides configuration structs and loading logic shared
//! across the gridchase components.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`GRIDCHASE_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults
//!
//! Binaries may layer command-line flags on top.
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! GRIDCHASE_<SECTION>_<KEY>=value
//!
//! Examples:
//!     GRIDCHASE_COMMON_LAYOUT=trapped
//!     GRIDCHASE_SEARCH_STRATEGY=expectimax
//!     GRIDCHASE_SEARCH_DEPTH=3
//!     GRIDCHASE_GAME_GHOST_POLICY=directional
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{
    apply_env_overrides, load_config, load_from_path, CONFIG_ENV_VAR, CONFIG_SEARCH_PATHS,
};
pub use structs::*;
