//! Core traits and types for multi-agent grid games
//!
//! This crate provides the abstractions shared by games and decision makers:
//! - `GameState`: read-only query interface over an immutable game snapshot
//! - `Agent`: anything that picks an action for one agent index
//! - `Position` / `Direction`: grid geometry shared by every game

pub mod game_utils;
pub mod typed;

// Re-export main types for convenience
pub use game_utils::{Direction, Position};
pub use typed::{AdversaryView, Agent, AgentIndex, GameState, CONTROLLED_AGENT};
