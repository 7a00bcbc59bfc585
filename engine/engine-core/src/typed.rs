//! Typed query interface between a multi-agent game and its decision makers
//!
//! Games expose their state through [`GameState`]; anything that picks moves
//! for one agent (search agents, scripted adversaries, humans) implements
//! [`Agent`]. The search crate only ever talks to these two traits.

use std::fmt::Debug;

use crate::game_utils::Position;

/// Index of an agent in the turn order.
pub type AgentIndex = usize;

/// The single maximizing agent. Every other index is an adversary.
pub const CONTROLLED_AGENT: AgentIndex = 0;

/// Read-only view of one adversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdversaryView {
    pub position: Position,
    /// Remaining ticks during which the adversary can be captured.
    /// Zero when the adversary is dangerous.
    pub scared_timer: u32,
}

impl AdversaryView {
    pub fn new(position: Position, scared_timer: u32) -> Self {
        Self {
            position,
            scared_timer,
        }
    }
}

/// Main trait for multi-agent game states
///
/// A state is an immutable snapshot: `successor` produces a new state and
/// leaves `self` untouched. Agents move in increasing index order, agent
/// [`CONTROLLED_AGENT`] first.
///
/// # Example
///
/// ```rust
/// # use engine_core::typed::*;
/// # use engine_core::Position;
/// #[derive(Debug, Clone)]
/// struct Countdown(u8);
///
/// impl GameState for Countdown {
///     type Action = u8;
///
///     fn num_agents(&self) -> usize { 1 }
///     fn legal_actions(&self, _agent: AgentIndex) -> Vec<u8> {
///         if self.0 == 0 { Vec::new() } else { vec![1] }
///     }
///     fn successor(&self, _agent: AgentIndex, action: &u8) -> Self {
///         Countdown(self.0.saturating_sub(*action))
///     }
///     fn is_win(&self) -> bool { self.0 == 0 }
///     fn is_lose(&self) -> bool { false }
///     fn score(&self) -> f64 { -(self.0 as f64) }
///     fn controlled_position(&self) -> Position { Position::new(self.0 as i32, 0) }
///     fn adversaries(&self) -> Vec<AdversaryView> { Vec::new() }
///     fn power_items(&self) -> Vec<Position> { Vec::new() }
///     fn consumables(&self) -> Vec<Position> { Vec::new() }
/// }
///
/// let next = Countdown(2).successor(CONTROLLED_AGENT, &1);
/// assert_eq!(next.score(), -1.0);
/// ```
pub trait GameState: Clone + Debug {
    /// Action type, small and cheap to clone
    type Action: Clone + PartialEq + Debug;

    /// Number of agents taking turns, controlled agent included
    fn num_agents(&self) -> usize;

    /// Legal actions for `agent` in enumeration order.
    ///
    /// Empty for terminal states.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// State reached after `agent` plays `action`
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Raw game score
    fn score(&self) -> f64;

    /// Position of the controlled agent
    fn controlled_position(&self) -> Position;

    /// Adversaries in agent-index order (adversary `i` is agent `i + 1`)
    fn adversaries(&self) -> Vec<AdversaryView>;

    /// Locations of the remaining power items
    fn power_items(&self) -> Vec<Position>;

    /// Locations of the remaining consumable items
    fn consumables(&self) -> Vec<Position>;

    /// Whether the game has ended either way
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    fn has_power_item(&self, position: Position) -> bool {
        self.power_items().contains(&position)
    }

    fn has_consumable(&self, position: Position) -> bool {
        self.consumables().contains(&position)
    }
}

/// Something that decides moves for one agent
pub trait Agent<S: GameState> {
    /// Turn-order index this agent plays as
    fn index(&self) -> AgentIndex;

    /// Pick the action to play in `state`.
    ///
    /// Returns `None` only when the agent has no legal action.
    fn select_action(&mut self, state: &S) -> Option<S::Action>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Corridor {
        at: i32,
        food: Vec<Position>,
        capsules: Vec<Position>,
    }

    impl GameState for Corridor {
        type Action = i32;

        fn num_agents(&self) -> usize {
            1
        }

        fn legal_actions(&self, _agent: AgentIndex) -> Vec<i32> {
            vec![-1, 1]
        }

        fn successor(&self, _agent: AgentIndex, action: &i32) -> Self {
            let mut next = self.clone();
            next.at += action;
            next
        }

        fn is_win(&self) -> bool {
            self.at >= 3
        }

        fn is_lose(&self) -> bool {
            false
        }

        fn score(&self) -> f64 {
            self.at as f64
        }

        fn controlled_position(&self) -> Position {
            Position::new(self.at, 0)
        }

        fn adversaries(&self) -> Vec<AdversaryView> {
            Vec::new()
        }

        fn power_items(&self) -> Vec<Position> {
            self.capsules.clone()
        }

        fn consumables(&self) -> Vec<Position> {
            self.food.clone()
        }
    }

    #[test]
    fn test_default_membership_queries() {
        let state = Corridor {
            at: 0,
            food: vec![Position::new(1, 0)],
            capsules: vec![Position::new(2, 0)],
        };

        assert!(state.has_consumable(Position::new(1, 0)));
        assert!(!state.has_consumable(Position::new(2, 0)));
        assert!(state.has_power_item(Position::new(2, 0)));
        assert!(!state.has_power_item(Position::new(0, 0)));
    }

    #[test]
    fn test_successor_leaves_original_untouched() {
        let state = Corridor {
            at: 2,
            food: Vec::new(),
            capsules: Vec::new(),
        };
        let next = state.successor(CONTROLLED_AGENT, &1);

        assert_eq!(state.at, 2);
        assert!(!state.is_terminal());
        assert!(next.is_terminal());
    }
}
