//! Scripted ghost policies
//!
//! Ghosts are ordinary [`Agent`]s driven by a seeded ChaCha20 generator, so a
//! run is reproducible from its seed.

use std::str::FromStr;

use anyhow::{anyhow, Error};
use engine_core::{Agent, AgentIndex, Direction, GameState};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

/// Probability that a directional ghost takes its preferred move.
pub const DIRECTIONAL_PROB: f64 = 0.8;

/// Ghost policy named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostPolicyKind {
    Random,
    Directional,
}

impl GhostPolicyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GhostPolicyKind::Random => "random",
            GhostPolicyKind::Directional => "directional",
        }
    }

    /// One ghost playing agent `index`, seeded from `seed`.
    pub fn build<S>(self, index: AgentIndex, seed: u64) -> Box<dyn Agent<S>>
    where
        S: GameState<Action = Direction>,
    {
        let seed = seed.wrapping_add(index as u64);
        match self {
            GhostPolicyKind::Random => Box::new(RandomGhost::with_seed(index, seed)),
            GhostPolicyKind::Directional => Box::new(DirectionalGhost::with_seed(index, seed)),
        }
    }
}

impl FromStr for GhostPolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(GhostPolicyKind::Random),
            "directional" => Ok(GhostPolicyKind::Directional),
            _ => Err(anyhow!(
                "unknown ghost policy '{}', expected one of random, directional",
                s
            )),
        }
    }
}

/// Picks uniformly among the legal actions.
#[derive(Debug)]
pub struct RandomGhost {
    index: AgentIndex,
    rng: ChaCha20Rng,
}

impl RandomGhost {
    pub fn with_seed(index: AgentIndex, seed: u64) -> Self {
        Self {
            index,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomGhost {
    fn index(&self) -> AgentIndex {
        self.index
    }

    fn select_action(&mut self, state: &S) -> Option<S::Action> {
        state.legal_actions(self.index).choose(&mut self.rng).cloned()
    }
}

/// Chases the controlled agent, or runs from it while scared.
///
/// With probability [`DIRECTIONAL_PROB`] the ghost picks among the moves
/// that best change its Manhattan distance to the controlled agent;
/// otherwise it moves uniformly at random.
#[derive(Debug)]
pub struct DirectionalGhost {
    index: AgentIndex,
    rng: ChaCha20Rng,
}

impl DirectionalGhost {
    pub fn with_seed(index: AgentIndex, seed: u64) -> Self {
        Self {
            index,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    fn preferred<S>(&self, state: &S, legal: &[Direction]) -> Vec<Direction>
    where
        S: GameState<Action = Direction>,
    {
        let adversaries = state.adversaries();
        let Some(me) = self.index.checked_sub(1).and_then(|i| adversaries.get(i)).copied() else {
            return legal.to_vec();
        };
        let target = state.controlled_position();
        let distance = |direction: &Direction| me.position.step(*direction).manhattan(target);

        let distances: Vec<u32> = legal.iter().map(distance).collect();
        let best = if me.scared_timer > 0 {
            distances.iter().max()
        } else {
            distances.iter().min()
        };

        match best {
            Some(best) => legal
                .iter()
                .zip(&distances)
                .filter(|(_, d)| *d == best)
                .map(|(direction, _)| *direction)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl<S> Agent<S> for DirectionalGhost
where
    S: GameState<Action = Direction>,
{
    fn index(&self) -> AgentIndex {
        self.index
    }

    fn select_action(&mut self, state: &S) -> Option<Direction> {
        let legal = state.legal_actions(self.index);
        if self.rng.gen_bool(DIRECTIONAL_PROB) {
            let preferred = self.preferred(state, &legal);
            if let Some(direction) = preferred.choose(&mut self.rng) {
                return Some(*direction);
            }
        }
        legal.choose(&mut self.rng).copied()
    }
}
