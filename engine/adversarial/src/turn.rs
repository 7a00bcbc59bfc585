//! Turn model: which agent moves at a given ply and when the search stops.
//!
//! Plies are numbered from zero at the root. Agents take turns in index
//! order, so one round of `num_agents` plies is one unit of depth.

use engine_core::{AgentIndex, CONTROLLED_AGENT};

/// Role of the agent moving at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The controlled agent picks the highest value.
    Maximizer,
    /// An adversary: minimizer for minimax/alpha-beta, chance node for expectimax.
    Adversary,
}

/// Everything a strategy needs to know about the current ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub agent: AgentIndex,
    /// Completed rounds above this node.
    pub depth: u32,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnModel {
    num_agents: u32,
    depth_limit: u32,
}

impl TurnModel {
    pub fn new(num_agents: usize, depth_limit: u32) -> Self {
        Self {
            num_agents: num_agents.max(1) as u32,
            depth_limit,
        }
    }

    pub fn num_agents(&self) -> usize {
        self.num_agents as usize
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    #[inline]
    pub fn agent(&self, ply: u32) -> AgentIndex {
        (ply % self.num_agents) as AgentIndex
    }

    #[inline]
    pub fn depth(&self, ply: u32) -> u32 {
        ply / self.num_agents
    }

    /// True once `depth_limit` full rounds have been played below the root.
    #[inline]
    pub fn is_cutoff(&self, ply: u32) -> bool {
        u64::from(ply) >= u64::from(self.depth_limit) * u64::from(self.num_agents)
    }

    pub fn turn(&self, ply: u32) -> Turn {
        let agent = self.agent(ply);
        let kind = if agent == CONTROLLED_AGENT {
            NodeKind::Maximizer
        } else {
            NodeKind::Adversary
        };

        Turn {
            agent,
            depth: self.depth(ply),
            kind,
        }
    }
}
