//! Hand-built game trees for exercising the strategies.
//!
//! Every node carries a raw score and an optional marker that drives the
//! leaf predicate. Actions are the child labels; every agent sees the same
//! children, so the tree shape alone decides who moves where.

use std::cell::RefCell;
use std::rc::Rc;

use engine_core::{AdversaryView, AgentIndex, GameState, Position};

use crate::evaluator::Evaluator;

const HERE: Position = Position::new(0, 0);
const ELSEWHERE: Position = Position::new(9, 9);

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Marker {
    Plain,
    Win,
    Lose,
    /// Adversary on the controlled agent's cell with this scared timer.
    VulnerableAdversary(u32),
    PowerItem,
    Consumable,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    value: f64,
    marker: Marker,
    children: Vec<(&'static str, Rc<Node>)>,
}

pub(crate) fn leaf(value: f64) -> Node {
    Node {
        value,
        marker: Marker::Plain,
        children: Vec::new(),
    }
}

pub(crate) fn branch(children: Vec<(&'static str, Node)>) -> Node {
    Node {
        value: 0.0,
        marker: Marker::Plain,
        children: children
            .into_iter()
            .map(|(label, node)| (label, Rc::new(node)))
            .collect(),
    }
}

impl Node {
    pub(crate) fn valued(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub(crate) fn marked(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub(crate) fn into_state(self, num_agents: usize) -> TreeState {
        TreeState {
            node: Rc::new(self),
            num_agents,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TreeState {
    node: Rc<Node>,
    num_agents: usize,
}

impl GameState for TreeState {
    type Action = &'static str;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<&'static str> {
        self.node.children.iter().map(|(label, _)| *label).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &&'static str) -> Self {
        match self.node.children.iter().find(|(label, _)| label == action) {
            Some((_, child)) => TreeState {
                node: Rc::clone(child),
                num_agents: self.num_agents,
            },
            None => self.clone(),
        }
    }

    fn is_win(&self) -> bool {
        self.node.marker == Marker::Win
    }

    fn is_lose(&self) -> bool {
        self.node.marker == Marker::Lose
    }

    fn score(&self) -> f64 {
        self.node.value
    }

    fn controlled_position(&self) -> Position {
        HERE
    }

    fn adversaries(&self) -> Vec<AdversaryView> {
        match self.node.marker {
            Marker::VulnerableAdversary(timer) => vec![AdversaryView::new(HERE, timer)],
            _ => vec![AdversaryView::new(ELSEWHERE, 0)],
        }
    }

    fn power_items(&self) -> Vec<Position> {
        match self.node.marker {
            Marker::PowerItem => vec![HERE],
            _ => vec![ELSEWHERE],
        }
    }

    fn consumables(&self) -> Vec<Position> {
        match self.node.marker {
            Marker::Consumable => vec![HERE],
            _ => vec![ELSEWHERE],
        }
    }
}

/// Returns each state's raw score and remembers what it was asked about.
#[derive(Debug, Default)]
pub(crate) struct RecordingEvaluator {
    seen: RefCell<Vec<f64>>,
}

impl RecordingEvaluator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Scores handed out so far, in call order.
    pub(crate) fn seen(&self) -> Vec<f64> {
        self.seen.borrow().clone()
    }

    pub(crate) fn calls(&self) -> usize {
        self.seen.borrow().len()
    }
}

impl Evaluator<TreeState> for RecordingEvaluator {
    fn evaluate(&self, state: &TreeState) -> f64 {
        let value = state.score();
        self.seen.borrow_mut().push(value);
        value
    }
}
