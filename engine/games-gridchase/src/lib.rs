//! Grid chase game for the adversarial search engine
//!
//! One controlled agent collects food on a walled grid while ghosts chase it.
//! Eating a capsule scares every ghost for a while, during which ghosts can
//! be captured for points. Agent 0 is the controlled agent, ghost `i` is
//! agent `i + 1`.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Direction, GameState, CONTROLLED_AGENT};
//! use games_gridchase::GridState;
//!
//! let state = GridState::from_layout_name("tiny", 1).expect("tiny is built in");
//! assert_eq!(state.num_agents(), 2);
//!
//! let next = state.successor(CONTROLLED_AGENT, &Direction::North);
//! assert_eq!(next.points(), -1);
//! ```

mod layout;


use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use engine_core::{AdversaryView, AgentIndex, Direction, GameState, Position, CONTROLLED_AGENT};

pub use layout::{layout_by_name, load_layout, Layout, LayoutError, LAYOUT_NAMES};

/// Ticks a ghost stays capturable after a capsule is eaten.
pub const SCARED_TIME: u32 = 40;
/// Cost of every controlled-agent move, `Stop` included.
pub const TIME_PENALTY: i64 = 1;
pub const FOOD_POINTS: i64 = 10;
/// Bonus for clearing the board.
pub const WIN_POINTS: i64 = 500;
pub const GHOST_POINTS: i64 = 200;
pub const DEATH_PENALTY: i64 = 500;

/// How the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostState {
    pub position: Position,
    /// Respawn point after being captured.
    pub start: Position,
    pub scared_timer: u32,
}

impl GhostState {
    fn new(start: Position) -> Self {
        Self {
            position: start,
            start,
            scared_timer: 0,
        }
    }

    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// Grid chase game state
///
/// Cheap to clone: the static layout is shared.
#[derive(Debug, Clone)]
pub struct GridState {
    layout: Arc<Layout>,
    agent: Position,
    ghosts: Vec<GhostState>,
    food: BTreeSet<Position>,
    capsules: Vec<Position>,
    points: i64,
    outcome: Outcome,
}

impl GridState {
    /// Initial state for `layout`, seating at most `max_ghosts` ghosts in
    /// layout order.
    pub fn new(layout: Layout, max_ghosts: usize) -> Self {
        let ghosts = layout
            .ghost_starts
            .iter()
            .take(max_ghosts)
            .map(|start| GhostState::new(*start))
            .collect();

        Self {
            agent: layout.agent_start,
            ghosts,
            food: layout.food.iter().copied().collect(),
            capsules: layout.capsules.clone(),
            points: 0,
            outcome: Outcome::Playing,
            layout: Arc::new(layout),
        }
    }

    /// Initial state for a built-in layout or a layout file.
    pub fn from_layout_name(name_or_path: &str, max_ghosts: usize) -> Result<Self, LayoutError> {
        load_layout(name_or_path).map(|layout| Self::new(layout, max_ghosts))
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn agent_position(&self) -> Position {
        self.agent
    }

    pub fn ghosts(&self) -> &[GhostState] {
        &self.ghosts
    }

    pub fn food_left(&self) -> usize {
        self.food.len()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Game score in whole points.
    pub fn points(&self) -> i64 {
        self.points
    }

    fn is_playing(&self) -> bool {
        self.outcome == Outcome::Playing
    }

    fn open_moves(&self, from: Position) -> impl Iterator<Item = Direction> + '_ {
        Direction::CARDINAL
            .into_iter()
            .filter(move |direction| !self.layout.is_wall(from.step(*direction)))
    }

    fn move_agent(&mut self, direction: Direction) {
        self.agent = self.agent.step(direction);
        self.points -= TIME_PENALTY;

        if self.food.remove(&self.agent) {
            self.points += FOOD_POINTS;
            if self.food.is_empty() {
                self.points += WIN_POINTS;
                self.outcome = Outcome::Won;
            }
        }

        if let Some(index) = self.capsules.iter().position(|c| *c == self.agent) {
            self.capsules.remove(index);
            for ghost in &mut self.ghosts {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        for index in 0..self.ghosts.len() {
            self.check_collision(index);
        }
    }

    fn move_ghost(&mut self, index: usize, direction: Direction) {
        let ghost = &mut self.ghosts[index];
        ghost.position = ghost.position.step(direction);
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);

        self.check_collision(index);
    }

    fn check_collision(&mut self, index: usize) {
        let ghost = &mut self.ghosts[index];
        if ghost.position != self.agent {
            return;
        }

        if ghost.is_scared() {
            self.points += GHOST_POINTS;
            ghost.position = ghost.start;
            ghost.scared_timer = 0;
        } else if self.outcome != Outcome::Won {
            self.points -= DEATH_PENALTY;
            self.outcome = Outcome::Lost;
        }
    }
}

impl GameState for GridState {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    /// Controlled agent: open cardinal moves, then `Stop`. Ghosts: open
    /// cardinal moves, or `Stop` only when boxed in.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if !self.is_playing() {
            return Vec::new();
        }

        if agent == CONTROLLED_AGENT {
            let mut actions: Vec<Direction> = self.open_moves(self.agent).collect();
            actions.push(Direction::Stop);
            return actions;
        }

        match self.ghosts.get(agent - 1) {
            Some(ghost) => {
                let actions: Vec<Direction> = self.open_moves(ghost.position).collect();
                if actions.is_empty() {
                    vec![Direction::Stop]
                } else {
                    actions
                }
            }
            None => Vec::new(),
        }
    }

    /// Illegal actions, including any action in a finished game, leave the
    /// state unchanged.
    fn successor(&self, agent: AgentIndex, action: &Direction) -> Self {
        let mut next = self.clone();
        if !self.legal_actions(agent).contains(action) {
            return next;
        }

        if agent == CONTROLLED_AGENT {
            next.move_agent(*action);
        } else {
            next.move_ghost(agent - 1, *action);
        }
        next
    }

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }

    fn is_lose(&self) -> bool {
        self.outcome == Outcome::Lost
    }

    fn score(&self) -> f64 {
        self.points as f64
    }

    fn controlled_position(&self) -> Position {
        self.agent
    }

    fn adversaries(&self) -> Vec<AdversaryView> {
        self.ghosts
            .iter()
            .map(|ghost| AdversaryView::new(ghost.position, ghost.scared_timer))
            .collect()
    }

    fn power_items(&self) -> Vec<Position> {
        self.capsules.clone()
    }

    fn consumables(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn has_power_item(&self, position: Position) -> bool {
        self.capsules.contains(&position)
    }

    fn has_consumable(&self, position: Position) -> bool {
        self.food.contains(&position)
    }
}

/// ASCII board. Scared ghosts are drawn as `g`.
impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.layout.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.layout.width() {
                let here = Position::new(x as i32, y as i32);
                let ghost = self.ghosts.iter().find(|g| g.position == here);
                let tile = if here == self.agent {
                    'P'
                } else if let Some(ghost) = ghost {
                    if ghost.is_scared() {
                        'g'
                    } else {
                        'G'
                    }
                } else if self.layout.is_wall(here) {
                    '%'
                } else if self.capsules.contains(&here) {
                    'o'
                } else if self.food.contains(&here) {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}
