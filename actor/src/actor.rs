//! Game loop: a search agent against scripted ghosts

use adversarial::{SearchAgent, SearchConfig};
use anyhow::{anyhow, Context, Result};
use engine_core::{Agent, GameState, CONTROLLED_AGENT};
use games_gridchase::{load_layout, GridState, Layout};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Config;
use crate::policy::GhostPolicyKind;
use crate::stats::{GameOutcome, GameRecord, RunLabel, RunStats, RunSummary};

type Ghost = Box<dyn Agent<GridState>>;

pub struct Actor {
    config: Config,
    layout: Layout,
    search: SearchConfig,
    ghost_policy: GhostPolicyKind,
}

impl Actor {
    pub fn new(config: Config) -> Result<Self> {
        let search = config.search_config()?;
        let ghost_policy = config.ghost_policy()?;
        let layout = load_layout(&config.layout)
            .with_context(|| format!("failed to load layout '{}'", config.layout))?;

        info!(
            layout = %layout,
            ghosts = layout.num_ghosts().min(config.max_ghosts),
            strategy = %search.strategy,
            evaluator = %search.evaluator,
            depth = search.depth,
            ghost_policy = ghost_policy.as_str(),
            "Actor configured"
        );

        Ok(Self {
            config,
            layout,
            search,
            ghost_policy,
        })
    }

    /// Play every configured game and summarize the run.
    pub fn run(&self) -> Result<RunSummary> {
        let num_games = self.config.num_games;
        let mut stats = RunStats::new();
        let mut agent = SearchAgent::new(self.search.clone());

        let initial = self.initial_state();
        let mut ghosts: Vec<Ghost> = (1..initial.num_agents())
            .map(|index| self.ghost_policy.build(index, self.config.seed))
            .collect();

        // Create progress bar for multi-game runs (only when stderr is a TTY)
        let progress = if num_games > 1 && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            let pb = ProgressBar::new(u64::from(num_games));
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} games ({eta})")
                    .map_err(|e| anyhow!("invalid progress template: {e}"))?
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        info!(games = num_games, "Starting games");

        for game in 1..=num_games {
            let started = Instant::now();
            let record = self.play_game(&mut agent, &mut ghosts)?;
            stats.record(&record);

            let log = || {
                info!(
                    game,
                    outcome = ?record.outcome,
                    score = record.score,
                    moves = record.moves,
                    nodes = record.nodes,
                    prunes = record.prunes,
                    secs = format!("{:.2}", started.elapsed().as_secs_f64()),
                    "Game finished"
                );
            };

            // Suspend progress bar while logging to avoid visual glitches
            match progress {
                Some(ref pb) => {
                    pb.suspend(log);
                    pb.inc(1);
                }
                None => log(),
            }
        }

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        let summary = stats.summary(self.label());
        info!(
            games = summary.games,
            wins = summary.wins,
            losses = summary.losses,
            timeouts = summary.timeouts,
            win_rate = format!("{:.2}", summary.win_rate),
            average_score = format!("{:.1}", summary.average_score),
            nodes_per_move = format!("{:.1}", summary.nodes_per_move),
            "Run complete"
        );

        Ok(summary)
    }

    fn initial_state(&self) -> GridState {
        GridState::new(self.layout.clone(), self.config.max_ghosts)
    }

    fn label(&self) -> RunLabel {
        RunLabel {
            layout: self.layout.name().to_string(),
            strategy: self.search.strategy.to_string(),
            evaluator: self.search.evaluator.to_string(),
            depth: self.search.depth,
            ghost_policy: self.ghost_policy.as_str().to_string(),
        }
    }

    /// One game, agents moving in index order until the game ends or the
    /// controlled agent has used up its moves.
    fn play_game(&self, agent: &mut SearchAgent, ghosts: &mut [Ghost]) -> Result<GameRecord> {
        let mut state = self.initial_state();
        let mut moves = 0;
        let mut nodes = 0;
        let mut prunes = 0;

        while !state.is_terminal() && moves < self.config.max_moves {
            let action = agent
                .select_action(&state)
                .ok_or_else(|| anyhow!("controlled agent has no legal action"))?;
            nodes += agent.last_stats().nodes;
            prunes += agent.last_stats().prunes;
            state = state.successor(CONTROLLED_AGENT, &action);
            moves += 1;

            for ghost in ghosts.iter_mut() {
                if state.is_terminal() {
                    break;
                }
                let index = ghost.index();
                let action = ghost
                    .select_action(&state)
                    .ok_or_else(|| anyhow!("ghost {index} has no legal action"))?;
                state = state.successor(index, &action);
            }

            debug!(moves, score = state.points(), "Round played\n{}", state);
        }

        let outcome = if state.is_win() {
            GameOutcome::Win
        } else if state.is_lose() {
            GameOutcome::Loss
        } else {
            GameOutcome::Timeout
        };

        Ok(GameRecord {
            outcome,
            score: state.points(),
            moves,
            nodes,
            prunes,
        })
    }
}
