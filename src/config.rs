//! Configuration options for the search engines and the agent façade
//!
//! Every config struct has sensible defaults and `with_*` builder methods. Call
//! `validate()` to reject budgets the engines cannot run with.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::{Result, SearchError};

/// Maps the number of legal root moves to a Minimax search depth
///
/// Tiers are `(max_moves, depth)` pairs checked in order; the first tier whose
/// `max_moves` is at least the number of legal moves decides the depth. When no tier
/// matches, the depth of the last tier is used. Fewer moves means a narrower tree,
/// so later stages of a game can afford to look deeper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthSchedule {
    tiers: Vec<(usize, usize)>,
}

impl DepthSchedule {
    /// Creates a schedule from `(max_moves, depth)` tiers
    pub fn new(tiers: Vec<(usize, usize)>) -> Self {
        DepthSchedule { tiers }
    }

    /// A schedule that always searches to `depth`
    pub fn fixed(depth: usize) -> Self {
        DepthSchedule {
            tiers: vec![(usize::MAX, depth)],
        }
    }

    /// Returns the configured tiers
    pub fn tiers(&self) -> &[(usize, usize)] {
        &self.tiers
    }

    /// Returns the depth for a position with `legal_moves` moves, before clamping
    pub fn depth_for(&self, legal_moves: usize) -> usize {
        self.tiers
            .iter()
            .find(|(max_moves, _)| legal_moves <= *max_moves)
            .or_else(|| self.tiers.last())
            .map(|&(_, depth)| depth)
            .unwrap_or(1)
    }
}

impl Default for DepthSchedule {
    fn default() -> Self {
        DepthSchedule::new(vec![(9, 4), (36, 3), (usize::MAX, 2)])
    }
}

/// Configuration for the Minimax engine
///
/// # Example
///
/// ```
/// use arboriter_duel::config::{DepthSchedule, MinimaxConfig};
/// use std::time::Duration;
///
/// let config = MinimaxConfig::default()
///     .with_depth_schedule(DepthSchedule::fixed(3))
///     .with_time_budget(Duration::from_millis(250));
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.depth_for(100), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MinimaxConfig {
    /// How deep to search for a given number of legal moves
    pub depth_schedule: DepthSchedule,

    /// Hard cap on the search depth
    ///
    /// Bounds the recursion regardless of what the schedule asks for.
    pub max_depth: usize,

    /// Wall-clock budget per decision
    ///
    /// `None` searches to full depth regardless of time.
    pub time_budget: Option<Duration>,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        MinimaxConfig {
            depth_schedule: DepthSchedule::default(),
            max_depth: 6,
            time_budget: Some(Duration::from_secs(1)),
        }
    }
}

impl MinimaxConfig {
    /// Sets the depth schedule
    pub fn with_depth_schedule(mut self, schedule: DepthSchedule) -> Self {
        self.depth_schedule = schedule;
        self
    }

    /// Sets the depth cap
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets the wall-clock budget
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Removes the wall-clock budget
    pub fn without_time_budget(mut self) -> Self {
        self.time_budget = None;
        self
    }

    /// Returns the search depth for `legal_moves` root moves, clamped to `[1, max_depth]`
    pub fn depth_for(&self, legal_moves: usize) -> usize {
        self.depth_schedule
            .depth_for(legal_moves)
            .clamp(1, self.max_depth.max(1))
    }

    /// Checks that the configuration can drive a search
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(SearchError::InvalidConfiguration(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.depth_schedule.tiers().is_empty() {
            return Err(SearchError::InvalidConfiguration(
                "depth schedule has no tiers".to_string(),
            ));
        }
        if self.depth_schedule.tiers().iter().any(|&(_, depth)| depth == 0) {
            return Err(SearchError::InvalidConfiguration(
                "depth schedule contains a zero depth".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the MCTS engine
///
/// The search stops at whichever limit is hit first: `max_iterations` or `max_time`.
///
/// # Example
///
/// ```
/// use arboriter_duel::MCTSConfig;
/// use std::time::Duration;
///
/// let config = MCTSConfig::default()
///     .with_exploration_constant(1.5)
///     .with_max_iterations(10_000)
///     .with_max_time(Duration::from_secs(5))
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MCTSConfig {
    /// Exploration constant `C` for UCB1
    ///
    /// Higher values favor less-visited children.
    pub exploration_constant: f64,

    /// Maximum number of iterations (simulations) per decision
    pub max_iterations: usize,

    /// Maximum wall-clock time per decision
    ///
    /// Checked once per full iteration.
    pub max_time: Option<Duration>,

    /// Seed for the rollout random number generator
    ///
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        MCTSConfig {
            exploration_constant: 1.41,
            max_iterations: 100,
            max_time: Some(Duration::from_secs(10)),
            seed: None,
        }
    }
}

impl MCTSConfig {
    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the maximum number of iterations
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the maximum time to run the search
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = Some(duration);
        self
    }

    /// Removes the time limit, leaving only the iteration budget
    pub fn without_max_time(mut self) -> Self {
        self.max_time = None;
        self
    }

    /// Fixes the rollout RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration can drive a search
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfiguration(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }
}

/// Which search engine an agent drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Alpha-beta Minimax with the line evaluator
    Minimax,
    /// Monte Carlo Tree Search
    Mcts,
}

impl FromStr for EngineKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(EngineKind::Minimax),
            "mcts" => Ok(EngineKind::Mcts),
            _ => Err(SearchError::UnknownEngine(s.to_string())),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Minimax => write!(f, "minimax"),
            EngineKind::Mcts => write!(f, "mcts"),
        }
    }
}

/// Which rollout policy the MCTS engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloutKind {
    /// Uniformly random legal moves
    Random,
    /// Win/block/center priorities, then random
    Heuristic,
}

impl FromStr for RolloutKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(RolloutKind::Random),
            "heuristic" => Ok(RolloutKind::Heuristic),
            _ => Err(SearchError::UnknownRollout(s.to_string())),
        }
    }
}

impl fmt::Display for RolloutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RolloutKind::Random => write!(f, "random"),
            RolloutKind::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Configuration for an [`Agent`](crate::agent::Agent) on a grid game
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    /// Engine to search with
    pub engine: EngineKind,

    /// Rollout policy, used when `engine` is MCTS
    pub rollout: RolloutKind,

    /// Stones in a row needed to win; drives the heuristic rollout priorities
    pub win_length: usize,

    /// Minimax settings
    pub minimax: MinimaxConfig,

    /// MCTS settings
    pub mcts: MCTSConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            engine: EngineKind::Mcts,
            rollout: RolloutKind::Random,
            win_length: 5,
            minimax: MinimaxConfig::default(),
            mcts: MCTSConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Sets the engine
    pub fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Sets the rollout policy
    pub fn with_rollout(mut self, rollout: RolloutKind) -> Self {
        self.rollout = rollout;
        self
    }

    /// Sets the winning line length
    pub fn with_win_length(mut self, win_length: usize) -> Self {
        self.win_length = win_length;
        self
    }

    /// Sets the Minimax settings
    pub fn with_minimax(mut self, config: MinimaxConfig) -> Self {
        self.minimax = config;
        self
    }

    /// Sets the MCTS settings
    pub fn with_mcts(mut self, config: MCTSConfig) -> Self {
        self.mcts = config;
        self
    }

    /// Checks the settings of the selected engine
    pub fn validate(&self) -> Result<()> {
        if self.win_length < 2 {
            return Err(SearchError::InvalidConfiguration(format!(
                "win_length must be at least 2, got {}",
                self.win_length
            )));
        }
        match self.engine {
            EngineKind::Minimax => self.minimax.validate(),
            EngineKind::Mcts => self.mcts.validate(),
        }
    }
}
