//! # arboriter-duel
//!
//! Adversarial search for two-player, perfect-information, alternating-turn games.
//!
//! The crate provides two engines that work with any game implementing
//! [`GameState`]:
//!
//! - [`Minimax`]: depth- and time-bounded alpha-beta search with heuristic leaf
//!   evaluation and a search depth that grows as the number of legal moves shrinks.
//! - [`MCTS`]: Monte Carlo Tree Search with UCB1 selection, one-child-per-iteration
//!   expansion, a pluggable rollout policy and visit-count move choice.
//!
//! Both answer the same question: given a state and the player to decide for,
//! which move to play. Both return `None` when no move is available and always
//! return their best answer so far when the clock runs out.
//!
//! ## Basic Usage
//!
//! ```
//! use arboriter_duel::{Agent, GameState, MCTSConfig, MCTS};
//!
//! // Two piles of stones; a move takes one stone from a pile. Taking the last
//! // stone wins.
//! #[derive(Clone)]
//! struct Piles {
//!     piles: [u8; 2],
//!     to_move: u8,
//!     winner: Option<u8>,
//! }
//!
//! impl GameState for Piles {
//!     type Move = usize;
//!     type Player = u8;
//!
//!     fn legal_moves(&self) -> Vec<usize> {
//!         (0..2).filter(|&i| self.piles[i] > 0).collect()
//!     }
//!
//!     fn apply(&mut self, pile: &usize) {
//!         self.piles[*pile] -= 1;
//!         if self.piles == [0, 0] {
//!             self.winner = Some(self.to_move);
//!         }
//!         self.to_move = 1 - self.to_move;
//!     }
//!
//!     fn is_terminal(&self) -> bool {
//!         self.winner.is_some()
//!     }
//!
//!     fn winner(&self) -> Option<u8> {
//!         self.winner
//!     }
//! }
//!
//! let engine = MCTS::new(MCTSConfig::default().with_max_iterations(50));
//! let mut agent: Agent<Piles> = Agent::new("mcts", 0, engine);
//!
//! let state = Piles { piles: [1, 0], to_move: 0, winner: None };
//! assert_eq!(agent.act(&state), Some(0));
//! ```
//!
//! ## How It Works
//!
//! Minimax searches every root move with a full alpha-beta window, scoring decided
//! games with a large signed constant and undecided leaves with an
//! [`Evaluator`](evaluator::Evaluator). When the deadline passes it stops starting
//! new root moves and discards subtrees it had to abandon.
//!
//! MCTS repeats four phases until its iteration or time budget runs out:
//!
//! 1. **Selection**: descend from the root through fully expanded nodes using UCB1.
//! 2. **Expansion**: add one child for an untried move.
//! 3. **Simulation**: play the new child's state out with a rollout policy.
//! 4. **Backpropagation**: add one visit and the outcome to every node on the path.
//!
//! Outcomes are always relative to the player the search is deciding for.
//!
//! ## Grid games
//!
//! Games played on a square grid can also implement [`Board`], which unlocks the
//! [`LineEvaluator`](evaluator::LineEvaluator), the
//! [`HeuristicRollout`](policy::HeuristicRollout) and [`Agent::from_config`].

pub mod agent;
pub mod board;
pub mod config;
pub mod evaluator;
pub mod game_state;
pub mod mcts;
pub mod minimax;
pub mod policy;
pub mod stats;
pub mod tree;

pub use agent::{Agent, SearchEngine};
pub use board::{Board, Cell};
pub use config::{AgentConfig, EngineKind, MCTSConfig, MinimaxConfig, RolloutKind};
pub use game_state::{GameState, Move, Player};
pub use mcts::MCTS;
pub use minimax::{Minimax, MinimaxResult};
pub use policy::{RolloutPolicy, SelectionPolicy};
pub use stats::{MinimaxStatistics, SearchStatistics};
pub use tree::{NodeId, SearchNode, SearchTree};

/// Error types for configuring the search engines
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A configuration value the engines cannot run with
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An engine name that does not match any engine
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),

    /// A rollout policy name that does not match any policy
    #[error("Unknown rollout policy: {0}")]
    UnknownRollout(String),
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, SearchError>;
