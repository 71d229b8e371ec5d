//! Depth- and time-bounded Minimax search with alpha-beta pruning
//!
//! The engine searches every root move to a depth picked from the number of legal
//! moves, scoring leaves with an [`Evaluator`] and decided games with
//! [`terminal_score`]. Every branch works on its own clone of the state.
//!
//! # Example
//!
//! ```
//! use arboriter_duel::{GameState, Minimax, MinimaxConfig};
//! use arboriter_duel::config::DepthSchedule;
//! use arboriter_duel::evaluator::FnEvaluator;
//!
//! // Players alternately add 1 or 2; whoever reaches 4 wins.
//! #[derive(Clone)]
//! struct RaceToFour { total: u8, to_move: u8, winner: Option<u8> }
//!
//! impl GameState for RaceToFour {
//!     type Move = u8;
//!     type Player = u8;
//!     fn legal_moves(&self) -> Vec<u8> {
//!         if self.winner.is_some() { vec![] } else { vec![1, 2] }
//!     }
//!     fn apply(&mut self, mv: &u8) {
//!         self.total += mv;
//!         if self.total >= 4 { self.winner = Some(self.to_move); }
//!         self.to_move = 1 - self.to_move;
//!     }
//!     fn is_terminal(&self) -> bool { self.winner.is_some() }
//!     fn winner(&self) -> Option<u8> { self.winner }
//! }
//!
//! let config = MinimaxConfig::default()
//!     .with_depth_schedule(DepthSchedule::fixed(4))
//!     .without_time_budget();
//! let evaluator = FnEvaluator::<_, RaceToFour>::new(|_: &RaceToFour, _: &u8| 0.0);
//! let mut minimax = Minimax::new(config, evaluator);
//!
//! // From 0, adding 1 leaves the opponent on 1, from where we can always reach 4.
//! let state = RaceToFour { total: 0, to_move: 0, winner: None };
//! assert_eq!(minimax.choose_move(&state, &0), Some(1));
//! ```

use std::marker::PhantomData;
use std::time::Instant;

use log::debug;

use crate::{
    config::MinimaxConfig,
    evaluator::{terminal_score, Evaluator},
    game_state::GameState,
    stats::MinimaxStatistics,
};

/// Outcome of a Minimax decision
#[derive(Debug, Clone, PartialEq)]
pub struct MinimaxResult<M> {
    /// The chosen move, `None` when the root has no legal moves
    pub best_move: Option<M>,

    /// Score of the chosen move for the deciding player
    pub score: f64,

    /// Depth the root moves were searched to
    pub depth: usize,

    /// Whether the deadline cut the search short
    pub timed_out: bool,
}

/// Alpha-beta Minimax engine
pub struct Minimax<S: GameState, E: Evaluator<S>> {
    config: MinimaxConfig,
    evaluator: E,
    statistics: MinimaxStatistics,
    _phantom: PhantomData<fn(&S)>,
}

// Per-decision search context shared by the recursion.
struct Search<'a, S: GameState, E: Evaluator<S>> {
    evaluator: &'a E,
    player: &'a S::Player,
    deadline: Option<Instant>,
    statistics: &'a mut MinimaxStatistics,
    expired: bool,
}

impl<'a, S: GameState, E: Evaluator<S>> Search<'a, S, E> {
    fn deadline_passed(&self) -> bool {
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }

    fn alphabeta(
        &mut self,
        state: &S,
        depth: usize,
        maximizing: bool,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        // Abandoned subtrees score neutral; the root discards them.
        if self.deadline_passed() {
            self.expired = true;
            return 0.0;
        }
        self.statistics.nodes += 1;

        if state.is_terminal() {
            return terminal_score(state, self.player, depth);
        }
        if depth == 0 {
            return self.evaluator.evaluate(state, self.player);
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return 0.0;
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for mv in &moves {
                let mut child = state.clone();
                child.apply(mv);
                let score = self.alphabeta(&child, depth - 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.statistics.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for mv in &moves {
                let mut child = state.clone();
                child.apply(mv);
                let score = self.alphabeta(&child, depth - 1, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.statistics.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

impl<S: GameState, E: Evaluator<S>> Minimax<S, E> {
    /// Creates a new engine with the given configuration and evaluator
    pub fn new(config: MinimaxConfig, evaluator: E) -> Self {
        Minimax {
            config,
            evaluator,
            statistics: MinimaxStatistics::default(),
            _phantom: PhantomData,
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Returns the evaluator
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Returns the statistics of the last decision
    pub fn statistics(&self) -> &MinimaxStatistics {
        &self.statistics
    }

    /// Chooses a move for `player`, or `None` if there are no legal moves
    pub fn choose_move(&mut self, state: &S, player: &S::Player) -> Option<S::Move> {
        self.search(state, player).best_move
    }

    /// Searches `state` for `player` and returns the best move with its score
    ///
    /// Root moves are searched in enumeration order with a full window. Once the
    /// deadline passes no further root moves are started, and the score of a root
    /// move whose subtree was abandoned is discarded unless nothing else has been
    /// scored yet. Ties keep the earlier move.
    pub fn search(&mut self, state: &S, player: &S::Player) -> MinimaxResult<S::Move> {
        let start = Instant::now();
        self.statistics = MinimaxStatistics::default();

        let moves = state.legal_moves();
        self.statistics.root_moves = moves.len();
        if moves.is_empty() {
            debug!("Minimax: no legal moves at the root");
            return MinimaxResult {
                best_move: None,
                score: 0.0,
                depth: 0,
                timed_out: false,
            };
        }

        let depth = self.config.depth_for(moves.len());
        self.statistics.depth = depth;
        let deadline = self.config.time_budget.map(|budget| start + budget);

        let mut search = Search {
            evaluator: &self.evaluator,
            player,
            deadline,
            statistics: &mut self.statistics,
            expired: false,
        };

        let mut best: Option<(S::Move, f64)> = None;
        let mut timed_out = false;

        for mv in moves {
            if best.is_some() && search.deadline_passed() {
                timed_out = true;
                break;
            }

            let mut child = state.clone();
            child.apply(&mv);
            let score =
                search.alphabeta(&child, depth - 1, false, f64::NEG_INFINITY, f64::INFINITY);
            search.statistics.root_moves_searched += 1;

            if search.expired {
                timed_out = true;
                if best.is_none() {
                    best = Some((mv, score));
                }
                break;
            }

            let improves = match &best {
                Some((_, best_score)) => score > *best_score,
                None => true,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        self.statistics.timed_out = timed_out;
        self.statistics.total_time = start.elapsed();
        debug!("{}", self.statistics.summary());

        match best {
            Some((best_move, score)) => MinimaxResult {
                best_move: Some(best_move),
                score,
                depth,
                timed_out,
            },
            None => MinimaxResult {
                best_move: None,
                score: 0.0,
                depth,
                timed_out,
            },
        }
    }
}
