//! Static evaluation of non-terminal states
//!
//! Minimax falls back on an [`Evaluator`] once its depth budget runs out. Terminal
//! states never reach an evaluator: they are scored by [`terminal_score`], whose
//! magnitude lies outside any value a heuristic produces.

use std::marker::PhantomData;

use crate::board::{runs, Board, Cell};
use crate::game_state::GameState;

/// Score of a decided game, before the depth bonus
pub const WIN_SCORE: f64 = 1e12;

/// Trait for static evaluation functions
pub trait Evaluator<S: GameState>: Send + Sync {
    /// Scores a non-terminal `state` for `player`; higher is better, always finite
    fn evaluate(&self, state: &S, player: &S::Player) -> f64;
}

/// Scores a terminal state for `player`
///
/// Wins and losses are pushed past [`WIN_SCORE`] by the remaining search depth, so
/// a win found nearer the root outranks one found deeper. Draws score 0.
pub fn terminal_score<S: GameState>(state: &S, player: &S::Player, depth_left: usize) -> f64 {
    let outcome = state.outcome(player);
    if outcome == 0.0 {
        return 0.0;
    }
    outcome * (WIN_SCORE + depth_left as f64)
}

/// Weights used by [`LineEvaluator`]
#[derive(Debug, Clone, PartialEq)]
pub struct LineWeights {
    /// Weight of a run, indexed by its length (runs longer than 5 use index 5)
    pub run_weights: [f64; 6],

    /// Multiplier for runs with exactly one open end
    ///
    /// Runs with two open ends get the full weight, runs blocked at both ends get nothing.
    pub half_open_factor: f64,

    /// Bonus per stone per step of closeness to the center
    pub center_weight: f64,
}

impl Default for LineWeights {
    fn default() -> Self {
        LineWeights {
            run_weights: [0.0, 10.0, 100.0, 1_000.0, 10_000.0, 100_000.0],
            half_open_factor: 0.5,
            center_weight: 1.0,
        }
    }
}

/// Heuristic evaluator for grid games based on open runs and center proximity
///
/// The score for `player` is the weighted sum of their unblocked runs plus a
/// positional bonus for stones near the center, minus the same quantity for the
/// opponent.
///
/// # Example
///
/// ```
/// use arboriter_duel::evaluator::{LineEvaluator, LineWeights};
///
/// let evaluator = LineEvaluator::new(LineWeights {
///     center_weight: 0.0,
///     ..LineWeights::default()
/// });
/// assert_eq!(evaluator.weights().half_open_factor, 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineEvaluator {
    weights: LineWeights,
}

impl LineEvaluator {
    /// Creates a new evaluator with the given weights
    pub fn new(weights: LineWeights) -> Self {
        LineEvaluator { weights }
    }

    /// Returns the weights in use
    pub fn weights(&self) -> &LineWeights {
        &self.weights
    }

    fn side_score<S: Board>(&self, state: &S, player: &S::Player) -> f64 {
        let mut score = 0.0;

        for run in runs(state, player) {
            let weight = self.weights.run_weights[run.length.min(5)];
            score += match run.open_ends {
                0 => 0.0,
                1 => weight * self.weights.half_open_factor,
                _ => weight,
            };
        }

        let size = state.size();
        let center = state.center();
        let radius = size / 2;
        for row in 0..size {
            for col in 0..size {
                let cell = Cell::new(row, col);
                if state.stone(cell).as_ref() == Some(player) {
                    let closeness = radius.saturating_sub(cell.distance(center));
                    score += self.weights.center_weight * closeness as f64;
                }
            }
        }

        score
    }
}

impl<S: Board> Evaluator<S> for LineEvaluator {
    fn evaluate(&self, state: &S, player: &S::Player) -> f64 {
        let opponent = state.opponent(player);
        self.side_score(state, player) - self.side_score(state, &opponent)
    }
}

/// Evaluator backed by a plain function or closure
pub struct FnEvaluator<F, S>
where
    F: Fn(&S, &S::Player) -> f64 + Send + Sync,
    S: GameState,
{
    function: F,
    _phantom: PhantomData<fn(&S)>,
}

impl<F, S> FnEvaluator<F, S>
where
    F: Fn(&S, &S::Player) -> f64 + Send + Sync,
    S: GameState,
{
    /// Wraps `function` as an evaluator
    pub fn new(function: F) -> Self {
        FnEvaluator {
            function,
            _phantom: PhantomData,
        }
    }
}

impl<F, S> Evaluator<S> for FnEvaluator<F, S>
where
    F: Fn(&S, &S::Player) -> f64 + Send + Sync,
    S: GameState,
{
    fn evaluate(&self, state: &S, player: &S::Player) -> f64 {
        (self.function)(state, player)
    }
}
