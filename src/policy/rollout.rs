//! Rollout policies for the MCTS algorithm
//!
//! A rollout plays a copy of the state out to the end and reports the outcome
//! from the deciding player's perspective: `1.0` for a win, `-1.0` for a loss,
//! `0.0` for a draw. A rollout that runs out of legal moves before the game is
//! over stops there and counts as a draw.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::{
    board::{forms_line, Board},
    game_state::GameState,
};

/// Trait for policies that play out games during the simulation phase
pub trait RolloutPolicy<S: GameState>: Send + Sync {
    /// Plays a clone of `state` to the end and returns the outcome for `player`
    fn simulate(&self, state: &S, player: &S::Player, rng: &mut dyn RngCore) -> f64;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Plays out a clone of `state`, asking `pick` for each move
///
/// `pick` returning `None` ends the rollout as a draw.
fn play_out<S, F>(state: &S, player: &S::Player, mut pick: F) -> f64
where
    S: GameState,
    F: FnMut(&S, &[S::Move]) -> Option<S::Move>,
{
    let mut current = state.clone();

    while !current.is_terminal() {
        let moves = current.legal_moves();
        let mv = match pick(&current, &moves) {
            Some(mv) => mv,
            None => return 0.0,
        };
        current.apply(&mv);
    }

    current.outcome(player)
}

/// Random rollout policy
///
/// This policy plays uniformly random legal moves until the game ends.
#[derive(Debug, Clone)]
pub struct RandomRollout;

impl RandomRollout {
    /// Creates a new random rollout policy
    pub fn new() -> Self {
        RandomRollout
    }
}

impl Default for RandomRollout {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> RolloutPolicy<S> for RandomRollout {
    fn simulate(&self, state: &S, player: &S::Player, rng: &mut dyn RngCore) -> f64 {
        play_out(state, player, |_, moves| moves.choose(&mut *rng).cloned())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Pattern-priority rollout policy for k-in-a-row games
///
/// At every step the player to move takes, in order of preference:
///
/// 1. a move completing their own `win_length` line,
/// 2. a move blocking the opponent's `win_length` line,
/// 3. a move completing their own `win_length - 1` line,
/// 4. a move blocking the opponent's `win_length - 1` line,
/// 5. the center cell,
/// 6. otherwise a uniformly random legal move.
///
/// Within a priority level the first move in enumeration order is taken. Playouts
/// look much more like real play than random ones, so fewer of them are needed to
/// spot forced wins and losses.
#[derive(Debug, Clone)]
pub struct HeuristicRollout {
    /// Stones in a row needed to win
    pub win_length: usize,
}

impl HeuristicRollout {
    /// Creates a heuristic rollout for games won by `win_length` in a row
    pub fn new(win_length: usize) -> Self {
        HeuristicRollout { win_length }
    }

    /// Picks the next rollout move for the player to move in `state`
    pub fn pick_move<S: Board>(
        &self,
        state: &S,
        moves: &[S::Move],
        rng: &mut dyn RngCore,
    ) -> Option<S::Move> {
        let me = state.to_move();
        let them = state.opponent(&me);

        let lengths = [self.win_length, self.win_length.saturating_sub(1)];
        for n in lengths.into_iter().filter(|&n| n >= 2) {
            for player in [&me, &them] {
                if let Some(mv) = moves
                    .iter()
                    .find(|mv| forms_line(state, state.move_cell(mv), player, n))
                {
                    return Some(mv.clone());
                }
            }
        }

        let center = state.center();
        if let Some(mv) = moves.iter().find(|mv| state.move_cell(mv) == center) {
            return Some(mv.clone());
        }

        moves.choose(rng).cloned()
    }
}

impl Default for HeuristicRollout {
    fn default() -> Self {
        Self::new(5)
    }
}

impl<S: Board> RolloutPolicy<S> for HeuristicRollout {
    fn simulate(&self, state: &S, player: &S::Player, rng: &mut dyn RngCore) -> f64 {
        play_out(state, player, |current, moves| {
            self.pick_move(current, moves, &mut *rng)
        })
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

impl<S: GameState> RolloutPolicy<S> for Box<dyn RolloutPolicy<S>> {
    fn simulate(&self, state: &S, player: &S::Player, rng: &mut dyn RngCore) -> f64 {
        (**self).simulate(state, player, rng)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
