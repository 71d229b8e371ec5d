//! Traits defining the game state contract consumed by the search engines.
//!
//! The GameState trait is the only thing the engines know about a game. Anything
//! that can enumerate its legal moves, apply one in place, report whether it is over
//! and who won, and produce an independent deep copy of itself can be searched.

use std::fmt::Debug;

/// Trait for moves that can be made in a game
///
/// Moves are the atomic actions transitioning one state to the next. Any cloneable,
/// comparable, debuggable type qualifies.
pub trait Move: Clone + Debug + PartialEq + Send + Sync {}

impl<T: Clone + Debug + PartialEq + Send + Sync> Move for T {}

/// Trait for players in a game
///
/// Players identify the two sides. The engines only ever compare them for equality.
pub trait Player: Clone + Debug + PartialEq + Send + Sync {}

impl<T: Clone + Debug + PartialEq + Send + Sync> Player for T {}

/// Trait defining the game state interface required by both search engines
///
/// Implementations must guarantee clone isolation: after `clone()`, mutating the
/// copy never affects the original and vice versa. Both engines explore branches by
/// applying moves destructively to clones and rely on this without checking it.
///
/// # Example
///
/// ```
/// use arboriter_duel::GameState;
///
/// // A counter game: players alternately add 1 or 2, whoever reaches 5 wins.
/// #[derive(Clone)]
/// struct RaceToFive {
///     total: u8,
///     to_move: u8,
///     winner: Option<u8>,
/// }
///
/// impl GameState for RaceToFive {
///     type Move = u8;
///     type Player = u8;
///
///     fn legal_moves(&self) -> Vec<u8> {
///         if self.is_terminal() {
///             return vec![];
///         }
///         vec![1, 2]
///     }
///
///     fn apply(&mut self, mv: &u8) {
///         self.total += mv;
///         if self.total >= 5 {
///             self.winner = Some(self.to_move);
///         }
///         self.to_move = 1 - self.to_move;
///     }
///
///     fn is_terminal(&self) -> bool {
///         self.winner.is_some()
///     }
///
///     fn winner(&self) -> Option<u8> {
///         self.winner
///     }
/// }
///
/// let mut state = RaceToFive { total: 3, to_move: 0, winner: None };
/// state.apply(&2);
/// assert_eq!(state.outcome(&0), 1.0);
/// assert_eq!(state.outcome(&1), -1.0);
/// ```
pub trait GameState: Clone + Send + Sync {
    /// The type of moves that can be made in this game
    type Move: Move;

    /// The type identifying the players of this game
    type Player: Player;

    /// Returns the legal moves from this state, in a stable order
    ///
    /// Must be empty when the state is terminal. The order matters: Minimax breaks
    /// ties in favour of the first move enumerated.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a move to this state in place
    ///
    /// The move should be one of `legal_moves()`. The engines always call this on a
    /// clone, never on the caller's live state.
    fn apply(&mut self, mv: &Self::Move);

    /// Returns true if the game is over
    fn is_terminal(&self) -> bool;

    /// Returns the winner, if the game has been decided
    ///
    /// A terminal state with no winner is a draw.
    fn winner(&self) -> Option<Self::Player>;

    /// Returns the outcome of this state from the perspective of `for_player`
    ///
    /// `1.0` if `for_player` won, `-1.0` if the other side won, `0.0` for a draw or
    /// an undecided state.
    fn outcome(&self, for_player: &Self::Player) -> f64 {
        match self.winner() {
            Some(ref winner) if winner == for_player => 1.0,
            Some(_) => -1.0,
            None => 0.0,
        }
    }
}
