//! Policies for the pluggable phases of the MCTS algorithm
//!
//! - Selection policies: how to choose which child to descend into
//! - Rollout policies: how to play out games from a node

pub mod rollout;
pub mod selection;

pub use rollout::{HeuristicRollout, RandomRollout, RolloutPolicy};
pub use selection::{SelectionPolicy, UCB1Policy};
