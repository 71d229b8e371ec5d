//! Selection policies for the MCTS algorithm
//!
//! Selection policies pick which child to descend into during the selection
//! phase, balancing exploration and exploitation.

use crate::{
    game_state::GameState,
    tree::{NodeId, SearchTree},
};

/// Trait for policies that select children to descend into
pub trait SelectionPolicy<S: GameState>: Send + Sync {
    /// Selects a child of `node`, or `None` if it has no children
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId>;
}

/// Upper Confidence Bound 1 (UCB1) selection policy
///
/// Scores each child with:
///
/// ```text
/// UCB1 = mean_value + exploration_constant * sqrt(ln(parent_visits + 1) / child_visits)
/// ```
///
/// Children that have never been visited score infinity, so every child is tried
/// once before the formula is compared. Ties go to the child encountered first,
/// which means unvisited children are taken in expansion order.
#[derive(Debug, Clone)]
pub struct UCB1Policy {
    /// Exploration constant that controls the balance between exploration and exploitation.
    /// Higher values favor exploration of less-visited nodes.
    pub exploration_constant: f64,
}

impl UCB1Policy {
    /// Creates a new UCB1 policy with the given exploration constant
    pub fn new(exploration_constant: f64) -> Self {
        UCB1Policy {
            exploration_constant,
        }
    }

    /// Calculates the UCB1 value for a child
    pub fn ucb1_value(&self, mean_value: f64, child_visits: u64, parent_visits: u64) -> f64 {
        if child_visits == 0 {
            return f64::INFINITY;
        }

        let exploration = self.exploration_constant
            * (((parent_visits + 1) as f64).ln() / child_visits as f64).sqrt();

        mean_value + exploration
    }
}

impl Default for UCB1Policy {
    fn default() -> Self {
        Self::new(1.41)
    }
}

impl<S: GameState> SelectionPolicy<S> for UCB1Policy {
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId> {
        let parent = tree.node(node);
        let mut best: Option<(NodeId, f64)> = None;

        for &child_id in &parent.children {
            let child = tree.node(child_id);
            let score = self.ucb1_value(child.mean_value(), child.visits, parent.visits);

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }

        best.map(|(child_id, _)| child_id)
    }
}

impl<S: GameState> SelectionPolicy<S> for Box<dyn SelectionPolicy<S>> {
    fn select_child(&self, tree: &SearchTree<S>, node: NodeId) -> Option<NodeId> {
        (**self).select_child(tree, node)
    }
}
