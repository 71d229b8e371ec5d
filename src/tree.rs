//! Tree data structures for Monte Carlo Tree Search
//!
//! The tree is an arena: nodes live in one vector and refer to each other through
//! [`NodeId`] handles. Children are handle lists and the parent is an optional
//! handle, which gives upward traversal for backpropagation without shared
//! ownership. The whole arena is dropped once a decision is made.

use std::fmt;

use crate::game_state::GameState;

/// Handle to a node in a [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree
    pub const ROOT: NodeId = NodeId(0);

    /// Index of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One explored state in the search tree
pub struct SearchNode<S: GameState> {
    /// The game state at this node, owned by the node
    pub state: S,

    /// The node this one was expanded from (None for root)
    pub parent: Option<NodeId>,

    /// Expanded children, in expansion order
    pub children: Vec<NodeId>,

    /// Legal moves not yet expanded into children
    ///
    /// Empty for terminal states, so terminal nodes are never expanded.
    pub untried_moves: Vec<S::Move>,

    /// Number of simulations backpropagated through this node
    pub visits: u64,

    /// Sum of the outcomes backpropagated through this node
    pub value_sum: f64,

    /// The move that led here from the parent (None for root)
    pub incoming_move: Option<S::Move>,

    /// Depth of this node in the tree (root = 0)
    pub depth: usize,
}

impl<S: GameState> SearchNode<S> {
    fn new(state: S, parent: Option<NodeId>, incoming_move: Option<S::Move>, depth: usize) -> Self {
        let untried_moves = if state.is_terminal() {
            Vec::new()
        } else {
            state.legal_moves()
        };

        SearchNode {
            state,
            parent,
            children: Vec::new(),
            untried_moves,
            visits: 0,
            value_sum: 0.0,
            incoming_move,
            depth,
        }
    }

    /// Returns the mean outcome of this node, 0 when unvisited
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        self.value_sum / self.visits as f64
    }

    /// Returns true if every legal move has a child
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }

    /// Returns true if the node's state is terminal
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed MCTS tree rooted at a clone of the decision state
pub struct SearchTree<S: GameState> {
    nodes: Vec<SearchNode<S>>,
}

impl<S: GameState> SearchTree<S> {
    /// Creates a tree holding only a root for `state`
    pub fn new(state: S) -> Self {
        SearchTree {
            nodes: vec![SearchNode::new(state, None, None, 0)],
        }
    }

    /// Returns the root node
    pub fn root(&self) -> &SearchNode<S> {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Returns the node behind `id`
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree.
    pub fn node(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// Returns the node behind `id` mutably
    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0]
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds no nodes; a tree always holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Greatest node depth in the tree
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Expands one untried move of `id` into a new child
    ///
    /// Takes the most recently listed untried move, applies it to a clone of the
    /// node's state and appends the child. Returns `None` when there is nothing left
    /// to expand.
    pub fn expand(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = &mut self.nodes[id.0];
        let mv = parent.untried_moves.pop()?;

        let mut state = parent.state.clone();
        state.apply(&mv);
        let depth = parent.depth + 1;

        let child_id = NodeId(self.nodes.len());
        self.nodes[id.0].children.push(child_id);
        self.nodes.push(SearchNode::new(state, Some(id), Some(mv), depth));

        Some(child_id)
    }

    /// Adds one visit and `outcome` to `id` and every ancestor up to the root
    ///
    /// The outcome is added unchanged at every level: it is always relative to the
    /// player the search is deciding for, not to the player to move at each node.
    pub fn backpropagate(&mut self, id: NodeId, outcome: f64) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &mut self.nodes[node_id.0];
            node.visits += 1;
            node.value_sum += outcome;
            current = node.parent;
        }
    }

    /// Returns the handles from `id` up to and including the root
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = self.nodes[id.0].parent;
        while let Some(parent) = current {
            path.push(parent);
            current = self.nodes[parent.0].parent;
        }
        path
    }

    /// Returns the child of `id` with the most visits, the first one on ties
    pub fn most_visited_child(&self, id: NodeId) -> Option<NodeId> {
        let mut best: Option<(NodeId, u64)> = None;
        for &child in &self.nodes[id.0].children {
            let visits = self.nodes[child.0].visits;
            match best {
                Some((_, best_visits)) if visits <= best_visits => {}
                _ => best = Some((child, visits)),
            }
        }
        best.map(|(child, _)| child)
    }

    /// Returns an indented dump of the tree, one node per line
    pub fn visualize(&self) -> String {
        let mut output = String::new();
        self.visualize_node(NodeId::ROOT, &mut output);
        output
    }

    fn visualize_node(&self, id: NodeId, output: &mut String) {
        let node = &self.nodes[id.0];
        let indent = "  ".repeat(node.depth);
        let move_str = match &node.incoming_move {
            Some(mv) => format!("{:?}", mv),
            None => "Root".to_string(),
        };

        output.push_str(&format!(
            "{}{} (visits: {}, value: {:.3})\n",
            indent,
            move_str,
            node.visits,
            node.mean_value()
        ));

        for &child in &node.children {
            self.visualize_node(child, output);
        }
    }
}
