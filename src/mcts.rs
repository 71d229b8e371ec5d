//! Main implementation of the Monte Carlo Tree Search algorithm
//!
//! This module orchestrates the four phases of selection, expansion, simulation,
//! and backpropagation over an arena [`SearchTree`] built fresh for each decision.

use std::time::Instant;

use log::{debug, log_enabled, trace, Level};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::MCTSConfig,
    game_state::GameState,
    policy::{
        rollout::{RandomRollout, RolloutPolicy},
        selection::{SelectionPolicy, UCB1Policy},
    },
    stats::SearchStatistics,
    tree::{NodeId, SearchTree},
};

/// The Monte Carlo Tree Search engine
///
/// Holds the configuration, policies and random number generator; the tree itself
/// only lives for the duration of one decision.
///
/// # Example
///
/// ```
/// use arboriter_duel::{GameState, MCTSConfig, MCTS};
///
/// // Players alternately add 1 or 2; whoever reaches 3 wins.
/// #[derive(Clone)]
/// struct RaceToThree { total: u8, to_move: u8, winner: Option<u8> }
///
/// impl GameState for RaceToThree {
///     type Move = u8;
///     type Player = u8;
///     fn legal_moves(&self) -> Vec<u8> {
///         if self.winner.is_some() { vec![] } else { vec![1, 2] }
///     }
///     fn apply(&mut self, mv: &u8) {
///         self.total += mv;
///         if self.total >= 3 { self.winner = Some(self.to_move); }
///         self.to_move = 1 - self.to_move;
///     }
///     fn is_terminal(&self) -> bool { self.winner.is_some() }
///     fn winner(&self) -> Option<u8> { self.winner }
/// }
///
/// let mut mcts = MCTS::new(MCTSConfig::default().with_max_iterations(200).with_seed(1));
///
/// // Adding 2 from 1 wins on the spot.
/// let state = RaceToThree { total: 1, to_move: 0, winner: None };
/// assert_eq!(mcts.choose_move(&state, &0), Some(2));
/// println!("{}", mcts.get_statistics().summary());
/// ```
pub struct MCTS<S: GameState> {
    /// Configuration for the search
    config: MCTSConfig,

    /// Statistics gathered during the last search
    statistics: SearchStatistics,

    /// Policy for selecting children during the selection phase
    selection_policy: Box<dyn SelectionPolicy<S>>,

    /// Policy for playing out games during the simulation phase
    rollout_policy: Box<dyn RolloutPolicy<S>>,

    /// Random source handed to the rollout policy
    rng: StdRng,
}

impl<S: GameState + 'static> MCTS<S> {
    /// Creates a new engine with UCB1 selection and random rollouts
    pub fn new(config: MCTSConfig) -> Self {
        let selection_policy: Box<dyn SelectionPolicy<S>> =
            Box::new(UCB1Policy::new(config.exploration_constant));

        let rollout_policy: Box<dyn RolloutPolicy<S>> = Box::new(RandomRollout::new());

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        MCTS {
            config,
            statistics: SearchStatistics::new(),
            selection_policy,
            rollout_policy,
            rng,
        }
    }

    /// Sets the selection policy to use
    pub fn with_selection_policy<P: SelectionPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.selection_policy = Box::new(policy);
        self
    }

    /// Sets the rollout policy to use
    pub fn with_rollout_policy<P: RolloutPolicy<S> + 'static>(mut self, policy: P) -> Self {
        self.rollout_policy = Box::new(policy);
        self
    }

    /// Returns the configuration
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Returns the name of the rollout policy in use
    pub fn rollout_name(&self) -> &'static str {
        self.rollout_policy.name()
    }

    /// Returns the search statistics of the last decision
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Chooses a move for `player`, or `None` if the root has no legal moves
    ///
    /// The move is the root child with the most visits. The tree is dropped before
    /// returning.
    pub fn choose_move(&mut self, state: &S, player: &S::Player) -> Option<S::Move> {
        let tree = self.build_tree(state, player);
        let best = tree.most_visited_child(NodeId::ROOT)?;
        tree.node(best).incoming_move.clone()
    }

    /// Runs the search loop from a clone of `state` and returns the resulting tree
    ///
    /// Stops after `max_iterations` iterations or once `max_time` has elapsed,
    /// whichever comes first. Time is checked between iterations, and at least one
    /// iteration always runs, even with a zero budget of either kind, so a legal move
    /// is available whenever one exists.
    pub fn build_tree(&mut self, state: &S, player: &S::Player) -> SearchTree<S> {
        self.statistics = SearchStatistics::new();

        let mut tree = SearchTree::new(state.clone());
        if tree.root().is_terminal() || tree.root().untried_moves.is_empty() {
            debug!("MCTS: no legal moves at the root");
            return tree;
        }

        let start_time = Instant::now();
        let max_time = self.config.max_time;

        for i in 0..self.config.max_iterations.max(1) {
            if let Some(max_duration) = max_time {
                if i > 0 && start_time.elapsed() >= max_duration {
                    self.statistics.stopped_early = true;
                    debug!("MCTS: stopped after {} iterations due to time limit", i);
                    break;
                }
            }

            self.execute_iteration(&mut tree, player);
            self.statistics.iterations = i + 1;
        }

        self.statistics.total_time = start_time.elapsed();
        self.statistics.tree_size = tree.len();
        debug!(
            "{} (rollout: {})",
            self.statistics.summary(),
            self.rollout_policy.name()
        );
        if log_enabled!(Level::Trace) {
            trace!("MCTS tree:\n{}", tree.visualize());
        }

        tree
    }

    /// Execute a single iteration of the MCTS algorithm
    fn execute_iteration(&mut self, tree: &mut SearchTree<S>, player: &S::Player) {
        // 1. Selection phase
        let selected = self.selection(tree);

        // 2. Expansion phase
        let leaf = self.expansion(tree, selected);

        // 3. Simulation phase
        let outcome = self
            .rollout_policy
            .simulate(&tree.node(leaf).state, player, &mut self.rng);

        // 4. Backpropagation phase
        tree.backpropagate(leaf, outcome);
    }

    /// Selection phase: descend through fully expanded, non-terminal nodes
    fn selection(&mut self, tree: &SearchTree<S>) -> NodeId {
        let mut current = NodeId::ROOT;

        loop {
            let node = tree.node(current);
            if node.is_terminal() || !node.is_fully_expanded() || node.is_leaf() {
                return current;
            }

            match self.selection_policy.select_child(tree, current) {
                Some(child) => {
                    current = child;
                    self.statistics.max_depth =
                        self.statistics.max_depth.max(tree.node(child).depth);
                }
                None => return current,
            }
        }
    }

    /// Expansion phase: add one child to the selected node if it has untried moves
    fn expansion(&mut self, tree: &mut SearchTree<S>, selected: NodeId) -> NodeId {
        if tree.node(selected).is_terminal() {
            return selected;
        }

        match tree.expand(selected) {
            Some(child) => {
                self.statistics.max_depth = self.statistics.max_depth.max(tree.node(child).depth);
                child
            }
            None => selected,
        }
    }
}
