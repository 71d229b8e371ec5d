//! Statistics collection for searches
//!
//! Each engine resets its statistics at the start of a decision and exposes the
//! last decision's numbers afterwards.

use std::time::Duration;

/// Statistics collected during an MCTS search
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of iterations performed
    pub iterations: usize,

    /// Total time spent searching
    pub total_time: Duration,

    /// Total number of nodes in the tree
    pub tree_size: usize,

    /// Maximum depth reached in the tree
    pub max_depth: usize,

    /// Whether the search was stopped early due to time constraints
    pub stopped_early: bool,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1, // Start with root node
            max_depth: 0,
            stopped_early: false,
        }
    }

    /// Returns the average time per iteration in microseconds
    pub fn avg_time_per_iteration_us(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total_time.as_micros() as f64 / self.iterations as f64
    }

    /// Returns the number of iterations per second
    pub fn iterations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "MCTS Search Statistics:\n\
             - Iterations: {}\n\
             - Total time: {:.3} seconds\n\
             - Tree size: {} nodes\n\
             - Max depth: {}\n\
             - Iterations per second: {:.1}\n\
             - Stopped early: {}",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.tree_size,
            self.max_depth,
            self.iterations_per_second(),
            self.stopped_early
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics collected during a Minimax search
#[derive(Debug, Clone, Default)]
pub struct MinimaxStatistics {
    /// Search depth chosen for the root
    pub depth: usize,

    /// Number of states visited below the root
    pub nodes: u64,

    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,

    /// Root moves whose subtree was searched
    pub root_moves_searched: usize,

    /// Legal moves at the root
    pub root_moves: usize,

    /// Total time spent searching
    pub total_time: Duration,

    /// Whether the deadline expired before all root moves were searched
    pub timed_out: bool,
}

impl MinimaxStatistics {
    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Minimax Search Statistics:\n\
             - Depth: {}\n\
             - Root moves searched: {}/{}\n\
             - Nodes: {}\n\
             - Cutoffs: {}\n\
             - Total time: {:.3} seconds\n\
             - Timed out: {}",
            self.depth,
            self.root_moves_searched,
            self.root_moves,
            self.nodes,
            self.cutoffs,
            self.total_time.as_secs_f64(),
            self.timed_out
        )
    }
}
