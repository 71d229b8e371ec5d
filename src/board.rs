//! Grid board extension for k-in-a-row style games
//!
//! Pattern-based components (the line evaluator and the heuristic rollout) need to
//! look at individual cells. Games played on a square grid expose that through the
//! [`Board`] trait on top of [`GameState`].

use crate::game_state::GameState;

/// The four line directions: vertical, horizontal, diagonal, anti-diagonal
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A cell on a square board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row index, 0-based from the top
    pub row: usize,
    /// Column index, 0-based from the left
    pub col: usize,
}

impl Cell {
    /// Creates a cell from row and column
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Returns the cell `steps` away in direction `(dr, dc)`, if it is on a board of side `size`
    pub fn offset(&self, (dr, dc): (isize, isize), steps: isize, size: usize) -> Option<Cell> {
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }

    /// Chebyshev distance between two cells
    pub fn distance(&self, other: Cell) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

/// Trait for games played by placing stones on a square grid
pub trait Board: GameState {
    /// Side length of the board
    fn size(&self) -> usize;

    /// The player occupying `cell`, if any
    fn stone(&self, cell: Cell) -> Option<Self::Player>;

    /// The cell a move places a stone on
    fn move_cell(&self, mv: &Self::Move) -> Cell;

    /// The player whose turn it is
    fn to_move(&self) -> Self::Player;

    /// The other side
    fn opponent(&self, player: &Self::Player) -> Self::Player;

    /// The center cell of the board
    fn center(&self) -> Cell {
        Cell::new(self.size() / 2, self.size() / 2)
    }
}

/// A maximal line of one player's stones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// First cell of the run
    pub start: Cell,
    /// Direction the run extends in
    pub direction: (isize, isize),
    /// Number of stones in the run
    pub length: usize,
    /// Number of ends (0, 1 or 2) that are on the board and empty
    pub open_ends: u8,
}

fn is_empty<B: Board>(board: &B, cell: Option<Cell>) -> bool {
    match cell {
        Some(cell) => board.stone(cell).is_none(),
        None => false,
    }
}

fn owned_by<B: Board>(board: &B, cell: Option<Cell>, player: &B::Player) -> bool {
    match cell.and_then(|c| board.stone(c)) {
        Some(ref owner) => owner == player,
        None => false,
    }
}

/// Returns true if placing `player` on the empty `cell` would make a line of at least `n`
///
/// Occupied cells never qualify.
pub fn forms_line<B: Board>(board: &B, cell: Cell, player: &B::Player, n: usize) -> bool {
    if board.stone(cell).is_some() {
        return false;
    }
    let size = board.size();

    DIRECTIONS.iter().any(|&direction| {
        let mut count = 1;
        for sign in [1isize, -1] {
            for k in 1..n as isize {
                if owned_by(board, cell.offset(direction, sign * k, size), player) {
                    count += 1;
                } else {
                    break;
                }
            }
        }
        count >= n
    })
}

/// Enumerates every maximal run of `player`'s stones, in all four directions
///
/// Single stones count as a run of length 1 in each direction.
pub fn runs<B: Board>(board: &B, player: &B::Player) -> Vec<Run> {
    let size = board.size();
    let mut found = Vec::new();

    for row in 0..size {
        for col in 0..size {
            let start = Cell::new(row, col);
            if !owned_by(board, Some(start), player) {
                continue;
            }

            for &direction in &DIRECTIONS {
                // Only start counting at the first stone of a run
                if owned_by(board, start.offset(direction, -1, size), player) {
                    continue;
                }

                let mut length = 1;
                while owned_by(board, start.offset(direction, length as isize, size), player) {
                    length += 1;
                }

                let before = start.offset(direction, -1, size);
                let after = start.offset(direction, length as isize, size);
                let open_ends = is_empty(board, before) as u8 + is_empty(board, after) as u8;

                found.push(Run {
                    start,
                    direction,
                    length,
                    open_ends,
                });
            }
        }
    }

    found
}
