//! Shared k-in-a-row game used by the integration tests
#![allow(dead_code)]

use arboriter_duel::{Board, Cell, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stone {
    X,
    O,
}

impl Stone {
    pub fn other(self) -> Stone {
        match self {
            Stone::X => Stone::O,
            Stone::O => Stone::X,
        }
    }
}

/// Square board, players alternate placing stones, `win_length` in a row wins
#[derive(Clone, Debug)]
pub struct KInARow {
    size: usize,
    win_length: usize,
    cells: Vec<Option<Stone>>,
    to_move: Stone,
    winner: Option<Stone>,
    stones: usize,
}

impl KInARow {
    pub fn new(size: usize, win_length: usize) -> Self {
        KInARow {
            size,
            win_length,
            cells: vec![None; size * size],
            to_move: Stone::X,
            winner: None,
            stones: 0,
        }
    }

    pub fn tic_tac_toe() -> Self {
        Self::new(3, 3)
    }

    /// Builds a position from rows of `X`, `O` and `.`
    pub fn from_rows(rows: &[&str], win_length: usize, to_move: Stone) -> Self {
        let mut game = Self::new(rows.len(), win_length);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let stone = match ch {
                    'X' => Some(Stone::X),
                    'O' => Some(Stone::O),
                    _ => None,
                };
                if stone.is_some() {
                    game.cells[row * game.size + col] = stone;
                    game.stones += 1;
                }
            }
        }
        game.to_move = to_move;
        game.winner = (0..game.size * game.size)
            .map(|i| Cell::new(i / game.size, i % game.size))
            .find(|&cell| game.completes_line(cell))
            .and_then(|cell| game.stone(cell));
        game
    }

    pub fn to_move_stone(&self) -> Stone {
        self.to_move
    }

    pub fn stones(&self) -> usize {
        self.stones
    }

    fn completes_line(&self, cell: Cell) -> bool {
        let stone = match self.stone(cell) {
            Some(stone) => stone,
            None => return false,
        };

        [(1isize, 0isize), (0, 1), (1, 1), (1, -1)]
            .iter()
            .any(|&direction| {
                let mut count = 1;
                for sign in [1isize, -1] {
                    let mut k = 1;
                    while let Some(next) = cell.offset(direction, sign * k, self.size) {
                        if self.stone(next) != Some(stone) {
                            break;
                        }
                        count += 1;
                        k += 1;
                    }
                }
                count >= self.win_length
            })
    }
}

impl GameState for KInARow {
    type Move = Cell;
    type Player = Stone;

    fn legal_moves(&self) -> Vec<Cell> {
        if self.is_terminal() {
            return vec![];
        }
        (0..self.size * self.size)
            .filter(|&i| self.cells[i].is_none())
            .map(|i| Cell::new(i / self.size, i % self.size))
            .collect()
    }

    fn apply(&mut self, mv: &Cell) {
        self.cells[mv.row * self.size + mv.col] = Some(self.to_move);
        self.stones += 1;
        if self.completes_line(*mv) {
            self.winner = Some(self.to_move);
        }
        self.to_move = self.to_move.other();
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.stones == self.size * self.size
    }

    fn winner(&self) -> Option<Stone> {
        self.winner
    }
}

impl Board for KInARow {
    fn size(&self) -> usize {
        self.size
    }

    fn stone(&self, cell: Cell) -> Option<Stone> {
        self.cells[cell.row * self.size + cell.col]
    }

    fn move_cell(&self, mv: &Cell) -> Cell {
        *mv
    }

    fn to_move(&self) -> Stone {
        self.to_move
    }

    fn opponent(&self, player: &Stone) -> Stone {
        player.other()
    }
}

/// X to move and wins immediately at (0, 2); O threatens (1, 2)
pub fn x_wins_in_one() -> KInARow {
    KInARow::from_rows(&["XX.", "OO.", "..."], 3, Stone::X)
}

/// Full board, nobody won
pub fn drawn_board() -> KInARow {
    KInARow::from_rows(&["XOX", "XOO", "OXX"], 3, Stone::O)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
