#[macro_use]
extern crate criterion;

use arboriter_duel::{
    config::DepthSchedule,
    evaluator::{Evaluator, LineEvaluator},
    policy::HeuristicRollout,
    Board, Cell, GameState, MCTSConfig, Minimax, MinimaxConfig, MCTS,
};
use criterion::{black_box, BenchmarkId, Criterion};
use std::time::Duration;

// Free-style gomoku on a small board for benchmarking
#[derive(Clone, Debug)]
struct BenchBoard {
    size: usize,
    win_length: usize,
    cells: Vec<Option<u8>>,
    to_move: u8,
    winner: Option<u8>,
    stones: usize,
}

impl BenchBoard {
    fn new(size: usize, win_length: usize) -> Self {
        BenchBoard {
            size,
            win_length,
            cells: vec![None; size * size],
            to_move: 0,
            winner: None,
            stones: 0,
        }
    }

    // A few opening moves so the evaluator has lines to score
    fn midgame(size: usize, win_length: usize) -> Self {
        let mut board = Self::new(size, win_length);
        let c = size / 2;
        for mv in [
            Cell::new(c, c),
            Cell::new(c, c + 1),
            Cell::new(c - 1, c),
            Cell::new(c + 1, c + 1),
            Cell::new(c - 1, c - 1),
            Cell::new(c - 1, c + 1),
        ] {
            board.apply(&mv);
        }
        board
    }

    fn completes_line(&self, cell: Cell, player: u8) -> bool {
        [(1isize, 0isize), (0, 1), (1, 1), (1, -1)].iter().any(|&dir| {
            let mut count = 1;
            for sign in [1isize, -1] {
                let mut k = 1;
                while let Some(next) = cell.offset(dir, sign * k, self.size) {
                    if self.stone(next) != Some(player) {
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

impl GameState for BenchBoard {
    type Move = Cell;
    type Player = u8;

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
        if self.completes_line(*mv, self.to_move) {
            self.winner = Some(self.to_move);
        }
        self.to_move = 1 - self.to_move;
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.stones == self.size * self.size
    }

    fn winner(&self) -> Option<u8> {
        self.winner
    }
}

impl Board for BenchBoard {
    fn size(&self) -> usize {
        self.size
    }

    fn stone(&self, cell: Cell) -> Option<u8> {
        self.cells[cell.row * self.size + cell.col]
    }

    fn move_cell(&self, mv: &Cell) -> Cell {
        *mv
    }

    fn to_move(&self) -> u8 {
        self.to_move
    }

    fn opponent(&self, player: &u8) -> u8 {
        1 - player
    }
}

fn bench_mcts_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search");
    group.measurement_time(Duration::from_secs(10));

    // Test different iteration counts with random rollouts
    for &iter_count in &[100, 500, 2000] {
        let initial_state = BenchBoard::midgame(9, 5);
        let config = MCTSConfig::default()
            .with_max_iterations(iter_count)
            .without_max_time()
            .with_seed(1);

        group.bench_with_input(
            BenchmarkId::new("random/iterations", iter_count),
            &iter_count,
            |b, &_| {
                b.iter(|| {
                    let mut mcts = MCTS::new(config.clone());
                    black_box(mcts.choose_move(&initial_state, &initial_state.to_move))
                })
            },
        );
    }

    // Same budgets with the pattern-priority rollout
    for &iter_count in &[100, 500] {
        let initial_state = BenchBoard::midgame(9, 5);
        let config = MCTSConfig::default()
            .with_max_iterations(iter_count)
            .without_max_time()
            .with_seed(1);

        group.bench_with_input(
            BenchmarkId::new("heuristic/iterations", iter_count),
            &iter_count,
            |b, &_| {
                b.iter(|| {
                    let mut mcts = MCTS::new(config.clone())
                        .with_rollout_policy(HeuristicRollout::new(5));
                    black_box(mcts.choose_move(&initial_state, &initial_state.to_move))
                })
            },
        );
    }

    group.finish();
}

fn bench_minimax_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_search");
    group.sample_size(10);

    for depth in [1, 2, 3] {
        let initial_state = BenchBoard::midgame(7, 4);
        let config = MinimaxConfig::default()
            .with_depth_schedule(DepthSchedule::fixed(depth))
            .without_time_budget();

        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &_| {
            b.iter(|| {
                let mut minimax = Minimax::new(config.clone(), LineEvaluator::default());
                black_box(minimax.search(&initial_state, &initial_state.to_move))
            })
        });
    }

    group.finish();
}

fn bench_line_evaluator(c: &mut Criterion) {
    let evaluator = LineEvaluator::default();

    for size in [9, 15] {
        let state = BenchBoard::midgame(size, 5);
        c.bench_function(&format!("line_evaluator/{}x{}", size, size), |b| {
            b.iter(|| black_box(evaluator.evaluate(&state, &0)))
        });
    }
}

criterion_group!(
    benches,
    bench_mcts_search,
    bench_minimax_search,
    bench_line_evaluator
);
criterion_main!(benches);
