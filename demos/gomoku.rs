//! Gomoku self-play between a Minimax agent and an MCTS agent
//!
//! Run with `cargo run --example gomoku -- [size] [x-engine] [o-engine] [rollout]`,
//! e.g. `cargo run --example gomoku -- 9 minimax mcts heuristic`.
//! Set `RUST_LOG=debug` to see per-decision search statistics.

use arboriter_duel::{
    Agent, AgentConfig, Board, Cell, EngineKind, GameState, MCTSConfig, MinimaxConfig,
    RolloutKind,
};
use std::env;
use std::fmt;
use std::process;
use std::time::Duration;

const WIN_LENGTH: usize = 5;

/// Stones in Gomoku
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stone {
    Black,
    White,
}

impl Stone {
    fn other(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

/// Free-style Gomoku: five or more in a row wins
#[derive(Clone)]
struct Gomoku {
    size: usize,
    cells: Vec<Option<Stone>>,
    current_player: Stone,
    winner: Option<Stone>,
    moves_played: usize,
}

impl Gomoku {
    fn new(size: usize) -> Self {
        Gomoku {
            size,
            cells: vec![None; size * size],
            current_player: Stone::Black,
            winner: None,
            moves_played: 0,
        }
    }

    fn completes_line(&self, cell: Cell, stone: Stone) -> bool {
        [(1isize, 0isize), (0, 1), (1, 1), (1, -1)].iter().any(|&dir| {
            let mut count = 1;
            for sign in [1isize, -1] {
                let mut k = 1;
                while let Some(next) = cell.offset(dir, sign * k, self.size) {
                    if self.stone(next) != Some(stone) {
                        break;
                    }
                    count += 1;
                    k += 1;
                }
            }
            count >= WIN_LENGTH
        })
    }
}

impl GameState for Gomoku {
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
        self.cells[mv.row * self.size + mv.col] = Some(self.current_player);
        self.moves_played += 1;
        if self.completes_line(*mv, self.current_player) {
            self.winner = Some(self.current_player);
        }
        self.current_player = self.current_player.other();
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.moves_played == self.size * self.size
    }

    fn winner(&self) -> Option<Stone> {
        self.winner
    }
}

impl Board for Gomoku {
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
        self.current_player
    }

    fn opponent(&self, player: &Stone) -> Stone {
        player.other()
    }
}

impl fmt::Display for Gomoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{:>2}", col)?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{:>2} ", row)?;
            for col in 0..self.size {
                let symbol = match self.stone(Cell::new(row, col)) {
                    Some(Stone::Black) => 'X',
                    Some(Stone::White) => 'O',
                    None => '.',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn agent_config(engine: EngineKind, rollout: RolloutKind) -> AgentConfig {
    AgentConfig::default()
        .with_engine(engine)
        .with_rollout(rollout)
        .with_win_length(WIN_LENGTH)
        .with_minimax(MinimaxConfig::default().with_time_budget(Duration::from_secs(2)))
        .with_mcts(
            MCTSConfig::default()
                .with_max_iterations(5_000)
                .with_max_time(Duration::from_secs(2)),
        )
}

fn parse_args() -> Result<(usize, EngineKind, EngineKind, RolloutKind), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let arg = |i: usize, default: &str| {
        args.get(i)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    let size = arg(0, "9")
        .parse::<usize>()
        .map_err(|e| format!("invalid board size: {}", e))?;
    if size < WIN_LENGTH {
        return Err(format!("board size must be at least {}", WIN_LENGTH));
    }
    let black = arg(1, "minimax")
        .parse::<EngineKind>()
        .map_err(|e| e.to_string())?;
    let white = arg(2, "mcts")
        .parse::<EngineKind>()
        .map_err(|e| e.to_string())?;
    let rollout = arg(3, "heuristic")
        .parse::<RolloutKind>()
        .map_err(|e| e.to_string())?;

    Ok((size, black, white, rollout))
}

fn main() {
    // Initialize logging
    env_logger::init();

    let (size, black, white, rollout) = match parse_args() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    println!(
        "Gomoku {}x{}: X = {}, O = {} (rollout: {})",
        size, size, black, white, rollout
    );
    println!("==========================================");
    println!();

    let agents = [
        Agent::<Gomoku>::from_config(
            format!("X/{}", black),
            Stone::Black,
            &agent_config(black, rollout),
        ),
        Agent::<Gomoku>::from_config(
            format!("O/{}", white),
            Stone::White,
            &agent_config(white, rollout),
        ),
    ];
    let mut agents = match agents {
        [Ok(x), Ok(o)] => [x, o],
        [Err(e), _] | [_, Err(e)] => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    let mut game = Gomoku::new(size);

    // Main game loop
    while !game.is_terminal() {
        println!("{}", game);

        let agent = match game.current_player {
            Stone::Black => &mut agents[0],
            Stone::White => &mut agents[1],
        };
        println!("{} is thinking...", agent.name());

        match agent.act(&game) {
            Some(mv) => {
                println!("{} plays ({}, {})", agent.name(), mv.row, mv.col);
                game.apply(&mv);
            }
            None => {
                println!("{} has no move", agent.name());
                break;
            }
        }
    }

    // Display final state
    println!("{}", game);

    // Report the result
    match game.winner() {
        Some(Stone::Black) => {
            println!("X ({}) wins after {} moves!", black, game.moves_played)
        }
        Some(Stone::White) => {
            println!("O ({}) wins after {} moves!", white, game.moves_played)
        }
        None => println!("The game is a draw!"),
    }
}
