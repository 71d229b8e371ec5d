mod common;

use arboriter_duel::{
    board::{forms_line, runs, Run},
    evaluator::{terminal_score, Evaluator, LineEvaluator, LineWeights, WIN_SCORE},
    Board, Cell,
};
use common::{drawn_board, KInARow, Stone};

fn lines_only() -> LineEvaluator {
    LineEvaluator::new(LineWeights {
        center_weight: 0.0,
        ..LineWeights::default()
    })
}

#[test]
fn test_cell_offsets_stay_on_board() {
    let cell = Cell::new(0, 2);

    assert_eq!(cell.offset((1, 0), 1, 3), Some(Cell::new(1, 2)));
    assert_eq!(cell.offset((1, -1), 2, 3), Some(Cell::new(2, 0)));
    assert_eq!(cell.offset((0, 1), 1, 3), None);
    assert_eq!(cell.offset((1, 0), -1, 3), None);
    assert_eq!(cell.distance(Cell::new(2, 1)), 2);
}

#[test]
fn test_forms_line() {
    let board = KInARow::from_rows(
        &["XX...", ".....", ".....", ".....", "....."],
        4,
        Stone::O,
    );

    assert!(forms_line(&board, Cell::new(0, 2), &Stone::X, 3));
    assert!(!forms_line(&board, Cell::new(0, 2), &Stone::X, 4));
    assert!(!forms_line(&board, Cell::new(0, 3), &Stone::X, 3));
    assert!(!forms_line(&board, Cell::new(0, 2), &Stone::O, 2));
    // Occupied cells never form a line
    assert!(!forms_line(&board, Cell::new(0, 1), &Stone::X, 1));
}

#[test]
fn test_runs_are_maximal() {
    let board = KInARow::from_rows(
        &[".....", ".XXX.", ".....", ".....", "....."],
        5,
        Stone::O,
    );
    let found = runs(&board, &Stone::X);

    let horizontal: Vec<&Run> = found
        .iter()
        .filter(|r| r.direction == (0, 1))
        .collect();
    assert_eq!(horizontal.len(), 1);
    assert_eq!(horizontal[0].start, Cell::new(1, 1));
    assert_eq!(horizontal[0].length, 3);
    assert_eq!(horizontal[0].open_ends, 2);

    // Each stone is also a single-stone run in the other three directions
    assert_eq!(found.len(), 1 + 3 * 3);
}

#[test]
fn test_open_run_outscores_half_open_run() {
    let evaluator = lines_only();
    let open = KInARow::from_rows(
        &[".....", ".XX..", ".....", ".....", "....."],
        5,
        Stone::O,
    );
    let half_open = KInARow::from_rows(
        &[".....", "XX...", ".....", ".....", "....."],
        5,
        Stone::O,
    );

    let open_score = evaluator.evaluate(&open, &Stone::X);
    let half_open_score = evaluator.evaluate(&half_open, &Stone::X);
    assert!(open_score > half_open_score);
    assert!(half_open_score > 0.0);
}

#[test]
fn test_blocked_run_scores_nothing() {
    let evaluator = LineEvaluator::new(LineWeights {
        run_weights: [0.0, 0.0, 100.0, 1_000.0, 10_000.0, 100_000.0],
        center_weight: 0.0,
        ..LineWeights::default()
    });
    // X's pair is capped by O at both ends; O's stones only form single runs
    let board = KInARow::from_rows(
        &["OXXO", "....", "....", "...."],
        4,
        Stone::X,
    );

    let x_runs: Vec<Run> = runs(&board, &Stone::X)
        .into_iter()
        .filter(|r| r.length == 2)
        .collect();
    assert_eq!(x_runs.len(), 1);
    assert_eq!(x_runs[0].open_ends, 0);
    assert_eq!(evaluator.evaluate(&board, &Stone::X), 0.0);
}

#[test]
fn test_opponent_runs_count_against() {
    let evaluator = lines_only();
    let board = KInARow::from_rows(
        &[".....", ".OOO.", ".....", ".....", "X...."],
        5,
        Stone::X,
    );

    assert!(evaluator.evaluate(&board, &Stone::X) < 0.0);
    assert!(evaluator.evaluate(&board, &Stone::O) > 0.0);
}

#[test]
fn test_evaluation_is_antisymmetric() {
    let evaluator = LineEvaluator::default();
    let board = KInARow::from_rows(
        &["X....", ".XO..", "..O..", ".X...", "....O"],
        5,
        Stone::X,
    );

    let for_x = evaluator.evaluate(&board, &Stone::X);
    let for_o = evaluator.evaluate(&board, &Stone::O);
    assert_eq!(for_x, -for_o);
    assert_eq!(evaluator.evaluate(&KInARow::new(5, 5), &Stone::X), 0.0);
}

#[test]
fn test_center_bonus() {
    let evaluator = LineEvaluator::new(LineWeights {
        run_weights: [0.0; 6],
        half_open_factor: 0.5,
        center_weight: 1.0,
    });
    let center = KInARow::from_rows(
        &[".....", ".....", "..X..", ".....", "....."],
        5,
        Stone::O,
    );
    let edge = KInARow::from_rows(
        &["X....", ".....", ".....", ".....", "....."],
        5,
        Stone::O,
    );

    assert_eq!(center.center(), Cell::new(2, 2));
    assert_eq!(evaluator.evaluate(&center, &Stone::X), 2.0);
    assert_eq!(evaluator.evaluate(&edge, &Stone::X), 0.0);
}

#[test]
fn test_terminal_score() {
    let won = KInARow::from_rows(&["XXX", "OO.", "..."], 3, Stone::O);

    assert_eq!(terminal_score(&won, &Stone::X, 0), WIN_SCORE);
    assert_eq!(terminal_score(&won, &Stone::X, 3), WIN_SCORE + 3.0);
    assert_eq!(terminal_score(&won, &Stone::O, 2), -(WIN_SCORE + 2.0));
    assert_eq!(terminal_score(&drawn_board(), &Stone::X, 5), 0.0);

    // No heuristic value comes close to a decided game
    let evaluator = LineEvaluator::default();
    let crowded = KInARow::from_rows(
        &["XXXX.", "XXXX.", ".....", ".....", "....."],
        5,
        Stone::O,
    );
    assert!(evaluator.evaluate(&crowded, &Stone::X).abs() < WIN_SCORE);
}
