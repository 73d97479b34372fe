// SPDX-License-Identifier: MIT OR Apache-2.0

use scrabble_core::{
    board::Board, layout::BoardLayout, BonusCategory, BonusTable, ConfigError, Point, Size,
};
use std::collections::HashSet;

const N: usize = 15;

#[test]
fn bonus_layout_is_symmetric() {
    for row in 0..N {
        for col in 0..N {
            let bonus = BonusTable::lookup(row, col);
            assert_eq!(bonus, BonusTable::lookup(col, row), "transpose at ({row}, {col})");
            assert_eq!(bonus, BonusTable::lookup(N - 1 - row, col), "vertical flip at ({row}, {col})");
            assert_eq!(bonus, BonusTable::lookup(row, N - 1 - col), "horizontal flip at ({row}, {col})");
        }
    }
}

#[test]
fn triple_word_corners_and_edges() {
    for (row, col) in [(0, 0), (0, 14), (14, 0), (14, 14), (0, 7), (7, 0), (7, 14), (14, 7)] {
        assert_eq!(BonusTable::lookup(row, col), BonusCategory::TripleWord);
    }
}

#[test]
fn double_word_diagonals() {
    for i in 1..=4 {
        assert_eq!(BonusTable::lookup(i, i), BonusCategory::DoubleWord);
        assert_eq!(BonusTable::lookup(N - 1 - i, N - 1 - i), BonusCategory::DoubleWord);
        assert_eq!(BonusTable::lookup(i, N - 1 - i), BonusCategory::DoubleWord);
    }
    // the diagonal breaks for the triple letter squares before reaching the center
    assert_eq!(BonusTable::lookup(5, 5), BonusCategory::TripleLetter);
    assert_eq!(BonusTable::lookup(6, 6), BonusCategory::DoubleLetter);
}

#[test]
fn standard_board_has_225_unique_cells() {
    let layout = BoardLayout::default();
    let board = Board::build(15, layout.origin(), layout.cell_size()).unwrap();

    let coords: HashSet<_> = board.cells().map(|c| (c.row(), c.col())).collect();
    assert_eq!(board.cells().count(), 225);
    assert_eq!(coords.len(), 225);
    assert!(coords.iter().all(|&(r, c)| r < N && c < N));

    for cell in board.cells() {
        assert_eq!(cell.bonus(), BonusTable::lookup(cell.row(), cell.col()));
    }
}

#[test]
fn exactly_one_start_square_at_center() {
    let board = Board::build(15, Point::default(), Size::splat(10.0)).unwrap();

    let starts: Vec<_> = board
        .cells()
        .filter(|c| c.is_start())
        .map(|c| (c.row(), c.col()))
        .collect();
    assert_eq!(starts, vec![(7, 7)]);
}

#[test]
fn cells_tile_the_board_without_gaps() {
    let layout = BoardLayout::default();
    let board = Board::build(15, layout.origin(), layout.cell_size()).unwrap();

    for row in board.rows() {
        for pair in row.windows(2) {
            assert_eq!(pair[0].bounds().max().x, pair[1].bounds().min.x);
        }
    }

    // a point inside a cell hits exactly that cell
    let probe = board.cell(3, 9).unwrap().center();
    let hits: Vec<_> = board.cells().filter(|c| c.contains_point(probe)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!((hits[0].row(), hits[0].col()), (3, 9));
}

#[test]
fn bigger_boards_fall_back_to_plain_squares() {
    let board = Board::build(17, Point::default(), Size::splat(10.0)).unwrap();

    assert_eq!(board.cell(16, 16).unwrap().bonus(), BonusCategory::None);
    assert_eq!(board.cell(0, 0).unwrap().bonus(), BonusCategory::TripleWord);
    assert!(board.cell(8, 8).unwrap().is_start());
}

#[test]
fn non_positive_dimension_is_a_config_error() {
    for dimension in [0, -1, i32::MIN] {
        let err = Board::build(dimension, Point::default(), Size::splat(10.0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBoardDimension(dimension));
    }
}
