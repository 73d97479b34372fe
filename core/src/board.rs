// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation: a square grid of cells in screen space

use crate::bonus::{BonusCategory, BonusTable};
use crate::color_constants::{squares, Rgb};
use crate::layout::MAX_BOARD_DIMENSION;
use crate::surface::{Surface, LABEL_FONT_SIZE};
use crate::{Bounds, ConfigError, Point, Size};

/// Fraction of the start square covered by its marker
const START_MARKER_SCALE: f32 = 2.0 / 3.0;

/// One board square
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    row: usize,
    col: usize,
    bonus: BonusCategory,
    bounds: Bounds,
    is_start: bool,
}

impl Cell {
    fn new(row: usize, col: usize, bounds: Bounds) -> Self {
        Self {
            row,
            col,
            bonus: BonusTable::lookup(row, col),
            bounds,
            is_start: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn bonus(&self) -> BonusCategory {
        self.bonus
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Whether this is the center square where play starts
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    /// Fill color; the start square overrides its bonus color
    pub fn fill_color(&self) -> Rgb {
        if self.is_start {
            squares::START
        } else {
            self.bonus.color()
        }
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Paint the square, its bonus label and the start marker if any
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.bounds, self.fill_color(), squares::BORDER);

        let label = self.bonus.abbreviation();
        if !label.is_empty() {
            surface.text(label, self.center(), LABEL_FONT_SIZE, true, squares::LABEL);
        }

        if self.is_start {
            surface.fill_oval(
                self.bounds.scaled_about_center(START_MARKER_SCALE),
                squares::START_MARKER,
                squares::BORDER,
            );
        }
    }
}

/// Fixed `dimension x dimension` grid of cells, stored row-major
#[derive(Debug, Clone)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Build the grid with its top-left corner at `origin`
    ///
    /// Sides outside `1..=MAX_BOARD_DIMENSION` are rejected.
    pub fn build(dimension: i32, origin: Point, cell_size: Size) -> Result<Self, ConfigError> {
        let dimension = Some(dimension)
            .filter(|d| (1..=MAX_BOARD_DIMENSION).contains(d))
            .and_then(|d| usize::try_from(d).ok())
            .ok_or(ConfigError::InvalidBoardDimension(dimension))?;

        let mut cells = Vec::with_capacity(dimension * dimension);
        for row in 0..dimension {
            let y = origin.y + row as f32 * cell_size.height;
            for col in 0..dimension {
                let x = origin.x + col as f32 * cell_size.width;
                cells.push(Cell::new(row, col, Bounds::new(Point::new(x, y), cell_size)));
            }
        }

        let mut board = Self { dimension, cells };
        let center = dimension / 2;
        let start = board.index(center, center);
        board.cells[start].is_start = true;

        tracing::info!(
            dimension,
            origin_x = origin.x,
            origin_y = origin.y,
            cell_width = cell_size.width,
            cell_height = cell_size.height,
            "Board built"
        );

        Ok(board)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.dimension + col
    }

    /// Cell at `(row, col)`, if on the board
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.dimension || col >= self.dimension {
            return None;
        }
        self.cells.get(self.index(row, col))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells grouped by row
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension)
    }

    pub fn start_cell(&self) -> &Cell {
        let center = self.dimension / 2;
        &self.cells[self.index(center, center)]
    }

    /// Screen rectangle covering the whole grid
    pub fn bounds(&self) -> Bounds {
        let first = self.cells[0].bounds;
        let last = self.cells[self.cells.len() - 1].bounds.max();
        Bounds::new(
            first.min,
            Size::new(last.x - first.min.x, last.y - first.min.y),
        )
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for cell in &self.cells {
            cell.draw(surface);
        }
    }
}
