//! Board state: the grid of cell values and occupancy bookkeeping.

use crate::cell::Cell;

/// A 2-D grid of cells addressed by 1-based `(row, col)`.
///
/// The board trusts its callers: `put` performs no occupancy check so that
/// undo can write `Empty` back without re-validating. The session controller
/// is the sole legality gate for real moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    open: usize,
}

impl Board {
    /// Create an empty `rows` x `cols` board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            open: rows * cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells still empty.
    pub fn remaining_open(&self) -> usize {
        self.open
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.cols + (col - 1)
    }

    fn in_range(&self, row: usize, col: usize) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col)
    }

    /// True iff the coordinate is in range and the cell is empty.
    /// Out-of-range coordinates are simply not open; this never errors.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.in_range(row, col) && self.cells[self.index(row, col)].is_empty()
    }

    /// Value at `(row, col)`, or `Empty` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if self.in_range(row, col) {
            self.cells[self.index(row, col)]
        } else {
            Cell::Empty
        }
    }

    /// Write a value without legality checks. Writing `Empty` over an
    /// occupied cell reopens it; anything else consumes an open cell.
    pub fn put(&mut self, row: usize, col: usize, value: Cell) {
        debug_assert!(self.in_range(row, col));
        let idx = self.index(row, col);
        let was_empty = self.cells[idx].is_empty();
        match (was_empty, value.is_empty()) {
            (true, false) => self.open -= 1,
            (false, true) => self.open += 1,
            _ => {}
        }
        self.cells[idx] = value;
    }

    /// All empty coordinates in row-major order (row outer, col inner).
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=self.rows)
            .flat_map(move |r| (1..=self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.is_open(r, c))
    }
}
