//! Sum-to-target rules: a line wins when completely filled and its cards
//! sum to `n(n^2+1)/2`.
//!
//! Win checks must stay O(1) amortized because one runs on every placement
//! and on every cell of the computer player's scan, so per-line running
//! sums and fill counts are maintained incrementally instead of rescanning
//! lines.

use crate::board::Board;
use crate::cell::Cell;
use crate::history::Move;
use crate::rules::Rules;

/// One tracked line's running state.
#[derive(Debug, Clone, Copy, Default)]
struct LineCache {
    sum: u32,
    filled: usize,
}

impl LineCache {
    fn add(&mut self, n: u32) {
        self.sum += n;
        self.filled += 1;
    }

    fn remove(&mut self, n: u32) {
        self.sum -= n;
        self.filled -= 1;
    }
}

#[derive(Debug, Clone)]
pub struct SumLineRules {
    size: usize,
    target: u32,
    rows: Vec<LineCache>,
    cols: Vec<LineCache>,
    // main diagonal (row == col) and anti diagonal (row + col == size + 1)
    diag_main: LineCache,
    diag_anti: LineCache,
}

/// Winning line sum for an `n` x `n` board: `n(n^2+1)/2`.
pub fn target_number(size: usize) -> u32 {
    let n = size as u32;
    n * (n * n + 1) / 2
}

impl SumLineRules {
    pub fn new(size: usize) -> Self {
        SumLineRules {
            size,
            target: target_number(size),
            rows: vec![LineCache::default(); size],
            cols: vec![LineCache::default(); size],
            diag_main: LineCache::default(),
            diag_anti: LineCache::default(),
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    fn completes(&self, line: &LineCache, n: u32) -> bool {
        line.sum + n == self.target && line.filled + 1 == self.size
    }
}

impl Rules for SumLineRules {
    fn would_win(&self, _board: &Board, row: usize, col: usize, value: Cell) -> bool {
        let n = match value {
            Cell::Card(n) => n,
            _ => return false,
        };
        if self.completes(&self.rows[row - 1], n) || self.completes(&self.cols[col - 1], n) {
            return true;
        }
        if row == col && self.completes(&self.diag_main, n) {
            return true;
        }
        row + col == self.size + 1 && self.completes(&self.diag_anti, n)
    }

    fn just_won(&self, _board: &Board, mv: &Move) -> bool {
        // Caches already include the move; check completed lines directly.
        let full = |line: &LineCache| line.sum == self.target && line.filled == self.size;
        full(&self.rows[mv.row - 1])
            || full(&self.cols[mv.col - 1])
            || (mv.row == mv.col && full(&self.diag_main))
            || (mv.row + mv.col == self.size + 1 && full(&self.diag_anti))
    }

    fn on_place(&mut self, _board: &Board, mv: &Move) {
        if let Cell::Card(n) = mv.value {
            self.rows[mv.row - 1].add(n);
            self.cols[mv.col - 1].add(n);
            if mv.row == mv.col {
                self.diag_main.add(n);
            }
            if mv.row + mv.col == self.size + 1 {
                self.diag_anti.add(n);
            }
        }
    }

    fn on_retract(&mut self, _board: &Board, mv: &Move) {
        if let Cell::Card(n) = mv.value {
            self.rows[mv.row - 1].remove(n);
            self.cols[mv.col - 1].remove(n);
            if mv.row == mv.col {
                self.diag_main.remove(n);
            }
            if mv.row + mv.col == self.size + 1 {
                self.diag_anti.remove(n);
            }
        }
    }
}
