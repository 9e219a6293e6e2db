//! Notakto rules: three independent 3x3 sub-boards stacked vertically,
//! misère win condition.
//!
//! A sub-board dies the first time any three-in-a-row appears on it. Dead
//! sub-boards accept no further moves. When the last live sub-board dies
//! the game ends and the player who killed it loses.

use crate::board::Board;
use crate::cell::Cell;
use crate::history::Move;
use crate::rules::Rules;

pub const SUB_BOARD_SIZE: usize = 3;
pub const SUB_BOARD_COUNT: usize = 3;
pub const NOTAKTO_ROWS: usize = SUB_BOARD_SIZE * SUB_BOARD_COUNT;
pub const NOTAKTO_COLS: usize = SUB_BOARD_SIZE;
pub const NOTAKTO_MARK: char = 'X';

#[derive(Debug, Clone, Default)]
pub struct NotaktoRules {
    dead: [bool; SUB_BOARD_COUNT],
}

impl NotaktoRules {
    pub fn new() -> Self {
        NotaktoRules::default()
    }

    /// Sub-board index for a global row.
    pub fn sub_board_of(row: usize) -> usize {
        (row - 1) / SUB_BOARD_SIZE
    }

    pub fn is_dead(&self, index: usize) -> bool {
        self.dead[index]
    }

    /// Whether the sub-board containing `(row, col)` holds any completed
    /// line. Every mark is the same symbol, so only occupancy matters.
    fn has_line(board: &Board, sub: usize) -> bool {
        let base = sub * SUB_BOARD_SIZE; // global row offset, 0-based
        let taken = |r: usize, c: usize| !board.get(base + r, c).is_empty();

        for i in 1..=SUB_BOARD_SIZE {
            if (1..=SUB_BOARD_SIZE).all(|c| taken(i, c)) {
                return true;
            }
            if (1..=SUB_BOARD_SIZE).all(|r| taken(r, i)) {
                return true;
            }
        }
        (1..=SUB_BOARD_SIZE).all(|i| taken(i, i))
            || (1..=SUB_BOARD_SIZE).all(|i| taken(i, SUB_BOARD_SIZE + 1 - i))
    }

    /// Would placing on the still-empty `(row, col)` complete a line on its
    /// live sub-board? Used by the computer player's safety filter.
    pub fn creates_line(board: &Board, row: usize, col: usize) -> bool {
        let sub = Self::sub_board_of(row);
        let base = sub * SUB_BOARD_SIZE;
        let taken = |r: usize, c: usize| (base + r, c) == (row, col) || !board.get(base + r, c).is_empty();
        let local_row = row - base;

        if (1..=SUB_BOARD_SIZE).all(|c| taken(local_row, c)) {
            return true;
        }
        if (1..=SUB_BOARD_SIZE).all(|r| taken(r, col)) {
            return true;
        }
        if local_row == col && (1..=SUB_BOARD_SIZE).all(|i| taken(i, i)) {
            return true;
        }
        local_row + col == SUB_BOARD_SIZE + 1
            && (1..=SUB_BOARD_SIZE).all(|i| taken(i, SUB_BOARD_SIZE + 1 - i))
    }
}

impl Rules for NotaktoRules {
    /// Completing a line is never a win here; the generic win path stays
    /// silent and the misère verdict fires through `forces_end`.
    fn would_win(&self, _board: &Board, _row: usize, _col: usize, _value: Cell) -> bool {
        false
    }

    fn on_place(&mut self, board: &Board, mv: &Move) {
        let sub = Self::sub_board_of(mv.row);
        if Self::has_line(board, sub) {
            self.dead[sub] = true;
        }
    }

    fn on_retract(&mut self, board: &Board, mv: &Move) {
        // Recompute from the grid so undoing the killing move revives the
        // sub-board.
        let sub = Self::sub_board_of(mv.row);
        self.dead[sub] = Self::has_line(board, sub);
    }

    fn is_open(&self, board: &Board, row: usize, col: usize) -> bool {
        board.is_open(row, col) && !self.dead[Self::sub_board_of(row)]
    }

    fn forces_end(&self, _board: &Board) -> bool {
        self.dead.iter().all(|&d| d)
    }

    /// Misère: the mover who killed the last live sub-board loses, so the
    /// other seat wins.
    fn verdict(&self, mover: usize, _won: bool) -> Option<usize> {
        Some(1 - mover)
    }

    fn is_safe(&self, board: &Board, row: usize, col: usize, _value: Cell) -> bool {
        !Self::creates_line(board, row, col)
    }
}
