//! Gomoku rules: five or more identical marks in a row, anchored at the
//! just-placed cell.

use crate::board::Board;
use crate::cell::Cell;
use crate::rules::Rules;

pub const GOMOKU_SIZE: usize = 15;
pub const FIRST_PLAYER_MARK: char = 'o';
pub const SECOND_PLAYER_MARK: char = 'x';

const WINNING_RUN: usize = 5;

/// The four axis directions as (d_row, d_col) unit steps.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Default)]
pub struct GomokuRules;

impl GomokuRules {
    pub fn new() -> Self {
        GomokuRules
    }

    /// Contiguous same-value run length through `(row, col)` along one
    /// axis, counting the anchor cell itself, walking outward both ways.
    fn run_length(board: &Board, row: usize, col: usize, value: Cell, axis: (isize, isize)) -> usize {
        let mut count = 1;
        for dir in [1isize, -1] {
            for distance in 1..WINNING_RUN as isize {
                let r = row as isize + axis.0 * dir * distance;
                let c = col as isize + axis.1 * dir * distance;
                if r < 1 || c < 1 {
                    break;
                }
                if board.get(r as usize, c as usize) != value {
                    break;
                }
                count += 1;
            }
        }
        count
    }
}

impl Rules for GomokuRules {
    fn would_win(&self, board: &Board, row: usize, col: usize, value: Cell) -> bool {
        if value.is_empty() {
            return false;
        }
        AXES.iter()
            .any(|&axis| Self::run_length(board, row, col, value, axis) >= WINNING_RUN)
    }
}
