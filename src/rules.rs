//! Per-variant rules: win detection, placement observers, and verdicts.
//!
//! A `Session` owns one `Rules` trait object injected for the chosen game.
//! Incremental caches (line sums, dead sub-boards) live inside the rules
//! value and are kept in sync by the `on_place`/`on_retract` observers the
//! session invokes around every cell mutation.

use crate::board::Board;
use crate::cell::Cell;
use crate::history::Move;

pub trait Rules: std::fmt::Debug {
    /// Would placing `value` on the still-empty `(row, col)` win at once?
    /// Consulted by the computer player's one-ply scan; caches must not yet
    /// include the hypothetical move.
    fn would_win(&self, board: &Board, row: usize, col: usize, value: Cell) -> bool;

    /// Did the move that was just applied (cell written, observers fired)
    /// win the game? Defaults to the hypothetical check for rules whose
    /// predicate reads only the grid.
    fn just_won(&self, board: &Board, mv: &Move) -> bool {
        self.would_win(board, mv.row, mv.col, mv.value)
    }

    /// Observer fired after a value is written to the board.
    fn on_place(&mut self, _board: &Board, _mv: &Move) {}

    /// Observer fired after a cell is cleared by undo. The cell is already
    /// empty when this runs.
    fn on_retract(&mut self, _board: &Board, _mv: &Move) {}

    /// Whether a cell may legally receive a move. Defaults to plain board
    /// occupancy; Notakto additionally excludes dead sub-boards.
    fn is_open(&self, board: &Board, row: usize, col: usize) -> bool {
        board.is_open(row, col)
    }

    /// Whether the variant forces the game to end independent of the
    /// full-board and win checks (Notakto: all sub-boards dead).
    fn forces_end(&self, _board: &Board) -> bool {
        false
    }

    /// Winner attribution when the game ends. `mover` is the index of the
    /// player whose move ended it; `won` is the generic win-flag result.
    /// The default credits a detected win to the mover; Notakto inverts.
    fn verdict(&self, mover: usize, won: bool) -> Option<usize> {
        won.then_some(mover)
    }

    /// Safety filter for the computer player's random fallback: `false`
    /// marks moves that trigger the mover's own immediate loss.
    fn is_safe(&self, _board: &Board, _row: usize, _col: usize, _value: Cell) -> bool {
        true
    }
}
