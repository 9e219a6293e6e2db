//! One-ply computer move selection.
//!
//! Scan all open cells in row-major order and take the first immediately
//! winning `(cell, value)` pair; otherwise pick uniformly at random among
//! open cells that pass the variant's safety filter, with a random
//! remaining value. The scan order is a deterministic tie-break, not
//! best-response play, and no opponent-blocking is attempted.

use crate::board::Board;
use crate::cell::Cell;
use crate::players::Holdings;
use crate::rules::Rules;
use rand::Rng;

/// Choose the computer's next move, or `None` when no open cell remains.
/// Never returns an occupied or out-of-range coordinate.
pub fn choose_move<R: Rng + ?Sized>(
    rules: &dyn Rules,
    board: &Board,
    holdings: &Holdings,
    rng: &mut R,
) -> Option<(usize, usize, Cell)> {
    let candidates = holdings.candidates();
    let mut open = Vec::new();

    for row in 1..=board.rows() {
        for col in 1..=board.cols() {
            if !rules.is_open(board, row, col) {
                continue;
            }
            for &value in &candidates {
                if rules.would_win(board, row, col, value) {
                    log::debug!("computer wins at ({}, {}) with {}", row, col, value);
                    return Some((row, col, value));
                }
            }
            open.push((row, col));
        }
    }

    if open.is_empty() || candidates.is_empty() {
        return None;
    }

    let value = candidates[rng.random_range(0..candidates.len())];

    // Prefer cells that do not trigger the mover's own loss condition;
    // when none exist the move is forced.
    let safe: Vec<(usize, usize)> = open
        .iter()
        .copied()
        .filter(|&(r, c)| rules.is_safe(board, r, c, value))
        .collect();
    let pool = if safe.is_empty() { &open } else { &safe };
    let (row, col) = pool[rng.random_range(0..pool.len())];
    Some((row, col, value))
}
