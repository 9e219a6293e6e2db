//! Move records and the undo/redo log.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// One atomic state transition: who placed what where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
    pub player_index: usize,
}

/// Ordered move sequence plus the count of moves currently applied to the
/// board. Moves at index < `applied` are reflected in board state; moves at
/// or beyond it are redoable. Appending a new move truncates the redo
/// branch first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
    applied: usize,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a log verbatim from a saved snapshot.
    pub fn from_parts(moves: Vec<Move>, applied: usize) -> Self {
        MoveLog { moves, applied }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Record a freshly made move, discarding any previously undone moves.
    pub fn append(&mut self, mv: Move) {
        self.moves.truncate(self.applied);
        self.moves.push(mv);
        self.applied += 1;
    }

    pub fn can_undo(&self, n: usize) -> bool {
        self.applied >= n
    }

    pub fn can_redo(&self, n: usize) -> bool {
        self.moves.len() - self.applied >= n
    }

    /// Step the applied prefix back by one, returning the retracted move.
    pub fn retract_one(&mut self) -> Option<Move> {
        if self.applied == 0 {
            return None;
        }
        self.applied -= 1;
        Some(self.moves[self.applied])
    }

    /// Step the applied prefix forward by one, returning the reapplied move.
    pub fn advance_one(&mut self) -> Option<Move> {
        if self.applied == self.moves.len() {
            return None;
        }
        let mv = self.moves[self.applied];
        self.applied += 1;
        Some(mv)
    }

    /// Most recently applied move, if any.
    pub fn last_applied(&self) -> Option<&Move> {
        self.applied.checked_sub(1).map(|i| &self.moves[i])
    }
}
