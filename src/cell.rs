//! Cell values held by board positions.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Value occupying a single board position. Card-based variants place
/// numbered cards, mark-based variants place a repeatable symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No value placed yet. Distinct from every legal mark.
    Empty,
    /// A numbered card from the sum game's deck.
    Card(u32),
    /// A fixed player symbol (Gomoku stone, Notakto cross).
    Mark(char),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Card(n) => write!(f, "{}", n),
            Cell::Mark(c) => write!(f, "{}", c),
        }
    }
}
