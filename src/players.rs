//! Player records and their remaining holdings.

use crate::cell::Cell;
use serde::{Deserialize, Serialize};

/// Whether a seat is driven by console input or the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// Values a player may still place.
///
/// Card holdings deplete as cards are placed and are refilled by undo.
/// Symbol holdings are a fixed repeatable mark that never runs out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Holdings {
    Cards(Vec<u32>),
    Symbol(char),
}

impl Holdings {
    /// Candidate values in holding order, used by the win-scan.
    pub fn candidates(&self) -> Vec<Cell> {
        match self {
            Holdings::Cards(cards) => cards.iter().map(|&n| Cell::Card(n)).collect(),
            Holdings::Symbol(c) => vec![Cell::Mark(*c)],
        }
    }

    pub fn contains(&self, value: Cell) -> bool {
        match (self, value) {
            (Holdings::Cards(cards), Cell::Card(n)) => cards.contains(&n),
            (Holdings::Symbol(c), Cell::Mark(m)) => *c == m,
            _ => false,
        }
    }

    /// Consume a value on placement. Symbols are never exhausted.
    pub fn mark_used(&mut self, value: Cell) {
        if let (Holdings::Cards(cards), Cell::Card(n)) = (&mut *self, value) {
            if let Some(pos) = cards.iter().position(|&c| c == n) {
                cards.remove(pos);
            }
        }
    }

    /// Return a value to the holding when its placement is undone.
    pub fn unmark_used(&mut self, value: Cell) {
        if let (Holdings::Cards(cards), Cell::Card(n)) = (&mut *self, value) {
            cards.push(n);
        }
    }

    pub fn is_depleted(&self) -> bool {
        matches!(self, Holdings::Cards(cards) if cards.is_empty())
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub number: usize,
    pub kind: PlayerKind,
    pub holdings: Holdings,
}

impl Player {
    pub fn new(number: usize, kind: PlayerKind, holdings: Holdings) -> Self {
        Player {
            number,
            kind,
            holdings,
        }
    }

    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }
}

/// Split the deck `1..=total` odd/even between the two seats. The first
/// player takes the odd cards, and one extra card when `total` is odd.
pub fn split_cards(total: u32, first_player: bool) -> Vec<u32> {
    (1..=total)
        .filter(|n| (n % 2 == 1) == first_player)
        .collect()
}
