//! Explicit table of supported game variants.
//!
//! Every variant the binary offers is listed in [`VARIANTS`]; there is no
//! implicit discovery. `GameKind` carries the per-variant factories: board
//! dimensions, rules object, initial holdings, save-file name, and help
//! text.

use crate::gomoku::{GomokuRules, FIRST_PLAYER_MARK, GOMOKU_SIZE, SECOND_PLAYER_MARK};
use crate::notakto::{NotaktoRules, NOTAKTO_COLS, NOTAKTO_MARK, NOTAKTO_ROWS};
use crate::players::{split_cards, Holdings};
use crate::rules::Rules;
use crate::sum_line::SumLineRules;
use serde::{Deserialize, Serialize};

/// All playable variants, in menu order.
pub const VARIANTS: &[GameKind] = &[GameKind::SumLine, GameKind::Gomoku, GameKind::Notakto];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum GameKind {
    /// Sum-to-target tic-tac-toe: odd vs even cards, lines summing to
    /// n(n^2+1)/2.
    SumLine,
    /// Five-in-a-row on a 15x15 board.
    Gomoku,
    /// Misère tic-tac-toe across three 3x3 boards.
    Notakto,
}

impl GameKind {
    pub fn name(&self) -> &'static str {
        match self {
            GameKind::SumLine => "TicTacToe",
            GameKind::Gomoku => "Gomoku",
            GameKind::Notakto => "Notakto",
        }
    }

    /// Whether this variant asks the user for a board size.
    pub fn configurable_size(&self) -> bool {
        matches!(self, GameKind::SumLine)
    }

    /// Board dimensions; `size` only applies to the sum game.
    pub fn dimensions(&self, size: usize) -> (usize, usize) {
        match self {
            GameKind::SumLine => (size, size),
            GameKind::Gomoku => (GOMOKU_SIZE, GOMOKU_SIZE),
            GameKind::Notakto => (NOTAKTO_ROWS, NOTAKTO_COLS),
        }
    }

    pub fn make_rules(&self, size: usize) -> Box<dyn Rules> {
        match self {
            GameKind::SumLine => Box::new(SumLineRules::new(size)),
            GameKind::Gomoku => Box::new(GomokuRules::new()),
            GameKind::Notakto => Box::new(NotaktoRules::new()),
        }
    }

    /// Initial holdings for a seat. `cell_count` is rows * cols.
    pub fn initial_holdings(&self, cell_count: usize, player_number: usize) -> Holdings {
        match self {
            GameKind::SumLine => {
                Holdings::Cards(split_cards(cell_count as u32, player_number == 1))
            }
            GameKind::Gomoku => Holdings::Symbol(if player_number == 1 {
                FIRST_PLAYER_MARK
            } else {
                SECOND_PLAYER_MARK
            }),
            GameKind::Notakto => Holdings::Symbol(NOTAKTO_MARK),
        }
    }

    /// One save file per variant; last write wins.
    pub fn save_file(&self) -> &'static str {
        match self {
            GameKind::SumLine => "tictactoe-record.json",
            GameKind::Gomoku => "gomoku-record.json",
            GameKind::Notakto => "notakto-record.json",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            GameKind::SumLine => {
                "Each player holds numbered cards: player 1 the odd cards, player 2 the even.\n\
                 Players take turns placing one card on an empty cell.\n\
                 A row, column, or diagonal that is completely filled and sums to the\n\
                 target number wins the game for the player who completed it."
            }
            GameKind::Gomoku => {
                "Players alternate placing their stone on an empty cell.\n\
                 Five or more of your stones in a row, column, or diagonal wins."
            }
            GameKind::Notakto => {
                "Both players place X on any free cell of any live board.\n\
                 Once a board has three-in-a-row it is dead and out of the game.\n\
                 Whoever completes three-in-a-row on the last live board LOSES."
            }
        }
    }
}

impl core::fmt::Display for GameKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
