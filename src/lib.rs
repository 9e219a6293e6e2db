mod ai;
mod board;
mod cell;
pub mod cli;
mod common;
mod gomoku;
mod history;
mod logging;
mod notakto;
mod players;
mod registry;
mod rules;
mod save;
mod session;
mod sum_line;

pub use ai::*;
pub use board::*;
pub use cell::*;
pub use common::*;
pub use gomoku::*;
pub use history::*;
pub use logging::init_logging;
pub use notakto::*;
pub use players::*;
pub use registry::*;
pub use rules::*;
pub use save::*;
pub use session::*;
pub use sum_line::*;
