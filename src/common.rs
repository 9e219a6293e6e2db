//! Common error types shared across the engine.

/// Errors surfaced by session and persistence operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Move targets an occupied, dead, or out-of-range cell.
    IllegalMove { row: usize, col: usize },
    /// Chosen value is not in the player's remaining holdings.
    UnavailableValue,
    /// No saved game exists for this variant.
    NoSavedGame,
    /// Save file exists but cannot be decoded into a session.
    CorruptSave(String),
    /// Internal contract violated (e.g. the computer player asked for a
    /// move on a board with no open cell).
    InternalFault(&'static str),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::IllegalMove { row, col } => {
                write!(f, "position ({}, {}) is not available", row, col)
            }
            GameError::UnavailableValue => write!(f, "value is not among the remaining holdings"),
            GameError::NoSavedGame => write!(f, "no previous game record exists"),
            GameError::CorruptSave(msg) => write!(f, "saved game record is malformed: {}", msg),
            GameError::InternalFault(msg) => write!(f, "internal fault: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}
