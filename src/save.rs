//! Save / resume of full session snapshots as JSON, one file per variant.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::common::GameError;
use crate::registry::GameKind;
use crate::session::Session;

/// Path of the save file for a variant, under `dir`.
pub fn record_path(dir: &Path, kind: GameKind) -> PathBuf {
    dir.join(kind.save_file())
}

/// Whether a previous game record exists for this variant.
pub fn has_record(dir: &Path, kind: GameKind) -> bool {
    record_path(dir, kind).exists()
}

/// Write the session snapshot. Last write wins; no partial-write guarantee
/// is made.
pub fn save_game(dir: &Path, session: &Session) -> Result<(), GameError> {
    let snapshot = session.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| GameError::CorruptSave(e.to_string()))?;
    let path = record_path(dir, session.kind());
    fs::write(&path, json).map_err(|e| GameError::CorruptSave(e.to_string()))?;
    log::info!("saved {} game to {}", session.kind().name(), path.display());
    Ok(())
}

/// Reconstruct a saved session. A missing file is the normal "no previous
/// game" condition; a file that exists but does not decode is a fatal
/// resume error and must not be silently repaired.
pub fn load_game(dir: &Path, kind: GameKind) -> Result<Session, GameError> {
    let path = record_path(dir, kind);
    let json = match fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(GameError::NoSavedGame),
        Err(e) => return Err(GameError::CorruptSave(e.to_string())),
    };
    let snapshot = serde_json::from_str(&json).map_err(|e| GameError::CorruptSave(e.to_string()))?;
    let session = Session::from_snapshot(snapshot)?;
    log::info!("resumed {} game from {}", kind.name(), path.display());
    Ok(session)
}
