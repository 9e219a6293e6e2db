use std::fs;
use std::path::PathBuf;

use gridgames::{
    has_record, load_game, record_path, save_game, Cell, GameError, GameKind, Mode, Session,
    Snapshot,
};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gridgames-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// A mid-game sum session that has already seen an undo.
fn mid_game_session() -> Session {
    let mut session = Session::new(GameKind::SumLine, 3, Mode::HumanVsHuman, true);
    session.apply_move(1, 1, Cell::Card(1)).unwrap();
    session.apply_move(2, 2, Cell::Card(4)).unwrap();
    session.apply_move(3, 3, Cell::Card(7)).unwrap();
    session.apply_move(3, 1, Cell::Card(2)).unwrap();
    session.undo();
    session
}

#[test]
fn snapshot_serializes_and_deserializes() {
    let session = mid_game_session();
    let snap = session.snapshot();
    let json = serde_json::to_string_pretty(&snap).unwrap();
    let decoded: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snap);
}

#[test]
fn resume_reproduces_the_saved_session() {
    let dir = temp_dir("resume");
    let session = mid_game_session();
    save_game(&dir, &session).unwrap();
    assert!(has_record(&dir, GameKind::SumLine));

    let restored = load_game(&dir, GameKind::SumLine).unwrap();
    assert_eq!(restored.snapshot(), session.snapshot());

    // the undone round is still redoable after resume
    let mut restored = restored;
    assert!(restored.redo());
    assert_eq!(restored.board().get(3, 3), Cell::Card(7));
    assert_eq!(restored.board().get(3, 1), Cell::Card(2));
}

#[test]
fn resumed_session_keeps_playing_consistently() {
    let dir = temp_dir("continue");
    let mut session = mid_game_session();
    save_game(&dir, &session).unwrap();
    let mut restored = load_game(&dir, GameKind::SumLine).unwrap();

    // play the same winning line on both and compare outcomes
    for s in [&mut session, &mut restored] {
        s.apply_move(2, 1, Cell::Card(5)).unwrap();
        s.apply_move(1, 2, Cell::Card(6)).unwrap();
        s.apply_move(2, 3, Cell::Card(9)).unwrap();
        s.apply_move(1, 3, Cell::Card(8)).unwrap(); // row 1: 1 + 6 + 8 = 15
    }
    assert_eq!(session.status(), restored.status());
    assert_eq!(session.snapshot(), restored.snapshot());
}

#[test]
fn missing_record_is_not_fatal() {
    let dir = temp_dir("missing");
    let err = load_game(&dir, GameKind::Gomoku).unwrap_err();
    assert_eq!(err, GameError::NoSavedGame);
}

#[test]
fn malformed_record_is_rejected() {
    let dir = temp_dir("malformed");
    fs::write(record_path(&dir, GameKind::Notakto), "not json at all").unwrap();
    let err = load_game(&dir, GameKind::Notakto).unwrap_err();
    assert!(matches!(err, GameError::CorruptSave(_)));
}

#[test]
fn inconsistent_snapshot_is_rejected() {
    let session = mid_game_session();
    let mut snap = session.snapshot();
    snap.move_pointer = snap.moves.len() + 5;
    assert!(matches!(
        Session::from_snapshot(snap),
        Err(GameError::CorruptSave(_))
    ));

    let mut snap = session.snapshot();
    snap.player_holdings.remove(&2);
    assert!(matches!(
        Session::from_snapshot(snap),
        Err(GameError::CorruptSave(_))
    ));

    let mut snap = session.snapshot();
    snap.cols = 7;
    assert!(matches!(
        Session::from_snapshot(snap),
        Err(GameError::CorruptSave(_))
    ));
}

#[test]
fn each_variant_saves_to_its_own_file() {
    let dir = temp_dir("files");
    assert_ne!(
        record_path(&dir, GameKind::SumLine),
        record_path(&dir, GameKind::Gomoku)
    );
    assert_ne!(
        record_path(&dir, GameKind::Gomoku),
        record_path(&dir, GameKind::Notakto)
    );
}

#[test]
fn notakto_dead_boards_survive_a_resume() {
    let dir = temp_dir("notakto");
    let x = Cell::Mark('X');
    let mut session = Session::new(GameKind::Notakto, 0, Mode::HumanVsHuman, true);
    session.apply_move(1, 1, x).unwrap();
    session.apply_move(1, 2, x).unwrap();
    session.apply_move(1, 3, x).unwrap(); // board 1 dies
    save_game(&dir, &session).unwrap();

    let restored = load_game(&dir, GameKind::Notakto).unwrap();
    assert!(!restored.is_open(2, 1));
    assert!(restored.is_open(4, 1));
}
