//! Game session controller: turn order, move application, undo/redo, and
//! win/draw evaluation over an injected per-variant `Rules` object.

use std::collections::BTreeMap;

use crate::ai;
use crate::board::Board;
use crate::cell::Cell;
use crate::common::GameError;
use crate::history::{Move, MoveLog};
use crate::players::{Holdings, Player, PlayerKind};
use crate::registry::GameKind;
use crate::rules::Rules;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const PLAYER_COUNT: usize = 2;

/// Who drives each seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    HumanVsHuman,
    HumanVsComputer,
    ComputerVsComputer,
}

/// Result of asking the session where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Index of the winning seat.
    Won(usize),
    Draw,
}

/// Serializable snapshot of a full session, written to the per-variant
/// save file. Holdings are keyed by player number (1-based).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub game: GameKind,
    pub rows: usize,
    pub cols: usize,
    pub board: Vec<Vec<Cell>>,
    pub current_player_index: usize,
    pub player_holdings: BTreeMap<usize, Holdings>,
    pub mode: Mode,
    pub human_first: bool,
    pub moves: Vec<Move>,
    pub move_pointer: usize,
}

/// A running game. Owns the board, the move log, both players, and the
/// variant rules; mutated only through `apply_move`, `undo`, and `redo`.
#[derive(Debug)]
pub struct Session {
    kind: GameKind,
    board: Board,
    log: MoveLog,
    players: [Player; PLAYER_COUNT],
    current: usize,
    mode: Mode,
    human_first: bool,
    winner: Option<usize>,
    over: bool,
    rules: Box<dyn Rules>,
}

impl Session {
    /// Start a fresh game. `size` is only consulted by variants with a
    /// configurable board (the sum game).
    pub fn new(kind: GameKind, size: usize, mode: Mode, human_first: bool) -> Self {
        let (rows, cols) = kind.dimensions(size);
        let board = Board::new(rows, cols);
        let players = Self::seat_players(kind, rows * cols, mode, human_first);
        Session {
            kind,
            board,
            log: MoveLog::new(),
            players,
            current: 0,
            mode,
            human_first,
            winner: None,
            over: false,
            rules: kind.make_rules(rows),
        }
    }

    fn seat_players(
        kind: GameKind,
        cell_count: usize,
        mode: Mode,
        human_first: bool,
    ) -> [Player; PLAYER_COUNT] {
        let kinds = match mode {
            Mode::HumanVsHuman => [PlayerKind::Human, PlayerKind::Human],
            Mode::ComputerVsComputer => [PlayerKind::Computer, PlayerKind::Computer],
            Mode::HumanVsComputer => {
                if human_first {
                    [PlayerKind::Human, PlayerKind::Computer]
                } else {
                    [PlayerKind::Computer, PlayerKind::Human]
                }
            }
        };
        [
            Player::new(1, kinds[0], kind.initial_holdings(cell_count, 1)),
            Player::new(2, kinds[1], kind.initial_holdings(cell_count, 2)),
        ]
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn status(&self) -> GameStatus {
        if !self.over {
            GameStatus::InProgress
        } else {
            match self.winner {
                Some(idx) => GameStatus::Won(idx),
                None => GameStatus::Draw,
            }
        }
    }

    /// Rules-aware legality: in range, empty, and not excluded by the
    /// variant (e.g. a dead Notakto sub-board).
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.rules.is_open(&self.board, row, col)
    }

    /// Apply the current player's move and advance the turn.
    pub fn apply_move(&mut self, row: usize, col: usize, value: Cell) -> Result<(), GameError> {
        if self.over {
            return Err(GameError::InternalFault("move applied after game over"));
        }
        if !self.rules.is_open(&self.board, row, col) {
            return Err(GameError::IllegalMove { row, col });
        }
        if !self.players[self.current].holdings.contains(value) {
            return Err(GameError::UnavailableValue);
        }

        let mv = Move {
            row,
            col,
            value,
            player_index: self.current,
        };
        self.players[self.current].holdings.mark_used(value);
        self.log.append(mv);
        self.board.put(row, col, value);
        self.rules.on_place(&self.board, &mv);
        self.refresh_status(&mv);
        self.current = (self.current + 1) % PLAYER_COUNT;
        Ok(())
    }

    /// Ask the heuristic for the current (computer) player's move. Errors
    /// only on the internal-consistency fault of having no open cell.
    pub fn computer_move<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(usize, usize, Cell), GameError> {
        ai::choose_move(
            self.rules.as_ref(),
            &self.board,
            &self.players[self.current].holdings,
            rng,
        )
        .ok_or(GameError::InternalFault("no move available for computer"))
    }

    /// Retract the last full round (one move per player), returning the
    /// retracted values to their owners' holdings. Returns `false` when
    /// less than a full round has been played; the turn owner is unchanged
    /// either way.
    pub fn undo(&mut self) -> bool {
        if !self.log.can_undo(PLAYER_COUNT) {
            return false;
        }
        for _ in 0..PLAYER_COUNT {
            if let Some(mv) = self.log.retract_one() {
                self.board.put(mv.row, mv.col, Cell::Empty);
                self.players[mv.player_index].holdings.unmark_used(mv.value);
                self.rules.on_retract(&self.board, &mv);
            }
        }
        self.winner = None;
        self.over = false;
        log::debug!("undid one round, {} moves applied", self.log.applied());
        true
    }

    /// Reapply the next full round of previously undone moves. Returns
    /// `false` when less than a full round is redoable.
    pub fn redo(&mut self) -> bool {
        if !self.log.can_redo(PLAYER_COUNT) {
            return false;
        }
        for _ in 0..PLAYER_COUNT {
            if let Some(mv) = self.log.advance_one() {
                self.players[mv.player_index].holdings.mark_used(mv.value);
                self.board.put(mv.row, mv.col, mv.value);
                self.rules.on_place(&self.board, &mv);
                self.refresh_status(&mv);
            }
        }
        log::debug!("redid one round, {} moves applied", self.log.applied());
        true
    }

    fn refresh_status(&mut self, mv: &Move) {
        if self.rules.forces_end(&self.board) {
            self.over = true;
            self.winner = self.rules.verdict(mv.player_index, false);
        } else if self.rules.just_won(&self.board, mv) {
            self.over = true;
            self.winner = self.rules.verdict(mv.player_index, true);
        } else if self.board.remaining_open() == 0 {
            self.over = true;
        }
    }

    /// Snapshot the full session for saving.
    pub fn snapshot(&self) -> Snapshot {
        let board = (1..=self.board.rows())
            .map(|r| (1..=self.board.cols()).map(|c| self.board.get(r, c)).collect())
            .collect();
        let player_holdings = self
            .players
            .iter()
            .map(|p| (p.number, p.holdings.clone()))
            .collect();
        Snapshot {
            game: self.kind,
            rows: self.board.rows(),
            cols: self.board.cols(),
            board,
            current_player_index: self.current,
            player_holdings,
            mode: self.mode,
            human_first: self.human_first,
            moves: self.log.moves().to_vec(),
            move_pointer: self.log.applied(),
        }
    }

    /// Reconstruct a session from a saved snapshot: replay the grid
    /// row-major through the rules observers (rebuilding incremental
    /// caches), then restore holdings and the move log verbatim.
    pub fn from_snapshot(snap: Snapshot) -> Result<Self, GameError> {
        let (rows, cols) = snap.game.dimensions(snap.rows);
        if (rows, cols) != (snap.rows, snap.cols) {
            return Err(GameError::CorruptSave(format!(
                "board dimensions {}x{} do not fit {}",
                snap.rows,
                snap.cols,
                snap.game.name()
            )));
        }
        if snap.board.len() != rows || snap.board.iter().any(|r| r.len() != cols) {
            return Err(GameError::CorruptSave("board grid has wrong shape".into()));
        }
        if snap.current_player_index >= PLAYER_COUNT {
            return Err(GameError::CorruptSave("current player index out of range".into()));
        }
        if snap.move_pointer > snap.moves.len() {
            return Err(GameError::CorruptSave("move pointer beyond move list".into()));
        }
        if snap
            .moves
            .iter()
            .any(|m| m.row < 1 || m.row > rows || m.col < 1 || m.col > cols)
        {
            return Err(GameError::CorruptSave("move outside the board".into()));
        }

        let mut session = Session::new(snap.game, snap.rows, snap.mode, snap.human_first);
        for (r, row) in snap.board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                let mv = Move {
                    row: r + 1,
                    col: c + 1,
                    value,
                    player_index: 0,
                };
                session.board.put(mv.row, mv.col, value);
                session.rules.on_place(&session.board, &mv);
            }
        }
        for player in &mut session.players {
            let holdings = snap
                .player_holdings
                .get(&player.number)
                .ok_or_else(|| {
                    GameError::CorruptSave(format!("missing holdings for player {}", player.number))
                })?;
            player.holdings = holdings.clone();
        }
        session.log = MoveLog::from_parts(snap.moves, snap.move_pointer);
        session.current = snap.current_player_index;
        Ok(session)
    }
}
