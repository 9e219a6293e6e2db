use gridgames::{Board, Cell, GameKind, GameStatus, GomokuRules, Mode, Rules, Session};

const O: Cell = Cell::Mark('o');
const X: Cell = Cell::Mark('x');

fn board_with(cells: &[(usize, usize, Cell)]) -> Board {
    let mut board = Board::new(15, 15);
    for &(r, c, v) in cells {
        board.put(r, c, v);
    }
    board
}

#[test]
fn five_in_a_row_wins_on_every_axis() {
    let rules = GomokuRules::new();

    // horizontal, completing in the middle of the run
    let board = board_with(&[(3, 2, O), (3, 3, O), (3, 5, O), (3, 6, O)]);
    assert!(rules.would_win(&board, 3, 4, O));

    // vertical
    let board = board_with(&[(4, 7, X), (5, 7, X), (6, 7, X), (7, 7, X)]);
    assert!(rules.would_win(&board, 8, 7, X));

    // main diagonal
    let board = board_with(&[(1, 1, O), (2, 2, O), (3, 3, O), (4, 4, O)]);
    assert!(rules.would_win(&board, 5, 5, O));

    // anti diagonal
    let board = board_with(&[(5, 1, X), (4, 2, X), (3, 3, X), (2, 4, X)]);
    assert!(rules.would_win(&board, 1, 5, X));
}

#[test]
fn runs_longer_than_five_also_win() {
    let rules = GomokuRules::new();
    let board = board_with(&[
        (9, 1, O),
        (9, 2, O),
        (9, 3, O),
        (9, 5, O),
        (9, 6, O),
        (9, 7, O),
    ]);
    assert!(rules.would_win(&board, 9, 4, O));
}

#[test]
fn four_with_a_gap_does_not_win() {
    let rules = GomokuRules::new();
    let board = board_with(&[(6, 1, O), (6, 2, O), (6, 4, O), (6, 5, O)]);
    assert!(!rules.would_win(&board, 6, 6, O));
}

#[test]
fn opponent_marks_break_the_run() {
    let rules = GomokuRules::new();
    let board = board_with(&[(2, 1, O), (2, 2, O), (2, 3, X), (2, 4, O), (2, 5, O)]);
    assert!(!rules.would_win(&board, 2, 6, O));
}

#[test]
fn runs_stop_at_the_board_edge() {
    let rules = GomokuRules::new();
    let board = board_with(&[(1, 1, O), (1, 2, O), (1, 3, O)]);
    assert!(!rules.would_win(&board, 1, 4, O));
}

#[test]
fn session_reports_the_win_for_the_mover() {
    let mut session = Session::new(GameKind::Gomoku, 0, Mode::HumanVsHuman, true);
    // player 1 builds a horizontal run while player 2 plays far away
    for i in 1..=4 {
        session.apply_move(8, i, O).unwrap();
        session.apply_move(15, i, X).unwrap();
    }
    session.apply_move(8, 5, O).unwrap();
    assert_eq!(session.status(), GameStatus::Won(0));
}

#[test]
fn symbol_holdings_never_deplete() {
    let mut session = Session::new(GameKind::Gomoku, 0, Mode::HumanVsHuman, true);
    for i in 1..=6 {
        session.apply_move(1, i, if i % 2 == 1 { O } else { X }).unwrap();
    }
    assert!(session.players()[0].holdings.contains(O));
    assert!(session.players()[1].holdings.contains(X));
}
