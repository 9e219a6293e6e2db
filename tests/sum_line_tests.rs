use gridgames::{target_number, Board, Cell, Move, Rules, SumLineRules};

fn place(rules: &mut SumLineRules, board: &mut Board, row: usize, col: usize, n: u32) {
    let mv = Move {
        row,
        col,
        value: Cell::Card(n),
        player_index: 0,
    };
    board.put(row, col, mv.value);
    rules.on_place(board, &mv);
}

fn retract(rules: &mut SumLineRules, board: &mut Board, row: usize, col: usize, n: u32) {
    let mv = Move {
        row,
        col,
        value: Cell::Card(n),
        player_index: 0,
    };
    board.put(row, col, Cell::Empty);
    rules.on_retract(board, &mv);
}

#[test]
fn target_matches_the_magic_constant() {
    assert_eq!(target_number(3), 15);
    assert_eq!(target_number(4), 34);
    assert_eq!(target_number(5), 65);
}

#[test]
fn filled_row_summing_to_target_wins() {
    let mut board = Board::new(3, 3);
    let mut rules = SumLineRules::new(3);
    place(&mut rules, &mut board, 1, 1, 1);
    place(&mut rules, &mut board, 1, 2, 6);
    assert!(rules.would_win(&board, 1, 3, Cell::Card(8)));
    assert!(!rules.would_win(&board, 1, 3, Cell::Card(9)));
}

#[test]
fn incomplete_row_summing_to_target_does_not_win() {
    let mut board = Board::new(4, 4);
    let mut rules = SumLineRules::new(4);
    // 10 + 20 = 30; placing 4 reaches the target 34 but the row has an
    // empty cell left, so it must not win
    place(&mut rules, &mut board, 2, 1, 10);
    place(&mut rules, &mut board, 2, 2, 20);
    assert!(!rules.would_win(&board, 2, 3, Cell::Card(4)));
}

#[test]
fn column_and_diagonal_wins() {
    let mut board = Board::new(3, 3);
    let mut rules = SumLineRules::new(3);
    place(&mut rules, &mut board, 1, 2, 2);
    place(&mut rules, &mut board, 2, 2, 4);
    assert!(rules.would_win(&board, 3, 2, Cell::Card(9)));

    let mut board = Board::new(3, 3);
    let mut rules = SumLineRules::new(3);
    place(&mut rules, &mut board, 1, 1, 3);
    place(&mut rules, &mut board, 2, 2, 5);
    assert!(rules.would_win(&board, 3, 3, Cell::Card(7)));

    let mut board = Board::new(3, 3);
    let mut rules = SumLineRules::new(3);
    place(&mut rules, &mut board, 1, 3, 2);
    place(&mut rules, &mut board, 2, 2, 6);
    assert!(rules.would_win(&board, 3, 1, Cell::Card(7)));
}

#[test]
fn just_won_sees_the_applied_move() {
    let mut board = Board::new(3, 3);
    let mut rules = SumLineRules::new(3);
    place(&mut rules, &mut board, 3, 1, 4);
    place(&mut rules, &mut board, 3, 2, 5);
    let mv = Move {
        row: 3,
        col: 3,
        value: Cell::Card(6),
        player_index: 1,
    };
    board.put(3, 3, mv.value);
    rules.on_place(&board, &mv);
    assert!(rules.just_won(&board, &mv));
}

#[test]
fn retract_restores_the_caches() {
    let mut board = Board::new(3, 3);
    let mut rules = SumLineRules::new(3);
    place(&mut rules, &mut board, 1, 1, 1);
    place(&mut rules, &mut board, 1, 2, 6);
    place(&mut rules, &mut board, 1, 3, 9);
    // 1 + 6 + 9 = 16: no win; swap the 9 for an 8
    retract(&mut rules, &mut board, 1, 3, 9);
    assert!(rules.would_win(&board, 1, 3, Cell::Card(8)));
}

#[test]
fn non_card_values_never_win() {
    let board = Board::new(3, 3);
    let rules = SumLineRules::new(3);
    assert!(!rules.would_win(&board, 1, 1, Cell::Mark('x')));
    assert!(!rules.would_win(&board, 1, 1, Cell::Empty));
}
