use gridgames::{Board, Cell};

#[test]
fn new_board_is_fully_open() {
    let board = Board::new(3, 3);
    assert_eq!(board.remaining_open(), 9);
    for r in 1..=3 {
        for c in 1..=3 {
            assert!(board.is_open(r, c));
            assert_eq!(board.get(r, c), Cell::Empty);
        }
    }
}

#[test]
fn out_of_range_is_not_open_and_does_not_panic() {
    let board = Board::new(3, 3);
    assert!(!board.is_open(0, 1));
    assert!(!board.is_open(1, 0));
    assert!(!board.is_open(4, 1));
    assert!(!board.is_open(1, 4));
    assert_eq!(board.get(0, 0), Cell::Empty);
    assert_eq!(board.get(100, 100), Cell::Empty);
}

#[test]
fn put_and_get_round_trip() {
    let mut board = Board::new(4, 4);
    board.put(2, 3, Cell::Card(7));
    assert_eq!(board.get(2, 3), Cell::Card(7));
    assert!(!board.is_open(2, 3));
    assert_eq!(board.remaining_open(), 15);
}

#[test]
fn putting_empty_reopens_the_cell() {
    let mut board = Board::new(3, 3);
    board.put(1, 1, Cell::Mark('x'));
    assert_eq!(board.remaining_open(), 8);
    board.put(1, 1, Cell::Empty);
    assert_eq!(board.remaining_open(), 9);
    assert!(board.is_open(1, 1));
}

#[test]
fn overwriting_an_occupied_cell_keeps_the_count() {
    let mut board = Board::new(3, 3);
    board.put(1, 1, Cell::Card(1));
    board.put(1, 1, Cell::Card(2));
    assert_eq!(board.remaining_open(), 8);
    assert_eq!(board.get(1, 1), Cell::Card(2));
}

#[test]
fn open_cells_iterates_row_major() {
    let mut board = Board::new(2, 2);
    board.put(1, 2, Cell::Mark('o'));
    let open: Vec<(usize, usize)> = board.open_cells().collect();
    assert_eq!(open, vec![(1, 1), (2, 1), (2, 2)]);
}

#[test]
fn rectangular_board_dimensions() {
    let board = Board::new(9, 3);
    assert_eq!(board.rows(), 9);
    assert_eq!(board.cols(), 3);
    assert!(board.is_open(9, 3));
    assert!(!board.is_open(3, 9));
}
