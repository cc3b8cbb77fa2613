use gunnery::{AttackHistory, Board, Coord, Orientation, BOARD_SIZE};

#[test]
fn test_record_is_idempotent() {
    let mut history = AttackHistory::new();
    assert!(!history.contains(Coord::new(2, 3)));

    history.record(Coord::new(2, 3));
    history.record(Coord::new(2, 3));
    assert!(history.contains(Coord::new(2, 3)));
    assert_eq!(history.count(), 1);
}

#[test]
fn test_off_board_records_are_ignored() {
    let mut history = AttackHistory::new();
    history.record(Coord::new(BOARD_SIZE, 0));
    assert_eq!(history.count(), 0);
}

#[test]
fn test_absorb_board_record() {
    let mut board = Board::new();
    board
        .place(4, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board.receive_attack(Coord::new(0, 0)).unwrap();
    board.receive_attack(Coord::new(9, 9)).unwrap();

    let mut history = AttackHistory::new();
    history.record(Coord::new(5, 5));
    history.absorb(board.attacked_mask());

    // the merged ledger knows both its own and the board's attacks
    assert!(history.contains(Coord::new(5, 5)));
    assert!(history.contains(Coord::new(0, 0)));
    assert!(history.contains(Coord::new(9, 9)));
    assert_eq!(history.count(), 3);
}

#[test]
fn test_exhaustion_and_scan() {
    let mut history = AttackHistory::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if r == 7 && c == 2 {
                continue;
            }
            history.record(Coord::new(r, c));
        }
    }
    assert!(!history.is_exhausted());
    assert_eq!(history.first_untried(), Some(Coord::new(7, 2)));

    history.record(Coord::new(7, 2));
    assert!(history.is_exhausted());
    assert_eq!(history.first_untried(), None);
}

#[test]
fn test_clear() {
    let mut history = AttackHistory::new();
    history.record(Coord::new(1, 1));
    history.clear();
    assert_eq!(history.count(), 0);
    assert!(!history.contains(Coord::new(1, 1)));
}
