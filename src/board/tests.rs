use super::*;

fn snapshot(board: &Board) -> Vec<i8> {
    let mut cells = Vec::with_capacity(board.size() * board.size());
    for row in 0..board.size() {
        for col in 0..board.size() {
            cells.push(board.cell(row, col));
        }
    }
    cells
}

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_player_sign_roundtrip() {
    assert_eq!(Player::Black.sign(), 1);
    assert_eq!(Player::White.sign(), -1);
    assert_eq!(Player::from_sign(1), Some(Player::Black));
    assert_eq!(Player::from_sign(-1), Some(Player::White));
    assert_eq!(Player::from_sign(0), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_default_board_size() {
    let board = Board::default();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new(15);
    assert!(board.place(Pos::new(7, 7), Player::Black));
    assert_eq!(board.get(Pos::new(7, 7)), Some(Player::Black));
    assert_eq!(board.last_move(), Some(Pos::new(7, 7)));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_occupied_fails() {
    let mut board = Board::new(15);
    assert!(board.place(Pos::new(7, 7), Player::Black));
    let before = snapshot(&board);

    assert!(!board.place(Pos::new(7, 7), Player::White));
    assert_eq!(snapshot(&board), before, "failed place must not mutate");
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_out_of_bounds_fails() {
    let mut board = Board::new(10);
    assert!(!board.place(Pos::new(10, 0), Player::Black));
    assert!(!board.place(Pos::new(0, 10), Player::Black));
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_place_undo_roundtrip() {
    let mut board = Board::new(15);
    board.place(Pos::new(7, 7), Player::Black);
    let before = snapshot(&board);

    let seq = [
        (Pos::new(7, 8), Player::White),
        (Pos::new(8, 8), Player::Black),
        (Pos::new(6, 6), Player::White),
    ];
    for (pos, player) in seq {
        assert!(board.place(pos, player));
    }
    for _ in 0..seq.len() {
        board.undo();
    }

    assert_eq!(snapshot(&board), before);
    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.last_move(), Some(Pos::new(7, 7)));
}

#[test]
fn test_undo_empty_board_is_noop() {
    let mut board = Board::new(15);
    board.undo();
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.last_move(), None);
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2);
    assert!(!board.is_full());
    board.place(Pos::new(0, 0), Player::Black);
    board.place(Pos::new(0, 1), Player::White);
    board.place(Pos::new(1, 0), Player::Black);
    assert!(!board.is_full());
    board.place(Pos::new(1, 1), Player::White);
    assert!(board.is_full());
}

#[test]
fn test_winner_horizontal() {
    let mut board = Board::new(10);
    for col in 0..5 {
        assert!(board.place(Pos::new(0, col), Player::Black));
    }
    assert_eq!(board.winner(), Some(Player::Black));

    let (player, line) = board.winner_line().unwrap();
    assert_eq!(player, Player::Black);
    let expected: Vec<Pos> = (0..5).map(|col| Pos::new(0, col)).collect();
    assert_eq!(line, expected, "winning run must be sorted end to end");
}

#[test]
fn test_winner_vertical() {
    let mut board = Board::new(10);
    for row in 2..7 {
        board.place(Pos::new(row, 4), Player::White);
    }
    assert_eq!(board.winner(), Some(Player::White));
}

#[test]
fn test_winner_diagonal() {
    let mut board = Board::new(10);
    for i in 0..5 {
        board.place(Pos::new(i, i), Player::Black);
    }
    assert_eq!(board.winner(), Some(Player::Black));
}

#[test]
fn test_winner_anti_diagonal() {
    let mut board = Board::new(10);
    for i in 0..5 {
        board.place(Pos::new(i, 8 - i), Player::White);
    }
    assert_eq!(board.winner(), Some(Player::White));
}

#[test]
fn test_winner_detected_from_middle_of_run() {
    // Fill the ends first so the completing stone lands in the middle
    let mut board = Board::new(10);
    for col in [0, 1, 3, 4] {
        board.place(Pos::new(5, col), Player::Black);
    }
    assert_eq!(board.winner(), None);
    board.place(Pos::new(5, 2), Player::Black);
    assert_eq!(board.winner(), Some(Player::Black));
}

#[test]
fn test_no_winner_with_four() {
    let mut board = Board::new(10);
    for col in 0..4 {
        board.place(Pos::new(0, col), Player::Black);
    }
    assert_eq!(board.winner(), None);
}

#[test]
fn test_no_winner_with_gap() {
    // Four in a row plus a detached fifth: the run is not contiguous
    let mut board = Board::new(10);
    for col in 0..4 {
        board.place(Pos::new(0, col), Player::Black);
    }
    board.place(Pos::new(0, 5), Player::Black);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_winner_anchored_at_last_move() {
    // The scan is anchored at the last stone; an older five is not
    // rediscovered once the opponent has played elsewhere. Searchers check
    // winner() after every placement, so this never goes unnoticed there.
    let mut board = Board::new(10);
    for col in 0..5 {
        board.place(Pos::new(0, col), Player::Black);
    }
    assert_eq!(board.winner(), Some(Player::Black));
    board.place(Pos::new(9, 9), Player::White);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_candidates_empty_board_center() {
    let board = Board::new(15);
    assert_eq!(board.candidate_moves(2), vec![Pos::new(7, 7)]);

    let board = Board::new(9);
    assert_eq!(board.candidate_moves(2), vec![Pos::new(4, 4)]);
}

#[test]
fn test_candidates_surround_single_stone() {
    let mut board = Board::new(15);
    board.place(Pos::new(7, 7), Player::Black);

    let candidates = board.candidate_moves(1);
    assert_eq!(candidates.len(), 8, "radius 1 around one stone is its ring");
    assert!(!candidates.contains(&Pos::new(7, 7)), "occupied cell excluded");
    assert!(candidates.contains(&Pos::new(6, 6)));
    assert!(candidates.contains(&Pos::new(8, 8)));
}

#[test]
fn test_candidates_clamped_at_edge() {
    let mut board = Board::new(15);
    board.place(Pos::new(0, 0), Player::Black);

    let candidates = board.candidate_moves(2);
    assert!(!candidates.is_empty());
    for pos in &candidates {
        assert!(board.in_bounds(i32::from(pos.row), i32::from(pos.col)));
        assert!(board.is_empty(*pos));
    }
}

#[test]
fn test_candidates_stay_near_stones() {
    let mut board = Board::new(15);
    board.place(Pos::new(7, 7), Player::Black);
    board.place(Pos::new(8, 8), Player::White);

    for pos in board.candidate_moves(2) {
        let near_either = (i32::from(pos.row) - 7).abs().max((i32::from(pos.col) - 7).abs()) <= 2
            || (i32::from(pos.row) - 8).abs().max((i32::from(pos.col) - 8).abs()) <= 2;
        assert!(near_either, "{pos:?} is outside the active region");
    }
}
