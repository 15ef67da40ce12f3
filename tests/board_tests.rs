//! Board tests - grid storage and line compaction.

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

fn fill_row(board: &mut Board, y: usize) {
    for x in 0..BOARD_COLS {
        board.set(x as i8, y as i8, Some(PieceKind::I));
    }
}

fn occupied_count(board: &Board) -> usize {
    board.cells().iter().filter(|cell| cell.is_some()).count()
}

#[test]
fn test_new_board_dimensions() {
    let board = Board::new();
    assert_eq!(board.cells().len(), BOARD_COLS * BOARD_ROWS);
    assert_eq!(occupied_count(&board), 0);
}

#[test]
fn test_set_get_roundtrip() {
    let mut board = Board::new();
    board.set(9, 0, Some(PieceKind::Z));
    board.set(0, 19, Some(PieceKind::J));

    assert_eq!(board.get(9, 0), Some(PieceKind::Z));
    assert_eq!(board.get(0, 19), Some(PieceKind::J));
    assert_eq!(board.get(5, 5), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_access_above_board_is_fatal() {
    let board = Board::new();
    let _ = board.get(0, -1);
}

#[test]
fn test_row_with_single_gap_is_not_full() {
    let mut board = Board::new();
    fill_row(&mut board, 19);
    board.set(6, 19, None);

    assert!(!board.is_row_full(19));
    assert!(board.clear_full_rows().is_empty());

    // Plugging the gap makes the row clearable.
    board.set(6, 19, Some(PieceKind::T));
    assert!(board.is_row_full(19));
    assert_eq!(board.clear_full_rows().len(), 1);
}

#[test]
fn test_simultaneous_clears_preserve_cell_count() {
    for k in 0..=4usize {
        let mut board = Board::new();
        for i in 0..k {
            fill_row(&mut board, 19 - i);
        }
        board.set(4, 10, Some(PieceKind::S));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), k, "expected {k} rows cleared");
        assert_eq!(board.cells().len(), BOARD_COLS * BOARD_ROWS);
        assert_eq!(occupied_count(&board), 1);
        // The survivor shifted down by exactly k rows.
        assert_eq!(board.get(4, 10 + k as i8), Some(PieceKind::S));
    }
}

#[test]
fn test_interleaved_full_rows_clear_in_one_call() {
    let mut board = Board::new();
    // Full rows at 19 and 17, partial rows between and above them.
    fill_row(&mut board, 19);
    fill_row(&mut board, 17);
    board.set(0, 18, Some(PieceKind::L));
    board.set(9, 16, Some(PieceKind::O));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 2);

    // Partial rows packed to the floor, original order kept.
    assert_eq!(board.get(0, 19), Some(PieceKind::L));
    assert_eq!(board.get(9, 18), Some(PieceKind::O));
    assert_eq!(occupied_count(&board), 2);
}

#[test]
fn test_top_rows_empty_after_max_clear() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }

    assert_eq!(board.clear_full_rows().len(), 4);
    assert_eq!(occupied_count(&board), 0);
    for y in 0..BOARD_ROWS {
        assert!(!board.is_row_full(y));
    }
}
