//! Board module - the grid of locked cells.
//!
//! A 10x20 grid stored as a flat row-major array, so every row structurally
//! has exactly `BOARD_COLS` cells. Coordinates are (x, y) with x running
//! 0..9 left to right and y running 0..19 top to bottom. Coordinates outside
//! the grid are a caller bug: valid engine operation never produces them, so
//! the accessors assert instead of returning an error.

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// Upper bound on rows cleared by a single settle (a piece spans 4 rows).
pub const MAX_CLEARED_ROWS: usize = 4;

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> usize {
        assert!(
            x >= 0 && (x as usize) < BOARD_COLS && y >= 0 && (y as usize) < BOARD_ROWS,
            "board access out of range: ({x}, {y})"
        );
        y as usize * BOARD_COLS + x as usize
    }

    /// Cell at (x, y). Panics on out-of-range coordinates.
    pub fn get(&self, x: i8, y: i8) -> Cell {
        self.cells[Self::index(x, y)]
    }

    /// Write the cell at (x, y). Panics on out-of-range coordinates; in
    /// particular writing above the visible area (y < 0) is never legal.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        self.cells[Self::index(x, y)] = cell;
    }

    /// Whether (x, y) holds a locked cell.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some()
    }

    /// Whether every cell of row `y` is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        assert!(y < BOARD_ROWS, "row index out of range: {y}");
        let start = y * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row and let the rows above shift down, with empty
    /// rows entering at the top. Handles any number of simultaneous full
    /// rows in one call.
    ///
    /// Returns the cleared row indices in bottom-to-top scan order; the
    /// count is `len()`.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        let mut write_y = BOARD_ROWS;

        // Two-pointer compaction: walk rows bottom-to-top, keeping non-full
        // rows packed against the floor.
        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * BOARD_COLS;
                    let dst = write_y * BOARD_COLS;
                    self.cells.copy_within(src..src + BOARD_COLS, dst);
                }
            }
        }

        // Rows vacated at the top become empty.
        for cell in &mut self.cells[..write_y * BOARD_COLS] {
            *cell = None;
        }

        cleared
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
