//! Board module - manages the playfield grid
//!
//! The board is an 11x17 grid where each cell is either empty or holds the fill color
//! of a landed shape. Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..=10 (left to right), y ranges 0..=16 (top to bottom).
//!
//! The board is also where shape placement rules live: validity, resting detection,
//! merging and the completed-row sweep all read cell occupancy and nothing else.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of rows, usable as a capacity
pub const ROWS: usize = BOARD_HEIGHT as usize;

/// Row indices found complete in one sweep (top to bottom order)
pub type CompletedRows = ArrayVec<usize, ROWS>;

/// The game board - 11 columns x 17 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a shape tile may sit at (x, y).
    ///
    /// Horizontal bounds and the floor are enforced; cells above row 0 are open.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        if y < 0 {
            return true;
        }
        !self.is_occupied(x, y)
    }

    /// Check that every tile of `shape` (after rotation) is free
    pub fn is_valid_position(&self, shape: &Shape) -> bool {
        shape.cells().iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Offset the shape by (dx, dy) if the result is valid.
    ///
    /// On failure the shape is left exactly as it was.
    pub fn attempt_move(&self, shape: &mut Shape, dx: i8, dy: i8) -> bool {
        let moved = shape.translated(dx, dy);
        if self.is_valid_position(&moved) {
            *shape = moved;
            true
        } else {
            false
        }
    }

    /// Advance the shape's rotation one step if the result is valid (no wall kicks)
    pub fn attempt_rotate(&self, shape: &mut Shape) -> bool {
        let rotated = shape.rotated();
        if self.is_valid_position(&rotated) {
            *shape = rotated;
            true
        } else {
            false
        }
    }

    /// True if moving the shape down one row would be invalid
    pub fn is_at_resting_position(&self, shape: &Shape) -> bool {
        !self.is_valid_position(&shape.translated(0, 1))
    }

    /// Write the shape's color into every board cell it occupies.
    ///
    /// Tiles above the top edge have no cell and are dropped.
    pub fn merge_shape(&mut self, shape: &Shape) {
        for (x, y) in shape.cells() {
            self.set(x, y, Some(shape.color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// All rows that are completely filled, top to bottom
    pub fn completed_rows(&self) -> CompletedRows {
        (0..ROWS).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Empty the given rows, then shift everything above the lowest-indexed
    /// of them down by the number of rows emptied.
    ///
    /// Rows between non-contiguous cleared rows are not compacted: the shift is
    /// anchored on the first cleared row only. Returns the number of rows cleared.
    pub fn clear_and_collapse(&mut self, rows: &[usize]) -> usize {
        let width = BOARD_WIDTH as usize;

        let mut anchor: Option<usize> = None;
        let mut count = 0usize;
        for y in 0..ROWS {
            if !rows.contains(&y) {
                continue;
            }
            anchor.get_or_insert(y);
            count += 1;
            self.clear_row(y);
        }

        let Some(anchor) = anchor else {
            return 0;
        };

        for y in (0..anchor).rev() {
            let src = y * width;
            let dst = (y + count) * width;
            if dst < BOARD_SIZE {
                self.cells.copy_within(src..src + width, dst);
            }
            self.clear_row(y);
        }

        count
    }

    fn clear_row(&mut self, y: usize) {
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        for cell in &mut self.cells[start..end] {
            *cell = None;
        }
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write color codes into a row-major grid (0 = empty)
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; ROWS]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].map_or(0, |c| c.code());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a board from rows of text, top to bottom.
    ///
    /// `.` is empty; any other character is filled with the given color.
    /// Missing rows at the top are empty; rows are right-padded with empty cells.
    pub fn from_rows(rows: &[&str], color: crate::types::FillColor) -> Self {
        let mut board = Self::new();
        let offset = ROWS.saturating_sub(rows.len());
        for (i, line) in rows.iter().take(ROWS).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in line.chars().take(BOARD_WIDTH as usize).enumerate() {
                if ch != '.' {
                    board.set(x as i8, y, Some(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
