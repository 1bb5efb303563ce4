//! Board storage - the shared 20x20 grid of cell ownership.
//!
//! Cells are stored flat in row-major order (`y * WIDTH + x`).
//! Coordinates: x grows left to right, y grows top to bottom, both 0..20.

use serde::{Deserialize, Serialize};

use crate::core::{Color, PlacedPiece};
use crate::pieces::Shape;

/// Board width in cells.
pub const BOARD_WIDTH: i32 = 20;

/// Board height in cells.
pub const BOARD_HEIGHT: i32 = 20;

const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// A single cell: empty, or owned by one color.
pub type Cell = Option<Color>;

/// The shared grid. Once a cell is owned it never changes again.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![None; BOARD_SIZE],
        }
    }

    /// Rebuild a board from placed pieces.
    ///
    /// Pieces are drawn in the order given. Used to reconstruct or audit the
    /// grid from each seat's placement list.
    pub fn from_placements<'a>(
        placements: impl IntoIterator<Item = (Color, &'a PlacedPiece)>,
    ) -> Self {
        let mut board = Self::new();
        for (color, placed) in placements {
            board.place(placed.shape(), placed.x, placed.y, color);
        }
        board
    }

    /// Flat index of (x, y), or `None` outside the board.
    ///
    /// Widened to `i64` so that anchor + offset can never overflow.
    #[inline]
    pub(crate) fn index(x: i64, y: i64) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i64 || y < 0 || y >= BOARD_HEIGHT as i64 {
            return None;
        }
        Some(y as usize * BOARD_WIDTH as usize + x as usize)
    }

    /// Board width.
    #[must_use]
    pub fn width(&self) -> i32 {
        BOARD_WIDTH
    }

    /// Board height.
    #[must_use]
    pub fn height(&self) -> i32 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.cell_at(x as i64, y as i64)
    }

    #[inline]
    pub(crate) fn cell_at(&self, x: i64, y: i64) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// True if (x, y) is on the board and owned by `color`.
    #[inline]
    pub(crate) fn owned_by(&self, x: i64, y: i64, color: Color) -> bool {
        self.cell_at(x, y) == Some(Some(color))
    }

    /// Mark every cell of `shape` anchored at (x, y) as owned by `color`.
    ///
    /// Legality is not checked here; callers run [`Board::is_legal`] first.
    /// Cells falling outside the board are skipped.
    pub fn place(&mut self, shape: &Shape, x: i32, y: i32, color: Color) {
        for &(dx, dy) in shape.cells() {
            if let Some(idx) = Self::index(x as i64 + dx as i64, y as i64 + dy as i64) {
                self.cells[idx] = Some(color);
            }
        }
    }

    /// Row-major copy of the grid, `rows[y][x]`.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(BOARD_WIDTH as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Number of cells owned by `color`.
    #[must_use]
    pub fn count_owned(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// True if no cell is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}
