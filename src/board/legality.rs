//! Placement legality.
//!
//! A placement is rejected as soon as any cell:
//! - falls outside the board,
//! - lands on an owned cell (any color), or
//! - touches a cell of the same color along an edge.
//!
//! If no cell is rejected, the placement is legal only when at least one
//! cell touches the same color corner to corner, or covers one of the four
//! board corners. The corner rule is checked on every placement, not only
//! a color's first one, so a later piece that reaches an unclaimed corner is
//! accepted even without a diagonal neighbor.

use crate::core::Color;
use crate::pieces::Shape;

use super::grid::{Board, BOARD_HEIGHT, BOARD_WIDTH};

const EDGE_NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_NEIGHBORS: [(i64, i64); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];

/// True if (x, y) is one of the four board corners.
#[inline]
fn is_board_corner(x: i64, y: i64) -> bool {
    let right = BOARD_WIDTH as i64 - 1;
    let bottom = BOARD_HEIGHT as i64 - 1;
    (x == 0 || x == right) && (y == 0 || y == bottom)
}

impl Board {
    /// Check whether `shape` anchored at (anchor_x, anchor_y) may be placed
    /// by `color`.
    ///
    /// Pure and total: any anchor, however far off the board, yields a
    /// definite answer.
    ///
    /// ```
    /// use polyomino_arena::board::Board;
    /// use polyomino_arena::core::Color;
    /// use polyomino_arena::pieces::{PieceType, Shape};
    ///
    /// let board = Board::new();
    /// let single = Shape::canonical(PieceType::I1);
    ///
    /// assert!(board.is_legal(&single, 0, 0, Color::Red)); // corner
    /// assert!(!board.is_legal(&single, 5, 5, Color::Red)); // floating
    /// ```
    #[must_use]
    pub fn is_legal(&self, shape: &Shape, anchor_x: i32, anchor_y: i32, color: Color) -> bool {
        let mut anchored = false;

        for &(dx, dy) in shape.cells() {
            let x = anchor_x as i64 + dx as i64;
            let y = anchor_y as i64 + dy as i64;

            match self.cell_at(x, y) {
                None | Some(Some(_)) => return false,
                Some(None) => {}
            }

            if EDGE_NEIGHBORS
                .iter()
                .any(|&(nx, ny)| self.owned_by(x + nx, y + ny, color))
            {
                return false;
            }

            if !anchored {
                anchored = is_board_corner(x, y)
                    || DIAGONAL_NEIGHBORS
                        .iter()
                        .any(|&(nx, ny)| self.owned_by(x + nx, y + ny, color));
            }
        }

        anchored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{transform, PieceType, Rotation};

    fn single() -> Shape {
        Shape::canonical(PieceType::I1)
    }

    fn board_with(cells: &[(i32, i32, Color)]) -> Board {
        let mut board = Board::new();
        for &(x, y, color) in cells {
            board.place(&single(), x, y, color);
        }
        board
    }

    #[test]
    fn test_corner_rule_on_empty_board() {
        let board = Board::new();
        for (x, y) in [(0, 0), (0, 19), (19, 0), (19, 19)] {
            assert!(board.is_legal(&single(), x, y, Color::Yellow), "({x}, {y})");
        }
        assert!(!board.is_legal(&single(), 1, 0, Color::Yellow));
        assert!(!board.is_legal(&single(), 10, 10, Color::Yellow));
    }

    #[test]
    fn test_large_piece_reaching_corner() {
        let board = Board::new();
        let line = transform(PieceType::I5, Rotation::R90, false); // horizontal
        assert!(board.is_legal(&line, 15, 19, Color::Blue));
        assert!(!board.is_legal(&line, 14, 19, Color::Blue));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = Board::new();
        let square = Shape::canonical(PieceType::O4);
        assert!(!board.is_legal(&square, 19, 0, Color::Red));
        assert!(!board.is_legal(&square, 0, 19, Color::Red));
        assert!(!board.is_legal(&square, -1, 0, Color::Red));
        assert!(!board.is_legal(&square, i32::MAX, i32::MAX, Color::Red));
        assert!(!board.is_legal(&square, i32::MIN, 0, Color::Red));
    }

    #[test]
    fn test_overlap_rejected_any_color() {
        let board = board_with(&[(0, 0, Color::Green)]);
        assert!(!board.is_legal(&single(), 0, 0, Color::Green));
        assert!(!board.is_legal(&single(), 0, 0, Color::Red));
    }

    #[test]
    fn test_diagonal_same_color_accepted() {
        let board = board_with(&[(0, 0, Color::Red)]);
        assert!(board.is_legal(&single(), 1, 1, Color::Red));
        assert!(!board.is_legal(&single(), 1, 1, Color::Blue));
    }

    #[test]
    fn test_edge_same_color_rejected() {
        let board = board_with(&[(0, 0, Color::Red)]);
        assert!(!board.is_legal(&single(), 1, 0, Color::Red));
        assert!(!board.is_legal(&single(), 0, 1, Color::Red));
    }

    #[test]
    fn test_edge_rejected_even_with_diagonal_elsewhere() {
        // (2,1) touches red (3,0) corner to corner, (3,1) sits right under it.
        let board = board_with(&[(3, 0, Color::Red)]);
        let domino = Shape::canonical(PieceType::I2);
        assert!(!board.is_legal(&domino, 2, 1, Color::Red));
        assert!(board.is_legal(&domino, 4, 1, Color::Red));
        assert!(board.is_legal(&single(), 2, 1, Color::Red));
    }

    #[test]
    fn test_other_color_does_not_anchor() {
        let board = board_with(&[(0, 0, Color::Red), (2, 0, Color::Blue)]);
        let domino = Shape::canonical(PieceType::I2);
        assert!(board.is_legal(&domino, 1, 1, Color::Red));
        assert!(!board.is_legal(&domino, 3, 1, Color::Red));
    }

    #[test]
    fn test_edge_other_color_allowed() {
        let board = board_with(&[(0, 0, Color::Red), (2, 1, Color::Blue)]);
        assert!(board.is_legal(&single(), 1, 1, Color::Red));
    }

    #[test]
    fn test_unclaimed_corner_accepted_late() {
        let board = board_with(&[(0, 0, Color::Red)]);
        assert!(board.is_legal(&single(), 19, 19, Color::Red));
    }
}
