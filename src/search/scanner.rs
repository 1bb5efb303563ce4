//! Placement scanning.
//!
//! Anchors are always visited row-major: y ascending, then x ascending
//! within the row, from (0, 0) to (19, 19).

use crate::board::{Board, BOARD_HEIGHT, BOARD_WIDTH};
use crate::core::Color;
use crate::pieces::{oriented, Orientation, PieceType};

/// Every board anchor in row-major order.
pub fn anchors() -> impl Iterator<Item = (i32, i32)> {
    (0..BOARD_HEIGHT).flat_map(|y| (0..BOARD_WIDTH).map(move |x| (x, y)))
}

/// Check whether `color` can place any of `pieces` anywhere.
///
/// Tries each piece in every orientation at every anchor and stops at the
/// first legal placement. The order of `pieces` only affects how quickly
/// the answer is found.
#[must_use]
pub fn any_legal_placement(board: &Board, pieces: &[PieceType], color: Color) -> bool {
    pieces.iter().any(|&piece| {
        Orientation::ALL.iter().any(|&orientation| {
            let shape = oriented(piece, orientation);
            anchors().any(|(x, y)| board.is_legal(shape, x, y, color))
        })
    })
}

/// Every legal anchor for one oriented piece, row-major.
///
/// This is the hint list offered to a human choosing where to drop a piece.
#[must_use]
pub fn legal_anchors(
    board: &Board,
    piece: PieceType,
    orientation: Orientation,
    color: Color,
) -> Vec<(i32, i32)> {
    let shape = oriented(piece, orientation);
    anchors()
        .filter(|&(x, y)| board.is_legal(shape, x, y, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Rotation, Shape};

    #[test]
    fn test_anchor_order() {
        let all: Vec<_> = anchors().collect();
        assert_eq!(all.len(), 400);
        assert_eq!(all[0], (0, 0));
        assert_eq!(all[1], (1, 0));
        assert_eq!(all[20], (0, 1));
        assert_eq!(all[399], (19, 19));
    }

    #[test]
    fn test_any_legal_on_empty_board() {
        let board = Board::new();
        assert!(any_legal_placement(&board, &PieceType::ALL, Color::Red));
        assert!(any_legal_placement(&board, &[PieceType::X5], Color::Red));
        assert!(!any_legal_placement(&board, &[], Color::Red));
    }

    #[test]
    fn test_any_legal_blocked() {
        // Fill every corner with blue; red has no corner and no diagonal.
        let mut board = Board::new();
        let single = Shape::canonical(PieceType::I1);
        for (x, y) in [(0, 0), (0, 19), (19, 0), (19, 19)] {
            board.place(&single, x, y, Color::Blue);
        }
        assert!(!any_legal_placement(&board, &PieceType::ALL, Color::Red));
        assert!(any_legal_placement(&board, &PieceType::ALL, Color::Blue));
    }

    #[test]
    fn test_legal_anchors_single_on_empty_board() {
        let board = Board::new();
        let found = legal_anchors(&board, PieceType::I1, Orientation::IDENTITY, Color::Green);
        assert_eq!(found, vec![(0, 0), (19, 0), (0, 19), (19, 19)]);
    }

    #[test]
    fn test_legal_anchors_are_all_legal() {
        let mut board = Board::new();
        let square = Shape::canonical(PieceType::O4);
        board.place(&square, 0, 0, Color::Red);

        let orientation = Orientation::new(Rotation::R90, true);
        let found = legal_anchors(&board, PieceType::W5, orientation, Color::Red);
        assert!(!found.is_empty());
        let shape = oriented(PieceType::W5, orientation);
        for (x, y) in found {
            assert!(board.is_legal(shape, x, y, Color::Red));
        }
    }
}
