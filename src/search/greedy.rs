//! Greedy first-fit move selection for automated seats.
//!
//! 1. Stable-sort the remaining pieces by descending cell count; equal
//!    sizes keep their inventory order.
//! 2. For each piece, scan anchors row-major and at each anchor try
//!    rotations 0..3, plain before mirrored.
//! 3. The first legal combination is played. If nothing fits, pass.
//!
//! The policy is deliberately simple and must keep this exact iteration
//! order: a different order picks a different (equally legal) move.

use std::time::Instant;

use crate::board::Board;
use crate::core::{Color, Move, TurnAction};
use crate::pieces::{oriented, Orientation, PieceType};

use super::scanner::anchors;
use super::stats::SearchStats;

/// Pick the move an automated seat plays.
///
/// ```
/// use polyomino_arena::board::Board;
/// use polyomino_arena::core::{Color, TurnAction};
/// use polyomino_arena::pieces::PieceType;
/// use polyomino_arena::search::choose_move;
///
/// let action = choose_move(&Board::new(), &[PieceType::I1], Color::Red);
/// let TurnAction::Place(mv) = action else { panic!("expected a move") };
/// assert_eq!((mv.x, mv.y), (0, 0));
/// ```
#[must_use]
pub fn choose_move(board: &Board, pieces: &[PieceType], color: Color) -> TurnAction {
    choose_move_with_stats(board, pieces, color, &mut SearchStats::new())
}

/// [`choose_move`], accumulating probe counts into `stats`.
pub fn choose_move_with_stats(
    board: &Board,
    pieces: &[PieceType],
    color: Color,
    stats: &mut SearchStats,
) -> TurnAction {
    let start = Instant::now();
    let action = scan(board, pieces, color, stats);
    stats.time_us += start.elapsed().as_micros() as u64;
    action
}

fn scan(board: &Board, pieces: &[PieceType], color: Color, stats: &mut SearchStats) -> TurnAction {
    let mut ordered = pieces.to_vec();
    // sort_by is stable
    ordered.sort_by(|a, b| b.size().cmp(&a.size()));

    for piece in ordered {
        stats.pieces_examined += 1;
        for (x, y) in anchors() {
            for orientation in Orientation::ALL {
                stats.probes += 1;
                if board.is_legal(oriented(piece, orientation), x, y, color) {
                    return TurnAction::Place(Move::new(piece, orientation, x, y));
                }
            }
        }
    }

    TurnAction::Pass
}
