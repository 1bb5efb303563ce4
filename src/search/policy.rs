//! Automated seat policies.
//!
//! The turn driver asks a [`MovePolicy`] what an automated seat does.
//! [`GreedyFirstFit`] is the policy every automated seat uses.

use crate::board::Board;
use crate::core::{Color, TurnAction};
use crate::pieces::PieceType;

use super::greedy::choose_move;

/// Decides the action of an automated seat.
pub trait MovePolicy: Send + Sync {
    /// Choose a placement for `color` from `pieces`, or pass.
    ///
    /// Implementations must only return placements that pass
    /// [`Board::is_legal`].
    fn choose(&self, board: &Board, pieces: &[PieceType], color: Color) -> TurnAction;
}

/// Largest piece first, first legal fit in scan order.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyFirstFit;

impl MovePolicy for GreedyFirstFit {
    fn choose(&self, board: &Board, pieces: &[PieceType], color: Color) -> TurnAction {
        choose_move(board, pieces, color)
    }
}
