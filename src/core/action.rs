//! Turn actions and the records they leave behind.
//!
//! A seat either places one piece or passes:
//! - `Place(Move)` = piece type + orientation + board anchor
//! - `Pass` = no payload; the seat takes no further part in the game
//!
//! Every applied action is appended to the game history as an
//! [`ActionRecord`], and every placement is kept on the seat as a
//! [`PlacedPiece`] so the board can be rebuilt or replayed.

use serde::{Deserialize, Serialize};

use super::player::SeatId;
use crate::pieces::{oriented, Orientation, PieceType, Rotation, Shape};

/// A concrete placement: which piece, how it is turned, and where its
/// local (0, 0) lands on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: PieceType,
    pub orientation: Orientation,
    pub x: i32,
    pub y: i32,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(piece: PieceType, orientation: Orientation, x: i32, y: i32) -> Self {
        Self {
            piece,
            orientation,
            x,
            y,
        }
    }

    /// Create a move from a rotation and mirror flag.
    ///
    /// ```
    /// use polyomino_arena::core::Move;
    /// use polyomino_arena::pieces::{PieceType, Rotation};
    ///
    /// let mv = Move::oriented(PieceType::I2, Rotation::R90, false, 0, 0);
    /// assert_eq!(mv.shape().cells(), &[(0, 0), (0, 1)]);
    /// ```
    #[must_use]
    pub const fn oriented(
        piece: PieceType,
        rotation: Rotation,
        mirrored: bool,
        x: i32,
        y: i32,
    ) -> Self {
        Self::new(piece, Orientation::new(rotation, mirrored), x, y)
    }

    /// The normalized shape this move places.
    #[must_use]
    pub fn shape(&self) -> &'static Shape {
        oriented(self.piece, self.orientation)
    }
}

/// What a seat does on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    Place(Move),
    Pass,
}

impl TurnAction {
    /// True for `Pass`.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, TurnAction::Pass)
    }

    /// The move, if this action places a piece.
    #[must_use]
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            TurnAction::Place(mv) => Some(mv),
            TurnAction::Pass => None,
        }
    }
}

impl From<Move> for TurnAction {
    fn from(mv: Move) -> Self {
        TurnAction::Place(mv)
    }
}

/// A piece that has been placed. Immutable for the rest of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub piece: PieceType,
    pub orientation: Orientation,
    pub x: i32,
    pub y: i32,
}

impl From<Move> for PlacedPiece {
    fn from(mv: Move) -> Self {
        Self {
            piece: mv.piece,
            orientation: mv.orientation,
            x: mv.x,
            y: mv.y,
        }
    }
}

impl PlacedPiece {
    /// The normalized shape that was placed.
    #[must_use]
    pub fn shape(&self) -> &'static Shape {
        oriented(self.piece, self.orientation)
    }
}

/// A recorded action with the turn counter it was applied at.
///
/// Used for:
/// - Replay/auditing of a finished game
/// - Debugging automated seat decisions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub seat: SeatId,

    /// The action taken.
    pub action: TurnAction,

    /// Turn counter when the action was applied.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: SeatId, action: TurnAction, turn: u32) -> Self {
        Self { seat, action, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_shape_uses_orientation() {
        let mv = Move::oriented(PieceType::I3, Rotation::R90, false, 4, 5);
        assert_eq!(mv.shape().cells(), &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!((mv.x, mv.y), (4, 5));
    }

    #[test]
    fn test_turn_action_accessors() {
        let mv = Move::oriented(PieceType::I1, Rotation::R0, false, 0, 0);
        let place = TurnAction::from(mv);

        assert!(!place.is_pass());
        assert_eq!(place.as_move(), Some(&mv));
        assert!(TurnAction::Pass.is_pass());
        assert_eq!(TurnAction::Pass.as_move(), None);
    }

    #[test]
    fn test_placed_piece_from_move() {
        let mv = Move::oriented(PieceType::L4, Rotation::R180, true, 7, 2);
        let placed = PlacedPiece::from(mv);

        assert_eq!(placed.piece, PieceType::L4);
        assert_eq!(placed.orientation, Orientation::new(Rotation::R180, true));
        assert_eq!((placed.x, placed.y), (7, 2));
        assert_eq!(placed.shape(), mv.shape());
    }

    #[test]
    fn test_action_record_serialization() {
        let seat = SeatId::new(3).unwrap();
        let mv = Move::oriented(PieceType::T5, Rotation::R270, false, 10, 11);
        let record = ActionRecord::new(seat, TurnAction::Place(mv), 9);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
