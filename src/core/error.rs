//! Engine error type.
//!
//! Every mutating operation reports failures synchronously as an
//! [`EngineError`]. Nothing is retried internally and a rejected action
//! leaves the game untouched.

use thiserror::Error;

/// Errors surfaced by the rule engine and its collaborator boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Seat number outside 1..=4, not the seat whose turn it is, or a seat
    /// that has already passed.
    #[error("invalid seat {0}")]
    InvalidSeat(u8),

    /// Piece index outside the catalog, or not in the seat's remaining
    /// inventory.
    #[error("unknown piece type {0}")]
    UnknownPieceType(u8),

    /// The shape/anchor/orientation combination fails the legality check.
    #[error("illegal placement of piece {piece} at ({x}, {y})")]
    IllegalPlacement {
        /// Catalog index of the piece.
        piece: u8,
        /// Anchor column.
        x: i32,
        /// Anchor row.
        y: i32,
    },

    /// The store holds no game under this id.
    #[error("game {0} not found")]
    GameNotFound(u64),

    /// The game exists but has no such seat.
    #[error("seat {seat} not found in game {game}")]
    SeatNotFound {
        /// Game id.
        game: u64,
        /// Raw seat number that was requested.
        seat: u8,
    },

    /// A stored snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// An automated seat produced an action the engine rejected.
    #[error("internal consistency failure: {0}")]
    Internal(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}
