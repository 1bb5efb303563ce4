//! Piece catalog and shape transforms.
//!
//! - `catalog`: the 21 canonical polyominoes every color receives
//! - `shape`: rotation, mirroring, and normalization of a piece into a
//!   concrete [`Shape`], plus a process-wide table of all oriented shapes

pub mod catalog;
pub mod shape;

pub use catalog::{Offset, PieceType, FRAME_SIZE, PIECE_COUNT};
pub use shape::{oriented, transform, Orientation, Rotation, Shape};
