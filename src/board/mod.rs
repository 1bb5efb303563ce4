//! The shared board and placement legality.
//!
//! - `grid`: 20x20 cell ownership storage, placement, snapshots, and
//!   reconstruction from placed pieces
//! - `legality`: the adjacency and corner rules deciding whether a shape
//!   may be placed at an anchor
//!
//! Legality checking and mutation are kept apart so the move search can
//! probe many candidates against an unchanged board.

pub mod grid;
pub mod legality;

pub use grid::{Board, Cell, BOARD_HEIGHT, BOARD_WIDTH};
