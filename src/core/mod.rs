//! Core engine types: seats, colors, actions, configuration, state, errors.
//!
//! Everything else in the crate builds on these. The game state is mutated
//! only through its own operations; turn sequencing and end-of-game logic
//! live in `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod state;

pub use action::{ActionRecord, Move, PlacedPiece, TurnAction};
pub use config::{DriverConfig, GameConfig, SeatIdentity};
pub use error::EngineError;
pub use player::{Color, SeatId, SeatMap, SEAT_COUNT};
pub use state::{GameState, PlayerSlot};
