//! # polyomino-arena
//!
//! Rule engine for a four-seat polyomino territory game on a 20x20 board.
//!
//! Each of four colors owns the same 21 pieces. A piece may be placed only
//! where it overlaps nothing, touches no cell of its own color edge-to-edge,
//! and either touches its own color corner-to-corner or covers a board
//! corner. Seats that cannot or will not move pass for the rest of the game;
//! when all four have passed, the highest cell count wins.
//!
//! ## Design Principles
//!
//! 1. **One mutation path**: the board and seats change only through
//!    `GameState::apply_move` / `apply_pass` / `advance_turn`. A rejected
//!    action changes nothing.
//!
//! 2. **Fixed tables**: the catalog is a constant and every oriented shape
//!    is computed once per process.
//!
//! 3. **Deterministic automation**: automated seats use a greedy first-fit
//!    search with a fixed scan order, so the same position always yields
//!    the same move.
//!
//! ## Modules
//!
//! - `core`: seats, colors, actions, configuration, state, errors
//! - `pieces`: the piece catalog and shape transforms
//! - `board`: the grid and placement legality
//! - `search`: placement scanning and automated move choice
//! - `rules`: the turn driver and end-of-game outcome
//! - `events`: what the driver reports as it runs
//! - `table`: stored games with one lock per game

pub mod board;
pub mod core;
pub mod events;
pub mod pieces;
pub mod rules;
pub mod search;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, Color, DriverConfig, EngineError, GameConfig, GameState, Move, PlacedPiece,
    PlayerSlot, SeatId, SeatIdentity, SeatMap, TurnAction, SEAT_COUNT,
};

pub use crate::pieces::{oriented, transform, Orientation, PieceType, Rotation, Shape};

pub use crate::board::{Board, Cell, BOARD_HEIGHT, BOARD_WIDTH};

pub use crate::search::{
    any_legal_placement, choose_move, legal_anchors, GreedyFirstFit, MovePolicy, SearchStats,
};

pub use crate::rules::{GameResult, NoPause, Pacer, SleepPacer, TurnDriver, TurnReport};

pub use crate::events::{EventSink, GameEvent, NullSink, VecSink};

pub use crate::table::{GameId, GameStore, GameTable, MemoryStore};
