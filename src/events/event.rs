//! Game event types.
//!
//! Events report what the turn driver did, one per step: every seat
//! advance, then the action an automated seat took if any. Human actions
//! submitted through the driver are reported the same way.

use serde::{Deserialize, Serialize};

use crate::core::{Move, SeatId};

/// Something that happened during a driver run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn moved to `seat`; `turn` is the new counter value.
    SeatAdvanced { seat: SeatId, turn: u32 },

    /// A seat placed a piece.
    Placed { seat: SeatId, mv: Move },

    /// A seat passed.
    Passed { seat: SeatId },
}

impl GameEvent {
    /// The seat this event concerns.
    #[must_use]
    pub fn seat(&self) -> SeatId {
        match self {
            GameEvent::SeatAdvanced { seat, .. }
            | GameEvent::Placed { seat, .. }
            | GameEvent::Passed { seat } => *seat,
        }
    }

    /// Does this event change the board or a seat?
    #[must_use]
    pub fn is_action(&self) -> bool {
        !matches!(self, GameEvent::SeatAdvanced { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::SeatAdvanced { seat, turn } => write!(f, "turn {turn}: {seat} to act"),
            GameEvent::Placed { seat, mv } => {
                write!(f, "{seat} placed {} at ({}, {})", mv.piece, mv.x, mv.y)
            }
            GameEvent::Passed { seat } => write!(f, "{seat} passed"),
        }
    }
}
