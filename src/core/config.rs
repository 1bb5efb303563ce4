//! Game and driver configuration.
//!
//! - `GameConfig`: who sits in each of the four seats (a named human or an
//!   automated player) and which pieces each seat starts with
//! - `DriverConfig`: how the turn driver paces and bounds automated play
//!
//! Both are plain builders with sensible defaults: four automated seats,
//! no pause.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::{SeatId, SeatMap, SEAT_COUNT};
use crate::pieces::PieceType;

/// Who controls a seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatIdentity {
    /// A human player, identified by account name. The driver stops and
    /// waits whenever a human seat becomes current.
    Human(String),

    /// An automated player. The tag is display-only.
    Automated(String),
}

impl SeatIdentity {
    /// Is this seat played by the engine?
    #[must_use]
    pub fn is_automated(&self) -> bool {
        matches!(self, SeatIdentity::Automated(_))
    }

    /// Account name or automated tag.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            SeatIdentity::Human(name) | SeatIdentity::Automated(name) => name,
        }
    }
}

impl std::fmt::Display for SeatIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Seat assignments for a new game.
///
/// Seats left unassigned are automated. Their tags are `cpu1`, `cpu2`, ...
/// numbered in seat order over the unassigned seats only, so a game with a
/// human in seat 2 gets `cpu1`, `cpu2`, `cpu3` in seats 1, 3 and 4.
///
/// ```
/// use polyomino_arena::core::{GameConfig, SeatId, SeatIdentity};
///
/// let config = GameConfig::new().with_human(SeatId::new(2).unwrap(), "alice");
/// let seats = config.identities();
/// assert_eq!(seats[SeatId::new(1).unwrap()], SeatIdentity::Automated("cpu1".into()));
/// assert_eq!(seats[SeatId::new(2).unwrap()], SeatIdentity::Human("alice".into()));
/// assert_eq!(seats[SeatId::new(3).unwrap()], SeatIdentity::Automated("cpu2".into()));
/// ```
///
/// Every seat starts with the full catalog unless
/// [`with_inventory`](GameConfig::with_inventory) restricts it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    seats: [Option<SeatIdentity>; SEAT_COUNT],
    inventories: [Option<Vec<PieceType>>; SEAT_COUNT],
}

impl GameConfig {
    /// Four automated seats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a human player.
    #[must_use]
    pub fn with_human(mut self, seat: SeatId, name: impl Into<String>) -> Self {
        self.seats[seat.index()] = Some(SeatIdentity::Human(name.into()));
        self
    }

    /// Seat an automated player with an explicit tag.
    #[must_use]
    pub fn with_automated(mut self, seat: SeatId, tag: impl Into<String>) -> Self {
        self.seats[seat.index()] = Some(SeatIdentity::Automated(tag.into()));
        self
    }

    /// Start a seat with only the given pieces.
    ///
    /// Duplicates are dropped and the result is kept in catalog order. A
    /// seat configured with no pieces starts the game already passed.
    #[must_use]
    pub fn with_inventory(
        mut self,
        seat: SeatId,
        pieces: impl IntoIterator<Item = PieceType>,
    ) -> Self {
        let mut pieces: Vec<PieceType> = pieces.into_iter().collect();
        pieces.sort_unstable();
        pieces.dedup();
        self.inventories[seat.index()] = Some(pieces);
        self
    }

    /// Starting inventory of a seat, in catalog order.
    #[must_use]
    pub fn inventory(&self, seat: SeatId) -> Vec<PieceType> {
        match &self.inventories[seat.index()] {
            Some(pieces) => pieces.clone(),
            None => PieceType::ALL.to_vec(),
        }
    }

    /// Resolve every seat, filling unassigned ones with `cpuN` tags.
    #[must_use]
    pub fn identities(&self) -> SeatMap<SeatIdentity> {
        let mut next_tag = 0;
        SeatMap::new(|seat| match &self.seats[seat.index()] {
            Some(identity) => identity.clone(),
            None => {
                next_tag += 1;
                SeatIdentity::Automated(format!("cpu{next_tag}"))
            }
        })
    }

    /// Number of human seats.
    #[must_use]
    pub fn human_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| matches!(s, Some(SeatIdentity::Human(_))))
            .count()
    }
}

/// Turn driver settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Pause before each automated action. Zero means no pause.
    pub automated_pause: Duration,

    /// Maximum seat advances per driver run. The driver clamps it to
    /// `1..=SEAT_COUNT` whenever it runs.
    pub max_advances: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            automated_pause: Duration::ZERO,
            max_advances: SEAT_COUNT,
        }
    }
}

impl DriverConfig {
    /// Create with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the automated "thinking" pause.
    #[must_use]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.automated_pause = pause;
        self
    }

    /// Set the advance bound, clamped to `1..=SEAT_COUNT`.
    #[must_use]
    pub fn with_max_advances(mut self, max: usize) -> Self {
        self.max_advances = max.clamp(1, SEAT_COUNT);
        self
    }
}
