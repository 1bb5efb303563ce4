//! Seat identification, colors, and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat number. The game always has exactly four seats, numbered
//! 1 to 4, and the seat number fixes the color: 1 = Red, 2 = Blue,
//! 3 = Green, 4 = Yellow.
//!
//! ## SeatMap
//!
//! Fixed-size per-seat storage backed by `[T; 4]`, indexed by `SeatId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::EngineError;

/// Number of seats in every game.
pub const SEAT_COUNT: usize = 4;

/// Piece color. Each color belongs to exactly one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in seat order.
    pub const ALL: [Color; SEAT_COUNT] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// The seat that plays this color.
    #[must_use]
    pub const fn seat(self) -> SeatId {
        match self {
            Color::Red => SeatId(1),
            Color::Blue => SeatId(2),
            Color::Green => SeatId(3),
            Color::Yellow => SeatId(4),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        f.write_str(name)
    }
}

/// Seat number, always in 1..=4.
///
/// The inner value is private so an out-of-range seat cannot be built;
/// raw numbers go through [`SeatId::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeatId(u8);

impl SeatId {
    /// The seat that opens every game.
    pub const FIRST: SeatId = SeatId(1);

    /// Validate a raw seat number.
    ///
    /// ```
    /// use polyomino_arena::core::{Color, SeatId};
    ///
    /// let seat = SeatId::new(3).unwrap();
    /// assert_eq!(seat.color(), Color::Green);
    /// assert!(SeatId::new(0).is_err());
    /// assert!(SeatId::new(5).is_err());
    /// ```
    pub fn new(number: u8) -> Result<Self, EngineError> {
        if (1..=SEAT_COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(EngineError::InvalidSeat(number))
        }
    }

    /// Get the 1-based seat number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The color this seat plays.
    #[must_use]
    pub const fn color(self) -> Color {
        Color::ALL[self.index()]
    }

    /// The next seat in numeric order, wrapping 4 → 1.
    #[must_use]
    pub const fn next(self) -> SeatId {
        SeatId(self.0 % SEAT_COUNT as u8 + 1)
    }

    /// Iterate over all four seats in order.
    pub fn all() -> impl Iterator<Item = SeatId> {
        (1..=SEAT_COUNT as u8).map(SeatId)
    }
}

impl TryFrom<u8> for SeatId {
    type Error = EngineError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        SeatId::new(number)
    }
}

impl From<SeatId> for u8 {
    fn from(seat: SeatId) -> u8 {
        seat.0
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use polyomino_arena::core::{SeatId, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::new(|_| 0);
/// let blue = SeatId::new(2).unwrap();
/// scores[blue] += 5;
/// assert_eq!(scores[blue], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a SeatMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(SeatId) -> T) -> Self {
        Self {
            data: [
                factory(SeatId(1)),
                factory(SeatId(2)),
                factory(SeatId(3)),
                factory(SeatId(4)),
            ],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (SeatId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8 + 1), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
