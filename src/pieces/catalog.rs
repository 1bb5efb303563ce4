//! The fixed 21-piece catalog.
//!
//! Every color owns one copy of each piece. Canonical offsets are listed in
//! catalog order and each piece fits inside a 5x5 box, which the transform
//! in [`super::shape`] relies on.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Offset of a single cell relative to the piece origin, as `(x, y)`.
pub type Offset = (i8, i8);

/// Number of entries in the catalog.
pub const PIECE_COUNT: usize = 21;

/// Side of the square frame every canonical piece fits in.
pub const FRAME_SIZE: i8 = 5;

/// One of the 21 polyominoes, in catalog order.
///
/// Names follow the usual polyomino letters with the cell count appended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceType {
    O4 = 0,
    I1 = 1,
    T4 = 2,
    I2 = 3,
    I4 = 4,
    V3 = 5,
    L4 = 6,
    I3 = 7,
    Z4 = 8,
    L5 = 9,
    T5 = 10,
    V5 = 11,
    N5 = 12,
    Z5 = 13,
    I5 = 14,
    P5 = 15,
    W5 = 16,
    U5 = 17,
    F5 = 18,
    X5 = 19,
    Y5 = 20,
}

const CANONICAL: [&[Offset]; PIECE_COUNT] = [
    &[(0, 0), (0, 1), (1, 0), (1, 1)],
    &[(0, 0)],
    &[(1, 0), (0, 1), (1, 1), (2, 1)],
    &[(0, 0), (1, 0)],
    &[(0, 0), (1, 0), (2, 0), (3, 0)],
    &[(0, 0), (1, 0), (1, 1)],
    &[(0, 1), (1, 1), (2, 1), (2, 0)],
    &[(0, 0), (1, 0), (2, 0)],
    &[(0, 1), (1, 0), (1, 1), (2, 0)],
    &[(0, 0), (0, 1), (1, 1), (2, 1), (3, 1)],
    &[(0, 2), (1, 0), (1, 1), (1, 2), (2, 2)],
    &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
    &[(0, 1), (1, 0), (1, 1), (2, 0), (3, 0)],
    &[(0, 1), (0, 2), (1, 1), (2, 0), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2)],
    &[(1, 0), (2, 0), (0, 1), (1, 1), (0, 2)],
    &[(0, 0), (1, 0), (0, 1), (0, 2), (1, 2)],
    &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    &[(1, 0), (2, 1), (0, 1), (1, 1), (1, 2)],
    &[(1, 0), (0, 1), (1, 1), (2, 1), (3, 1)],
];

impl PieceType {
    /// Every piece in catalog order.
    pub const ALL: [PieceType; PIECE_COUNT] = [
        PieceType::O4,
        PieceType::I1,
        PieceType::T4,
        PieceType::I2,
        PieceType::I4,
        PieceType::V3,
        PieceType::L4,
        PieceType::I3,
        PieceType::Z4,
        PieceType::L5,
        PieceType::T5,
        PieceType::V5,
        PieceType::N5,
        PieceType::Z5,
        PieceType::I5,
        PieceType::P5,
        PieceType::W5,
        PieceType::U5,
        PieceType::F5,
        PieceType::X5,
        PieceType::Y5,
    ];

    /// Look up a piece by its catalog index.
    ///
    /// ```
    /// use polyomino_arena::pieces::PieceType;
    ///
    /// assert_eq!(PieceType::from_index(1).unwrap(), PieceType::I1);
    /// assert!(PieceType::from_index(21).is_err());
    /// ```
    pub fn from_index(index: u8) -> Result<Self, EngineError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(EngineError::UnknownPieceType(index))
    }

    /// Catalog index (0-based).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Canonical (untransformed) cell offsets.
    #[must_use]
    pub fn cells(self) -> &'static [Offset] {
        CANONICAL[self as usize]
    }

    /// Number of cells; also the score the piece is worth.
    #[must_use]
    pub fn size(self) -> usize {
        self.cells().len()
    }

    /// Short descriptive label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::O4 => "square",
            PieceType::I1 => "monomino",
            PieceType::T4 => "short tee",
            PieceType::I2 => "domino",
            PieceType::I4 => "straight four",
            PieceType::V3 => "corner three",
            PieceType::L4 => "ell four",
            PieceType::I3 => "straight three",
            PieceType::Z4 => "skew four",
            PieceType::L5 => "long ell",
            PieceType::T5 => "long tee",
            PieceType::V5 => "big corner",
            PieceType::N5 => "long skew",
            PieceType::Z5 => "zed",
            PieceType::I5 => "straight five",
            PieceType::P5 => "pee",
            PieceType::W5 => "stairs",
            PieceType::U5 => "cup",
            PieceType::F5 => "eff",
            PieceType::X5 => "cross",
            PieceType::Y5 => "why",
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self, self.name())
    }
}
