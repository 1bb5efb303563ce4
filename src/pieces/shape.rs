//! Oriented shapes: rotation, mirroring, and normalization.
//!
//! A shape is transformed inside a fixed 5x5 frame anchored at (0, 0):
//!
//! - each clockwise quarter turn maps `(x, y)` to `(4 - y, x)`
//! - a mirror maps `(x, y)` to `(4 - x, y)` and is applied after rotating
//!
//! The frame is then read back row by row and the result is shifted so its
//! minimum x and minimum y are both 0. The identity orientation returns the
//! canonical cells untouched, in catalog order.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalog::{Offset, PieceType, FRAME_SIZE, PIECE_COUNT};

/// Quarter turns clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All rotations in ascending order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Number of quarter turns (0..=3).
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    /// Build from a quarter-turn count, reduced modulo 4.
    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Self {
        Self::ALL[(turns % 4) as usize]
    }
}

/// Rotation plus optional mirror.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    pub rotation: Rotation,
    pub mirrored: bool,
}

impl Orientation {
    /// The untransformed orientation.
    pub const IDENTITY: Orientation = Orientation {
        rotation: Rotation::R0,
        mirrored: false,
    };

    /// The eight orientations, rotation-major with the plain shape before
    /// the mirrored one.
    pub const ALL: [Orientation; 8] = [
        Orientation::new(Rotation::R0, false),
        Orientation::new(Rotation::R0, true),
        Orientation::new(Rotation::R90, false),
        Orientation::new(Rotation::R90, true),
        Orientation::new(Rotation::R180, false),
        Orientation::new(Rotation::R180, true),
        Orientation::new(Rotation::R270, false),
        Orientation::new(Rotation::R270, true),
    ];

    #[must_use]
    pub const fn new(rotation: Rotation, mirrored: bool) -> Self {
        Self { rotation, mirrored }
    }

    /// Position of this orientation in [`Orientation::ALL`].
    #[must_use]
    pub const fn slot(self) -> usize {
        self.rotation as usize * 2 + self.mirrored as usize
    }
}

/// Concrete normalized cells of one oriented piece.
///
/// Never more than five cells, so the offsets live inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    cells: SmallVec<[Offset; 5]>,
}

impl Shape {
    /// Build a shape from raw offsets without normalizing.
    #[must_use]
    pub fn from_offsets(cells: &[Offset]) -> Self {
        Self {
            cells: SmallVec::from_slice(cells),
        }
    }

    /// The canonical shape of a piece.
    #[must_use]
    pub fn canonical(piece: PieceType) -> Self {
        Self::from_offsets(piece.cells())
    }

    /// Cell offsets.
    #[must_use]
    pub fn cells(&self) -> &[Offset] {
        &self.cells
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the shape has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest x and smallest y over all cells.
    #[must_use]
    pub fn min_corner(&self) -> Offset {
        let min_x = self.cells.iter().map(|c| c.0).min().unwrap_or(0);
        let min_y = self.cells.iter().map(|c| c.1).min().unwrap_or(0);
        (min_x, min_y)
    }

    /// True if both shapes cover the same offsets, in any order.
    #[must_use]
    pub fn same_footprint(&self, other: &Shape) -> bool {
        let mut a = self.cells.clone();
        let mut b = other.cells.clone();
        a.sort_unstable_by_key(|&(x, y)| (y, x));
        b.sort_unstable_by_key(|&(x, y)| (y, x));
        a == b
    }

    /// One clockwise quarter turn inside the frame, renormalized.
    ///
    /// Offsets must already lie inside the 5x5 frame.
    #[must_use]
    pub fn rotated_cw(&self) -> Shape {
        let mut frame = Frame::draw(&self.cells);
        frame.rotate_cw();
        frame.read_normalized()
    }
}

/// 5x5 scratch grid the transforms operate on.
struct Frame {
    filled: [[bool; FRAME_SIZE as usize]; FRAME_SIZE as usize],
}

impl Frame {
    fn draw(cells: &[Offset]) -> Self {
        let mut filled = [[false; FRAME_SIZE as usize]; FRAME_SIZE as usize];
        for &(x, y) in cells {
            filled[y as usize][x as usize] = true;
        }
        Self { filled }
    }

    /// `(x, y) -> (4 - y, x)`, written into a fresh buffer.
    fn rotate_cw(&mut self) {
        let last = FRAME_SIZE as usize - 1;
        let mut next = [[false; FRAME_SIZE as usize]; FRAME_SIZE as usize];
        for (y, row) in self.filled.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                next[x][last - y] = cell;
            }
        }
        self.filled = next;
    }

    /// `(x, y) -> (4 - x, y)`.
    fn mirror(&mut self) {
        for row in &mut self.filled {
            row.reverse();
        }
    }

    /// Read cells row by row, then shift to touch x = 0 and y = 0.
    fn read_normalized(&self) -> Shape {
        let mut cells: SmallVec<[Offset; 5]> = SmallVec::new();
        for (y, row) in self.filled.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell {
                    cells.push((x as i8, y as i8));
                }
            }
        }

        let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
        for cell in &mut cells {
            cell.0 -= min_x;
            cell.1 -= min_y;
        }

        Shape { cells }
    }
}

/// Produce the normalized shape of `piece` in the given orientation.
///
/// ```
/// use polyomino_arena::pieces::{transform, PieceType, Rotation};
///
/// // The straight three stands up after a quarter turn.
/// let shape = transform(PieceType::I3, Rotation::R90, false);
/// assert_eq!(shape.cells(), &[(0, 0), (0, 1), (0, 2)]);
/// ```
#[must_use]
pub fn transform(piece: PieceType, rotation: Rotation, mirrored: bool) -> Shape {
    if rotation == Rotation::R0 && !mirrored {
        return Shape::canonical(piece);
    }

    let mut frame = Frame::draw(piece.cells());
    for _ in 0..rotation.quarter_turns() {
        frame.rotate_cw();
    }
    if mirrored {
        frame.mirror();
    }
    frame.read_normalized()
}

/// Every piece in every orientation, indexed by catalog index then
/// [`Orientation::slot`]. Built once per process.
static ORIENTED: OnceLock<Vec<[Shape; 8]>> = OnceLock::new();

/// Cached shape of `piece` in `orientation`.
#[must_use]
pub fn oriented(piece: PieceType, orientation: Orientation) -> &'static Shape {
    let table = ORIENTED.get_or_init(|| {
        let mut table = Vec::with_capacity(PIECE_COUNT);
        for piece in PieceType::ALL {
            table.push(Orientation::ALL.map(|o| transform(piece, o.rotation, o.mirrored)));
        }
        table
    });
    &table[piece as usize][orientation.slot()]
}
