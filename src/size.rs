use std::num::NonZero;

use crate::error::PlacementError;
use crate::location::{Coord, Dimension};

/// Every board total the generator accepts, with the `(rows, cols)` it is laid out as.
///
/// Sorted by total; both dimensions lie in `6..11`.
pub const SUPPORTED_SIZES: [(usize, (Coord, Coord)); 16] = [
    (36, (6, 6)),
    (42, (6, 7)),
    (48, (6, 8)),
    (49, (7, 7)),
    (54, (6, 9)),
    (56, (7, 8)),
    (60, (6, 10)),
    (63, (7, 9)),
    (64, (8, 8)),
    (70, (7, 10)),
    (72, (8, 9)),
    (77, (7, 11)),
    (80, (8, 10)),
    (81, (9, 9)),
    (90, (9, 10)),
    (100, (10, 10)),
];

/// The dimensions of a rectangular board, in `(rows, cols)` order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct GridShape {
    rows: Dimension,
    cols: Dimension,
}

impl GridShape {
    /// Construct a shape directly. Returns [`None`] if either dimension is zero.
    pub fn new(rows: Coord, cols: Coord) -> Option<Self> {
        Some(Self {
            rows: NonZero::new(rows)?,
            cols: NonZero::new(cols)?,
        })
    }

    /// Look `total` up in [`SUPPORTED_SIZES`].
    ///
    /// Only exact matches count; a total between two entries is an [`UnsupportedSize`](PlacementError::UnsupportedSize).
    pub fn resolve(total: usize) -> Result<Self, PlacementError> {
        SUPPORTED_SIZES.iter()
            .find(|(size, _)| *size == total)
            .and_then(|(_, (rows, cols))| Self::new(*rows, *cols))
            .ok_or(PlacementError::UnsupportedSize { total })
    }

    /// The smallest supported shape with room for at least `total` cells.
    ///
    /// Boards built on such a shape are generally not covered exactly, so the exhaustive placement policy never uses this.
    pub fn smallest_fitting(total: usize) -> Option<Self> {
        SUPPORTED_SIZES.iter()
            .find(|(size, _)| *size >= total)
            .and_then(|(_, (rows, cols))| Self::new(*rows, *cols))
    }

    pub fn rows(&self) -> Coord {
        self.rows.get()
    }

    pub fn cols(&self) -> Coord {
        self.cols.get()
    }

    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// The shape as handed to [`ndarray`] constructors.
    pub(crate) fn dim(&self) -> (Coord, Coord) {
        (self.rows(), self.cols())
    }
}
