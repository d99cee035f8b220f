use std::num::NonZero;

use ndarray::Ix;
use serde::Serialize;

pub type Coord = usize;
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Serialize)]
/// A location `(row, col)` on a board. The top left corner is `Location(0, 0)`.
///
/// Locations order row-major, which is also the order cells are visited when printing.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether `self` and `other` touch along an edge or a corner.
    ///
    /// This is the geometric relation only; walls on a [`Grid`](crate::Grid) are not considered.
    pub fn is_adjacent(&self, other: &Location) -> bool {
        self != other && self.0.abs_diff(other.0) <= 1 && self.1.abs_diff(other.1) <= 1
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}
