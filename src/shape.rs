use strum::VariantArray;

use crate::location::Location;

/// The eight directions of the Moore neighborhood, as used between consecutive cells of a worm.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum MooreStep {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl MooreStep {
    /// The static array of all "forward" directions.
    ///
    /// Stepping forward from a location always lands on a location indexed higher in row-major order,
    /// so visiting every location and connecting it forward yields each adjacency exactly once.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::DownLeft, Self::Down, Self::DownRight];

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Steps off the top or left edge wrap around to huge coordinates, which no board contains.
    pub fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(self.delta())
    }

    /// Determine the direction from `a` to `b`, or [`None`] if the two are not adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    fn delta(&self) -> (isize, isize) {
        // (row, col)
        match self {
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Right => (0, 1),
            Self::DownRight => (1, 1),
            Self::Down => (1, 0),
            Self::DownLeft => (1, -1),
            Self::Left => (0, -1),
            Self::UpLeft => (-1, -1),
        }
    }
}
