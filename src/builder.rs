use std::collections::HashSet;

use unordered_pair::UnorderedPair;

use crate::grid::Grid;
use crate::location::Location;
use crate::shape::MooreStep;
use crate::size::GridShape;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A feature like a hole was placed outside the bounds of the builder's shape.
    FeatureOutOfBounds,
}

/// A builder for irregular grids: a rectangle with some cells dropped (holes) and some adjacencies cut (walls).
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct GridBuilder {
    shape: GridShape,
    invalid_reasons: Vec<BuilderInvalidReason>,
    // walls
    edge_blacklist: HashSet<UnorderedPair<Location>>,
    // holes
    location_blacklist: HashSet<Location>,
}

impl GridBuilder {
    /// Construct a new [`Self`] covering every cell of `shape`.
    pub fn with_shape(shape: GridShape) -> Self {
        Self {
            shape,
            invalid_reasons: Default::default(),
            edge_blacklist: Default::default(),
            location_blacklist: Default::default(),
        }
    }

    #[inline]
    fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.shape.rows() && location.1 < self.shape.cols()
    }

    /// Drop a location from the grid. No path may pass through it.
    /// Keep in mind this may cause the grid to become impossible to partition.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn drop_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.location_blacklist.insert(location);
        self
    }

    /// Disconnect the two `locations`, i.e. place a wall between them.
    ///
    /// A wall prevents a path from stepping directly from one location to the other.
    /// If the two locations are not adjacent, this function does nothing and does not invalidate the builder.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if either location is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn disconnect(&mut self, locations: UnorderedPair<Location>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !self.in_bounds(location) {
                self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
                return self;
            }
        }

        if MooreStep::direction_to(locations.0, locations.1).is_none() {
            return self;
        }

        self.edge_blacklist.insert(locations);
        self
    }

    /// Shorthand for multiple calls to [`Self::disconnect`], with the same conditions.
    ///
    /// Disconnect `location` from its neighbors in each of `directions`.
    /// Directions leading off the grid are ignored.
    pub fn disconnect_around(&mut self, location: Location, directions: &[MooreStep]) -> &mut Self {
        for direction in directions {
            let other = direction.attempt_from(location);
            if self.in_bounds(other) {
                self.disconnect(UnorderedPair::from((location, other)));
            }
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Grid, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Grid::connect(self.shape, &self.location_blacklist, &self.edge_blacklist))
    }
}
