//! Splitting a grid into worms of requested lengths.
//!
//! A [`Partitioner`] receives the requested lengths in the caller's order and returns one [`Path`] per length,
//! indexed the same way no matter in which order the strategy chose to place them.

use std::cmp::Reverse;
use std::ops::Index;

use itertools::Itertools;
use ndarray::Array2;
use rand::Rng;
use serde::Serialize;
use strum::{Display, EnumString, VariantArray};

use crate::cell::ItemIndex;
use crate::error::PlacementError;
use crate::grid::Grid;
use crate::location::Location;
use crate::size::GridShape;

pub use backtracking::BacktrackingPartitioner;
pub use isolated::IsolatedPartitioner;

mod backtracking;
mod isolated;

/// A single length requirement together with where it appeared in the input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PathItem {
    pub index: ItemIndex,
    pub length: usize,
}

impl PathItem {
    /// Number `lengths` in input order, rejecting zero lengths.
    pub fn from_lengths(lengths: &[usize]) -> Result<Vec<Self>, PlacementError> {
        lengths.iter()
            .enumerate()
            .map(|(index, &length)| match length {
                0 => Err(PlacementError::EmptyItem { index }),
                _ => Ok(Self { index, length }),
            })
            .collect()
    }

    /// `items` sorted longest first. The sort is stable, so equal lengths keep their input order.
    pub(crate) fn processing_order(items: &[Self]) -> Vec<Self> {
        items.iter().copied().sorted_by_key(|item| Reverse(item.length)).collect_vec()
    }
}

/// An ordered run of distinct cells, each adjacent to the next.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(pub(crate) Vec<Location>);

impl Path {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[Location] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> + Clone {
        self.0.iter()
    }

    /// No cell appears twice.
    pub fn is_simple(&self) -> bool {
        self.0.iter().all_unique()
    }

    /// Every consecutive pair of cells is Moore-adjacent.
    ///
    /// This only looks at coordinates; use [`Self::is_contiguous_on`] for grids with walls.
    pub fn is_contiguous(&self) -> bool {
        self.0.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }

    /// Every consecutive pair of cells is joined in `grid`, so no step crosses a wall or a hole.
    pub fn is_contiguous_on(&self, grid: &Grid) -> bool {
        self.0.iter().tuple_windows().all(|(a, b)| grid.are_adjacent(*a, *b))
    }
}

impl Index<usize> for Path {
    type Output = Location;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Location>> for Path {
    fn from(value: Vec<Location>) -> Self {
        Self(value)
    }
}

/// The outcome of a successful partition: one [`Path`] per requested length, in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    pub(crate) paths: Vec<Path>,
    pub(crate) shape: GridShape,
}

impl Partition {
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    /// The path for the item at `index` in the caller's input order.
    pub fn path(&self, index: ItemIndex) -> Option<&Path> {
        self.paths.get(index)
    }

    /// Number of cells covered by some path.
    pub fn covered(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }

    /// Every cell of `grid` belongs to exactly one path, and every path stays on `grid` without crossing a wall.
    pub fn is_exact_cover(&self, grid: &Grid) -> bool {
        let cells = self.paths.iter().flat_map(Path::iter).collect_vec();
        cells.len() == grid.cell_count()
            && cells.iter().all_unique()
            && cells.iter().all(|location| grid.contains(**location))
            && self.paths.iter().all(|path| path.is_contiguous_on(grid))
    }

    /// The board labelled with 1-based item numbers; cells no path covers are 0.
    pub fn labels(&self) -> Array2<usize> {
        let mut labels = Array2::zeros(self.shape.dim());
        for (index, path) in self.paths.iter().enumerate() {
            for location in path.iter() {
                if let Some(label) = labels.get_mut(location.as_index()) {
                    *label = index + 1;
                }
            }
        }

        labels
    }
}

/// A strategy for placing worms of the requested `lengths` on `grid`.
///
/// Implementations draw every random choice from `rng`, so a seeded generator reproduces its result.
pub trait Partitioner {
    /// Place one path per entry of `lengths`, returning them indexed like `lengths`.
    fn partition<R: Rng + ?Sized>(&self, lengths: &[usize], grid: &Grid, rng: &mut R) -> Result<Partition, PlacementError>;
}

/// The placement strategies a generator can be configured with.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum PlacementPolicy {
    /// Cover the grid exactly with [`BacktrackingPartitioner`].
    #[default]
    Exhaustive,
    /// Keep worms from touching one another with [`IsolatedPartitioner`]; leftover cells get filler letters.
    Isolated,
}

impl PlacementPolicy {
    /// The grid shape this policy lays `total` letters out on.
    pub fn shape_for(&self, total: usize) -> Result<GridShape, PlacementError> {
        match self {
            Self::Exhaustive => GridShape::resolve(total),
            Self::Isolated => GridShape::smallest_fitting(total).ok_or(PlacementError::UnsupportedSize { total }),
        }
    }

    /// The strategy this policy selects, with `step_limit` bounding each exhaustive search.
    ///
    /// The isolated strategy never backtracks, so it ignores the limit.
    pub fn partitioner(&self, step_limit: Option<u64>) -> PolicyPartitioner {
        match self {
            Self::Exhaustive => PolicyPartitioner::Backtracking(BacktrackingPartitioner::with_step_limit(step_limit)),
            Self::Isolated => PolicyPartitioner::Isolated(IsolatedPartitioner),
        }
    }
}

/// Partitions with the policy's strategy and no step limit.
impl Partitioner for PlacementPolicy {
    fn partition<R: Rng + ?Sized>(&self, lengths: &[usize], grid: &Grid, rng: &mut R) -> Result<Partition, PlacementError> {
        self.partitioner(None).partition(lengths, grid, rng)
    }
}

/// A configured strategy picked by [`PlacementPolicy::partitioner`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PolicyPartitioner {
    /// Exact cover, for [`PlacementPolicy::Exhaustive`].
    Backtracking(BacktrackingPartitioner),
    /// Non-touching first fit, for [`PlacementPolicy::Isolated`].
    Isolated(IsolatedPartitioner),
}

impl Partitioner for PolicyPartitioner {
    fn partition<R: Rng + ?Sized>(&self, lengths: &[usize], grid: &Grid, rng: &mut R) -> Result<Partition, PlacementError> {
        match self {
            Self::Backtracking(partitioner) => partitioner.partition(lengths, grid, rng),
            Self::Isolated(partitioner) => partitioner.partition(lengths, grid, rng),
        }
    }
}
