use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::location::Location;
use crate::shape::MooreStep;
use crate::size::GridShape;

/// The cells a search may use and which of them are adjacent.
///
/// Every cell is a node; every pair of Moore-adjacent cells not separated by a wall is an edge.
/// A full grid is the plain rectangle; irregular grids come from a [`GridBuilder`](crate::builder::GridBuilder).
#[derive(Clone)]
pub struct Grid {
    pub(crate) graph: UnGraphMap<Location, ()>,
    pub(crate) shape: GridShape,
}

impl Grid {
    /// Every cell of `shape`, all Moore adjacencies intact.
    pub fn full(shape: GridShape) -> Self {
        Self::connect(shape, &HashSet::new(), &HashSet::new())
    }

    pub(crate) fn connect(
        shape: GridShape,
        holes: &HashSet<Location>,
        walls: &HashSet<UnorderedPair<Location>>,
    ) -> Self {
        let mut graph = UnGraphMap::with_capacity(
            shape.cell_count(),
            // each cell connects forward at most four ways
            shape.cell_count() * MooreStep::FORWARD_VARIANTS.len(),
        );

        for (row, col) in (0..shape.rows()).cartesian_product(0..shape.cols()) {
            graph.add_node(Location(row, col));
        }

        for (row, col) in (0..shape.rows()).cartesian_product(0..shape.cols()) {
            let location = Location(row, col);
            for step in MooreStep::FORWARD_VARIANTS {
                let other = step.attempt_from(location);
                if graph.contains_node(other) {
                    graph.add_edge(location, other, ());
                }
            }
        }

        for location in holes {
            graph.remove_node(*location);
        }

        for UnorderedPair(l1, l2) in walls {
            graph.remove_edge(*l1, *l2);
        }

        Self { graph, shape }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of usable cells, i.e. the bounding rectangle less any holes.
    pub fn cell_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains(&self, location: Location) -> bool {
        self.graph.contains_node(location)
    }

    /// Whether a path may step directly from `a` to `b`.
    pub fn are_adjacent(&self, a: Location, b: Location) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// All usable cells in row-major order.
    pub fn locations(&self) -> Vec<Location> {
        self.graph.nodes().sorted().collect_vec()
    }

    /// Neighbors of `location` in row-major order. Empty if `location` is not on the grid.
    pub fn neighbors(&self, location: Location) -> Vec<Location> {
        if !self.contains(location) {
            return Vec::new();
        }
        self.graph.neighbors(location).sorted().collect_vec()
    }

    /// Precomputed neighbor lists, indexed by location.
    pub(crate) fn neighbor_table(&self) -> Array2<Vec<Location>> {
        Array2::from_shape_fn(self.shape.dim(), |index| self.neighbors(Location::from(index)))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.shape.rows() {
            for col in 0..self.shape.cols() {
                write!(f, "{}", if self.contains(Location(row, col)) { '.' } else { '#' })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
