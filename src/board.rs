use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::cell::{Cell, ItemIndex};
use crate::grid::Grid;
use crate::location::Location;

/// Which item, if any, owns each cell while a search is running.
///
/// Owned by a single search. Every [`assign`](Self::assign) made while exploring a branch is undone with
/// [`release`](Self::release) before the branch's caller tries an alternative.
pub(crate) struct BoardState {
    cells: Array2<Cell>,
}

impl BoardState {
    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            cells: Array2::from_shape_fn(grid.shape.dim(), |index| {
                if grid.contains(Location::from(index)) { Cell::Free } else { Cell::Hole }
            }),
        }
    }

    pub(crate) fn is_free(&self, location: Location) -> bool {
        self.cells.get(location.as_index()).is_some_and(Cell::is_free)
    }

    pub(crate) fn owner(&self, location: Location) -> Option<ItemIndex> {
        self.cells.get(location.as_index()).and_then(Cell::owner)
    }

    /// Free cells in row-major order.
    pub(crate) fn free_cells(&self) -> Vec<Location> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| cell.is_free())
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    pub(crate) fn assign(&mut self, path: &[Location], item: ItemIndex) {
        for location in path {
            if let Some(cell) = self.cells.get_mut(location.as_index()) {
                debug_assert!(cell.is_free());
                *cell = Cell::Owned { item };
            }
        }
    }

    pub(crate) fn release(&mut self, path: &[Location]) {
        for location in path {
            if let Some(cell) = self.cells.get_mut(location.as_index()) {
                *cell = Cell::Free;
            }
        }
    }
}

impl Display for BoardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            let line = row.iter()
                .map(|cell| match cell {
                    Cell::Free => "..".to_string(),
                    Cell::Owned { item } => format!("{:02}", item + 1),
                    Cell::Hole => "##".to_string(),
                })
                .join(" ");
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
