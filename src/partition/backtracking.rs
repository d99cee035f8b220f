use log::{debug, trace};
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::BoardState;
use crate::error::PlacementError;
use crate::grid::Grid;
use crate::location::Location;
use crate::partition::{Partition, Partitioner, Path, PathItem};

/// Covers a grid exactly with worms, backtracking over earlier worms when a later one does not fit.
///
/// # Search
/// Items are placed longest first. For the item at hand, every free cell is tried as a start, in random order,
/// and a self-avoiding depth-first walk grows a path of the required length from it, again visiting neighbors in
/// random order and stepping back whenever a branch runs out of room.
/// The first path found is committed and the remaining items are placed recursively.
/// If they cannot be, the path is released cell by cell and the next start cell is tried.
///
/// Without a step limit the search runs until it finds a partition or has tried every start cell at every level,
/// in which case it fails with [`PlacementError::Unsatisfiable`].
/// With one, every extension of a path counts as a step and the search gives up with
/// [`PlacementError::BudgetExhausted`] once the limit is passed, so callers can retry with fresh randomness.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BacktrackingPartitioner {
    step_limit: Option<u64>,
}

impl BacktrackingPartitioner {
    pub fn with_step_limit(step_limit: Option<u64>) -> Self {
        Self { step_limit }
    }

    pub fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }
}

impl Partitioner for BacktrackingPartitioner {
    fn partition<R: Rng + ?Sized>(&self, lengths: &[usize], grid: &Grid, rng: &mut R) -> Result<Partition, PlacementError> {
        let items = PathItem::from_lengths(lengths)?;
        let requested = lengths.iter().sum();
        if requested != grid.cell_count() {
            return Err(PlacementError::SizeMismatch { requested, available: grid.cell_count() });
        }

        let mut search = Search {
            neighbors: grid.neighbor_table(),
            board: BoardState::new(grid),
            order: PathItem::processing_order(&items),
            paths: vec![None; items.len()],
            rng,
            steps: 0,
            step_limit: self.step_limit,
        };

        if !search.place_from(0)? {
            debug!("exhausted all placements for {} items after {} steps", items.len(), search.steps);
            return Err(PlacementError::Unsatisfiable);
        }
        debug!("placed {} items in {} steps", items.len(), search.steps);

        let paths = search.paths.into_iter()
            .map(|path| path.ok_or(PlacementError::Unsatisfiable))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Partition { paths, shape: grid.shape })
    }
}

struct Search<'r, R: Rng + ?Sized> {
    neighbors: Array2<Vec<Location>>,
    board: BoardState,
    order: Vec<PathItem>,
    // by input position
    paths: Vec<Option<Path>>,
    rng: &'r mut R,
    steps: u64,
    step_limit: Option<u64>,
}

impl<R: Rng + ?Sized> Search<'_, R> {
    /// Place `order[position..]`. `Ok(false)` means every start cell failed and the caller should backtrack.
    fn place_from(&mut self, position: usize) -> Result<bool, PlacementError> {
        let Some(&item) = self.order.get(position) else {
            return Ok(true);
        };

        let mut starts = self.board.free_cells();
        starts.shuffle(self.rng);

        for start in starts {
            let mut path = vec![start];
            if !self.grow(&mut path, item.length)? {
                continue;
            }

            self.board.assign(&path, item.index);
            if self.place_from(position + 1)? {
                self.paths[item.index] = Some(Path(path));
                return Ok(true);
            }

            trace!("backtracking over item {} (length {}) at depth {}", item.index, item.length, position);
            self.board.release(&path);
        }

        Ok(false)
    }

    /// Extend `path` with free cells until it holds `target` cells.
    /// On failure `path` is left as it was passed in.
    fn grow(&mut self, path: &mut Vec<Location>, target: usize) -> Result<bool, PlacementError> {
        if path.len() >= target {
            return Ok(true);
        }
        let Some(&last) = path.last() else {
            return Ok(false);
        };

        let mut candidates = match self.neighbors.get(last.as_index()) {
            Some(neighbors) => neighbors.clone(),
            None => return Ok(false),
        };
        candidates.shuffle(self.rng);

        for candidate in candidates {
            if !self.board.is_free(candidate) || path.contains(&candidate) {
                continue;
            }

            self.tick()?;
            path.push(candidate);
            if self.grow(path, target)? {
                return Ok(true);
            }
            path.pop();
        }

        Ok(false)
    }

    fn tick(&mut self) -> Result<(), PlacementError> {
        self.steps += 1;
        match self.step_limit {
            Some(limit) if self.steps > limit => Err(PlacementError::BudgetExhausted { steps: limit }),
            _ => Ok(()),
        }
    }
}
