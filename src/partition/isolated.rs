use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::BoardState;
use crate::cell::ItemIndex;
use crate::error::PlacementError;
use crate::grid::Grid;
use crate::location::Location;
use crate::partition::{Partition, Partitioner, Path, PathItem};

/// Places worms one at a time so that no two of them touch, not even at a corner.
///
/// Each item, longest first, takes the first path found from a randomly ordered list of start cells.
/// Nothing placed is ever taken back, so one unlucky worm can leave no room for a later one, and the grid is
/// generally not covered; callers fill the leftover cells themselves.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct IsolatedPartitioner;

impl Partitioner for IsolatedPartitioner {
    fn partition<R: Rng + ?Sized>(&self, lengths: &[usize], grid: &Grid, rng: &mut R) -> Result<Partition, PlacementError> {
        let items = PathItem::from_lengths(lengths)?;
        let requested = lengths.iter().sum();
        if requested > grid.cell_count() {
            return Err(PlacementError::SizeMismatch { requested, available: grid.cell_count() });
        }

        let mut board = BoardState::new(grid);
        let mut paths = vec![None; items.len()];

        for item in PathItem::processing_order(&items) {
            let mut starts = board.free_cells();
            starts.shuffle(rng);

            let found = starts.into_iter().find_map(|start| {
                if !is_isolated(grid, &board, start, item.index) {
                    return None;
                }
                let mut path = vec![start];
                grow(grid, &board, &mut path, item, rng).then_some(path)
            });

            let Some(path) = found else {
                debug!("could not place item {} (length {}) apart from the others", item.index, item.length);
                trace!("board when giving up:\n{board}");
                return Err(PlacementError::Unsatisfiable);
            };

            board.assign(&path, item.index);
            paths[item.index] = Some(Path(path));
        }

        let paths = paths.into_iter()
            .map(|path| path.ok_or(PlacementError::Unsatisfiable))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Partition { paths, shape: grid.shape })
    }
}

/// `location` is free and no neighbor belongs to an item other than `item`.
fn is_isolated(grid: &Grid, board: &BoardState, location: Location, item: ItemIndex) -> bool {
    board.is_free(location)
        && grid.neighbors(location).into_iter()
            .all(|neighbor| board.owner(neighbor).map_or(true, |owner| owner == item))
}

fn grow<R: Rng + ?Sized>(grid: &Grid, board: &BoardState, path: &mut Vec<Location>, item: PathItem, rng: &mut R) -> bool {
    if path.len() >= item.length {
        return true;
    }
    let Some(&last) = path.last() else {
        return false;
    };

    let mut candidates = grid.neighbors(last);
    candidates.shuffle(rng);

    for candidate in candidates {
        if path.contains(&candidate) || !is_isolated(grid, board, candidate, item.index) {
            continue;
        }

        path.push(candidate);
        if grow(grid, board, path, item, rng) {
            return true;
        }
        path.pop();
    }

    false
}
