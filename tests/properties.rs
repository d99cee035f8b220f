//! Property-based tests for board sizing and partitioning.
//!
//! Searches run with a step budget; an attempt that runs out of budget is discarded rather than counted as a failure,
//! since only malformed results are bugs.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use spangram::{
    BacktrackingPartitioner, BoardGenerator, GeneratorConfig, Grid, GridShape, Partitioner, PlacementError,
    SUPPORTED_SIZES,
};

const BUDGET: u64 = 50_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every table entry resolves to a shape of exactly that many cells, the same way every time.
    #[test]
    fn prop_resolve_matches_table(entry in 0usize..SUPPORTED_SIZES.len()) {
        let (total, (rows, cols)) = SUPPORTED_SIZES[entry];
        let shape = GridShape::resolve(total).unwrap();

        prop_assert_eq!(shape.cell_count(), total);
        prop_assert_eq!((shape.rows(), shape.cols()), (rows, cols));
        prop_assert_eq!(GridShape::resolve(total), Ok(shape));
    }

    /// Anything outside the table fails before any search is attempted.
    #[test]
    fn prop_resolve_rejects_the_rest(total in 0usize..200) {
        prop_assume!(!SUPPORTED_SIZES.iter().any(|(size, _)| *size == total));
        prop_assert_eq!(GridShape::resolve(total), Err(PlacementError::UnsupportedSize { total }));
    }

    /// The rounding helper never picks a board too small, and never skips a board that would do.
    #[test]
    fn prop_smallest_fitting_is_tight(total in 1usize..=100) {
        let shape = GridShape::smallest_fitting(total).unwrap();
        prop_assert!(shape.cell_count() >= total);
        prop_assert!(SUPPORTED_SIZES.iter().all(|(size, _)| *size < total || *size >= shape.cell_count()));
    }

    /// Whatever the seed, a finished partition covers the board exactly with simple, contiguous worms.
    #[test]
    fn prop_partition_is_exact(seed in any::<u64>()) {
        let lengths = [10, 15, 11];
        let grid = Grid::full(GridShape::resolve(36).unwrap());
        let partitioner = BacktrackingPartitioner::with_step_limit(Some(BUDGET));

        match partitioner.partition(&lengths, &grid, &mut StdRng::seed_from_u64(seed)) {
            Ok(partition) => {
                prop_assert!(partition.is_exact_cover(&grid));
                for (path, length) in partition.paths().iter().zip(lengths) {
                    prop_assert_eq!(path.len(), length);
                    prop_assert!(path.is_simple());
                    prop_assert!(path.is_contiguous());
                }
            }
            Err(failure) => prop_assert!(failure.is_retryable(), "unexpected {failure:?}"),
        }
    }

    /// A seed pins the whole search down.
    #[test]
    fn prop_seed_reproduces_partition(seed in any::<u64>()) {
        let lengths = [9, 9, 7, 4, 4, 3];
        let grid = Grid::full(GridShape::resolve(36).unwrap());
        let partitioner = BacktrackingPartitioner::with_step_limit(Some(BUDGET));

        let first = partitioner.partition(&lengths, &grid, &mut StdRng::seed_from_u64(seed));
        let second = partitioner.partition(&lengths, &grid, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(first, second);
    }

    /// Every word of a generated board can be read back along its path.
    #[test]
    fn prop_words_read_back(seed in any::<u64>()) {
        let config = GeneratorConfig::default()
            .with_seed(Some(seed))
            .with_max_attempts(3)
            .with_step_limit(Some(BUDGET));
        let words = ["MOONBEAMS", "SUNRAYS", "GLOW", "DARK", "SET"];

        match BoardGenerator::new(config).generate_themed_board("starlight", &words) {
            Ok(themed) => {
                let special = &themed.placements.special_word;
                prop_assert_eq!(themed.board.read_path(&special.path), "STARLIGHT");
                for placement in &themed.placements.words {
                    prop_assert_eq!(themed.board.read_path(&placement.path), placement.word.clone());
                }
            }
            Err(failure) => prop_assert!(failure.is_retryable(), "unexpected {failure:?}"),
        }
    }
}
