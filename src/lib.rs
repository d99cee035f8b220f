#![warn(missing_docs)]

//! # `spangram`
//!
//! Board generation for [Strands](https://www.nytimes.com/games/strands)-style word puzzles, where every letter on
//! the board belongs to exactly one hidden word and each word snakes through the grid one neighboring cell at a time.
//! Begin with a [`BoardGenerator`], configured through [`GeneratorConfig`], and call
//! [`generate_themed_board`](BoardGenerator::generate_themed_board) with a special word and the remaining words.
//!
//! The pieces underneath can be used alone: [`GridShape::resolve`] picks the board size for a letter count,
//! a [`Partitioner`] splits a [`Grid`] into worms of given lengths, and [`write_letters`] writes words along them.
//!
//! # Internals
//! A board is a set of "worms": simple paths whose consecutive cells touch along an edge or a corner.
//! The total letter count selects one of sixteen supported rectangles, from 6x6 to 10x10, and the worms must cover
//! it exactly.
//!
//! The grid is held as an undirected graph with one vertex per cell and one edge per Moore adjacency.
//! This keeps the search independent of the board's outline, so holes and walls (see [`GridBuilder`]) need no
//! special handling.
//!
//! The [`BacktrackingPartitioner`] then works as follows:
//! 1. Sort the requested lengths longest first; long worms are the hardest to fit late.
//! 2. For the next worm, try every free cell as its head, in random order, and grow a self-avoiding path from it by
//!    depth-first search over randomly ordered neighbors.
//! 3. Commit the first path found and recurse. If the remaining worms cannot be placed, release the path and move on
//!    to the next head. If no head works, fail back to the previous worm.
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so seeded runs are reproducible.
//! The search can take long on unlucky orderings; [`BoardGenerator`] bounds each attempt by a step budget and
//! retries with fresh randomness.

pub use builder::{BuilderInvalidReason, GridBuilder};
pub use cell::ItemIndex;
pub use error::PlacementError;
pub use generator::{BoardGenerator, GeneratorConfig, Placements, ThemedBoard, WordPlacement};
pub use grid::Grid;
pub use letters::{write_letters, LetterBoard, HOLE};
pub use location::Location;
pub use partition::{BacktrackingPartitioner, IsolatedPartitioner, Partition, Partitioner, Path, PathItem, PlacementPolicy, PolicyPartitioner};
pub use shape::MooreStep;
pub use size::{GridShape, SUPPORTED_SIZES};

pub(crate) mod board;
pub mod builder;
pub(crate) mod cell;
pub(crate) mod error;
pub mod generator;
pub(crate) mod grid;
pub(crate) mod letters;
pub(crate) mod location;
pub mod partition;
pub(crate) mod shape;
pub(crate) mod size;
#[cfg(feature = "wasm")]
pub mod wasm;
