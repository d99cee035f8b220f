//! Turning a special word and a list of words into a finished letter board.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::PlacementError;
use crate::grid::Grid;
use crate::letters::{write_letters, LetterBoard};
use crate::partition::{Partition, Partitioner, Path, PlacementPolicy};

/// Settings for a [`BoardGenerator`].
///
/// The default budget suits the smaller boards. Search time is heavy-tailed and grows steeply with board size:
/// from about 80 cells up most attempts exhaust 2,000,000 steps, so raise `step_limit` and `max_attempts`
/// considerably when generating the largest boards.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    pub policy: PlacementPolicy,
    /// Fixed seed for reproducible boards. Without one every generator call draws fresh entropy.
    pub seed: Option<u64>,
    /// Attempts per call before giving up. Only failures of the search itself are retried.
    pub max_attempts: usize,
    /// Path extensions allowed per attempt; `None` lets the search run to exhaustion.
    pub step_limit: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            policy: PlacementPolicy::default(),
            seed: None,
            max_attempts: 5,
            step_limit: Some(2_000_000),
        }
    }
}

impl GeneratorConfig {
    pub fn with_policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }
}

/// A word and the cells it was written along.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WordPlacement {
    pub word: String,
    pub path: Path,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Placements {
    pub special_word: WordPlacement,
    /// In the order the words were given.
    pub words: Vec<WordPlacement>,
}

/// A generated board and where each word ended up on it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ThemedBoard {
    pub board: LetterBoard,
    pub placements: Placements,
}

/// Lays words out as worms on a board sized to fit them.
///
/// The generator only holds configuration; every call owns its own random source and search state.
#[derive(Clone, Debug, Default)]
pub struct BoardGenerator {
    config: GeneratorConfig,
}

impl BoardGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Build a board holding `special_word` followed by `words`, retrying as configured.
    pub fn generate_themed_board<S: AsRef<str>>(&self, special_word: &str, words: &[S]) -> Result<ThemedBoard, PlacementError> {
        let mut rng = self.rng();
        self.retry(|generator| generator.generate_themed_board_with(special_word, words, &mut rng))
    }

    /// A single attempt of [`Self::generate_themed_board`], drawing randomness from `rng`.
    pub fn generate_themed_board_with<S, R>(&self, special_word: &str, words: &[S], rng: &mut R) -> Result<ThemedBoard, PlacementError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let all_words = std::iter::once(special_word)
            .chain(words.iter().map(|word| word.as_ref()))
            .collect::<Vec<_>>();

        let (board, partition) = self.generate_board_with_words_using(&all_words, rng)?;

        let mut paths = partition.into_paths().into_iter();
        let special_word = match paths.next() {
            Some(path) => WordPlacement { word: special_word.to_string(), path },
            None => return Err(PlacementError::WordMismatch { index: 0 }),
        };
        let words = words.iter()
            .zip(paths)
            .map(|(word, path)| WordPlacement { word: word.as_ref().to_string(), path })
            .collect();

        Ok(ThemedBoard { board, placements: Placements { special_word, words } })
    }

    /// Lay `words` out in the given order, with no special word, retrying as configured.
    pub fn generate_board_with_words<S: AsRef<str>>(&self, words: &[S]) -> Result<(LetterBoard, Partition), PlacementError> {
        let mut rng = self.rng();
        self.retry(|generator| generator.generate_board_with_words_using(words, &mut rng))
    }

    /// Partition a board for bare `lengths`, retrying as configured.
    pub fn generate_board_with_lengths(&self, lengths: &[usize]) -> Result<(Grid, Partition), PlacementError> {
        let mut rng = self.rng();
        self.retry(|generator| {
            let total = lengths.iter().sum();
            let grid = Grid::full(generator.config.policy.shape_for(total)?);
            let partition = generator.partition(lengths, &grid, &mut rng)?;
            Ok((grid, partition))
        })
    }

    fn generate_board_with_words_using<S, R>(&self, words: &[S], rng: &mut R) -> Result<(LetterBoard, Partition), PlacementError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let lengths = words.iter().map(|word| word.as_ref().chars().count()).collect::<Vec<_>>();
        let total = lengths.iter().sum();
        let grid = Grid::full(self.config.policy.shape_for(total)?);

        let partition = self.partition(&lengths, &grid, rng)?;
        let board = write_letters(words, &partition, &grid, rng)?;

        Ok((board, partition))
    }

    fn partition<R: Rng + ?Sized>(&self, lengths: &[usize], grid: &Grid, rng: &mut R) -> Result<Partition, PlacementError> {
        self.config.policy.partitioner(self.config.step_limit).partition(lengths, grid, rng)
    }

    fn retry<T>(&self, mut attempt: impl FnMut(&Self) -> Result<T, PlacementError>) -> Result<T, PlacementError> {
        let attempts = self.config.max_attempts.max(1);
        let mut last_failure = PlacementError::Unsatisfiable;

        for number in 1..=attempts {
            debug!("placement attempt {number} of {attempts}");
            match attempt(self) {
                Ok(value) => return Ok(value),
                Err(failure) if failure.is_retryable() => {
                    warn!("placement attempt {number} of {attempts} failed: {failure}");
                    last_failure = failure;
                }
                Err(failure) => return Err(failure),
            }
        }

        Err(last_failure)
    }
}
