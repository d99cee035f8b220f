use thiserror::Error;

/// Reasons a placement attempt may fail.
///
/// No variant ever comes with a partial board; a failed attempt leaves nothing behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// No supported grid holds this many cells.
    #[error("no supported grid shape holds {total} cells")]
    UnsupportedSize { total: usize },
    /// The requested lengths do not add up to what the grid holds.
    #[error("requested lengths total {requested} cells but the grid has {available}")]
    SizeMismatch { requested: usize, available: usize },
    /// A request of length zero, which no path can satisfy.
    #[error("item {index} has length zero")]
    EmptyItem { index: usize },
    /// A word does not line up with the path it is meant to be written along.
    #[error("word {index} does not match its path")]
    WordMismatch { index: usize },
    /// The search tried every start cell for every item without covering the grid.
    #[error("search exhausted every placement without completing the board")]
    Unsatisfiable,
    /// The search gave up after taking its configured number of steps.
    #[error("search abandoned after {steps} steps")]
    BudgetExhausted { steps: u64 },
}

impl PlacementError {
    /// Whether another attempt with fresh randomness could succeed.
    ///
    /// Input errors are deterministic and are not worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unsatisfiable | Self::BudgetExhausted { .. })
    }
}
