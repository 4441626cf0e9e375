use std::error::Error as StdError;

use thiserror::Error;

/// Error type returned by query handles when a statement fails to execute.
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Error, Debug)]
pub enum PaginateError {
    #[error("Count query failed: {0}")]
    CountFailed(#[source] BoxError),

    #[error("Fetch query failed: {0}")]
    FetchFailed(#[source] BoxError),

    #[error("Count task did not complete: {0}")]
    CountTaskFailed(#[source] BoxError),
}

impl PaginateError {
    /// True when the failure came from the count side of the call.
    pub fn is_count_failure(&self) -> bool {
        matches!(self, Self::CountFailed(_) | Self::CountTaskFailed(_))
    }
}

pub type PaginateResult<T> = Result<T, PaginateError>;
