//! Core error types for the bank ranking pipeline.
//!
//! Only fetch and persistence failures abort a run. Row-level parsing problems
//! are recovered inside the extractors (see [`crate::extract::MalformedRow`]) and
//! an empty extraction is a valid, if suspicious, outcome.

use thiserror::Error;

use crate::fetch::FetchError;
use crate::storage::PersistenceError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for a pipeline run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}
