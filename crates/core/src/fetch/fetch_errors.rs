use thiserror::Error;

/// A single failed retrieval attempt.
#[derive(Error, Debug)]
pub enum AttemptError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with something other than 200 OK.
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The server answered 200 OK with no body.
    #[error("Empty response body")]
    EmptyBody,

    /// Connection, TLS or body decoding failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure raised by a non-HTTP document source.
    #[error("Source error: {0}")]
    Source(String),
}

/// Terminal fetch failure: every attempt failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Gave up on {url} after {attempts} attempt(s): {source}")]
    Exhausted {
        url: String,
        attempts: u32,
        /// Cause of the last attempt
        #[source]
        source: AttemptError,
    },
}

impl FetchError {
    /// The cause of the final attempt.
    pub fn last_cause(&self) -> &AttemptError {
        match self {
            Self::Exhausted { source, .. } => source,
        }
    }
}
