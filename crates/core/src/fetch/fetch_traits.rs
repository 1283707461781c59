use async_trait::async_trait;

use super::fetch_errors::AttemptError;
use super::fetch_model::RawDocument;

/// A place the ranking document can be retrieved from.
///
/// Implementations perform exactly one attempt per call and keep no state
/// between calls; retrying is the [`Fetcher`](super::Fetcher)'s job.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieve the document at `url`.
    ///
    /// Success means an OK status and a non-empty body.
    async fn get(&self, url: &str) -> Result<RawDocument, AttemptError>;
}
