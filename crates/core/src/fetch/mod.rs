//! Fetch module - retrieval of the source document with bounded retries.
//!
//! [`DocumentSource`] performs a single attempt; [`Fetcher`] wraps it with the
//! constant-delay retry policy.

mod fetch_errors;
mod fetch_model;
mod fetch_traits;
mod fetcher;
mod http_source;

pub use fetch_errors::{AttemptError, FetchError};
pub use fetch_model::{FetchConfig, RawDocument};
pub use fetch_traits::DocumentSource;
pub use fetcher::Fetcher;
pub use http_source::HttpDocumentSource;
