use std::sync::Arc;

use log::{info, warn};

use super::fetch_errors::FetchError;
use super::fetch_model::{FetchConfig, RawDocument};
use super::fetch_traits::DocumentSource;

/// Retrieves a document with a bounded number of attempts and a constant
/// delay between failures. No backoff growth; the delay never follows the
/// final attempt.
pub struct Fetcher {
    source: Arc<dyn DocumentSource>,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(source: Arc<dyn DocumentSource>, config: FetchConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch `url`, retrying failed attempts.
    ///
    /// Returns the first successful document, or [`FetchError::Exhausted`]
    /// carrying the cause of the last attempt.
    pub async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            info!("Fetch attempt {}/{} for {}", attempt, max_attempts, url);

            match self.source.get(url).await {
                Ok(document) => {
                    info!("Fetched source document on attempt {}", attempt);
                    return Ok(document);
                }
                Err(e) => {
                    warn!("Attempt {} failed: {}", attempt, e);

                    if attempt >= max_attempts {
                        return Err(FetchError::Exhausted {
                            url: url.to_string(),
                            attempts: attempt,
                            source: e,
                        });
                    }

                    info!(
                        "Waiting {}ms before retry...",
                        self.config.retry_delay.as_millis()
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
