//! HTTP document source backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

use super::fetch_errors::AttemptError;
use super::fetch_model::RawDocument;
use super::fetch_traits::DocumentSource;
use crate::constants::USER_AGENT;

/// Plain HTTP GET against the published release page.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use bankrank_core::fetch::HttpDocumentSource;
///
/// let source = HttpDocumentSource::new(Duration::from_secs(30))?;
/// ```
pub struct HttpDocumentSource {
    client: Client,
}

impl HttpDocumentSource {
    /// Create a source whose requests time out after `request_timeout`.
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn new(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }
}

fn classify(error: reqwest::Error) -> AttemptError {
    if error.is_timeout() {
        AttemptError::Timeout
    } else {
        AttemptError::Network(error)
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn get(&self, url: &str) -> Result<RawDocument, AttemptError> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AttemptError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.text().await.map_err(classify)?;
        if body.is_empty() {
            return Err(AttemptError::EmptyBody);
        }

        debug!(
            "Fetched {} bytes from {} ({})",
            body.len(),
            url,
            content_type.as_deref().unwrap_or("no content type")
        );
        Ok(RawDocument::new(body, content_type))
    }
}
