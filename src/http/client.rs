//! HTTP client for single-shot JSON reads against the remote source.

use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderValue},
};
use serde::de::DeserializeOwned;

use super::error::FetchError;

/// Media type GitHub documents for its REST responses.
pub const GITHUB_JSON: &str = "application/vnd.github+json";

/// HTTP client wrapper that maps every failure into [`FetchError`].
///
/// Failures are returned as-is; there is no retry.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Performs a GET request with query parameters and deserializes the JSON response.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!("GET JSON from {} with query {:?}...", url, query);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(GITHUB_JSON))
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Request to {} failed with HTTP {}", url, status.as_u16());
            return Err(FetchError::from_status(status, &body));
        }

        // Transfer errors are transport failures; only decoding is a parse failure.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let parsed = serde_json::from_slice::<T>(&bytes)?;
        Ok(parsed)
    }
}
