//! HTTP place-name search client

use crate::error::{Error, Result, SubmitStep};
use crate::locate::PlacesService;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Places service backed by a remote search endpoint.
///
/// The endpoint returns ranked hits either as a bare JSON array or
/// wrapped in `{ "results": [...] }`; both shapes are accepted here and
/// the per-hit key variance is left to the normalization adapter.
pub struct HttpPlacesService {
    client: Client,
    base_url: String,
}

impl HttpPlacesService {
    /// Create a client against the given API base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PlacesService for HttpPlacesService {
    async fn search(&self, name: &str) -> Result<Vec<Value>> {
        let url = format!("{}/places/search", self.base_url);

        let tagged = |e: reqwest::Error| Error::Network {
            step: SubmitStep::PlaceSearch,
            message: e.to_string(),
        };

        let body: Value = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(tagged)?
            .error_for_status()
            .map_err(tagged)?
            .json()
            .await
            .map_err(tagged)?;

        let hits = match body {
            Value::Array(hits) => hits,
            Value::Object(mut obj) => match obj.remove("results") {
                Some(Value::Array(hits)) => hits,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        tracing::debug!(name, hits = hits.len(), "place search completed");
        Ok(hits)
    }
}
