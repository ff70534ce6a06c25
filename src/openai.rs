//! Shared OpenAI API client
//!
//! Both pipeline steps talk to the same API with the same credential, so a
//! single HTTP client is constructed once and reused (avoids repeated TLS
//! handshakes). `ClientCell` is the lazy cache; it is owned by whoever drives
//! the pipeline, not stored in a global.

use reqwest::Client;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use crate::config::Settings;
use crate::{RecapError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Handle to the OpenAI HTTP API.
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    /// Construct a client from runtime settings.
    ///
    /// Fails with a configuration error if no API key is available.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.openai.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(RecapError::Config(
                "OpenAI API key is missing. Set openai.api_key in config or export \
                 OPENAI_API_KEY='your-api-key'."
                    .to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RecapError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            endpoint: settings.openai.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Build a POST request to an API path with bearer auth applied.
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}/{}", self.endpoint, path.trim_start_matches('/')))
            .bearer_auth(&self.api_key)
    }
}

/// Lazily-initialized, process-shareable cache for the API client.
///
/// The first `ensure` call reads the credential and constructs the client;
/// later calls return the cached handle without touching settings again.
#[derive(Default)]
pub struct ClientCell {
    inner: OnceLock<Arc<OpenAiClient>>,
}

impl ClientCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached client, constructing it on first use.
    pub fn ensure(&self, settings: &Settings) -> Result<Arc<OpenAiClient>> {
        if let Some(client) = self.inner.get() {
            return Ok(client.clone());
        }

        let client = Arc::new(OpenAiClient::from_settings(settings)?);
        // A concurrent ensure may have won the race; either handle is fine.
        Ok(self.inner.get_or_init(|| client).clone())
    }
}
