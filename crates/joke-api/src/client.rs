use crate::config::JokeApiConfig;
use crate::error::{JokeApiError, Result};
use crate::types::JokeApiResponse;
use async_trait::async_trait;
use reqwest::{Client, Url};

/// Anything that can produce a joke on demand.
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Fetch one joke. Implementations make a single attempt.
    async fn fetch_joke(&self) -> Result<String>;

    /// Fetch one joke, logging any failure and returning `fallback` instead.
    async fn fetch_joke_or(&self, fallback: &str) -> String {
        match self.fetch_joke().await {
            Ok(joke) => joke,
            Err(err) if err.is_timeout() => {
                log::warn!("Joke fetch timed out, using fallback: {err}");
                fallback.to_string()
            }
            Err(err) => {
                log::warn!("Joke fetch failed, using fallback: {err}");
                fallback.to_string()
            }
        }
    }
}

/// HTTP joke source backed by one long-lived `reqwest::Client`.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct JokeClient {
    http: Client,
    url: Url,
}

impl JokeClient {
    /// Build a client with its own connection pool and the configured timeout.
    pub fn new(config: JokeApiConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Self::with_http_client(http, &config.url)
    }

    /// Reuse an existing `reqwest::Client`; its timeout settings apply as-is.
    pub fn with_http_client(http: Client, url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| JokeApiError::invalid_config(format!("bad joke API URL '{url}': {e}")))?;
        log::info!("Joke client initialized. Using joke API URL: {url}");
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[async_trait]
impl JokeSource for JokeClient {
    async fn fetch_joke(&self) -> Result<String> {
        log::debug!("Fetching joke from {}", self.url);

        let response = self.http.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(JokeApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let envelope: JokeApiResponse = serde_json::from_str(&body)?;
        let joke = envelope.into_joke()?;

        log::info!("Successfully fetched joke: '{joke}'");
        Ok(joke)
    }
}
