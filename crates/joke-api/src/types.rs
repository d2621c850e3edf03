use crate::error::{JokeApiError, Result};
use serde::Deserialize;

/// Response envelope returned by JokeAPI.
///
/// Single jokes carry `joke`; two-part jokes carry `setup` and `delivery`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokeApiResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub joke: Option<String>,
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub delivery: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Error description, only present when `error` is true
    #[serde(default, alias = "errorMessage")]
    pub message: Option<String>,
}

impl JokeApiResponse {
    /// Extract the joke text, or the reason there is none.
    pub fn into_joke(self) -> Result<String> {
        if self.error {
            return Err(JokeApiError::Api(
                self.message
                    .unwrap_or_else(|| "unknown error from joke API".to_string()),
            ));
        }

        if let Some(joke) = self.joke.filter(|j| !j.trim().is_empty()) {
            return Ok(joke);
        }

        match (self.setup, self.delivery) {
            (Some(setup), Some(delivery)) => {
                let joke = format!("{} {}", setup.trim(), delivery.trim());
                if joke.trim().is_empty() {
                    Err(JokeApiError::EmptyJoke)
                } else {
                    Ok(joke)
                }
            }
            _ => Err(JokeApiError::EmptyJoke),
        }
    }
}
