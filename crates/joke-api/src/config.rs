use std::time::Duration;

/// Programming jokes only, unsafe categories blacklisted, single-line format.
pub const DEFAULT_JOKE_API_URL: &str = "https://v2.jokeapi.dev/joke/Programming?blacklistFlags=nsfw,religious,political,racist,sexist,explicit&type=single";

/// Overall budget for one outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the endpoint URL.
pub const JOKE_API_URL_ENV: &str = "COMEDY_JOKE_API_URL";

/// Endpoint settings for [`crate::JokeClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokeApiConfig {
    /// Full request URL, query string included
    pub url: String,

    /// Request timeout (connect + response)
    pub timeout: Duration,
}

impl Default for JokeApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_JOKE_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl JokeApiConfig {
    /// Defaults, with the URL taken from `COMEDY_JOKE_API_URL` when it is set and non-blank.
    pub fn from_env() -> Self {
        Self::from_url_override(std::env::var(JOKE_API_URL_ENV).ok())
    }

    fn from_url_override(url: Option<String>) -> Self {
        let url = url
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        match url {
            Some(url) => Self {
                url,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
