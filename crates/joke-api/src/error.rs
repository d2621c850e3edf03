use thiserror::Error;

/// Result type for joke API operations
pub type Result<T> = std::result::Result<T, JokeApiError>;

/// Errors that can occur while fetching a joke
#[derive(Error, Debug)]
pub enum JokeApiError {
    /// Connection, TLS or timeout failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx HTTP status
    #[error("Joke API returned HTTP {0}")]
    Status(u16),

    /// Body was not the expected JSON envelope
    #[error("Malformed joke API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with `"error": true`
    #[error("Joke API reported an error: {0}")]
    Api(String),

    /// Envelope parsed but carried no joke text
    #[error("Joke API response contained no joke")]
    EmptyJoke,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl JokeApiError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}
