//! # Comedy Joke API
//!
//! One-shot client for [JokeAPI](https://v2.jokeapi.dev).
//!
//! Every call performs a single GET against the configured endpoint, with no retries. Callers
//! that must never fail use [`JokeSource::fetch_joke_or`] and supply their own fallback text.
//!
//! ```no_run
//! use comedy_joke_api::{JokeApiConfig, JokeClient, JokeSource};
//!
//! # async fn demo() -> comedy_joke_api::Result<()> {
//! let client = JokeClient::new(JokeApiConfig::from_env())?;
//! let joke = client.fetch_joke_or("No joke today.").await;
//! println!("{joke}");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::{JokeClient, JokeSource};
pub use config::{JokeApiConfig, DEFAULT_JOKE_API_URL, DEFAULT_TIMEOUT, JOKE_API_URL_ENV};
pub use error::{JokeApiError, Result};
pub use types::JokeApiResponse;
