use super::*;
use async_trait::async_trait;
use comedy_joke_api::{JokeApiError, Result as JokeResult};
use std::sync::atomic::{AtomicUsize, Ordering};


const JOKE: &str = "Why do programmers prefer dark mode? Light attracts bugs.";

/// Joke source that answers from a script and counts calls.
struct StubJokes {
    joke: Option<&'static str>,
    calls: AtomicUsize,
}

impl StubJokes {
    fn ok(joke: &'static str) -> Arc<Self> {
        Arc::new(Self {
            joke: Some(joke),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            joke: None,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JokeSource for StubJokes {
    async fn fetch_joke(&self) -> JokeResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.joke
            .map(str::to_string)
            .ok_or(JokeApiError::Status(503))
    }
}

fn service_with(jokes: Arc<StubJokes>) -> ComedyService {
    ComedyService::new(jokes)
}

fn result_text(result: &CallToolResult) -> &str {
    assert_ne!(result.is_error, Some(true), "tool returned error");
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .expect("text content")
}
