use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Request for the `get_programming_joke` tool.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct ProgrammingJokeRequest {
    /// Joke topic. Accepted for forward compatibility; does not change the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Joke topic (default: programming)")]
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct FunnyCommentRequest {
    /// Free-text comment the joke should relate to
    #[schemars(description = "Comment text; keywords like 'solo' or 'coworker' pick the tone")]
    pub comment: String,

    /// Optional code snippet; when present the joke is shaped to it instead of the comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Code snippet to tailor the joke to (variable, function, or class)")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Joke topic (default: programming)")]
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct CodeJokeRequest {
    /// Code snippet or comment to contextualize
    #[schemars(description = "Code snippet, e.g. `int a = 5;`, `doSomething(x, y)`, `public class Widget`")]
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Joke topic (default: programming)")]
    pub topic: Option<String>,
}
