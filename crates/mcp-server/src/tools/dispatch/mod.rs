//! MCP tool dispatch for Comedy MCP
//!
//! Each tool fetches at most one joke and always answers with a successful text result; fetch
//! failures are logged and replaced by the tool's fallback text.

use comedy_joke_api::JokeSource;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use std::sync::Arc;

mod router;
mod service;

#[cfg(test)]
mod tests;

/// Topic used when a caller does not pass one.
const DEFAULT_TOPIC: &str = "programming";

/// Comedy MCP Service
#[derive(Clone)]
pub struct ComedyService {
    /// Shared joke source (one HTTP client for the whole process)
    jokes: Arc<dyn JokeSource>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

fn topic_or_default(topic: Option<String>) -> String {
    topic
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string())
}
