//! Comedy MCP Server
//!
//! Serves programming jokes to AI agents via MCP, shaped as code comments that fit the snippet
//! they were requested for.
//!
//! ## Tools
//!
//! - `get_programming_joke` - A random programming joke
//! - `get_funny_comment` - A joke for a comment, or for a code snippet when one is given
//! - `get_code_joke` - A joke comment tailored to a variable, function, or class snippet
//! - `echo_with_log` - Echo a message back (connectivity check)
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "comedy": {
//!       "command": "comedy-mcp"
//!     }
//!   }
//! }
//! ```
//!
//! Set `COMEDY_JOKE_API_URL` to point at a different joke endpoint.

use anyhow::{Context, Result};
use comedy_joke_api::{JokeApiConfig, JokeClient, DEFAULT_JOKE_API_URL};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use std::sync::Arc;

mod tools;

use tools::ComedyService;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--print-tools") {
        let inventory = tools::catalog::tool_inventory_json(env!("CARGO_PKG_VERSION"));
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Comedy MCP server");

    let config = JokeApiConfig::from_env();
    if config.url != DEFAULT_JOKE_API_URL {
        log::info!("Joke API URL overridden via environment: {}", config.url);
    }
    let jokes = JokeClient::new(config).context("Failed to build joke API client")?;

    // Create and start the MCP server
    let service = ComedyService::new(Arc::new(jokes));
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Comedy MCP server stopped");
    Ok(())
}
