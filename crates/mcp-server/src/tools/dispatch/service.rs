use super::{router, ComedyService};
use crate::tools::catalog;
use comedy_joke_api::JokeSource;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};
use std::sync::Arc;

impl ComedyService {
    /// Build the service around a joke source created once at startup.
    pub fn new(jokes: Arc<dyn JokeSource>) -> Self {
        Self {
            jokes,
            tool_router: router::build_tool_router(),
        }
    }

    pub(super) fn jokes(&self) -> &dyn JokeSource {
        self.jokes.as_ref()
    }
}

#[tool_handler]
impl ServerHandler for ComedyService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
