use super::super::{CallToolResult, ComedyService, McpError};
use crate::tools::schemas::echo::EchoRequest;
use crate::tools::schemas::jokes::{CodeJokeRequest, FunnyCommentRequest, ProgrammingJokeRequest};

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_router() -> ToolRouter<ComedyService> {
    ComedyService::tool_router()
}

#[tool_router]
impl ComedyService {
    /// Plain programming joke.
    #[tool(description = "Get a random programming joke.")]
    pub async fn get_programming_joke(
        &self,
        Parameters(request): Parameters<ProgrammingJokeRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::jokes::programming_joke(self, request).await
    }

    /// Joke for a comment, or for a code snippet when one is supplied.
    #[tool(
        description = "Get a funny comment for a piece of text. Mentions of 'solo'/'lonely' or 'troll'/'coworker' change the tone. If `code` is given, the joke is shaped to that snippet instead."
    )]
    pub async fn get_funny_comment(
        &self,
        Parameters(request): Parameters<FunnyCommentRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::jokes::funny_comment(self, request).await
    }

    /// Joke comment block tailored to a code snippet.
    #[tool(
        description = "Get a joke as a `//` comment block tailored to a code snippet: variables walk into bars, functions speak, classes inherit from Humor."
    )]
    pub async fn get_code_joke(
        &self,
        Parameters(request): Parameters<CodeJokeRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::jokes::code_joke(self, request).await
    }

    #[tool(description = "Echo the message back, logging it on the server side.")]
    pub async fn echo_with_log(
        &self,
        Parameters(request): Parameters<EchoRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::echo::echo_with_log(self, request).await
    }
}
