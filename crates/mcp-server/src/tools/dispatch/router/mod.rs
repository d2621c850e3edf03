// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod echo;
pub(super) mod jokes;

mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::ComedyService> {
    tool_router::build_tool_router()
}
