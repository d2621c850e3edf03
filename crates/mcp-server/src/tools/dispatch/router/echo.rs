use super::super::{text_result, CallToolResult, ComedyService, McpError};
use crate::tools::schemas::echo::EchoRequest;

pub(in crate::tools::dispatch) async fn echo_with_log(
    _service: &ComedyService,
    request: EchoRequest,
) -> Result<CallToolResult, McpError> {
    log::info!("Echoing message: {}", request.message);
    Ok(text_result(format!("Echo: {}", request.message)))
}
