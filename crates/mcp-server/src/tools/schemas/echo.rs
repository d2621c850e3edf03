use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Request for the `echo_with_log` tool.
#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Default)]
pub struct EchoRequest {
    #[schemars(description = "Message to echo back")]
    pub message: String,
}
