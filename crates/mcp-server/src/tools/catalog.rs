use serde_json::json;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "get_programming_joke",
        summary: "A random programming joke.",
    },
    ToolDescriptor {
        name: "get_funny_comment",
        summary: "Joke for a comment (tone by keywords) or for a code snippet when `code` is set.",
    },
    ToolDescriptor {
        name: "get_code_joke",
        summary: "Joke comment shaped to a variable, function, or class snippet.",
    },
    ToolDescriptor {
        name: "echo_with_log",
        summary: "Echo a message back (connectivity check).",
    },
];

pub(crate) fn tool_inventory_json(version: &str) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = TOOL_CATALOG
        .iter()
        .map(|tool| json!({ "name": tool.name, "summary": tool.summary }))
        .collect();

    json!({
        "binary": "comedy-mcp",
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Comedy MCP serves programming jokes, optionally shaped as code comments.".to_string(),
        "Pass a code snippet to get_code_joke for a comment block that fits it; pass a free-text comment to get_funny_comment for a tone-matched one-liner.".to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}
