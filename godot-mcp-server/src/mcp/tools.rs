//! MCP tool definitions for the Godot bridge

use serde_json::json;

use super::operations;
use super::protocol::Tool;

/// Tool handled by the client itself rather than the operation table
pub const CHECK_CONNECTION: &str = "check_connection";

/// Get the list of all available tools
pub fn get_tool_definitions() -> Vec<Tool> {
    let mut tools: Vec<Tool> = operations::all()
        .iter()
        .map(|op| Tool {
            name: op.name.into(),
            description: op.description(),
            input_schema: op.input_schema(),
        })
        .collect();

    tools.push(Tool {
        name: CHECK_CONNECTION.into(),
        description: "Check the connection to Godot and report editor health: Godot version, \
                      connected clients, uptime and error log size."
            .into(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    });

    tools
}
