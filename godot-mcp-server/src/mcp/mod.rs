//! MCP (Model Context Protocol) server implementation
//!
//! Exposes the Godot editor's operations as MCP tools. Each tool call is
//! forwarded as a command over the addon's WebSocket server and the reply
//! is returned as a status envelope.
//!
//! MCP Protocol: <https://modelcontextprotocol.io/>

pub mod bridge;
pub mod error;
pub mod operations;
pub mod protocol;
pub mod tools;

pub use bridge::{GodotClient, McpBridge};
pub use error::McpError;
