//! MCP error types

use std::io;

use super::protocol::JsonRpcError;

/// Errors raised while serving MCP requests or talking to Godot
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    // === Connection Errors ===

    /// Every attempt of a connect sequence failed
    #[error("Failed to connect to Godot at {uri} after {attempts} attempts ({last_error}). Make sure Godot is running with the MCP addon enabled.")]
    ConnectFailed {
        uri: String,
        attempts: u32,
        last_error: String,
    },

    /// A command was issued without an open connection
    #[error("Not connected to Godot")]
    NotConnected,

    // === Transport Errors ===

    /// Sending or receiving a frame failed
    #[error("WebSocket error: {0}")]
    Transport(String),

    /// Godot closed the socket
    #[error("Connection closed by Godot")]
    ConnectionClosed,

    /// No reply arrived within the configured response timeout
    #[error("No response from Godot within {seconds}s")]
    ResponseTimeout { seconds: f64 },

    // === Reply Errors ===

    /// Reply text was not valid JSON
    #[error("Invalid JSON response from Godot: {0}")]
    ProtocolParse(String),

    /// Reply was JSON but not a reply object
    #[error("Invalid response from Godot: {0}")]
    InvalidReply(String),

    // === Local Errors ===

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error (stdin/stdout)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === JSON-RPC Errors ===

    /// Method not found
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Unknown tool
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl McpError {
    /// Whether the error leaves the socket in an unknown state
    ///
    /// After one of these the connection must be dropped: a reply may still
    /// be in flight and would be misread as the answer to the next command.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::ConnectionClosed | Self::ResponseTimeout { .. }
        )
    }
}

impl From<McpError> for JsonRpcError {
    fn from(err: McpError) -> Self {
        match err {
            McpError::MethodNotFound(method) => JsonRpcError::new(
                JsonRpcError::METHOD_NOT_FOUND,
                format!("Method not found: {}", method),
            ),
            McpError::InvalidParams(msg) => {
                JsonRpcError::new(JsonRpcError::INVALID_PARAMS, msg)
            }
            McpError::UnknownTool(name) => {
                JsonRpcError::new(JsonRpcError::METHOD_NOT_FOUND, format!("Unknown tool: {}", name))
            }
            McpError::Serialize(err) => {
                JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, format!("JSON error: {}", err))
            }
            McpError::Io(err) => {
                JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, format!("IO error: {}", err))
            }
            other => JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_failed_message() {
        let err = McpError::ConnectFailed {
            uri: "ws://localhost:9080".into(),
            attempts: 4,
            last_error: "Connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ws://localhost:9080"));
        assert!(msg.contains("4 attempts"));
        assert!(msg.contains("Connection refused"));
        assert!(msg.contains("MCP addon enabled"));
    }

    #[test]
    fn test_response_timeout_message() {
        let err = McpError::ResponseTimeout { seconds: 2.5 };
        assert_eq!(err.to_string(), "No response from Godot within 2.5s");
    }

    #[test]
    fn test_transport_failures() {
        assert!(McpError::Transport("reset".into()).is_transport_failure());
        assert!(McpError::ConnectionClosed.is_transport_failure());
        assert!(McpError::ResponseTimeout { seconds: 1.0 }.is_transport_failure());

        assert!(!McpError::NotConnected.is_transport_failure());
        assert!(!McpError::ProtocolParse("eof".into()).is_transport_failure());
        assert!(!McpError::InvalidReply("array".into()).is_transport_failure());
    }

    #[test]
    fn test_unknown_tool_maps_to_method_not_found() {
        let rpc: JsonRpcError = McpError::UnknownTool("explode".into()).into();
        assert_eq!(rpc.code, JsonRpcError::METHOD_NOT_FOUND);
        assert_eq!(rpc.message, "Unknown tool: explode");
    }

    #[test]
    fn test_invalid_params_code() {
        let rpc: JsonRpcError = McpError::InvalidParams("Missing 'name' parameter".into()).into();
        assert_eq!(rpc.code, JsonRpcError::INVALID_PARAMS);
    }

    #[test]
    fn test_connection_errors_map_to_internal() {
        let rpc: JsonRpcError = McpError::NotConnected.into();
        assert_eq!(rpc.code, JsonRpcError::INTERNAL_ERROR);
        assert_eq!(rpc.message, "Not connected to Godot");
    }
}
