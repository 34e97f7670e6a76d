//! MCP Bridge - Connects MCP protocol to the Godot editor
//!
//! This module implements the MCP bridge that translates between MCP JSON-RPC
//! (over stdio) and the Godot addon's command protocol (over WebSocket).

pub mod connection;
pub mod dispatch;
pub mod health;


use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

/// Global request counter for generating unique request IDs within this bridge instance
static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

use crate::mcp::error::McpError;
use crate::mcp::protocol::{
    InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolResult, ToolsListResult,
};
use crate::mcp::tools::get_tool_definitions;

pub use self::connection::GodotConnection;
pub use self::dispatch::GodotClient;
pub use self::health::ConnectionState;

/// MCP Bridge
///
/// Serves MCP over stdio and forwards tool calls to Godot. The connection is
/// opened lazily by the first tool call that needs it.
pub struct McpBridge {
    client: GodotClient,
    initialized: bool,
}

impl McpBridge {
    pub fn new(client: GodotClient) -> Self {
        Self {
            client,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the MCP bridge, reading from stdin and writing to stdout
    pub async fn run(&mut self) -> Result<(), McpError> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = std::io::stdout();
        self.serve(stdin, stdout.lock()).await
    }

    /// Serve newline-delimited JSON-RPC until the input ends
    ///
    /// The Godot connection is closed once the input is exhausted.
    pub async fn serve<R, W>(&mut self, reader: R, mut out: W) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = reader.lines();

        info!("MCP bridge starting");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            // Request ID for log correlation only
            let log_req_id = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);

            debug!(req_id = log_req_id, raw = %line, "Received raw JSON-RPC request");

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    error!(
                        req_id = log_req_id,
                        error = %e,
                        raw_input = %line,
                        "Failed to parse JSON-RPC request"
                    );
                    let response = JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::new(JsonRpcError::PARSE_ERROR, e.to_string()),
                    );
                    write_response(&mut out, &response)?;
                    continue;
                }
            };

            info!(
                req_id = log_req_id,
                method = %request.method,
                jsonrpc_id = ?request.id,
                "Incoming JSON-RPC request"
            );

            if request.jsonrpc != "2.0" {
                error!(
                    req_id = log_req_id,
                    method = %request.method,
                    got_version = %request.jsonrpc,
                    "Invalid JSON-RPC version"
                );
                let response = JsonRpcResponse::error(
                    request.id,
                    JsonRpcError::with_data(
                        JsonRpcError::INVALID_REQUEST,
                        "Invalid JSON-RPC version",
                        json!({"expected": "2.0", "got": request.jsonrpc}),
                    ),
                );
                write_response(&mut out, &response)?;
                continue;
            }

            let method = request.method.clone();
            let start = std::time::Instant::now();
            let response = self.handle_request(request).await;
            let elapsed_ms = start.elapsed().as_millis();

            match response {
                Some(response) => {
                    if response.is_error() {
                        warn!(
                            req_id = log_req_id,
                            method = %method,
                            elapsed_ms = %elapsed_ms,
                            error = ?response.error,
                            "JSON-RPC request completed with error"
                        );
                    } else {
                        info!(
                            req_id = log_req_id,
                            method = %method,
                            elapsed_ms = %elapsed_ms,
                            "JSON-RPC request completed successfully"
                        );
                    }
                    write_response(&mut out, &response)?;
                }
                None => {
                    info!(
                        req_id = log_req_id,
                        method = %method,
                        elapsed_ms = %elapsed_ms,
                        "Notification handled (no response)"
                    );
                }
            }
        }

        info!("MCP bridge shutting down");
        self.client.disconnect().await;
        Ok(())
    }

    /// Handle a JSON-RPC request
    async fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(&request.params).await,
            _ => Err(McpError::MethodNotFound(request.method.clone())),
        };

        if request.is_notification() {
            if let Err(e) = result {
                warn!(method = %request.method, error = %e, "Notification handling failed");
            }
            return None;
        }

        Some(match result {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::error(request.id, e.into()),
        })
    }

    fn handle_initialize(&mut self) -> Result<Value, McpError> {
        self.initialized = true;
        info!("MCP bridge initialized");
        Ok(serde_json::to_value(InitializeResult::default())?)
    }

    fn handle_tools_list(&self) -> Result<Value, McpError> {
        let result = ToolsListResult {
            tools: get_tool_definitions(),
        };
        Ok(serde_json::to_value(result)?)
    }

    async fn handle_tools_call(&mut self, params: &Value) -> Result<Value, McpError> {
        let name = params["name"]
            .as_str()
            .ok_or_else(|| McpError::InvalidParams("Missing 'name' parameter".into()))?;
        let arguments = &params["arguments"];

        info!(tool = %name, "Dispatching tool call");
        debug!(tool = %name, arguments = %arguments, "Tool call arguments");

        let envelope = self.client.call_tool(name, arguments).await.map_err(|e| {
            error!(tool = %name, error = %e, "Tool call failed");
            e
        })?;

        if envelope.is_success() {
            info!(tool = %name, "Tool call completed successfully");
        } else {
            warn!(tool = %name, error = ?envelope.message(), "Tool call returned an error");
        }

        Ok(serde_json::to_value(ToolResult::text(envelope.to_json_pretty()))?)
    }
}

fn write_response<W: Write>(out: &mut W, response: &JsonRpcResponse) -> Result<(), McpError> {
    let json = serde_json::to_string(response)?;
    debug!(raw = %json, "Sending raw JSON-RPC response");
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
