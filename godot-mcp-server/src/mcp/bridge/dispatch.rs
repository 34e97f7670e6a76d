//! Tool execution against the Godot connection
//!
//! [`GodotClient::execute`] is the one place where a tool call turns into a
//! command, a reply turns into an [`Envelope`], and errors of every kind
//! become error envelopes.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use godot_mcp_protocol::{Command, Envelope};

use crate::config::HostConfig;
use crate::mcp::error::McpError;
use crate::mcp::operations::{self, Operation};
use crate::mcp::tools::CHECK_CONNECTION;

use super::connection::GodotConnection;
use super::health::{health_report, ConnectionState};

/// Error text the addon sends when no scene is being edited
pub const NO_SCENE_OPEN: &str = "No scene is currently open";

/// What callers are told instead of [`NO_SCENE_OPEN`]
pub const NO_SCENE_OPEN_HINT: &str =
    "No scene is currently open. Please open a scene in Godot editor first, then try again.";

/// Shared handle to the Godot connection
///
/// Cloning is cheap; all clones use the same socket and take turns on it.
#[derive(Clone)]
pub struct GodotClient {
    connection: Arc<Mutex<GodotConnection>>,
    config: HostConfig,
}

impl GodotClient {
    pub fn new(config: HostConfig) -> Self {
        Self {
            connection: Arc::new(Mutex::new(GodotConnection::new(config.clone()))),
            config,
        }
    }

    pub async fn connect(&self) -> Result<(), McpError> {
        self.connection.lock().await.connect().await
    }

    pub async fn disconnect(&self) {
        self.connection.lock().await.disconnect().await;
    }

    pub async fn is_connected(&self) -> bool {
        self.connection.lock().await.is_connected()
    }

    pub async fn state(&self) -> ConnectionState {
        self.connection.lock().await.state()
    }

    /// Total connection attempts made so far
    pub async fn connection_attempts(&self) -> u64 {
        self.connection.lock().await.attempts()
    }

    /// Run a tool by name
    pub async fn call_tool(&self, name: &str, arguments: &Value) -> Result<Envelope, McpError> {
        if name == CHECK_CONNECTION {
            return Ok(self.check_connection().await);
        }
        let op = operations::lookup(name).ok_or_else(|| McpError::UnknownTool(name.into()))?;
        Ok(self.execute(op, arguments).await)
    }

    /// Run one table-driven operation
    pub async fn execute(&self, op: &Operation, arguments: &Value) -> Envelope {
        let args = match op.build_args(arguments) {
            Ok(args) => args,
            Err(e) => {
                warn!(tool = op.name, error = %e, "Rejected tool arguments");
                return Envelope::error(format!("Invalid arguments for {}: {}", op.name, e));
            }
        };
        let prefix = op.error_prefix.render(&args);
        let command = op.command(&args);

        let result = {
            let mut connection = self.connection.lock().await;
            match connection.ensure_connected().await {
                Ok(()) => connection.send_command(&command).await,
                Err(e) => Err(e),
            }
        };

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!(tool = op.name, error = %e, "Command failed");
                return Envelope::error(format!("{}: {}", prefix, e));
            }
        };

        if reply.is_success() {
            debug!(tool = op.name, "Command succeeded");
            return Envelope::success((op.format)(&args, &reply.data_or_empty()));
        }

        let error = reply.error_text();
        info!(tool = op.name, error = %error, "Godot reported an error");
        if error == NO_SCENE_OPEN {
            Envelope::error(NO_SCENE_OPEN_HINT)
        } else {
            Envelope::error(format!("{}: {}", prefix, error))
        }
    }

    /// Probe the link with `get_debug_info` and summarize editor health
    pub async fn check_connection(&self) -> Envelope {
        let mut connection = self.connection.lock().await;
        if let Err(e) = connection.ensure_connected().await {
            return Envelope::error(format!("Connection check failed: {}", e));
        }

        match connection.send_command(&Command::bare("get_debug_info")).await {
            Ok(reply) if reply.is_success() => {
                Envelope::success(health_report(&self.config, &reply.data_or_empty()))
            }
            Ok(reply) => Envelope::error(format!(
                "Connected but communication failed: {}",
                reply.error_text()
            )),
            Err(e) => Envelope::error(format!("Connection check failed: {}", e)),
        }
    }
}
