//! godot-mcp - MCP server for the Godot editor
//!
//! Speaks MCP over stdio and drives the editor through the Godot MCP
//! addon's WebSocket server.

use tracing::{error, info};

use godot_mcp_utils::{init_logging_with_config, BridgeError, Result};

mod config;
pub mod mcp;

use config::BridgeConfig;
use mcp::{GodotClient, McpBridge};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BridgeConfig::parse_args();
    config.validate()?;

    // Logs go to stderr or a file; stdout carries MCP
    init_logging_with_config(config.log_config())?;

    let host = config.host_config();
    info!(uri = %host.uri(), "godot-mcp starting");

    let client = GodotClient::new(host);
    let mut bridge = McpBridge::new(client.clone());

    let result = bridge.run().await;
    client.disconnect().await;

    match result {
        Ok(()) => {
            info!("godot-mcp exiting normally");
            Ok(())
        }
        Err(e) => {
            error!("godot-mcp error: {}", e);
            Err(BridgeError::internal(e.to_string()))
        }
    }
}
