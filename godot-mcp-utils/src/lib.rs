//! godot-mcp-utils: Shared utilities for the godot-mcp bridge
//!
//! Process-level error type, logging setup and XDG path helpers.

pub mod error;
pub mod logging;
pub mod paths;

pub use error::{BridgeError, Result};
pub use logging::{init_logging_with_config, LogConfig, LogOutput};
