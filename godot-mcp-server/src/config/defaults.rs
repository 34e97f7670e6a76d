//! Default configuration values
//!
//! These match the defaults the Godot addon ships with, so the bridge works
//! out of the box against a stock editor install.

/// Host the addon's WebSocket server listens on
pub const HOST: &str = "localhost";

/// Port the addon's WebSocket server listens on
pub const PORT: u16 = 9080;

/// Per-attempt connect timeout, in seconds
pub const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Connect retries after the first attempt
pub const MAX_RETRIES: u32 = 3;

/// Pause between connect attempts, in seconds
pub const RETRY_DELAY_SECS: f64 = 2.0;

/// How long the drain waits for an unsolicited message before giving up
pub const DRAIN_TIMEOUT_MS: u64 = 10;

/// Log level name
pub const LOG_LEVEL: &str = "INFO";
