//! Configuration for the godot-mcp bridge
//!
//! Every setting comes from a command-line flag with an environment
//! variable fallback, so the bridge can be configured from an MCP client's
//! `env` block without touching its argument list.

pub mod defaults;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use godot_mcp_utils::{BridgeError, LogConfig, Result};

/// godot-mcp - drive the Godot editor over MCP
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct BridgeConfig {
    /// Host running the Godot editor with the MCP addon
    #[arg(long, env = "GODOT_HOST", default_value = defaults::HOST)]
    pub host: String,

    /// WebSocket port of the MCP addon
    #[arg(long, env = "GODOT_PORT", default_value_t = defaults::PORT)]
    pub port: u16,

    /// Timeout for each connection attempt, in seconds
    #[arg(long, env = "GODOT_TIMEOUT", default_value_t = defaults::CONNECT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Connection retries after the first attempt
    #[arg(long, env = "GODOT_MAX_RETRIES", default_value_t = defaults::MAX_RETRIES)]
    pub max_retries: u32,

    /// Delay between connection attempts, in seconds
    #[arg(long, env = "GODOT_RETRY_DELAY", default_value_t = defaults::RETRY_DELAY_SECS)]
    pub retry_delay: f64,

    /// Maximum time to wait for a reply to a command, in seconds
    ///
    /// Unset means wait indefinitely. When a reply does not arrive in time
    /// the connection is dropped and re-established on the next call.
    #[arg(long, env = "GODOT_RESPONSE_TIMEOUT")]
    pub response_timeout: Option<f64>,

    /// How long to wait for unsolicited messages before each command, in milliseconds
    #[arg(long, env = "GODOT_DRAIN_TIMEOUT_MS", default_value_t = defaults::DRAIN_TIMEOUT_MS)]
    pub drain_timeout_ms: u64,

    /// Log level (DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(long, env = "LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    ///
    /// Relative paths are placed in the godot-mcp state directory.
    #[arg(long, env = "GODOT_MCP_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl BridgeConfig {
    /// Parse command-line arguments and environment
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Reject values that would make the connection loop misbehave
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(BridgeError::invalid("GODOT_PORT", "port must be non-zero"));
        }
        if self.timeout == 0 {
            return Err(BridgeError::invalid("GODOT_TIMEOUT", "timeout must be greater than 0"));
        }
        if !self.retry_delay.is_finite() || self.retry_delay < 0.0 {
            return Err(BridgeError::invalid(
                "GODOT_RETRY_DELAY",
                format!("expected a non-negative number of seconds, got {}", self.retry_delay),
            ));
        }
        if let Some(limit) = self.response_timeout {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(BridgeError::invalid(
                    "GODOT_RESPONSE_TIMEOUT",
                    format!("expected a positive number of seconds, got {}", limit),
                ));
            }
        }
        Ok(())
    }

    /// Connection settings
    ///
    /// Call [`validate`](Self::validate) first; out-of-range durations are
    /// clamped rather than rejected here.
    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            host: self.host.clone(),
            port: self.port,
            connect_timeout: Duration::from_secs(self.timeout),
            max_retries: self.max_retries,
            retry_delay: secs_f64(self.retry_delay),
            drain_timeout: Duration::from_millis(self.drain_timeout_ms),
            response_timeout: self.response_timeout.map(secs_f64),
        }
    }

    /// Logging settings
    pub fn log_config(&self) -> LogConfig {
        LogConfig::mcp_bridge(&self.log_level, self.log_file.clone())
    }
}

fn secs_f64(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

/// Settings for the WebSocket connection to the Godot addon
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Bound on each connection attempt
    pub connect_timeout: Duration,
    /// Attempts made by one connect sequence is `max_retries + 1`
    pub max_retries: u32,
    pub retry_delay: Duration,
    /// Bound on each receive while draining unsolicited messages
    pub drain_timeout: Duration,
    /// Bound on the wait for a command's reply; `None` waits forever
    pub response_timeout: Option<Duration>,
}

impl HostConfig {
    /// WebSocket URI of the addon
    pub fn uri(&self) -> String {
        format!("ws://{}:{}", self.host, self.port)
    }

    /// Total connection attempts per connect sequence
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.into(),
            port: defaults::PORT,
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
            max_retries: defaults::MAX_RETRIES,
            retry_delay: secs_f64(defaults::RETRY_DELAY_SECS),
            drain_timeout: Duration::from_millis(defaults::DRAIN_TIMEOUT_MS),
            response_timeout: None,
        }
    }
}
