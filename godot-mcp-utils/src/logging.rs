//! Logging infrastructure for godot-mcp
//!
//! Provides unified logging setup using the tracing ecosystem. Stdout carries
//! the MCP channel, so logs never go there: stderr by default, or a file.

use std::path::{Path, PathBuf};

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::{paths, BridgeError, Result};

/// Default log file name when file output is requested without a path
pub const DEFAULT_LOG_FILE: &str = "godot-mcp.log";

/// Log output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Log to stderr
    Stderr,
    /// Log to file
    File,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output destination
    pub output: LogOutput,
    /// Log level filter (e.g., "info", "godot_mcp_server=debug")
    pub filter: String,
    /// Include span events (enter/exit)
    pub span_events: bool,
    /// Include file/line in logs
    pub file_line: bool,
    /// Log file: absolute paths are used as-is, anything else lands in the
    /// log directory. Defaults to [`DEFAULT_LOG_FILE`].
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output: LogOutput::Stderr,
            filter: "info".into(),
            span_events: false,
            file_line: false,
            file: None,
        }
    }
}

impl LogConfig {
    /// Create config for the MCP bridge
    ///
    /// `level` is a `LOG_LEVEL` style name (DEBUG, INFO, WARNING, ...).
    /// Without a log file everything goes to stderr.
    pub fn mcp_bridge(level: &str, log_file: Option<PathBuf>) -> Self {
        let output = if log_file.is_some() {
            LogOutput::File
        } else {
            LogOutput::Stderr
        };
        let filter = filter_from_level_name(level);
        Self {
            output,
            filter: filter.into(),
            span_events: filter == "trace",
            file_line: log_file.is_some(),
            file: log_file,
        }
    }

    /// Where file output is written
    pub fn log_path(&self) -> PathBuf {
        resolve_log_path(self.file.as_deref())
    }
}

/// Map a level name to a tracing filter directive
///
/// Accepts the names used by the Godot tooling (`WARNING`, `CRITICAL`) as
/// well as tracing's own. Unknown names fall back to "info".
pub fn filter_from_level_name(level: &str) -> &'static str {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" | "WARN" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}

fn resolve_log_path(file: Option<&Path>) -> PathBuf {
    match file {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => paths::log_dir().join(path),
        None => paths::log_dir().join(DEFAULT_LOG_FILE),
    }
}

fn open_log_file(log_path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = log_path.parent() {
        paths::ensure_dir(parent).map_err(|e| BridgeError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| BridgeError::FileWrite {
            path: log_path.to_path_buf(),
            source: e,
        })
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| BridgeError::config(format!("Invalid log filter: {}", e)))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    let fmt_layer = if config.span_events {
        fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    } else {
        fmt_layer
    };

    let fmt_layer = if config.file_line {
        fmt_layer.with_file(true).with_line_number(true)
    } else {
        fmt_layer.with_file(false).with_line_number(false)
    };

    match config.output {
        LogOutput::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(std::io::stderr).with_ansi(false))
                .try_init()
                .map_err(|e| BridgeError::internal(format!("Failed to init logging: {}", e)))?;
        }
        LogOutput::File => {
            let file = open_log_file(&config.log_path())?;

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer.with_writer(file).with_ansi(false))
                .try_init()
                .map_err(|e| BridgeError::internal(format!("Failed to init logging: {}", e)))?;
        }
    }

    Ok(())
}
