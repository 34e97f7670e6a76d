use serde_json::{json, Value};

use crate::config::HostConfig;

/// Connection state of the Godot link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No socket; the next command reconnects on demand
    #[default]
    Disconnected,
    /// A connect sequence is in progress
    Connecting,
    /// Socket open and usable
    Connected,
}

impl ConnectionState {
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}

/// Build the health report returned by `check_connection`
///
/// `debug` is the data of a successful `get_debug_info` reply. Missing or
/// malformed fields fall back to neutral values.
pub fn health_report(config: &HostConfig, debug: &Value) -> Value {
    let godot_version = debug
        .pointer("/godot_version/string")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    let active_clients = debug
        .pointer("/server_status/client_count")
        .filter(|v| v.is_number())
        .cloned()
        .unwrap_or_else(|| json!(0));
    let server_uptime = match debug.get("timestamp") {
        None | Some(Value::Null) => json!("Unknown"),
        Some(ts) => ts.clone(),
    };
    let error_log_size = debug
        .get("error_log")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);

    json!({
        "status": "Healthy",
        "websocket_host": config.host,
        "websocket_port": config.port,
        "godot_version": godot_version,
        "active_clients": active_clients,
        "server_uptime": server_uptime,
        "error_log_size": error_log_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        assert_eq!(ConnectionState::default(), ConnectionState::Disconnected);
        assert!(!ConnectionState::Connecting.is_connected());
        assert!(ConnectionState::Connected.is_connected());
    }

    #[test]
    fn test_full_report() {
        let debug = json!({
            "godot_version": {"string": "4.5.stable", "major": 4},
            "server_status": {"client_count": 2},
            "timestamp": 1712.5,
            "error_log": ["a", "b", "c"]
        });
        let report = health_report(&HostConfig::default(), &debug);

        assert_eq!(report["status"], "Healthy");
        assert_eq!(report["websocket_host"], "localhost");
        assert_eq!(report["websocket_port"], 9080);
        assert_eq!(report["godot_version"], "4.5.stable");
        assert_eq!(report["active_clients"], 2);
        assert_eq!(report["server_uptime"], 1712.5);
        assert_eq!(report["error_log_size"], 3);
    }

    #[test]
    fn test_empty_debug_data() {
        let report = health_report(&HostConfig::default(), &json!({}));

        assert_eq!(report["godot_version"], "Unknown");
        assert_eq!(report["active_clients"], 0);
        assert_eq!(report["server_uptime"], "Unknown");
        assert_eq!(report["error_log_size"], 0);
    }

    #[test]
    fn test_error_log_not_a_list() {
        let report = health_report(&HostConfig::default(), &json!({"error_log": "oops"}));
        assert_eq!(report["error_log_size"], 0);
    }
}
