//! Canonical result envelope returned for every tool call

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload carried by [`Envelope::Error`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// `{"status": "success", "data": ...}` or `{"status": "error", "error": {"message": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success { data: Value },
    Error { error: ErrorBody },
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Error message, if this is an error envelope
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { error } => Some(&error.message),
            Self::Success { .. } => None,
        }
    }

    /// Render as the pretty-printed JSON text handed to MCP callers
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!(
                "{{\n  \"status\": \"error\",\n  \"error\": {{\n    \"message\": {}\n  }}\n}}",
                Value::String(e.to_string())
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let env = Envelope::success(json!({"scene_path": "res://test.tscn"}));
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"status": "success", "data": {"scene_path": "res://test.tscn"}})
        );
        assert!(env.is_success());
        assert!(env.message().is_none());
    }

    #[test]
    fn test_error_shape() {
        let env = Envelope::error("Failed to create InvalidType node: Invalid node type");
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({
                "status": "error",
                "error": {"message": "Failed to create InvalidType node: Invalid node type"}
            })
        );
        assert!(!env.is_success());
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let env = Envelope::error("boom");
        let text = env.to_json_pretty();
        assert!(text.contains('\n'));

        let parsed: Envelope = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, env);
    }

    #[test]
    fn test_deserialize_rejects_unknown_status() {
        let result: Result<Envelope, _> =
            serde_json::from_value(json!({"status": "pending", "data": {}}));
        assert!(result.is_err());
    }
}
