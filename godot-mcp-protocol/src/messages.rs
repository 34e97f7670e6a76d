//! Command and reply frames
//!
//! The addon speaks a strict request/reply protocol: one [`Command`] goes
//! out, exactly one [`HostReply`] comes back. Frames carry no request id, so
//! anything the addon pushes on its own (a greeting on connect, for
//! instance) has to be recognised and discarded before the next command.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::STATUS_SUCCESS;

/// Frame `type` values the addon pushes without being asked
pub const NOTIFICATION_TYPES: &[&str] = &["welcome"];

/// Outgoing request: `{"type": ..., "params": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command name understood by the addon (e.g. "create_node")
    #[serde(rename = "type")]
    pub command_type: String,
    /// Operation-specific parameters, passed through untouched
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl Command {
    /// Create a command with the given parameters
    pub fn new(command_type: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            command_type: command_type.into(),
            params,
        }
    }

    /// Create a command with no parameters
    pub fn bare(command_type: impl Into<String>) -> Self {
        Self::new(command_type, Map::new())
    }
}

/// Errors turning reply text into a [`HostReply`]
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reply is not a JSON object (got {0})")]
    NotAnObject(&'static str),
}

/// The addon's answer to exactly one [`Command`]
///
/// Every field is optional on the wire. Anything other than
/// `status == "success"` counts as a failure, including a missing status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl HostReply {
    /// Parse reply text received from the addon
    pub fn parse(text: &str) -> Result<Self, ReplyError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Interpret an already-parsed JSON value as a reply
    pub fn from_value(value: Value) -> Result<Self, ReplyError> {
        if !value.is_object() {
            return Err(ReplyError::NotAnObject(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Build a success reply, as the addon would send it
    pub fn success(data: Value) -> Self {
        Self {
            status: Some(STATUS_SUCCESS.into()),
            data: Some(data),
            error: None,
        }
    }

    /// Build an error reply
    pub fn failure(error: impl Into<Value>) -> Self {
        Self {
            status: Some(crate::STATUS_ERROR.into()),
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }

    /// Reply payload, with a missing or null `data` treated as `{}`
    pub fn data_or_empty(&self) -> Value {
        match &self.data {
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(data) => data.clone(),
        }
    }

    /// Error description as text
    ///
    /// Strings are returned verbatim; structured errors are rendered as
    /// compact JSON.
    pub fn error_text(&self) -> String {
        match &self.error {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "Unknown error".into(),
            Some(other) => other.to_string(),
        }
    }
}

/// Whether a frame is an unsolicited notification rather than a reply
pub fn is_notification(value: &Value) -> bool {
    value
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| NOTIFICATION_TYPES.contains(&t))
}

/// JSON type name of a value, for error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
