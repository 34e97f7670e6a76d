//! godot-mcp-protocol: Wire types for the Godot editor bridge
//!
//! This crate defines the JSON frames exchanged with the Godot editor addon
//! over its WebSocket server, and the envelope shape handed back to MCP
//! callers for every tool invocation.

pub mod envelope;
pub mod messages;
pub mod value;

// Re-export main types at crate root
pub use envelope::{Envelope, ErrorBody};
pub use messages::{is_notification, json_kind, Command, HostReply, ReplyError, NOTIFICATION_TYPES};
pub use value::PropertyValue;

/// Status string the addon uses for a successful reply
pub const STATUS_SUCCESS: &str = "success";

/// Status string the addon uses for a failed reply
pub const STATUS_ERROR: &str = "error";
