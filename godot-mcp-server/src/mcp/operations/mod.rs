//! Operation table
//!
//! Every tool that maps onto a single Godot command is one [`Operation`]
//! row: the command it sends, the arguments it accepts, how a successful
//! reply is reshaped, and the prefix used when it fails. The dispatch
//! routine in [`crate::mcp::bridge::dispatch`] is the only code that runs
//! them.

mod animation;
mod editor;
mod nodes;
mod project;
mod resources;
mod runtime;
mod scenes;
mod scripts;
mod signals;

use std::collections::HashMap;

use godot_mcp_protocol::{json_kind, Command, PropertyValue};
use lazy_static::lazy_static;
use serde_json::{json, Map, Value};

lazy_static! {
    static ref OPERATIONS: Vec<Operation> = build_table();
    static ref BY_NAME: HashMap<&'static str, usize> = OPERATIONS
        .iter()
        .enumerate()
        .map(|(index, op)| (op.name, index))
        .collect();
}

fn build_table() -> Vec<Operation> {
    let mut table = Vec::new();
    table.extend(nodes::operations());
    table.extend(signals::operations());
    table.extend(scripts::operations());
    table.extend(resources::operations());
    table.extend(scenes::operations());
    table.extend(runtime::operations());
    table.extend(animation::operations());
    table.extend(editor::operations());
    table.extend(project::operations());
    table
}

/// All table-driven operations, in tool listing order
pub fn all() -> &'static [Operation] {
    &OPERATIONS
}

/// Find an operation by tool name
pub fn lookup(name: &str) -> Option<&'static Operation> {
    BY_NAME.get(name).map(|&index| &OPERATIONS[index])
}

/// JSON type accepted for an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    /// Vector or color components, e.g. `[100, 200]`
    NumberList,
    /// Array of arbitrary values
    List,
    /// Any JSON value, passed through as a [`PropertyValue`]
    Any,
}

impl ParamKind {
    fn expected(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Integer => "an integer",
            Self::Number => "a number",
            Self::Boolean => "a boolean",
            Self::NumberList => "an array of numbers",
            Self::List => "an array",
            Self::Any => "any value",
        }
    }

    /// Check a value against this kind, normalizing where lossless
    ///
    /// Integers written as `2.0` are accepted for integer arguments.
    fn coerce(self, value: &Value) -> Option<Value> {
        match (self, value) {
            (Self::Any, v) => Some(v.clone()),
            (Self::String, Value::String(_))
            | (Self::Number, Value::Number(_))
            | (Self::Boolean, Value::Bool(_))
            | (Self::List, Value::Array(_)) => Some(value.clone()),
            (Self::Integer, Value::Number(n)) => {
                if n.is_i64() || n.is_u64() {
                    Some(value.clone())
                } else {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                        .map(|f| json!(f as i64))
                }
            }
            (Self::NumberList, Value::Array(items)) if items.iter().all(Value::is_number) => {
                Some(value.clone())
            }
            _ => None,
        }
    }

    fn schema(self) -> Value {
        match self {
            Self::String => json!({"type": "string"}),
            Self::Integer => json!({"type": "integer"}),
            Self::Number => json!({"type": "number"}),
            Self::Boolean => json!({"type": "boolean"}),
            Self::NumberList => json!({"type": "array", "items": {"type": "number"}}),
            Self::List => json!({"type": "array"}),
            Self::Any => json!({}),
        }
    }
}

/// Value used when an optional argument is omitted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Required,
    Str(&'static str),
    Int(i64),
    Float(f64),
    Bool(bool),
    EmptyList,
    Null,
}

impl ParamDefault {
    fn to_value(self) -> Option<Value> {
        match self {
            Self::Required => None,
            Self::Str(s) => Some(json!(s)),
            Self::Int(i) => Some(json!(i)),
            Self::Float(f) => Some(json!(f)),
            Self::Bool(b) => Some(json!(b)),
            Self::EmptyList => Some(json!([])),
            Self::Null => Some(Value::Null),
        }
    }
}

/// One declared argument of an operation
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Argument name as seen by MCP callers
    pub name: &'static str,
    /// Key used in the command's params; usually the same as `name`
    pub wire_name: &'static str,
    pub kind: ParamKind,
    pub default: ParamDefault,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            wire_name: name,
            kind,
            default: ParamDefault::Required,
            description,
        }
    }

    pub const fn optional(
        name: &'static str,
        kind: ParamKind,
        default: ParamDefault,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            wire_name: name,
            kind,
            default,
            description,
        }
    }

    /// Send this argument under a different key
    pub const fn sent_as(mut self, wire_name: &'static str) -> Self {
        self.wire_name = wire_name;
        self
    }

    pub fn is_required(&self) -> bool {
        self.default == ParamDefault::Required
    }

    fn schema(&self) -> Value {
        let mut schema = self.kind.schema();
        if let Value::Object(map) = &mut schema {
            map.insert("description".into(), json!(self.description));
            if let Some(default) = self.default.to_value() {
                map.insert("default".into(), default);
            }
        }
        schema
    }
}

/// Why a tool call's arguments were rejected before reaching Godot
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("arguments must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("missing required argument '{0}'")]
    Missing(&'static str),

    #[error("argument '{name}' must be {expected}, got {got}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
        got: &'static str,
    },
}

/// Validated arguments of one call, with defaults filled in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArgs {
    values: Map<String, Value>,
}

impl ToolArgs {
    /// Raw argument value; `Null` if absent
    pub fn get(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&Value::Null)
    }

    /// String argument; empty if absent
    pub fn str(&self, name: &str) -> &str {
        self.get(name).as_str().unwrap_or("")
    }

    pub fn bool(&self, name: &str) -> bool {
        self.get(name).as_bool().unwrap_or(false)
    }

    pub fn i64(&self, name: &str) -> i64 {
        self.get(name).as_i64().unwrap_or(0)
    }

    /// Argument as a free-form property value
    pub fn value(&self, name: &str) -> PropertyValue {
        PropertyValue::from(self.get(name).clone())
    }

    /// Argument rendered for a human-readable message
    pub fn display(&self, name: &str) -> String {
        self.value(name).to_string()
    }

    /// Number of characters in a string argument
    pub fn char_count(&self, name: &str) -> usize {
        self.str(name).chars().count()
    }
}

/// How a failure message is prefixed
#[derive(Clone, Copy)]
pub enum ErrorPrefix {
    Fixed(&'static str),
    /// Built from the call's arguments, e.g. "Failed to delete node Player"
    Dynamic(fn(&ToolArgs) -> String),
}

impl ErrorPrefix {
    pub fn render(&self, args: &ToolArgs) -> String {
        match self {
            Self::Fixed(prefix) => (*prefix).to_string(),
            Self::Dynamic(build) => build(args),
        }
    }
}

/// Reshapes the reply data of a successful command
pub type FormatFn = fn(&ToolArgs, &Value) -> Value;

/// One tool backed by one Godot command
pub struct Operation {
    /// Tool name exposed over MCP
    pub name: &'static str,
    /// Command type sent to Godot
    pub command: &'static str,
    summary: &'static str,
    /// Whether the change goes through the editor's undo history
    pub undoable: bool,
    pub params: Vec<ParamSpec>,
    pub format: FormatFn,
    pub error_prefix: ErrorPrefix,
}

impl Operation {
    /// Start a row whose command type matches the tool name
    ///
    /// The result data is passed through unchanged unless
    /// [`format`](Self::format) is set, and failures are reported as
    /// "Error: ..." unless a prefix is given.
    pub fn new(name: &'static str, summary: &'static str) -> Self {
        Self {
            name,
            command: name,
            summary,
            undoable: true,
            params: Vec::new(),
            format: passthrough,
            error_prefix: ErrorPrefix::Fixed("Error"),
        }
    }

    pub fn param(mut self, spec: ParamSpec) -> Self {
        self.params.push(spec);
        self
    }

    pub fn format(mut self, format: FormatFn) -> Self {
        self.format = format;
        self
    }

    pub fn fails_as(mut self, prefix: &'static str) -> Self {
        self.error_prefix = ErrorPrefix::Fixed(prefix);
        self
    }

    /// Build the failure prefix from the call's arguments
    pub fn fails_with(mut self, prefix: fn(&ToolArgs) -> String) -> Self {
        self.error_prefix = ErrorPrefix::Dynamic(prefix);
        self
    }

    /// Mark as writing to disk or project settings outside the undo history
    pub fn not_undoable(mut self) -> Self {
        self.undoable = false;
        self
    }

    /// Tool description, including the undo advisory where it applies
    pub fn description(&self) -> String {
        if self.undoable {
            self.summary.to_string()
        } else {
            format!("{} Warning: this operation cannot be undone.", self.summary)
        }
    }

    /// Validate call arguments against the declared parameters
    ///
    /// Omitted optional arguments take their default; an explicit `null`
    /// counts as omitted except for [`ParamKind::Any`]. Undeclared arguments
    /// are ignored.
    pub fn build_args(&self, arguments: &Value) -> Result<ToolArgs, ArgumentError> {
        let empty = Map::new();
        let provided = match arguments {
            Value::Object(map) => map,
            Value::Null => &empty,
            other => return Err(ArgumentError::NotAnObject(json_kind(other))),
        };

        let mut values = Map::new();
        for spec in &self.params {
            let given = provided
                .get(spec.name)
                .filter(|v| !v.is_null() || spec.kind == ParamKind::Any);

            let value = match given {
                Some(value) => spec.kind.coerce(value).ok_or(ArgumentError::WrongType {
                    name: spec.name,
                    expected: spec.kind.expected(),
                    got: json_kind(value),
                })?,
                None => spec
                    .default
                    .to_value()
                    .ok_or(ArgumentError::Missing(spec.name))?,
            };
            values.insert(spec.name.to_string(), value);
        }

        Ok(ToolArgs { values })
    }

    /// Command carrying the validated arguments
    pub fn command(&self, args: &ToolArgs) -> Command {
        let params = self
            .params
            .iter()
            .map(|spec| (spec.wire_name.to_string(), args.get(spec.name).clone()))
            .collect();
        Command::new(self.command, params)
    }

    /// JSON Schema for the MCP tool listing
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|spec| (spec.name.to_string(), spec.schema()))
            .collect();
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|spec| spec.is_required())
            .map(|spec| spec.name)
            .collect();

        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            schema["required"] = json!(required);
        }
        schema
    }
}

// ==================== Formatting Helpers ====================

/// Return the reply data unchanged
pub fn passthrough(_args: &ToolArgs, data: &Value) -> Value {
    data.clone()
}

/// `{"message": text}`
pub fn message(text: impl Into<String>) -> Value {
    json!({ "message": text.into() })
}

/// A reply field rendered for a message, or `default` when absent
pub fn field_text(data: &Value, key: &str, default: &str) -> String {
    match data.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(value) => PropertyValue::from(value.clone()).to_string(),
    }
}

/// A reply field that should hold a list; anything else counts as empty
pub fn field_list(data: &Value, key: &str) -> Value {
    match data.get(key) {
        Some(Value::Array(items)) => Value::Array(items.clone()),
        _ => json!([]),
    }
}

fn list_len(list: &Value) -> usize {
    list.as_array().map_or(0, Vec::len)
}

/// `{key: [...], "message": "Found {n} ..."}` for search style replies
pub fn found(key: &str, list: Value, describe: impl FnOnce(usize) -> String) -> Value {
    let text = describe(list_len(&list));
    let mut map = Map::new();
    map.insert(key.to_string(), list);
    map.insert("message".into(), json!(text));
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Operation {
        Operation::new("sample_op", "Sample operation")
            .param(ParamSpec::required("node_path", ParamKind::String, "Target node"))
            .param(ParamSpec::optional(
                "count",
                ParamKind::Integer,
                ParamDefault::Int(3),
                "How many",
            ))
            .param(ParamSpec::optional(
                "position",
                ParamKind::NumberList,
                ParamDefault::Null,
                "Where",
            ))
            .param(ParamSpec::optional("value", ParamKind::Any, ParamDefault::Null, "Anything"))
            .param(
                ParamSpec::optional("label", ParamKind::String, ParamDefault::Str(""), "Label")
                    .sent_as("text"),
            )
    }

    // ==================== Table Tests ====================

    #[test]
    fn test_table_size() {
        assert_eq!(all().len(), 69);
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names: HashSet<_> = all().iter().map(|op| op.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_command_matches_name() {
        for op in all() {
            assert_eq!(op.command, op.name);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("create_node").map(|op| op.name), Some("create_node"));
        assert!(lookup("check_connection").is_none());
        assert!(lookup("no_such_tool").is_none());
    }

    #[test]
    fn test_param_names_unique_per_operation() {
        for op in all() {
            let names: HashSet<_> = op.params.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), op.params.len(), "duplicate params in {}", op.name);
        }
    }

    #[test]
    fn test_descriptions_are_present() {
        for op in all() {
            assert!(!op.description().is_empty(), "{} has no description", op.name);
        }
    }

    #[test]
    fn test_not_undoable_advisory() {
        let save = lookup("save_scene").unwrap();
        assert!(!save.undoable);
        assert!(save.description().contains("cannot be undone"));

        let create = lookup("create_node").unwrap();
        assert!(create.undoable);
        assert!(!create.description().contains("cannot be undone"));
    }

    // ==================== build_args Tests ====================

    #[test]
    fn test_defaults_fill_missing() {
        let args = sample().build_args(&json!({"node_path": "Player"})).unwrap();
        assert_eq!(args.str("node_path"), "Player");
        assert_eq!(args.i64("count"), 3);
        assert!(args.get("position").is_null());
        assert_eq!(args.str("label"), "");
    }

    #[test]
    fn test_missing_required() {
        let err = sample().build_args(&json!({})).unwrap_err();
        assert_eq!(err, ArgumentError::Missing("node_path"));
        assert_eq!(err.to_string(), "missing required argument 'node_path'");
    }

    #[test]
    fn test_null_arguments_means_none_given() {
        let op = Operation::new("bare", "Bare");
        assert!(op.build_args(&Value::Null).is_ok());

        let err = sample().build_args(&Value::Null).unwrap_err();
        assert_eq!(err, ArgumentError::Missing("node_path"));
    }

    #[test]
    fn test_non_object_arguments() {
        let err = sample().build_args(&json!([1, 2])).unwrap_err();
        assert_eq!(err, ArgumentError::NotAnObject("array"));
    }

    #[test]
    fn test_wrong_type() {
        let err = sample()
            .build_args(&json!({"node_path": 42}))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "argument 'node_path' must be a string, got number"
        );
    }

    #[test]
    fn test_number_list_rejects_mixed() {
        let err = sample()
            .build_args(&json!({"node_path": "A", "position": [1, "x"]}))
            .unwrap_err();
        assert!(matches!(err, ArgumentError::WrongType { name: "position", .. }));
    }

    #[test]
    fn test_integer_accepts_whole_float() {
        let args = sample()
            .build_args(&json!({"node_path": "A", "count": 2.0}))
            .unwrap();
        assert_eq!(args.get("count"), &json!(2));

        assert!(sample()
            .build_args(&json!({"node_path": "A", "count": 2.5}))
            .is_err());
    }

    #[test]
    fn test_explicit_null_takes_default() {
        let args = sample()
            .build_args(&json!({"node_path": "A", "count": null}))
            .unwrap();
        assert_eq!(args.i64("count"), 3);
    }

    #[test]
    fn test_any_passes_everything_through() {
        for value in [json!(null), json!(200), json!([1, 0, 0, 1]), json!({"x": 1}), json!("s")] {
            let args = sample()
                .build_args(&json!({"node_path": "A", "value": value.clone()}))
                .unwrap();
            assert_eq!(args.get("value"), &value);
        }
    }

    #[test]
    fn test_unknown_arguments_ignored() {
        let args = sample()
            .build_args(&json!({"node_path": "A", "bogus": true}))
            .unwrap();
        assert!(args.get("bogus").is_null());
    }

    // ==================== Command Tests ====================

    #[test]
    fn test_command_uses_wire_names() {
        let op = sample();
        let args = op
            .build_args(&json!({"node_path": "A", "label": "hp"}))
            .unwrap();
        let command = op.command(&args);

        assert_eq!(command.command_type, "sample_op");
        assert_eq!(command.params["text"], "hp");
        assert!(!command.params.contains_key("label"));
        assert_eq!(command.params["count"], 3);
        assert!(command.params["position"].is_null());
    }

    // ==================== Schema Tests ====================

    #[test]
    fn test_input_schema() {
        let schema = sample().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["node_path"]));
        assert_eq!(schema["properties"]["node_path"]["type"], "string");
        assert_eq!(schema["properties"]["count"]["default"], 3);
        assert_eq!(schema["properties"]["position"]["items"]["type"], "number");
        assert!(schema["properties"]["value"].get("type").is_none());
    }

    #[test]
    fn test_schema_without_required() {
        let schema = lookup("get_scene_tree").unwrap().input_schema();
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_every_required_param_in_schema() {
        for op in all() {
            let schema = op.input_schema();
            for spec in op.params.iter().filter(|p| p.is_required()) {
                let required = schema["required"].as_array().unwrap();
                assert!(required.contains(&json!(spec.name)), "{}.{}", op.name, spec.name);
            }
        }
    }

    // ==================== Helper Tests ====================

    #[test]
    fn test_field_text() {
        let data = json!({"node_path": "Main/Player", "count": 2, "empty": null});
        assert_eq!(field_text(&data, "node_path", "Unknown"), "Main/Player");
        assert_eq!(field_text(&data, "count", "0"), "2");
        assert_eq!(field_text(&data, "empty", "none"), "none");
        assert_eq!(field_text(&data, "missing", "Unknown"), "Unknown");
    }

    #[test]
    fn test_found() {
        let value = found("nodes", json!(["a", "b"]), |n| format!("Found {} nodes.", n));
        assert_eq!(value, json!({"nodes": ["a", "b"], "message": "Found 2 nodes."}));
    }

    #[test]
    fn test_error_prefix_render() {
        let args = sample().build_args(&json!({"node_path": "Player"})).unwrap();
        assert_eq!(ErrorPrefix::Fixed("Failed").render(&args), "Failed");

        let dynamic = ErrorPrefix::Dynamic(|a| format!("Failed on {}", a.str("node_path")));
        assert_eq!(dynamic.render(&args), "Failed on Player");
    }
}
