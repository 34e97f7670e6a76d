//! GDScript operations

use serde_json::{json, Value};

use super::{field_text, message, Operation, ParamKind, ParamSpec, ToolArgs};

const NODE_PATH: ParamSpec =
    ParamSpec::required("node_path", ParamKind::String, "Path to the node");

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new(
            "add_script_to_node",
            "Create a GDScript from source code and attach it to a node. Use validate_script first to catch syntax errors.",
        )
        .param(NODE_PATH)
        .param(ParamSpec::required(
            "script_content",
            ParamKind::String,
            "Complete GDScript source, including the extends line",
        ))
        .format(|args, _| {
            message(format!(
                "Successfully attached GDScript to {} ({} characters)",
                args.str("node_path"),
                args.char_count("script_content")
            ))
        })
        .fails_with(|args| format!("Failed to add script to {}", args.str("node_path"))),
        Operation::new(
            "get_script_content",
            "Get the source code of the script attached to a node.",
        )
        .param(NODE_PATH)
        .fails_with(|args| {
            format!("Failed to get script content from {}", args.str("node_path"))
        }),
        Operation::new(
            "set_script_content",
            "Replace the source code of the script attached to a node. The script is recompiled immediately.",
        )
        .param(NODE_PATH)
        .param(ParamSpec::required("content", ParamKind::String, "New GDScript source"))
        .format(|args, _| {
            message(format!(
                "Successfully updated script content on {} ({} characters)",
                args.str("node_path"),
                args.char_count("content")
            ))
        })
        .fails_with(|args| format!("Failed to update script content on {}", args.str("node_path"))),
        Operation::new(
            "validate_script",
            "Check GDScript source for syntax and compilation errors without attaching it to anything.",
        )
        .param(ParamSpec::required("content", ParamKind::String, "GDScript source to check"))
        .format(format_validation)
        .fails_as("Failed to validate script"),
        Operation::new("create_script_file", "Write a standalone GDScript file into the project.")
            .param(ParamSpec::required(
                "filename",
                ParamKind::String,
                "File name or res:// path of the script (e.g. 'player.gd')",
            ))
            .param(ParamSpec::required("content", ParamKind::String, "GDScript source"))
            .format(|_, data| {
                let file_path = field_text(data, "file_path", "unknown");
                json!({
                    "file_path": file_path,
                    "message": format!("Successfully created script file: {}", file_path),
                })
            })
            .fails_with(|args| format!("Failed to create script file {}", args.str("filename")))
            .not_undoable(),
        Operation::new("load_script_file", "Read a GDScript file from the project.")
            .param(ParamSpec::required("file_path", ParamKind::String, "res:// path of the script"))
            .fails_with(|args| format!("Failed to load script file {}", args.str("file_path"))),
        Operation::new(
            "get_script_variables",
            "List the variables declared by a node's script, with types and current values.",
        )
        .param(NODE_PATH)
        .fails_with(|args| {
            format!("Failed to get script variables from {}", args.str("node_path"))
        }),
        Operation::new("set_script_variable", "Set a script variable on a node.")
            .param(NODE_PATH)
            .param(ParamSpec::required("var_name", ParamKind::String, "Variable name"))
            .param(ParamSpec::required("value", ParamKind::Any, "New value"))
            .format(|args, _| {
                message(format!(
                    "Successfully set {} = {} on {}",
                    args.str("var_name"),
                    args.display("value"),
                    args.str("node_path")
                ))
            })
            .fails_with(|args| {
                format!(
                    "Failed to set script variable {} on {}",
                    args.str("var_name"),
                    args.str("node_path")
                )
            }),
        Operation::new(
            "get_script_functions",
            "List the functions defined by a node's script, with their arguments.",
        )
        .param(NODE_PATH)
        .fails_with(|args| {
            format!("Failed to get script functions from {}", args.str("node_path"))
        }),
        Operation::new("attach_script_to_node", "Attach an existing script file to a node.")
            .param(NODE_PATH)
            .param(ParamSpec::required(
                "script_path",
                ParamKind::String,
                "res:// path of the script",
            ))
            .format(|args, _| {
                message(format!(
                    "Successfully attached script {} to {}",
                    args.str("script_path"),
                    args.str("node_path")
                ))
            })
            .fails_with(|args| {
                format!(
                    "Failed to attach script {} to {}",
                    args.str("script_path"),
                    args.str("node_path")
                )
            }),
        Operation::new(
            "detach_script_from_node",
            "Remove the script from a node. The script file itself is kept.",
        )
        .param(NODE_PATH)
        .format(|args, _| {
            message(format!("Successfully detached script from {}", args.str("node_path")))
        })
        .fails_with(|args| format!("Failed to detach script from {}", args.str("node_path"))),
    ]
}

fn format_validation(args: &ToolArgs, data: &Value) -> Value {
    if data.get("valid").and_then(Value::as_bool).unwrap_or(false) {
        json!({
            "valid": true,
            "message": format!(
                "Script validation successful ({} characters)",
                args.char_count("content")
            ),
        })
    } else {
        let error = field_text(data, "error", "Unknown validation error");
        json!({
            "valid": false,
            "message": format!("Script validation failed: {}", error),
            "error": error,
        })
    }
}
