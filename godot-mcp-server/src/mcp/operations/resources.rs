//! Resources and project filesystem

use serde_json::{json, Value};

use super::{field_text, message, Operation, ParamDefault, ParamKind, ParamSpec, ToolArgs};

/// `flags` bit requesting a compressed save
const FLAG_COMPRESS: i64 = 1;

const RESOURCE_PATH: ParamSpec =
    ParamSpec::required("resource_path", ParamKind::String, "res:// path of the resource");

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new(
            "create_resource",
            "Create an in-memory resource of the given class (Texture2D, AudioStream, Resource, ...). Save it with save_resource.",
        )
        .param(ParamSpec::required("resource_type", ParamKind::String, "Resource class name"))
        .format(|args, _| {
            message(format!(
                "Successfully created {} resource",
                args.str("resource_type")
            ))
        })
        .fails_with(|args| format!("Failed to create {} resource", args.str("resource_type"))),
        Operation::new("load_resource", "Load a resource from the project and report its type.")
            .param(RESOURCE_PATH)
            .format(|args, data| {
                let resource_type = field_text(data, "type", "Unknown");
                json!({
                    "type": resource_type,
                    "message": format!(
                        "Successfully loaded {} resource from {}",
                        resource_type,
                        args.str("resource_path")
                    ),
                })
            })
            .fails_with(|args| {
                format!("Failed to load resource from {}", args.str("resource_path"))
            }),
        Operation::new(
            "save_resource",
            "Save resource data to a file in Godot's native format. Set bit 1 of flags to compress.",
        )
        .param(ParamSpec::required(
            "save_path",
            ParamKind::String,
            "Destination res:// path (e.g. 'res://data/settings.tres')",
        ))
        .param(
            ParamSpec::required("resource_data", ParamKind::Any, "Resource to save")
                .sent_as("resource"),
        )
        .param(ParamSpec::optional(
            "flags",
            ParamKind::Integer,
            ParamDefault::Int(0),
            "ResourceSaver flags; 1 compresses the file",
        ))
        .format(format_save)
        .fails_with(|args| format!("Failed to save resource to {}", args.str("save_path")))
        .not_undoable(),
        Operation::new(
            "get_resource_dependencies",
            "List the files a resource depends on (textures, scripts, sub-scenes, ...).",
        )
        .param(RESOURCE_PATH)
        .fails_with(|args| format!("Failed to get dependencies for {}", args.str("resource_path"))),
        Operation::new(
            "get_resource_metadata",
            "Get metadata about a resource file: type, size, import settings.",
        )
        .param(RESOURCE_PATH)
        .fails_with(|args| format!("Failed to get metadata for {}", args.str("resource_path"))),
        Operation::new(
            "list_directory",
            "List files and subdirectories of a project directory. Hidden files are skipped; directories end with /.",
        )
        .param(ParamSpec::required(
            "dir_path",
            ParamKind::String,
            "Directory to list (e.g. 'res://', 'res://scenes')",
        ))
        .fails_with(|args| format!("Failed to list directory {}", args.str("dir_path"))),
        Operation::new(
            "create_directory",
            "Create a directory in the project, including missing parents.",
        )
        .param(ParamSpec::required(
            "dir_path",
            ParamKind::String,
            "res:// path of the directory",
        ))
        .format(|args, _| message(format!("Created directory {}", args.str("dir_path"))))
        .fails_with(|args| format!("Failed to create directory {}", args.str("dir_path")))
        .not_undoable(),
        Operation::new("file_exists", "Check whether a file exists in the project.")
            .param(ParamSpec::required("file_path", ParamKind::String, "res:// path to check"))
            .format(|args, data| {
                let exists = data.get("exists").and_then(Value::as_bool).unwrap_or(false);
                let verdict = if exists { "exists" } else { "does not exist" };
                json!({
                    "exists": exists,
                    "message": format!("{} {}", args.str("file_path"), verdict),
                })
            })
            .fails_with(|args| format!("Failed to check file {}", args.str("file_path"))),
        Operation::new(
            "read_text_file",
            "Read a text file from the project (JSON, CFG, shaders, ...).",
        )
        .param(ParamSpec::required("file_path", ParamKind::String, "res:// path of the file"))
        .fails_with(|args| format!("Failed to read file {}", args.str("file_path"))),
    ]
}

fn format_save(args: &ToolArgs, _data: &Value) -> Value {
    let note = if args.i64("flags") & FLAG_COMPRESS != 0 {
        " with compression"
    } else {
        ""
    };
    message(format!(
        "Successfully saved resource to {}{}",
        args.str("save_path"),
        note
    ))
}

#[cfg(test)]
mod tests {
    use super::super::lookup;
    use serde_json::json;

    #[test]
    fn test_save_resource_wire_params() {
        let op = lookup("save_resource").unwrap();
        let args = op
            .build_args(&json!({
                "save_path": "res://data/config.tres",
                "resource_data": {"type": "Resource", "volume": 0.8}
            }))
            .unwrap();

        let value = serde_json::to_value(op.command(&args)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "save_resource",
                "params": {
                    "resource": {"type": "Resource", "volume": 0.8},
                    "save_path": "res://data/config.tres",
                    "flags": 0
                }
            })
        );
    }

    #[test]
    fn test_save_resource_compression_note() {
        let op = lookup("save_resource").unwrap();

        let args = op
            .build_args(&json!({"save_path": "res://a.tres", "resource_data": {}, "flags": 1}))
            .unwrap();
        assert_eq!(
            (op.format)(&args, &json!({}))["message"],
            "Successfully saved resource to res://a.tres with compression"
        );

        let args = op
            .build_args(&json!({"save_path": "res://a.tres", "resource_data": {}, "flags": 2}))
            .unwrap();
        assert_eq!(
            (op.format)(&args, &json!({}))["message"],
            "Successfully saved resource to res://a.tres"
        );
    }

    #[test]
    fn test_load_resource_reports_type() {
        let op = lookup("load_resource").unwrap();
        let args = op.build_args(&json!({"resource_path": "res://icon.svg"})).unwrap();

        let out = (op.format)(&args, &json!({"type": "CompressedTexture2D"}));
        assert_eq!(out["type"], "CompressedTexture2D");
        assert_eq!(
            out["message"],
            "Successfully loaded CompressedTexture2D resource from res://icon.svg"
        );

        let out = (op.format)(&args, &json!({}));
        assert_eq!(out["type"], "Unknown");
    }

    #[test]
    fn test_file_exists() {
        let op = lookup("file_exists").unwrap();
        let args = op.build_args(&json!({"file_path": "res://main.tscn"})).unwrap();

        let out = (op.format)(&args, &json!({"exists": true}));
        assert_eq!(out, json!({"exists": true, "message": "res://main.tscn exists"}));

        let out = (op.format)(&args, &json!({}));
        assert_eq!(out["exists"], false);
    }
}
