//! Scene files

use super::{field_text, message, Operation, ParamDefault, ParamKind, ParamSpec};

const SCENE_PATH: ParamSpec =
    ParamSpec::required("scene_path", ParamKind::String, "res:// path of the .tscn file");

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new(
            "get_current_scene_info",
            "Get details about the scene open in the editor: file path, root node and child count.",
        )
        .fails_as("Failed to get scene info"),
        Operation::new(
            "open_scene",
            "Open a scene file in the editor and make it the edited scene.",
        )
        .param(SCENE_PATH)
        .format(|args, _| {
            message(format!("Successfully opened scene: {}", args.str("scene_path")))
        })
        .fails_with(|args| format!("Failed to open scene {}", args.str("scene_path"))),
        Operation::new(
            "save_scene",
            "Save the edited scene to its file. Use save_scene_as for a scene that was never saved.",
        )
        .format(|_, data| {
            message(format!(
                "Successfully saved scene: {}",
                field_text(data, "scene_path", "unknown")
            ))
        })
        .fails_as("Failed to save scene")
        .not_undoable(),
        Operation::new("save_scene_as", "Save the edited scene to a new file and switch to it.")
            .param(SCENE_PATH)
            .format(|args, _| {
                message(format!("Successfully saved scene as: {}", args.str("scene_path")))
            })
            .fails_with(|args| format!("Failed to save scene as {}", args.str("scene_path")))
            .not_undoable(),
        Operation::new(
            "create_new_scene",
            "Create and open a new, unsaved scene with the given root node type. Save it with save_scene_as.",
        )
        .param(ParamSpec::optional(
            "root_node_type",
            ParamKind::String,
            ParamDefault::Str("Node2D"),
            "Class of the root node: Node2D, Node3D, Control, Node, ...",
        ))
        .format(|args, data| {
            message(format!(
                "Successfully created new scene with '{}' ({}) as the root. Use save_scene_as() to save it.",
                field_text(data, "root_node_name", "SceneRoot"),
                field_text(data, "root_node_type", args.str("root_node_type"))
            ))
        })
        .fails_as("Failed to create new scene"),
        Operation::new("instantiate_scene", "Add an instance of a scene file as a child node.")
            .param(SCENE_PATH)
            .param(ParamSpec::optional(
                "parent_path",
                ParamKind::String,
                ParamDefault::Str("."),
                "Path of the parent node; \".\" is the scene root",
            ))
            .format(|args, data| {
                message(format!(
                    "Successfully instantiated {} as '{}' at {}",
                    args.str("scene_path"),
                    field_text(data, "instance_name", "unknown"),
                    field_text(data, "instance_path", "unknown")
                ))
            })
            .fails_with(|args| format!("Failed to instantiate scene {}", args.str("scene_path"))),
        Operation::new(
            "pack_scene_from_node",
            "Save a node and its children as a new reusable scene file.",
        )
        .param(ParamSpec::required("node_path", ParamKind::String, "Root node of the new scene"))
        .param(ParamSpec::required("save_path", ParamKind::String, "Destination .tscn path"))
        .format(|args, _| {
            message(format!(
                "Successfully packed scene from {} and saved to {}",
                args.str("node_path"),
                args.str("save_path")
            ))
        })
        .fails_with(|args| format!("Failed to pack scene from {}", args.str("node_path"))),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::lookup;
    use serde_json::json;

    #[test]
    fn test_create_new_scene_defaults() {
        let op = lookup("create_new_scene").unwrap();
        let args = op.build_args(&json!({})).unwrap();

        assert_eq!(op.command(&args).params["root_node_type"], "Node2D");
        assert_eq!(
            (op.format)(&args, &json!({}))["message"],
            "Successfully created new scene with 'SceneRoot' (Node2D) as the root. Use save_scene_as() to save it."
        );
    }

    #[test]
    fn test_create_new_scene_reported_names() {
        let op = lookup("create_new_scene").unwrap();
        let args = op.build_args(&json!({"root_node_type": "Control"})).unwrap();
        let data = json!({"root_node_name": "Menu", "root_node_type": "Control"});
        let out = (op.format)(&args, &data);
        assert_eq!(
            out["message"],
            "Successfully created new scene with 'Menu' (Control) as the root. Use save_scene_as() to save it."
        );
    }

    #[test]
    fn test_save_scene_message() {
        let op = lookup("save_scene").unwrap();
        let args = op.build_args(&json!({})).unwrap();
        assert_eq!(
            (op.format)(&args, &json!({"scene_path": "res://main.tscn"}))["message"],
            "Successfully saved scene: res://main.tscn"
        );
        assert!(!op.undoable);
    }

    #[test]
    fn test_instantiate_scene_message() {
        let op = lookup("instantiate_scene").unwrap();
        let args = op.build_args(&json!({"scene_path": "res://enemy.tscn"})).unwrap();
        let out = (op.format)(
            &args,
            &json!({"instance_name": "Enemy", "instance_path": "Main/Enemy"}),
        );
        assert_eq!(
            out["message"],
            "Successfully instantiated res://enemy.tscn as 'Enemy' at Main/Enemy"
        );
    }
}
