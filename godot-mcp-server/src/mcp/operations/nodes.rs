//! Scene tree and node operations

use serde_json::Value;

use super::{
    field_list, field_text, found, message, Operation, ParamDefault, ParamKind, ParamSpec, ToolArgs,
};

const NODE_PATH: ParamSpec = ParamSpec::required(
    "node_path",
    ParamKind::String,
    "Path to the node, relative to the scene root (e.g. \"Player\" or \"UI/HealthBar\")",
);

const GROUP_NAME: ParamSpec =
    ParamSpec::required("group_name", ParamKind::String, "Name of the group");

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new(
            "get_scene_tree",
            "Get the structure of the open scene: every node with its name, type, path and children, plus the scene file path.",
        )
        .fails_as("Failed to get scene tree"),
        Operation::new(
            "create_node",
            "Create a node of any Godot class (Node2D, Sprite2D, CharacterBody2D, Label, ...) and add it to the scene under the given parent.",
        )
        .param(ParamSpec::required(
            "node_type",
            ParamKind::String,
            "Godot class name of the new node (e.g. 'Sprite2D', 'Area2D', 'CollisionShape2D')",
        ))
        .param(ParamSpec::optional(
            "parent_path",
            ParamKind::String,
            ParamDefault::Str("."),
            "Path of the parent node; \".\" is the scene root",
        ))
        .param(ParamSpec::optional(
            "node_name",
            ParamKind::String,
            ParamDefault::Str(""),
            "Name for the node; generated from the type when empty",
        ))
        .format(format_create_node)
        .fails_with(|args| format!("Failed to create {} node", args.str("node_type"))),
        Operation::new("delete_node", "Delete a node and all of its children from the scene.")
            .param(NODE_PATH)
            .format(|args, _| {
                message(format!("Successfully deleted node: {}", args.str("node_path")))
            })
            .fails_with(|args| format!("Failed to delete node {}", args.str("node_path"))),
        Operation::new(
            "get_node_properties",
            "Get the editor-visible properties of a node with their current values.",
        )
        .param(NODE_PATH)
        .fails_as("Failed to get node properties"),
        Operation::new(
            "set_node_property",
            "Set any exposed property on a node (position, modulate, text, collision_layer, script variables, ...). Vectors are [x, y] or [x, y, z], colors are [r, g, b, a] in the 0-1 range.",
        )
        .param(NODE_PATH)
        .param(ParamSpec::required(
            "property_name",
            ParamKind::String,
            "Property name (e.g. 'position', 'text', 'modulate', 'visible')",
        ))
        .param(ParamSpec::required(
            "value",
            ParamKind::Any,
            "New value matching the property type",
        ))
        .format(|args, _| {
            message(format!(
                "Set {} = {} on node {}",
                args.str("property_name"),
                args.display("value"),
                args.str("node_path")
            ))
        })
        .fails_with(|args| {
            format!("Failed to set {} on {}", args.str("property_name"), args.str("node_path"))
        }),
        Operation::new("move_node", "Reparent a node, optionally renaming it.")
            .param(NODE_PATH)
            .param(ParamSpec::required(
                "new_parent_path",
                ParamKind::String,
                "Path of the new parent node",
            ))
            .param(ParamSpec::optional(
                "new_name",
                ParamKind::String,
                ParamDefault::Str(""),
                "New name; keeps the current name when empty",
            ))
            .format(|_, data| {
                message(format!(
                    "Successfully moved node to {}",
                    field_text(data, "new_path", "new location")
                ))
            })
            .fails_with(|args| format!("Failed to move node {}", args.str("node_path"))),
        Operation::new("duplicate_node", "Duplicate a node and its children next to the original.")
            .param(NODE_PATH)
            .param(ParamSpec::optional(
                "new_name",
                ParamKind::String,
                ParamDefault::Str(""),
                "Name for the copy; generated when empty",
            ))
            .format(|_, data| {
                message(format!(
                    "Successfully duplicated node: {}",
                    field_text(data, "duplicate_path", "duplicate")
                ))
            })
            .fails_with(|args| format!("Failed to duplicate node {}", args.str("node_path"))),
        Operation::new(
            "set_node_transform",
            "Set position, rotation and/or scale of a 2D or 3D node. Only the given components change. 2D nodes take [x, y] and use rotation[0] in degrees; 3D nodes take [x, y, z].",
        )
        .param(NODE_PATH)
        .param(ParamSpec::optional(
            "position",
            ParamKind::NumberList,
            ParamDefault::Null,
            "[x, y] or [x, y, z] coordinates",
        ))
        .param(ParamSpec::optional(
            "rotation",
            ParamKind::NumberList,
            ParamDefault::Null,
            "Rotation in degrees; 2D nodes use the first component",
        ))
        .param(ParamSpec::optional(
            "scale",
            ParamKind::NumberList,
            ParamDefault::Null,
            "[x, y] or [x, y, z] scale factors",
        ))
        .format(format_transform)
        .fails_with(|args| format!("Failed to set transform on {}", args.str("node_path"))),
        Operation::new("set_node_visibility", "Show or hide a CanvasItem or Node3D.")
            .param(NODE_PATH)
            .param(ParamSpec::required(
                "visible",
                ParamKind::Boolean,
                "Whether the node is visible",
            ))
            .format(|args, _| {
                message(format!(
                    "Successfully set visibility of {} to {}",
                    args.str("node_path"),
                    args.bool("visible")
                ))
            })
            .fails_with(|args| format!("Failed to set visibility of {}", args.str("node_path"))),
        Operation::new("find_nodes_by_type", "Find all nodes of a given class below a search root.")
            .param(ParamSpec::required(
                "node_type",
                ParamKind::String,
                "Class to search for (e.g. 'Node2D', 'Sprite2D')",
            ))
            .param(ParamSpec::optional(
                "search_root",
                ParamKind::String,
                ParamDefault::Str("."),
                "Path to start searching from; defaults to the scene root",
            ))
            .format(|args, data| {
                found("nodes", field_list(data, "nodes"), |n| {
                    format!("Found {} nodes of type {}.", n, args.str("node_type"))
                })
            })
            .fails_with(|args| format!("Failed to find nodes of type {}", args.str("node_type"))),
        Operation::new(
            "get_node_children",
            "List the children of a node, optionally all descendants.",
        )
        .param(NODE_PATH)
        .param(ParamSpec::optional(
            "recursive",
            ParamKind::Boolean,
            ParamDefault::Bool(false),
            "Include all descendants instead of direct children only",
        ))
        .format(|args, data| {
            let mode = if args.bool("recursive") { "recursive" } else { "direct" };
            found("children", field_list(data, "children"), |n| {
                format!("Found {} {} children of {}.", n, mode, args.str("node_path"))
            })
        })
        .fails_with(|args| format!("Failed to get children of {}", args.str("node_path"))),
        Operation::new("rename_node", "Rename a node in place.")
            .param(NODE_PATH)
            .param(ParamSpec::required("new_name", ParamKind::String, "New node name"))
            .format(|args, data| {
                message(format!(
                    "Renamed {} to {}",
                    args.str("node_path"),
                    field_text(data, "new_name", args.str("new_name"))
                ))
            })
            .fails_with(|args| format!("Failed to rename node {}", args.str("node_path"))),
        Operation::new("add_node_to_group", "Add a node to a group.")
            .param(NODE_PATH)
            .param(GROUP_NAME)
            .param(ParamSpec::optional(
                "persistent",
                ParamKind::Boolean,
                ParamDefault::Bool(true),
                "Save the group membership with the scene",
            ))
            .format(|args, _| {
                message(format!(
                    "Added {} to group '{}'",
                    args.str("node_path"),
                    args.str("group_name")
                ))
            })
            .fails_with(|args| {
                format!(
                    "Failed to add {} to group {}",
                    args.str("node_path"),
                    args.str("group_name")
                )
            }),
        Operation::new("remove_node_from_group", "Remove a node from a group.")
            .param(NODE_PATH)
            .param(GROUP_NAME)
            .format(|args, _| {
                message(format!(
                    "Removed {} from group '{}'",
                    args.str("node_path"),
                    args.str("group_name")
                ))
            })
            .fails_with(|args| {
                format!(
                    "Failed to remove {} from group {}",
                    args.str("node_path"),
                    args.str("group_name")
                )
            }),
        Operation::new("get_node_groups", "List the groups a node belongs to.")
            .param(NODE_PATH)
            .fails_with(|args| format!("Failed to get groups of {}", args.str("node_path"))),
        Operation::new(
            "find_nodes_in_group",
            "Find all nodes in the open scene that belong to a group.",
        )
        .param(GROUP_NAME)
        .format(|args, data| {
            found("nodes", field_list(data, "nodes"), |n| {
                format!("Found {} nodes in group '{}'.", n, args.str("group_name"))
            })
        })
        .fails_with(|args| format!("Failed to find nodes in group {}", args.str("group_name"))),
    ]
}

fn format_create_node(args: &ToolArgs, data: &Value) -> Value {
    let node_type = args.str("node_type");
    message(format!(
        "Created {} node '{}' at path: {}",
        node_type,
        field_text(data, "node_name", node_type),
        field_text(data, "node_path", "Unknown")
    ))
}

fn format_transform(args: &ToolArgs, _data: &Value) -> Value {
    let changes: Vec<String> = ["position", "rotation", "scale"]
        .into_iter()
        .filter(|name| args.get(name).as_array().is_some_and(|items| !items.is_empty()))
        .map(|name| format!("{}={}", name, args.display(name)))
        .collect();

    if changes.is_empty() {
        message(format!("Set transform on {}", args.str("node_path")))
    } else {
        message(format!(
            "Set transform on {}: {}",
            args.str("node_path"),
            changes.join(", ")
        ))
    }
}
