//! Project settings and input map

use super::{message, Operation, ParamDefault, ParamKind, ParamSpec};

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new(
            "get_project_info",
            "Get the project name, main scene, Godot version and project directory.",
        )
        .fails_as("Failed to get project info"),
        Operation::new(
            "get_project_settings",
            "Get project settings, optionally only those under a prefix.",
        )
        .param(ParamSpec::optional(
            "prefix",
            ParamKind::String,
            ParamDefault::Str(""),
            "Only return settings starting with this (e.g. 'display/window')",
        ))
        .fails_as("Failed to get project settings"),
        Operation::new("set_project_setting", "Change a project setting and save project.godot.")
            .param(ParamSpec::required(
                "setting_name",
                ParamKind::String,
                "Full setting path (e.g. 'application/config/name')",
            ))
            .param(ParamSpec::required("value", ParamKind::Any, "New value"))
            .format(|args, _| {
                message(format!(
                    "Set project setting {} = {}",
                    args.str("setting_name"),
                    args.display("value")
                ))
            })
            .fails_with(|args| {
                format!("Failed to set project setting {}", args.str("setting_name"))
            })
            .not_undoable(),
        Operation::new("get_input_actions", "List the input map actions and their bound events.")
            .fails_as("Failed to get input actions"),
        Operation::new("add_input_action", "Add an action to the project's input map.")
            .param(ParamSpec::required(
                "action_name",
                ParamKind::String,
                "Name of the action (e.g. 'jump')",
            ))
            .param(ParamSpec::optional(
                "deadzone",
                ParamKind::Number,
                ParamDefault::Float(0.5),
                "Analog deadzone for the action",
            ))
            .format(|args, _| message(format!("Added input action {}", args.str("action_name"))))
            .fails_with(|args| format!("Failed to add input action {}", args.str("action_name")))
            .not_undoable(),
    ]
}
