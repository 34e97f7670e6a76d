//! Running and debugging scenes

use serde_json::{json, Value};

use super::{message, Operation, ParamKind, ParamSpec};

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new(
            "run_scene",
            "Play the edited scene in the game window. This runs the game; it does not open anything in the editor.",
        )
        .format(|_, _| message("Scene started successfully"))
        .fails_as("Failed to start scene"),
        Operation::new("run_specific_scene", "Play a scene file in the game window.")
            .param(ParamSpec::required(
                "scene_path",
                ParamKind::String,
                "res:// path of the scene to run",
            ))
            .format(|args, _| message(format!("Started scene {}", args.str("scene_path"))))
            .fails_with(|args| format!("Failed to run scene {}", args.str("scene_path"))),
        Operation::new("stop_scene", "Stop the running game.")
            .format(|_, _| message("Scene stopped successfully"))
            .fails_as("Failed to stop scene"),
        Operation::new("is_scene_playing", "Report whether a scene is currently running.")
            .format(|_, data| {
                let playing = data.get("playing").and_then(Value::as_bool).unwrap_or(false);
                let text = if playing {
                    "A scene is currently playing"
                } else {
                    "No scene is playing"
                };
                json!({"playing": playing, "message": text})
            })
            .fails_as("Failed to query play state"),
        Operation::new(
            "get_debug_info",
            "Get editor diagnostics: Godot version, addon server status and recent errors.",
        )
        .fails_as("Failed to get debug info"),
    ]
}
