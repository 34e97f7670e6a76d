//! AnimationPlayer control

use super::{message, Operation, ParamDefault, ParamKind, ParamSpec};

const PLAYER_PATH: ParamSpec =
    ParamSpec::required("node_path", ParamKind::String, "Path to the AnimationPlayer node");

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new("play_animation", "Play an animation on an AnimationPlayer.")
            .param(PLAYER_PATH)
            .param(ParamSpec::optional(
                "animation_name",
                ParamKind::String,
                ParamDefault::Str(""),
                "Animation to play; empty plays the current or autoplay animation",
            ))
            .param(ParamSpec::optional(
                "custom_speed",
                ParamKind::Number,
                ParamDefault::Float(1.0),
                "Speed multiplier; negative plays backwards",
            ))
            .param(ParamSpec::optional(
                "from_end",
                ParamKind::Boolean,
                ParamDefault::Bool(false),
                "Start from the end of the animation",
            ))
            .format(|args, _| {
                let name = match args.str("animation_name") {
                    "" => "current animation",
                    name => name,
                };
                message(format!("Playing {} on {}", name, args.str("node_path")))
            })
            .fails_with(|args| format!("Failed to play animation on {}", args.str("node_path"))),
        Operation::new("stop_animation", "Stop the animation playing on an AnimationPlayer.")
            .param(PLAYER_PATH)
            .param(ParamSpec::optional(
                "keep_state",
                ParamKind::Boolean,
                ParamDefault::Bool(false),
                "Keep the current pose instead of resetting",
            ))
            .format(|args, _| message(format!("Stopped animation on {}", args.str("node_path"))))
            .fails_with(|args| format!("Failed to stop animation on {}", args.str("node_path"))),
        Operation::new("pause_animation", "Pause the animation playing on an AnimationPlayer.")
            .param(PLAYER_PATH)
            .format(|args, _| message(format!("Paused animation on {}", args.str("node_path"))))
            .fails_with(|args| format!("Failed to pause animation on {}", args.str("node_path"))),
        Operation::new(
            "queue_animation",
            "Queue an animation to play after the current one finishes.",
        )
        .param(PLAYER_PATH)
        .param(ParamSpec::required("animation_name", ParamKind::String, "Animation to queue"))
        .format(|args, _| {
            message(format!(
                "Queued {} on {}",
                args.str("animation_name"),
                args.str("node_path")
            ))
        })
        .fails_with(|args| {
            format!(
                "Failed to queue animation {} on {}",
                args.str("animation_name"),
                args.str("node_path")
            )
        }),
        Operation::new("seek_animation", "Jump to a position in the current animation.")
            .param(PLAYER_PATH)
            .param(ParamSpec::required("seconds", ParamKind::Number, "Position in seconds"))
            .param(ParamSpec::optional(
                "update",
                ParamKind::Boolean,
                ParamDefault::Bool(true),
                "Apply the animation at the new position immediately",
            ))
            .format(|args, _| {
                message(format!(
                    "Seeked {} to {}s",
                    args.str("node_path"),
                    args.display("seconds")
                ))
            })
            .fails_with(|args| format!("Failed to seek animation on {}", args.str("node_path"))),
        Operation::new("set_animation_speed", "Set the playback speed scale of an AnimationPlayer.")
            .param(PLAYER_PATH)
            .param(ParamSpec::required(
                "speed",
                ParamKind::Number,
                "Speed scale; 1.0 is normal speed",
            ))
            .format(|args, _| {
                message(format!(
                    "Set animation speed on {} to {}",
                    args.str("node_path"),
                    args.display("speed")
                ))
            })
            .fails_with(|args| {
                format!("Failed to set animation speed on {}", args.str("node_path"))
            }),
        Operation::new("get_animation_list", "List the animations available on an AnimationPlayer.")
            .param(PLAYER_PATH)
            .fails_with(|args| format!("Failed to get animations from {}", args.str("node_path"))),
        Operation::new(
            "get_current_animation",
            "Get the animation currently playing on an AnimationPlayer, with its position and length.",
        )
        .param(PLAYER_PATH)
        .fails_with(|args| format!("Failed to get current animation on {}", args.str("node_path"))),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::lookup;
    use serde_json::json;

    #[test]
    fn test_play_animation_defaults() {
        let op = lookup("play_animation").unwrap();
        let args = op.build_args(&json!({"node_path": "Player/AnimationPlayer"})).unwrap();

        assert_eq!(
            serde_json::to_value(op.command(&args)).unwrap()["params"],
            json!({
                "node_path": "Player/AnimationPlayer",
                "animation_name": "",
                "custom_speed": 1.0,
                "from_end": false
            })
        );
        assert_eq!(
            (op.format)(&args, &json!({}))["message"],
            "Playing current animation on Player/AnimationPlayer"
        );
    }

    #[test]
    fn test_play_named_animation() {
        let op = lookup("play_animation").unwrap();
        let args = op
            .build_args(&json!({"node_path": "Anim", "animation_name": "walk"}))
            .unwrap();
        assert_eq!((op.format)(&args, &json!({}))["message"], "Playing walk on Anim");
    }

    #[test]
    fn test_seek_requires_seconds() {
        let op = lookup("seek_animation").unwrap();
        assert!(op.build_args(&json!({"node_path": "Anim"})).is_err());

        let args = op.build_args(&json!({"node_path": "Anim", "seconds": 1.5})).unwrap();
        assert_eq!((op.format)(&args, &json!({}))["message"], "Seeked Anim to 1.5s");
    }

    #[test]
    fn test_speed_rejects_strings() {
        let op = lookup("set_animation_speed").unwrap();
        assert!(op
            .build_args(&json!({"node_path": "Anim", "speed": "fast"}))
            .is_err());
    }
}
