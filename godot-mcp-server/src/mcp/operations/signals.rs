//! Signal connections and method calls

use super::{field_text, message, Operation, ParamDefault, ParamKind, ParamSpec};

const FROM_NODE: ParamSpec = ParamSpec::required(
    "from_node_path",
    ParamKind::String,
    "Path of the node that emits the signal",
);
const SIGNAL_NAME: ParamSpec = ParamSpec::required(
    "signal_name",
    ParamKind::String,
    "Signal name (e.g. 'pressed', 'body_entered')",
);
const TO_NODE: ParamSpec = ParamSpec::required(
    "to_node_path",
    ParamKind::String,
    "Path of the node that receives the signal",
);
const METHOD_NAME: ParamSpec =
    ParamSpec::required("method_name", ParamKind::String, "Method called on the receiving node");

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new(
            "connect_signal",
            "Connect a signal of one node to a method on another. The connection is saved with the scene.",
        )
        .param(FROM_NODE)
        .param(SIGNAL_NAME)
        .param(TO_NODE)
        .param(METHOD_NAME)
        .format(|args, _| {
            message(format!(
                "Connected signal '{}' from {} -> {}() on {}",
                args.str("signal_name"),
                args.str("from_node_path"),
                args.str("method_name"),
                args.str("to_node_path")
            ))
        })
        .fails_with(|args| {
            format!(
                "Failed to connect signal '{}' from {} to {}",
                args.str("signal_name"),
                args.str("from_node_path"),
                args.str("to_node_path")
            )
        })
        .not_undoable(),
        Operation::new("disconnect_signal", "Remove a signal connection between two nodes.")
            .param(FROM_NODE)
            .param(SIGNAL_NAME)
            .param(TO_NODE)
            .param(METHOD_NAME)
            .format(|args, _| {
                message(format!(
                    "Successfully disconnected signal {} from {} to {} on {}",
                    args.str("signal_name"),
                    args.str("from_node_path"),
                    args.str("method_name"),
                    args.str("to_node_path")
                ))
            })
            .fails_with(|args| format!("Failed to disconnect signal {}", args.str("signal_name")))
            .not_undoable(),
        Operation::new(
            "get_node_signals",
            "List the signals a node can emit, with their arguments and current connections.",
        )
        .param(ParamSpec::required("node_path", ParamKind::String, "Path to the node")),
        Operation::new(
            "get_node_methods",
            "List the methods available on a node, including script methods.",
        )
        .param(ParamSpec::required("node_path", ParamKind::String, "Path to the node")),
        Operation::new(
            "call_node_method",
            "Call a method on a node in the edited scene and return its result.",
        )
        .param(ParamSpec::required("node_path", ParamKind::String, "Path to the node"))
        .param(ParamSpec::required(
            "method_name",
            ParamKind::String,
            "Name of the method to call",
        ))
        .param(ParamSpec::optional(
            "args",
            ParamKind::List,
            ParamDefault::EmptyList,
            "Positional arguments for the method",
        ))
        .format(|args, data| {
            message(format!(
                "Method {} called successfully. Result: {}",
                args.str("method_name"),
                field_text(data, "result", "None")
            ))
        })
        .fails_with(|args| {
            format!(
                "Failed to call method {} on {}",
                args.str("method_name"),
                args.str("node_path")
            )
        }),
    ]
}
