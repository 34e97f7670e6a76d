//! Editor selection

use super::{message, Operation, ParamKind, ParamSpec};

pub(super) fn operations() -> Vec<Operation> {
    vec![
        Operation::new("get_selected_nodes", "List the nodes currently selected in the editor.")
            .fails_as("Failed to get selected nodes"),
        Operation::new("select_node", "Select a node in the editor's scene dock and inspector.")
            .param(ParamSpec::required("node_path", ParamKind::String, "Path to the node"))
            .format(|args, _| message(format!("Selected {}", args.str("node_path"))))
            .fails_with(|args| format!("Failed to select {}", args.str("node_path"))),
        Operation::new("clear_selection", "Deselect all nodes in the editor.")
            .format(|_, _| message("Selection cleared"))
            .fails_as("Failed to clear selection"),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::lookup;
    use serde_json::json;

    #[test]
    fn test_select_node_message_and_prefix() {
        let op = lookup("select_node").unwrap();
        let args = op.build_args(&json!({"node_path": "Main/Player"})).unwrap();

        assert_eq!((op.format)(&args, &json!({}))["message"], "Selected Main/Player");
        assert_eq!(op.error_prefix.render(&args), "Failed to select Main/Player");
        assert_eq!(op.command(&args).params["node_path"], "Main/Player");
    }

    #[test]
    fn test_clear_selection_sends_no_params() {
        let op = lookup("clear_selection").unwrap();
        let args = op.build_args(&json!({})).unwrap();

        assert!(op.command(&args).params.is_empty());
        assert_eq!((op.format)(&args, &json!({}))["message"], "Selection cleared");
    }

    #[test]
    fn test_selected_nodes_pass_through() {
        let op = lookup("get_selected_nodes").unwrap();
        let args = op.build_args(&json!({})).unwrap();
        let data = json!({"selected": [{"name": "Player", "path": "Main/Player"}]});
        assert_eq!((op.format)(&args, &data), data);
    }
}
