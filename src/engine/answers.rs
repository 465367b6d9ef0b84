use crate::node::Node;
use crate::transition::TransitionKey;
use serde::Serialize;

/// What the user did at one node, captured when leaving it forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeState {
    pub node_name: String,
    pub transition_key: TransitionKey,
    pub text_input: Option<String>,
    pub selected_indices: Vec<usize>,
}

impl NodeState {
    pub fn capture(node_name: &str, node: &Node, transition_key: TransitionKey) -> Self {
        Self {
            node_name: node_name.to_string(),
            transition_key,
            text_input: node.text_input().map(str::to_string),
            selected_indices: node.selected_indices(),
        }
    }
}
