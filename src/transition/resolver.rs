use super::{TransitionKey, TransitionTable};
use crate::node::{Choice, Node};

/// Computes the transition key for `node` from its interaction state.
///
/// Labels are matched by their source-language key, so routing is the same
/// in every language. The table is consulted only by plain radio buttons,
/// which branch on the selected key when a row for it exists and fall
/// through to `"Any"` otherwise.
pub fn transition_key(node: &Node, table: &TransitionTable) -> TransitionKey {
    match node {
        Node::Checklist(checklist) => {
            if checklist.is_target_met() {
                TransitionKey::Yes
            } else {
                TransitionKey::No
            }
        }
        Node::RadioButtonsWithAnswer(choice) => match (choice.selected, choice.answer) {
            (None, _) => TransitionKey::Any,
            (Some(selected), Some(answer)) => {
                if selected == answer {
                    TransitionKey::Yes
                } else {
                    TransitionKey::No
                }
            }
            (Some(_), None) => label_if_routed(choice, table),
        },
        Node::RadioButtons(choice) => label_if_routed(choice, table),
        Node::Link(choice) | Node::Decision(choice) => match choice.selected_key() {
            Some(label) => TransitionKey::Label(label.to_string()),
            None => TransitionKey::Any,
        },
        Node::TextFieldWithAnswer(field) | Node::TextAreaWithAnswer(field) => {
            match field.answer {
                Some(_) if field.is_correct() => TransitionKey::Yes,
                Some(_) => TransitionKey::No,
                None => TransitionKey::Any,
            }
        }
        Node::TextDisplay { .. }
        | Node::ImageDisplay { .. }
        | Node::TextImageDisplay { .. }
        | Node::ImageTextDisplay { .. }
        | Node::TextField(_)
        | Node::TextFieldNumerical(_)
        | Node::TextFieldWithUnit { .. }
        | Node::TextArea(_)
        | Node::Classification { .. }
        | Node::Timestamp { .. }
        | Node::Date { .. }
        | Node::EndState { .. }
        | Node::Unknown { .. } => TransitionKey::Any,
    }
}

fn label_if_routed(choice: &Choice, table: &TransitionTable) -> TransitionKey {
    match choice.selected_key() {
        Some(key) if table.contains_key(key) => TransitionKey::Label(key.to_string()),
        _ => TransitionKey::Any,
    }
}

/// The raw name of the node `advance` would move to, if any.
///
/// Rows with an empty target count as missing.
pub fn next_node_name<'t>(node: &Node, table: &'t TransitionTable) -> Option<&'t str> {
    let key = transition_key(node, table);
    let next = table.get(key.as_str()).filter(|name| !name.is_empty());
    if next.is_none() {
        tracing::debug!("No transition for key '{}'", key);
    }
    next
}
