use super::{Checklist, Choice, Node, TextInput};
use crate::assets::{AssetResolver, NodeAssets};
use crate::document::{NodeCategory, TreeDocument, XmlElement};
use crate::localization::Localizer;
use crate::name::{ANSWER_MARKER, COMPONENT_SEPARATOR, NodeNameInfo, TaskNodeType};
use crate::transition::{ANY, TransitionTable};
use serde::Serialize;

const TASK: &str = "task";
const TRANSITION: &str = "transition";

/// Everything derived from one raw node name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltNode {
    pub node: Node,
    pub transitions: TransitionTable,
    pub assets: NodeAssets,
}

impl BuiltNode {
    fn terminal(node: Node, assets: NodeAssets) -> Self {
        Self {
            node,
            transitions: TransitionTable::new(),
            assets,
        }
    }

    pub fn placeholder() -> Self {
        Self::terminal(Node::placeholder(), NodeAssets::default())
    }
}

/// Turns raw node names into [`Node`]s and their transition tables.
///
/// Building never fails: names that cannot be located or decoded become
/// [`Node::placeholder`] with an empty table.
pub struct NodeFactory<'a> {
    document: &'a TreeDocument,
    localizer: &'a Localizer,
    assets: &'a AssetResolver,
}

impl<'a> NodeFactory<'a> {
    pub fn new(
        document: &'a TreeDocument,
        localizer: &'a Localizer,
        assets: &'a AssetResolver,
    ) -> Self {
        Self {
            document,
            localizer,
            assets,
        }
    }

    pub fn build(&self, raw_name: &str) -> BuiltNode {
        let Some((category, element)) = self.document.locate(raw_name) else {
            tracing::warn!("No task-node, end-state or decision named '{}'", raw_name);
            return BuiltNode::placeholder();
        };

        let info = NodeNameInfo::decode(raw_name);
        let assets = self.assets.resolve(&info, self.localizer.language());

        if category == NodeCategory::EndState {
            return BuiltNode::terminal(Node::end_state(), assets);
        }
        let Some(node_type) = info.node_type else {
            tracing::warn!("Unknown node type '{}' in '{}'", info.type_tag, raw_name);
            return BuiltNode::terminal(Node::placeholder(), assets);
        };

        let text = self.localizer.render(&info.text);
        let (node, transitions) = match category {
            NodeCategory::Decision => self.build_decision(element, text),
            _ => self.build_task(node_type, &info, element, text),
        };

        tracing::debug!(
            "Built {} with {} transitions from '{}'",
            node.variant_name(),
            transitions.len(),
            raw_name
        );
        BuiltNode {
            node,
            transitions,
            assets,
        }
    }

    /// Decision options and routes both come from its `<transition>` children.
    fn build_decision(&self, element: &XmlElement, text: String) -> (Node, TransitionTable) {
        let mut options = Vec::new();
        let mut keys = Vec::new();
        let mut transitions = TransitionTable::new();

        for transition in element.children_named(TRANSITION) {
            let key = transition.attr("name").unwrap_or(ANY);
            let target = transition.attr("to").unwrap_or_default();
            transitions.insert(key, target);
            options.push(self.localizer.render(key));
            keys.push(key.to_string());
        }

        (Node::Decision(Choice::with_keys(text, options, keys)), transitions)
    }

    fn build_task(
        &self,
        node_type: TaskNodeType,
        info: &NodeNameInfo,
        element: &XmlElement,
        text: String,
    ) -> (Node, TransitionTable) {
        let mut transitions = TransitionTable::new();

        let node = match node_type {
            TaskNodeType::TextDisplay => Node::TextDisplay { text },
            TaskNodeType::ImageDisplay => Node::ImageDisplay {
                image: self.image(info),
            },
            TaskNodeType::TextImageDisplay => Node::TextImageDisplay {
                text,
                image: self.image(info),
            },
            TaskNodeType::ImageTextDisplay => Node::ImageTextDisplay {
                image: self.image(info),
                text,
            },
            TaskNodeType::Link => {
                let (options, keys) = self.task_options(element, Some(&mut transitions));
                Node::Link(Choice::with_keys(text, options, keys))
            }
            TaskNodeType::RadioButtons => {
                let (options, keys) = self.task_options(element, None);
                Node::RadioButtons(Choice::with_keys(text, options, keys))
            }
            TaskNodeType::RadioButtonsWithAnswer => {
                let (text, answer) = self.split_answer(text);
                let (options, keys) = self.task_options(element, None);
                let mut choice = Choice::with_keys(text, options, keys);
                choice.answer = answer.and_then(|a| a.trim().parse().ok());
                Node::RadioButtonsWithAnswer(choice)
            }
            TaskNodeType::Checklist => Node::Checklist(Checklist::new(
                text,
                self.task_options(element, None).0,
                info.target_number_of_ticks(),
            )),
            TaskNodeType::Classification => {
                let items = self
                    .task_options(element, None)
                    .0
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| format!("{}) {}", i + 1, item))
                    .collect();
                Node::Classification { text, items }
            }
            TaskNodeType::TextField => Node::TextField(TextInput::new(text)),
            TaskNodeType::TextFieldNumerical => Node::TextFieldNumerical(TextInput::new(text)),
            TaskNodeType::TextFieldWithUnit => Node::TextFieldWithUnit {
                field: TextInput::new(text),
                unit: info.unit.clone().unwrap_or_default(),
            },
            TaskNodeType::TextArea => Node::TextArea(TextInput::new(text)),
            TaskNodeType::TextFieldWithAnswer => {
                let (text, answer) = self.split_answer(text);
                Node::TextFieldWithAnswer(TextInput::with_answer(text, answer))
            }
            TaskNodeType::TextAreaWithAnswer => {
                let (text, answer) = self.split_answer(text);
                Node::TextAreaWithAnswer(TextInput::with_answer(text, answer))
            }
            TaskNodeType::Timestamp => Node::Timestamp { text },
            TaskNodeType::Date => Node::Date { text },
        };

        // Explicit transitions override routes taken from link tasks.
        let strip_tag = node_type == TaskNodeType::Link;
        for transition in element.children_named(TRANSITION) {
            let key = transition.attr("name").unwrap_or(ANY);
            let target = transition.attr("to").unwrap_or_default();
            let target = if strip_tag {
                strip_trailing_component(target)
            } else {
                target
            };
            transitions.insert(key, target);
        }

        (node, transitions)
    }

    /// Rendered option labels and their source labels from `<task>`
    /// children, in document order.
    ///
    /// With `routes`, each task's leading components are recorded as the
    /// target for its source label.
    fn task_options(
        &self,
        element: &XmlElement,
        mut routes: Option<&mut TransitionTable>,
    ) -> (Vec<String>, Vec<String>) {
        let mut options = Vec::new();
        let mut keys = Vec::new();
        for task in element.children_named(TASK) {
            let Some(name) = task.attr("name") else {
                continue;
            };
            let (target, key) = match name.rsplit_once(COMPONENT_SEPARATOR) {
                Some((target, key)) => (Some(target), key),
                None => (None, name),
            };

            if let (Some(routes), Some(target)) = (routes.as_deref_mut(), target) {
                routes.insert(key, target);
            }
            options.push(self.localizer.render(key));
            keys.push(key.to_string());
        }
        (options, keys)
    }

    /// Splits rendered text at the first answer marker. The left side is
    /// rendered again and the right side is the stored answer.
    fn split_answer(&self, text: String) -> (String, Option<String>) {
        match text.split_once(ANSWER_MARKER) {
            Some((question, answer)) => (self.localizer.render(question), Some(answer.to_string())),
            None => (text, None),
        }
    }

    fn image(&self, info: &NodeNameInfo) -> Option<std::path::PathBuf> {
        info.image_file_name
            .as_deref()
            .and_then(|name| self.assets.image(name))
    }
}

/// Drops the last `~` component, which link targets carry as a tag.
fn strip_trailing_component(target: &str) -> &str {
    match target.rsplit_once(COMPONENT_SEPARATOR) {
        Some((head, _)) => head,
        None => "",
    }
}
