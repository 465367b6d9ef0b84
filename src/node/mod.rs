//! The closed set of interpreted node variants.
//!
//! Interaction state lives inside the variant payloads: the presentation
//! layer mutates it through [`Node::select`], [`Node::toggle`] and
//! [`Node::set_text_input`], and the transition resolver reads it back.

mod factory;

pub use factory::*;

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const PLACEHOLDER_TEXT: &str = "Unknown Node";
pub const END_STATE_TEXT: &str = "You've now reached the end";

/// Separator between alternative expected text answers.
pub const ANSWER_ALTERNATIVE_SEPARATOR: char = '|';

/// Free-text input state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextInput {
    pub text: String,
    pub input: String,
    /// Pipe-separated expected answers, if the node checks its input.
    pub answer: Option<String>,
}

impl TextInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_answer(text: impl Into<String>, answer: Option<String>) -> Self {
        Self {
            text: text.into(),
            input: String::new(),
            answer,
        }
    }

    /// True when the current input equals one of the expected answers.
    pub fn is_correct(&self) -> bool {
        self.answer.as_deref().is_some_and(|answers| {
            answers
                .split(ANSWER_ALTERNATIVE_SEPARATOR)
                .any(|candidate| candidate == self.input)
        })
    }
}

/// Single-choice state shared by radio buttons, links and decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub text: String,
    /// Labels as displayed in the current language.
    pub options: Vec<String>,
    /// Source-language labels, parallel to `options`. Transitions are keyed on these.
    pub keys: Vec<String>,
    pub selected: Option<usize>,
    /// Index of the correct option, for `radioButtonsWithAnswer`.
    pub answer: Option<usize>,
}

impl Choice {
    /// A choice whose displayed labels are also its keys.
    pub fn new(text: impl Into<String>, options: Vec<String>) -> Self {
        let keys = options.clone();
        Self::with_keys(text, options, keys)
    }

    pub fn with_keys(text: impl Into<String>, options: Vec<String>, keys: Vec<String>) -> Self {
        Self {
            text: text.into(),
            options,
            keys,
            selected: None,
            answer: None,
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }

    /// Source-language label of the selected option.
    pub fn selected_key(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.keys.get(index))
            .map(String::as_str)
    }
}

/// Multi-choice state with a required number of ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Checklist {
    pub text: String,
    pub options: Vec<String>,
    pub ticked: BTreeSet<usize>,
    pub target: usize,
}

impl Checklist {
    pub fn new(text: impl Into<String>, options: Vec<String>, target: usize) -> Self {
        Self {
            text: text.into(),
            options,
            ticked: BTreeSet::new(),
            target,
        }
    }

    /// Flips the tick on `index`. Returns false for an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        if !self.ticked.remove(&index) {
            self.ticked.insert(index);
        }
        true
    }

    pub fn is_target_met(&self) -> bool {
        self.ticked.len() >= self.target
    }
}

/// One interpreted unit of content or interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Node {
    TextDisplay { text: String },
    ImageDisplay { image: Option<PathBuf> },
    TextImageDisplay { text: String, image: Option<PathBuf> },
    ImageTextDisplay { image: Option<PathBuf>, text: String },
    TextField(TextInput),
    TextFieldNumerical(TextInput),
    TextFieldWithUnit { field: TextInput, unit: String },
    TextFieldWithAnswer(TextInput),
    TextArea(TextInput),
    TextAreaWithAnswer(TextInput),
    RadioButtons(Choice),
    RadioButtonsWithAnswer(Choice),
    Link(Choice),
    Decision(Choice),
    Checklist(Checklist),
    Classification { text: String, items: Vec<String> },
    Timestamp { text: String },
    Date { text: String },
    EndState { text: String },
    /// Stand-in for anything that could not be interpreted.
    Unknown { text: String },
}

impl Node {
    pub fn placeholder() -> Self {
        Node::Unknown {
            text: PLACEHOLDER_TEXT.to_string(),
        }
    }

    pub fn end_state() -> Self {
        Node::EndState {
            text: END_STATE_TEXT.to_string(),
        }
    }

    /// Short variant name for logs.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Node::TextDisplay { .. } => "TextDisplay",
            Node::ImageDisplay { .. } => "ImageDisplay",
            Node::TextImageDisplay { .. } => "TextImageDisplay",
            Node::ImageTextDisplay { .. } => "ImageTextDisplay",
            Node::TextField(_) => "TextField",
            Node::TextFieldNumerical(_) => "TextFieldNumerical",
            Node::TextFieldWithUnit { .. } => "TextFieldWithUnit",
            Node::TextFieldWithAnswer(_) => "TextFieldWithAnswer",
            Node::TextArea(_) => "TextArea",
            Node::TextAreaWithAnswer(_) => "TextAreaWithAnswer",
            Node::RadioButtons(_) => "RadioButtons",
            Node::RadioButtonsWithAnswer(_) => "RadioButtonsWithAnswer",
            Node::Link(_) => "Link",
            Node::Decision(_) => "Decision",
            Node::Checklist(_) => "Checklist",
            Node::Classification { .. } => "Classification",
            Node::Timestamp { .. } => "Timestamp",
            Node::Date { .. } => "Date",
            Node::EndState { .. } => "EndState",
            Node::Unknown { .. } => "Unknown",
        }
    }

    /// Display text; `None` for image-only nodes.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::ImageDisplay { .. } => None,
            Node::TextDisplay { text }
            | Node::TextImageDisplay { text, .. }
            | Node::ImageTextDisplay { text, .. }
            | Node::Classification { text, .. }
            | Node::Timestamp { text }
            | Node::Date { text }
            | Node::EndState { text }
            | Node::Unknown { text } => Some(text),
            Node::TextField(field)
            | Node::TextFieldNumerical(field)
            | Node::TextFieldWithUnit { field, .. }
            | Node::TextFieldWithAnswer(field)
            | Node::TextArea(field)
            | Node::TextAreaWithAnswer(field) => Some(&field.text),
            Node::RadioButtons(choice)
            | Node::RadioButtonsWithAnswer(choice)
            | Node::Link(choice)
            | Node::Decision(choice) => Some(&choice.text),
            Node::Checklist(checklist) => Some(&checklist.text),
        }
    }

    pub fn image(&self) -> Option<&Path> {
        match self {
            Node::ImageDisplay { image }
            | Node::TextImageDisplay { image, .. }
            | Node::ImageTextDisplay { image, .. } => image.as_deref(),
            _ => None,
        }
    }

    /// Option labels in document order; classification items included.
    pub fn options(&self) -> &[String] {
        match self {
            Node::RadioButtons(choice)
            | Node::RadioButtonsWithAnswer(choice)
            | Node::Link(choice)
            | Node::Decision(choice) => &choice.options,
            Node::Checklist(checklist) => &checklist.options,
            Node::Classification { items, .. } => items,
            _ => &[],
        }
    }

    pub fn unit(&self) -> Option<&str> {
        match self {
            Node::TextFieldWithUnit { unit, .. } => Some(unit),
            _ => None,
        }
    }

    fn text_input_state(&self) -> Option<&TextInput> {
        match self {
            Node::TextField(field)
            | Node::TextFieldNumerical(field)
            | Node::TextFieldWithUnit { field, .. }
            | Node::TextFieldWithAnswer(field)
            | Node::TextArea(field)
            | Node::TextAreaWithAnswer(field) => Some(field),
            _ => None,
        }
    }

    fn text_input_state_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Node::TextField(field)
            | Node::TextFieldNumerical(field)
            | Node::TextFieldWithUnit { field, .. }
            | Node::TextFieldWithAnswer(field)
            | Node::TextArea(field)
            | Node::TextAreaWithAnswer(field) => Some(field),
            _ => None,
        }
    }

    fn choice_mut(&mut self) -> Option<&mut Choice> {
        match self {
            Node::RadioButtons(choice)
            | Node::RadioButtonsWithAnswer(choice)
            | Node::Link(choice)
            | Node::Decision(choice) => Some(choice),
            _ => None,
        }
    }

    /// Selects option `index` on a single-choice node.
    pub fn select(&mut self, index: usize) -> bool {
        self.choice_mut().is_some_and(|choice| choice.select(index))
    }

    /// Toggles option `index` on a checklist.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self {
            Node::Checklist(checklist) => checklist.toggle(index),
            _ => false,
        }
    }

    /// Replaces the typed text of a text-input node.
    pub fn set_text_input(&mut self, input: impl Into<String>) -> bool {
        match self.text_input_state_mut() {
            Some(field) => {
                field.input = input.into();
                true
            }
            None => false,
        }
    }

    pub fn text_input(&self) -> Option<&str> {
        self.text_input_state().map(|field| field.input.as_str())
    }

    /// Selected or ticked option indices, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        match self {
            Node::RadioButtons(choice)
            | Node::RadioButtonsWithAnswer(choice)
            | Node::Link(choice)
            | Node::Decision(choice) => choice.selected.into_iter().collect(),
            Node::Checklist(checklist) => checklist.ticked.iter().copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Nodes whose options are picked by the user.
    pub fn is_selection_type(&self) -> bool {
        matches!(
            self,
            Node::RadioButtons(_)
                | Node::RadioButtonsWithAnswer(_)
                | Node::Link(_)
                | Node::Decision(_)
                | Node::Checklist(_)
        )
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_indices().is_empty()
    }

    pub fn is_end_state(&self) -> bool {
        matches!(self, Node::EndState { .. })
    }
}
