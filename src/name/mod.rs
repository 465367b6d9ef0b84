//! Decoder for the compact node-name mini-language.
//!
//! A raw node name is a `~`-separated list of components:
//!
//! ```text
//! <type>[~<image|unit|target>]...[~@<key>=<value>]...~<text>
//! ```
//!
//! The first component is the [`TaskNodeType`] tag and the last plain
//! component is the display text, which is the tag itself for a one-component
//! name. Components of the form `@key=value` are
//! modifiers and may appear anywhere. Decoding is total: every input yields a
//! [`NodeNameInfo`], with fields left empty where the name says nothing.

mod types;

pub use types::*;

use serde::Serialize;

pub const COMPONENT_SEPARATOR: char = '~';
pub const MODIFIER_PREFIX: char = '@';
pub const ANSWER_MARKER: &str = "Answer=";

/// Background image base name used when a name carries no `@bg=` modifier.
pub const DEFAULT_BACKGROUND_IMAGE: &str = "bg";

/// Recognised modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    BackgroundImage,
    BackgroundAudio,
    VoiceOverAudio,
    Target,
}

impl ModifierKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "bg" => Some(ModifierKey::BackgroundImage),
            "bgAudioName" => Some(ModifierKey::BackgroundAudio),
            "audioName" => Some(ModifierKey::VoiceOverAudio),
            "target" => Some(ModifierKey::Target),
            _ => None,
        }
    }
}

/// Values of the inline `@key=value` modifiers. The first valid occurrence of a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    pub background_image: Option<String>,
    pub background_audio: Option<String>,
    pub voice_over_audio: Option<String>,
    pub target: Option<usize>,
}

impl Modifiers {
    fn absorb(&mut self, key: &str, value: &str) {
        let Some(key) = ModifierKey::from_key(key) else {
            tracing::debug!("Ignoring unknown modifier '@{}'", key);
            return;
        };
        if value.is_empty() {
            return;
        }

        match key {
            ModifierKey::BackgroundImage => {
                self.background_image.get_or_insert_with(|| value.to_string());
            }
            ModifierKey::BackgroundAudio => {
                self.background_audio.get_or_insert_with(|| value.to_string());
            }
            ModifierKey::VoiceOverAudio => {
                self.voice_over_audio.get_or_insert_with(|| value.to_string());
            }
            ModifierKey::Target => {
                if self.target.is_none() {
                    self.target = value.trim().parse().ok();
                }
            }
        }
    }
}

/// A single classified name component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Plain(&'a str),
    Modifier { key: &'a str, value: &'a str },
}

impl<'a> Segment<'a> {
    fn classify(component: &'a str) -> Self {
        if let Some((key, value)) = component
            .strip_prefix(MODIFIER_PREFIX)
            .and_then(|rest| rest.split_once('='))
        {
            if !key.is_empty() {
                return Segment::Modifier { key, value };
            }
        }
        Segment::Plain(component)
    }
}

/// The structured form of a raw node name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeNameInfo {
    /// The first component, verbatim.
    pub type_tag: String,
    /// `None` when the tag is not one of the known types.
    pub node_type: Option<TaskNodeType>,
    /// Untranslated display text.
    pub text: String,
    /// Image base name, only for image-bearing types.
    pub image_file_name: Option<String>,
    /// Unit label, only for `textFieldWithUnit`.
    pub unit: Option<String>,
    pub modifiers: Modifiers,
    /// Plain components after the type tag, in order.
    pub components: Vec<String>,
}

impl NodeNameInfo {
    pub fn decode(raw: &str) -> Self {
        let mut parts = raw.split(COMPONENT_SEPARATOR);
        let type_tag = parts.next().unwrap_or_default();

        let mut modifiers = Modifiers::default();
        let tag_is_modifier = match Segment::classify(type_tag) {
            Segment::Modifier { key, value } => {
                modifiers.absorb(key, value);
                true
            }
            Segment::Plain(_) => false,
        };

        let mut plain: Vec<&str> = Vec::new();
        for component in parts {
            match Segment::classify(component) {
                Segment::Modifier { key, value } => modifiers.absorb(key, value),
                Segment::Plain(p) => plain.push(p),
            }
        }

        let node_type = TaskNodeType::from_tag(type_tag);
        let carries_answer = node_type.is_some_and(|t| t.carries_answer());

        let text = match plain.as_slice() {
            [.., previous, last] if carries_answer && last.starts_with(ANSWER_MARKER) => {
                format!("{}{}", previous, last)
            }
            [.., last] => (*last).to_string(),
            // A lone tag is its own last component.
            [] if !tag_is_modifier => type_tag.to_string(),
            [] => String::new(),
        };

        let image_file_name = match node_type {
            Some(t) if t.is_image_bearing() => plain.first().map(|s| (*s).to_string()),
            _ => None,
        };

        let unit = match (node_type, plain.as_slice()) {
            (Some(TaskNodeType::TextFieldWithUnit), [unit, _, ..]) => Some((*unit).to_string()),
            _ => None,
        };

        Self {
            type_tag: type_tag.to_string(),
            node_type,
            text,
            image_file_name,
            unit,
            modifiers,
            components: plain.into_iter().map(str::to_string).collect(),
        }
    }

    /// Base name of the background image, defaulting to [`DEFAULT_BACKGROUND_IMAGE`].
    pub fn background_image_name(&self) -> &str {
        self.modifiers
            .background_image
            .as_deref()
            .unwrap_or(DEFAULT_BACKGROUND_IMAGE)
    }

    /// Number of ticks a checklist needs for a `"Yes"` transition.
    ///
    /// `@target=` wins; otherwise a numeric second component is used.
    pub fn target_number_of_ticks(&self) -> usize {
        if let Some(target) = self.modifiers.target {
            return target;
        }
        match self.components.as_slice() {
            [count, _, ..] => count.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }
}
