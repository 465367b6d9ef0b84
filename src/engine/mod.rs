//! The tree engine: one navigation session over one bundle.

mod answers;
mod config;

pub use answers::*;
pub use config::*;

use crate::assets::{AssetResolver, NodeAssets};
use crate::document::{NodeCategory, TreeDocument};
use crate::error::DocumentError;
use crate::history::NavigationHistory;
use crate::localization::{HintsDictionary, Localizer};
use crate::node::{BuiltNode, Node, NodeFactory};
use crate::transition::{TransitionKey, TransitionTable, next_node_name, transition_key};
use std::path::Path;

/// Why [`TreeEngine::advance`] did not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// The node needs a selection before it can be left.
    SelectionRequired,
    /// The computed transition key has no row in the table.
    NoTransition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved,
    Blocked(BlockReason),
}

impl Advance {
    pub fn is_moved(&self) -> bool {
        matches!(self, Advance::Moved)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    Moved,
    AtStart,
}

impl Retreat {
    pub fn is_moved(&self) -> bool {
        matches!(self, Retreat::Moved)
    }
}

/// Walks a tree bundle one node at a time.
///
/// The engine owns the document, the catalogs of the active language, the
/// navigation history and the node built from the top of that history.
/// Every operation is synchronous; callers serialize access.
#[derive(Debug)]
pub struct TreeEngine {
    document: TreeDocument,
    localizer: Localizer,
    assets: AssetResolver,
    config: EngineConfig,
    history: NavigationHistory,
    current: BuiltNode,
    answers: Vec<NodeState>,
}

impl TreeEngine {
    /// Opens the bundle at `root` with default settings.
    ///
    /// Never fails: an unreadable bundle yields an engine with an empty
    /// history and a placeholder node.
    pub fn load(root: impl AsRef<Path>) -> Self {
        Self::load_with_config(root, EngineConfig::default())
    }

    pub fn load_with_config(root: impl AsRef<Path>, config: EngineConfig) -> Self {
        let root = root.as_ref();
        let document = match TreeDocument::open(root) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!("Falling back to an empty tree: {}", e);
                TreeDocument::empty(root)
            }
        };
        Self::from_document(document, config)
    }

    /// Like [`TreeEngine::load_with_config`], but reports bundle errors.
    pub fn try_load(root: impl AsRef<Path>, config: EngineConfig) -> Result<Self, DocumentError> {
        let document = TreeDocument::open(root)?;
        Ok(Self::from_document(document, config))
    }

    pub fn from_document(document: TreeDocument, config: EngineConfig) -> Self {
        let language = match config.language.as_deref() {
            Some(language) if document.is_language_available(language) => language.to_string(),
            Some(language) => {
                tracing::warn!(
                    "Language '{}' is not available, using '{}'",
                    language,
                    document.base_language()
                );
                document.base_language().to_string()
            }
            None => document.base_language().to_string(),
        };

        let localizer = Localizer::load(document.layout(), document.base_language(), &language);
        let assets = AssetResolver::new(document.layout().clone());

        let history = match document.start_node_name() {
            Some(start) => NavigationHistory::starting_at(start),
            None => {
                tracing::warn!("'{}' has no start transition", document.title());
                NavigationHistory::new()
            }
        };
        let current = match history.current() {
            Some(name) => NodeFactory::new(&document, &localizer, &assets).build(name),
            None => BuiltNode::placeholder(),
        };

        tracing::info!(
            "Loaded '{}' in {} ({} languages)",
            document.title(),
            language,
            document.available_languages().len()
        );

        Self {
            document,
            localizer,
            assets,
            config,
            history,
            current,
            answers: Vec::new(),
        }
    }

    fn build(&self, name: &str) -> BuiltNode {
        NodeFactory::new(&self.document, &self.localizer, &self.assets).build(name)
    }

    fn rebuild_current(&mut self) {
        let rebuilt = match self.history.current() {
            Some(name) => self.build(name),
            None => BuiltNode::placeholder(),
        };
        self.current = rebuilt;
    }

    /// Moves to the node selected by the current interaction state.
    pub fn advance(&mut self) -> Advance {
        if self.should_block_advance() {
            return Advance::Blocked(BlockReason::SelectionRequired);
        }

        let key = self.current_transition_key();
        let Some(next) = self.next_node_name().map(str::to_string) else {
            tracing::debug!("Advance blocked: no transition for '{}'", key);
            return Advance::Blocked(BlockReason::NoTransition);
        };

        if let Some(name) = self.history.current() {
            self.answers
                .push(NodeState::capture(name, &self.current.node, key));
        }
        self.current = self.build(&next);
        self.history.push(next);

        tracing::debug!("Advanced to {}", self.current.node.variant_name());
        Advance::Moved
    }

    /// Returns to the previous node, rebuilding it from its name.
    pub fn retreat(&mut self) -> Retreat {
        if self.history.pop().is_none() {
            return Retreat::AtStart;
        }
        self.answers.pop();
        self.rebuild_current();
        Retreat::Moved
    }

    /// Switches the active language and re-derives the current node.
    ///
    /// Returns false, leaving everything unchanged, when the bundle does not
    /// provide `language`. History is never touched.
    pub fn set_language(&mut self, language: &str) -> bool {
        if !self.document.is_language_available(language) {
            tracing::warn!("Language '{}' is not available", language);
            return false;
        }
        self.localizer = Localizer::load(
            self.document.layout(),
            self.document.base_language(),
            language,
        );
        self.rebuild_current();
        tracing::info!("Switched language to {}", language);
        true
    }

    pub fn current_node(&self) -> &Node {
        &self.current.node
    }

    /// Mutable access for recording selections and typed text.
    pub fn current_node_mut(&mut self) -> &mut Node {
        &mut self.current.node
    }

    pub fn current_node_name(&self) -> Option<&str> {
        self.history.current()
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.current.transitions
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// One record per forward step, oldest first.
    pub fn answers(&self) -> &[NodeState] {
        &self.answers
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn document(&self) -> &TreeDocument {
        &self.document
    }

    pub fn title(&self) -> &str {
        self.document.title()
    }

    pub fn hints(&self) -> &HintsDictionary {
        self.localizer.hints()
    }

    pub fn assets(&self) -> &NodeAssets {
        &self.current.assets
    }

    pub fn background_image(&self) -> Option<&Path> {
        self.current.assets.background_image.as_deref()
    }

    pub fn background_audio(&self) -> Option<&Path> {
        self.current.assets.background_audio.as_deref()
    }

    pub fn voice_over_audio(&self) -> Option<&Path> {
        self.current.assets.voice_over_audio.as_deref()
    }

    pub fn available_languages(&self) -> &[String] {
        self.document.available_languages()
    }

    pub fn base_language(&self) -> &str {
        self.document.base_language()
    }

    pub fn current_language(&self) -> &str {
        self.localizer.language()
    }

    pub fn current_language_code(&self) -> &'static str {
        self.localizer.language_code()
    }

    pub fn current_transition_key(&self) -> TransitionKey {
        transition_key(&self.current.node, &self.current.transitions)
    }

    pub fn next_node_name(&self) -> Option<&str> {
        next_node_name(&self.current.node, &self.current.transitions)
    }

    /// True unless the current name resolves to a task-node or decision.
    pub fn is_current_end_state(&self) -> bool {
        self.history
            .current()
            .is_none_or(|name| self.is_terminal_name(name))
    }

    /// True unless the next name resolves to a task-node or decision.
    pub fn is_next_end_state(&self) -> bool {
        self.next_node_name()
            .is_none_or(|name| self.is_terminal_name(name))
    }

    fn is_terminal_name(&self, name: &str) -> bool {
        matches!(
            self.document.category_of(name),
            None | Some(NodeCategory::EndState)
        )
    }

    pub fn is_next_node_available(&self) -> bool {
        self.next_node_name()
            .is_some_and(|name| self.document.category_of(name).is_some())
    }

    pub fn is_previous_node_available(&self) -> bool {
        self.history.can_retreat()
    }

    /// True when a single-choice node has nothing selected. Checklists never
    /// block: too few ticks resolve to `"No"`.
    pub fn should_block_advance(&self) -> bool {
        let node = &self.current.node;
        node.is_selection_type() && !node.has_selection() && !matches!(node, Node::Checklist(_))
    }
}
