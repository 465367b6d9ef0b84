//! The immutable, parsed side of a tree bundle.
//!
//! A [`TreeDocument`] owns the process definition as an [`XmlElement`] tree
//! together with everything derived from the bundle layout at load time:
//! title, base language and the sorted list of available languages.

mod bundle;
mod xml;

pub use bundle::*;
pub use xml::*;

use crate::error::DocumentError;
use itertools::Itertools;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_LANGUAGE: &str = "English";

const PROCESS_DEFINITION: &str = "process-definition";
const START_STATE: &str = "start-state";
const TRANSITION: &str = "transition";

/// The three structural element categories of a process definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeCategory {
    TaskNode,
    EndState,
    Decision,
}

impl NodeCategory {
    /// Lookup precedence: the first category containing a name wins.
    pub const PRECEDENCE: [NodeCategory; 3] = [
        NodeCategory::TaskNode,
        NodeCategory::EndState,
        NodeCategory::Decision,
    ];

    pub fn element_name(&self) -> &'static str {
        match self {
            NodeCategory::TaskNode => "task-node",
            NodeCategory::EndState => "end-state",
            NodeCategory::Decision => "decision",
        }
    }
}

/// A loaded tree bundle. Read-only after construction.
#[derive(Debug, Clone)]
pub struct TreeDocument {
    layout: BundleLayout,
    title: String,
    base_language: String,
    available_languages: Vec<String>,
    process: XmlElement,
}

impl TreeDocument {
    /// Reads the bundle rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let layout = BundleLayout::new(root.as_ref());
        let path = layout
            .process_definition_path()
            .ok_or_else(|| DocumentError::MissingProcessDefinition(layout.root().to_path_buf()))?;

        let content = fs::read_to_string(&path).map_err(|source| DocumentError::Io {
            path: path.clone(),
            source,
        })?;
        let process = parse_process_definition(&content, &path)?;

        tracing::debug!("Loaded process definition from {}", path.display());
        Ok(Self::assemble(layout, process))
    }

    /// Builds a document from in-memory XML; catalogs and assets are still
    /// looked up under `root`.
    pub fn from_xml_str(root: impl Into<PathBuf>, content: &str) -> Result<Self, DocumentError> {
        let layout = BundleLayout::new(root);
        let path = layout.root().to_path_buf();
        let process = parse_process_definition(content, &path)?;
        Ok(Self::assemble(layout, process))
    }

    /// A document with no nodes at all. Used when a bundle cannot be read.
    pub fn empty(root: impl Into<PathBuf>) -> Self {
        Self::assemble(BundleLayout::new(root), XmlElement::new(PROCESS_DEFINITION))
    }

    fn assemble(layout: BundleLayout, process: XmlElement) -> Self {
        let base_language = process
            .attr("lang")
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_LANGUAGE)
            .to_string();

        let available_languages = layout
            .translated_languages()
            .into_iter()
            .chain(std::iter::once(base_language.clone()))
            .sorted()
            .dedup()
            .collect();

        Self {
            title: layout.title(),
            layout,
            base_language,
            available_languages,
            process,
        }
    }

    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn layout(&self) -> &BundleLayout {
        &self.layout
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    pub fn available_languages(&self) -> &[String] {
        &self.available_languages
    }

    pub fn is_language_available(&self, language: &str) -> bool {
        self.available_languages.iter().any(|l| l == language)
    }

    pub fn process_definition(&self) -> &XmlElement {
        &self.process
    }

    /// The raw name the walk starts from: `start-state/transition[@to]`.
    pub fn start_node_name(&self) -> Option<&str> {
        self.process
            .child(START_STATE)?
            .child(TRANSITION)?
            .attr("to")
    }

    /// Finds the element for `name`, honouring [`NodeCategory::PRECEDENCE`].
    pub fn locate(&self, name: &str) -> Option<(NodeCategory, &XmlElement)> {
        NodeCategory::PRECEDENCE.into_iter().find_map(|category| {
            self.process
                .child_with_name_attr(category.element_name(), name)
                .map(|element| (category, element))
        })
    }

    pub fn category_of(&self, name: &str) -> Option<NodeCategory> {
        self.locate(name).map(|(category, _)| category)
    }
}

fn parse_process_definition(content: &str, path: &Path) -> Result<XmlElement, DocumentError> {
    let root = parse_document(content).map_err(|message| DocumentError::Xml {
        path: path.to_path_buf(),
        message,
    })?;

    if root.name == PROCESS_DEFINITION {
        return Ok(root);
    }
    // Tolerate a wrapper element around the process definition.
    match root.child(PROCESS_DEFINITION) {
        Some(process) => Ok(process.clone()),
        None => Err(DocumentError::Xml {
            path: path.to_path_buf(),
            message: format!("expected <{}>, found <{}>", PROCESS_DEFINITION, root.name),
        }),
    }
}
