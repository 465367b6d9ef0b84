use crate::document::parse_document;
use crate::error::DocumentError;
use ahash::AHashMap;
use std::fs;
use std::path::Path;

const RESOURCES: &str = "resources";
const STRING: &str = "string";

/// A `resources/string[@name]` catalog: source text to translated text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: AHashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|message| DocumentError::Xml {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses catalog XML. When a key repeats, the first entry wins.
    pub fn parse(content: &str) -> Result<Self, String> {
        let root = parse_document(content)?;
        let resources = if root.name == RESOURCES {
            &root
        } else {
            match root.child(RESOURCES) {
                Some(resources) => resources,
                None => return Ok(Self::default()),
            }
        };

        let mut entries = AHashMap::new();
        for string in resources.children_named(STRING) {
            if let Some(key) = string.attr("name") {
                entries
                    .entry(key.to_string())
                    .or_insert_with(|| string.text.clone());
            }
        }
        Ok(Self { entries })
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Per-language word hints, keyed by lower-cased word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintsDictionary {
    hints: AHashMap<String, String>,
}

impl HintsDictionary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let hints = catalog
            .iter()
            .map(|(word, hint)| (word.to_lowercase(), hint.to_string()))
            .collect();
        Self { hints }
    }

    /// Looks up a hint for `word`, ignoring case.
    pub fn hint_for(&self, word: &str) -> Option<&str> {
        self.hints.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.hints.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
