//! Per-node transition tables and the keys that select their rows.

mod resolver;

pub use resolver::*;

use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

pub const YES: &str = "Yes";
pub const NO: &str = "No";
/// Key used by `<transition>` elements without a `name` attribute.
pub const ANY: &str = "Any";

/// The symbolic label computed from a node's interaction state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TransitionKey {
    Yes,
    No,
    Any,
    /// An option label, for free-form branching.
    Label(String),
}

impl TransitionKey {
    pub fn as_str(&self) -> &str {
        match self {
            TransitionKey::Yes => YES,
            TransitionKey::No => NO,
            TransitionKey::Any => ANY,
            TransitionKey::Label(label) => label,
        }
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic key to raw next-node name. Rebuilt for every node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransitionTable {
    rows: AHashMap<String, String>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row, replacing any earlier row with the same key.
    pub fn insert(&mut self, key: impl Into<String>, target: impl Into<String>) {
        self.rows.insert(key.into(), target.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.rows.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = TransitionTable::new();
        for (key, target) in iter {
            table.insert(key, target);
        }
        table
    }
}
