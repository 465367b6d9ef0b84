use serde::Serialize;

/// Raw node names visited from the start node to the current one.
///
/// The last entry is always the name the current node was built from.
/// A history of length one is at the start and cannot retreat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationHistory {
    names: Vec<String>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Drops the current entry unless it is the only one, returning it.
    pub fn pop(&mut self) -> Option<String> {
        if self.names.len() > 1 {
            self.names.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    pub fn previous(&self) -> Option<&str> {
        self.names
            .len()
            .checked_sub(2)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    pub fn can_retreat(&self) -> bool {
        self.names.len() > 1
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}
