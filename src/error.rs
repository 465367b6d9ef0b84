use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a tree bundle from disk.
///
/// These never escape `TreeEngine::load`; the engine logs them and degrades
/// to an empty document or catalog instead.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML in '{path}': {message}")]
    Xml { path: PathBuf, message: String },

    #[error("No process definition found under '{0}'")]
    MissingProcessDefinition(PathBuf),
}

/// Errors that can occur while loading an `EngineConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
