use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Session settings handed to the engine by its host.
///
/// The engine stores these for the presentation layer; it never reads
/// process-wide state for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub voice_over: bool,
    pub autoplay: bool,
    /// Language to start in. Ignored when the bundle does not provide it.
    pub language: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            voice_over: true,
            autoplay: false,
            language: None,
        }
    }
}

impl EngineConfig {
    /// Loads a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(content)?;
        Ok(config.normalized())
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Autoplay reads content aloud, so it implies voice-over.
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self.normalized()
    }

    pub fn with_voice_over(mut self, voice_over: bool) -> Self {
        self.voice_over = voice_over;
        self
    }

    fn normalized(mut self) -> Self {
        if self.autoplay {
            self.voice_over = true;
        }
        self
    }
}
