//! Translation and hint overlays for the active language.

mod catalog;
mod language;

pub use catalog::*;
pub use language::*;

use crate::document::BundleLayout;
use std::borrow::Cow;

/// Markup token rewritten to a line break in display text.
pub const LINE_BREAK_MARKUP: &str = "{br}";

/// Holds the catalogs of the active language and applies the
/// translate-then-demarkup text pipeline.
#[derive(Debug, Clone)]
pub struct Localizer {
    base_language: String,
    language: String,
    translations: Catalog,
    hints: HintsDictionary,
}

impl Localizer {
    /// A localizer with no catalogs; all text passes through untranslated.
    pub fn new(base_language: impl Into<String>) -> Self {
        let base_language = base_language.into();
        Self {
            language: base_language.clone(),
            base_language,
            translations: Catalog::default(),
            hints: HintsDictionary::default(),
        }
    }

    /// Reads the translation and hint catalogs for `language` from the bundle.
    ///
    /// Missing or malformed catalogs are logged and treated as empty.
    pub fn load(layout: &BundleLayout, base_language: &str, language: &str) -> Self {
        let translations = if language == base_language {
            Catalog::default()
        } else {
            read_catalog(layout.translation_file(language), "translation", language)
        };
        let hints = HintsDictionary::from_catalog(&read_catalog(
            layout.hints_file(language),
            "hints",
            language,
        ));

        tracing::debug!(
            "Loaded {} translations and {} hints for '{}'",
            translations.len(),
            hints.len(),
            language
        );

        Self {
            base_language: base_language.to_string(),
            language: language.to_string(),
            translations,
            hints,
        }
    }

    /// Builds a localizer from catalogs already in memory.
    pub fn with_catalogs(
        base_language: impl Into<String>,
        language: impl Into<String>,
        translations: Catalog,
        hints: HintsDictionary,
    ) -> Self {
        Self {
            base_language: base_language.into(),
            language: language.into(),
            translations,
            hints,
        }
    }

    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn language_code(&self) -> &'static str {
        language_code(&self.language)
    }

    pub fn is_base_language(&self) -> bool {
        self.language == self.base_language
    }

    pub fn hints(&self) -> &HintsDictionary {
        &self.hints
    }

    /// Looks `text` up in the active catalog, falling back to `text` itself.
    /// Text in the base language is never looked up.
    pub fn translate<'a>(&'a self, text: &'a str) -> Cow<'a, str> {
        if text.is_empty() || self.is_base_language() {
            return Cow::Borrowed(text);
        }
        match self.translations.get(text) {
            Some(translated) => Cow::Borrowed(translated),
            None => Cow::Borrowed(text),
        }
    }

    /// Translation first, markup second: catalogs are keyed by the raw source text.
    pub fn render(&self, text: &str) -> String {
        strip_markup(&self.translate(text))
    }
}

/// Rewrites every `{br}` (any case) to `\n`.
pub fn strip_markup(text: &str) -> String {
    let token = LINE_BREAK_MARKUP.as_bytes();
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut i = 0;

    while i + token.len() <= bytes.len() {
        if bytes[i..i + token.len()].eq_ignore_ascii_case(token) {
            out.push_str(&text[last..i]);
            out.push('\n');
            i += token.len();
            last = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[last..]);
    out
}

fn read_catalog(path: Option<std::path::PathBuf>, kind: &str, language: &str) -> Catalog {
    let Some(path) = path else {
        tracing::debug!("No {} catalog for '{}'", kind, language);
        return Catalog::default();
    };
    match Catalog::from_file(&path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("Ignoring {} catalog: {}", kind, e);
            Catalog::default()
        }
    }
}
