use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const TRANSLATIONS_DIR: &str = "trans";
pub const HINTS_DIR: &str = "hints";
pub const IMAGES_DIR: &str = "res";
pub const AUDIO_DIR: &str = "audio";

/// Title used when the bundle directory has a blank name.
pub const UNTITLED: &str = "Untitled";

/// Path arithmetic over an unpacked tree bundle.
///
/// ```text
/// <root>/<stem>.xml            process definition
/// <root>/trans/<language>.xml  translation catalogs
/// <root>/hints/<language>.xml  hint catalogs
/// <root>/res/<name>.<ext>      images
/// <root>/audio/<name>.*        background audio
/// <root>/audio/<language>/*    voice-over audio
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    root: PathBuf,
}

impl BundleLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The bundle's file stem, e.g. `"first aid"` for `first aid.utree/`.
    pub fn stem(&self) -> String {
        self.root
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn title(&self) -> String {
        let stem = self.stem();
        if stem.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            stem
        }
    }

    /// Locates the process-definition file.
    ///
    /// `<root>/<stem>.xml` wins; otherwise the first `.xml` file directly under the root.
    pub fn process_definition_path(&self) -> Option<PathBuf> {
        let preferred = self.root.join(format!("{}.xml", self.stem()));
        if preferred.is_file() {
            return Some(preferred);
        }
        list_files(&self.root)
            .into_iter()
            .find(|path| has_xml_extension(path))
    }

    pub fn translations_dir(&self) -> PathBuf {
        self.root.join(TRANSLATIONS_DIR)
    }

    pub fn hints_dir(&self) -> PathBuf {
        self.root.join(HINTS_DIR)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.root.join(AUDIO_DIR)
    }

    pub fn voice_over_dir(&self, language: &str) -> PathBuf {
        self.audio_dir().join(language)
    }

    pub fn translation_file(&self, language: &str) -> Option<PathBuf> {
        catalog_file(&self.translations_dir(), language)
    }

    pub fn hints_file(&self, language: &str) -> Option<PathBuf> {
        catalog_file(&self.hints_dir(), language)
    }

    /// Languages that ship a translation catalog, in file-name order.
    pub fn translated_languages(&self) -> Vec<String> {
        list_files(&self.translations_dir())
            .into_iter()
            .filter(|path| has_xml_extension(path))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect()
    }
}

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}

fn catalog_file(dir: &Path, language: &str) -> Option<PathBuf> {
    list_files(dir).into_iter().find(|path| {
        has_xml_extension(path)
            && path
                .file_stem()
                .is_some_and(|stem| stem.to_string_lossy() == language)
    })
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
