//! Common test utilities for building tree bundles on disk.
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use utree::prelude::*;

/// A tree bundle written into a temporary directory.
///
/// The bundle root is `<tempdir>/<name>/` and the process definition is
/// `<name>.xml` inside it, so the title is `name`.
pub struct Bundle {
    _dir: TempDir,
    pub root: PathBuf,
}

#[allow(dead_code)]
impl Bundle {
    pub fn new(name: &str, process_xml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir_all(&root).expect("Failed to create bundle root");
        fs::write(root.join(format!("{}.xml", name)), process_xml)
            .expect("Failed to write process definition");
        Self { _dir: dir, root }
    }

    /// A bundle whose process definition starts at `start` and holds `body`.
    pub fn with_nodes(start: &str, body: &str) -> Self {
        Self::new("Sample Tree", &process_definition("English", start, body))
    }

    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write bundle file");
        self
    }

    /// Creates an empty file, e.g. an image or audio asset.
    pub fn touch(self, relative: &str) -> Self {
        self.with_file(relative, "")
    }

    pub fn with_translation(self, language: &str, entries: &[(&str, &str)]) -> Self {
        let path = format!("trans/{}.xml", language);
        self.with_file(&path, &catalog_xml(entries))
    }

    pub fn with_hints(self, language: &str, entries: &[(&str, &str)]) -> Self {
        let path = format!("hints/{}.xml", language);
        self.with_file(&path, &catalog_xml(entries))
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn document(&self) -> TreeDocument {
        TreeDocument::open(&self.root).expect("Failed to open bundle")
    }

    pub fn engine(&self) -> TreeEngine {
        TreeEngine::load(&self.root)
    }

    pub fn engine_with(&self, config: EngineConfig) -> TreeEngine {
        TreeEngine::load_with_config(&self.root, config)
    }

    /// Builds one node with the base-language localizer.
    pub fn build(&self, raw_name: &str) -> BuiltNode {
        let document = self.document();
        let localizer = Localizer::new(document.base_language());
        self.build_with(&document, &localizer, raw_name)
    }

    pub fn build_with(
        &self,
        document: &TreeDocument,
        localizer: &Localizer,
        raw_name: &str,
    ) -> BuiltNode {
        let assets = AssetResolver::new(document.layout().clone());
        NodeFactory::new(document, localizer, &assets).build(raw_name)
    }
}

/// A `<process-definition>` with a start transition to `start`.
#[allow(dead_code)]
pub fn process_definition(lang: &str, start: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<process-definition lang="{lang}" name="sample">
  <start-state name="start">
    <transition to="{start}"/>
  </start-state>
  {body}
</process-definition>"#
    )
}

/// A `resources/string[@name]` catalog.
#[allow(dead_code)]
pub fn catalog_xml(entries: &[(&str, &str)]) -> String {
    let strings: String = entries
        .iter()
        .map(|(key, value)| format!("  <string name=\"{}\">{}</string>\n", key, value))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n{}</resources>\n",
        strings
    )
}

/// A small two-way tree used by the navigation tests.
///
/// ```text
/// textDisplay~Welcome -> radioButtons~Pick one -A-> end1
///                                            -B-> textDisplay~Second -> end2
/// ```
#[allow(dead_code)]
pub fn branching_tree() -> Bundle {
    Bundle::with_nodes(
        "textDisplay~Welcome",
        r#"
  <task-node name="textDisplay~Welcome">
    <transition to="radioButtons~Pick one"/>
  </task-node>
  <task-node name="radioButtons~Pick one">
    <task name="A"/>
    <task name="B"/>
    <transition name="A" to="end1"/>
    <transition name="B" to="textDisplay~Second"/>
  </task-node>
  <task-node name="textDisplay~Second">
    <transition to="end2"/>
  </task-node>
  <end-state name="end1"/>
  <end-state name="end2"/>
"#,
    )
}

#[allow(dead_code)]
pub fn assert_path_ends_with(path: Option<&Path>, expected: &str) {
    let path = path.unwrap_or_else(|| panic!("expected a path ending in '{}'", expected));
    assert!(
        path.ends_with(expected),
        "'{}' does not end with '{}'",
        path.display(),
        expected
    );
}
