use crate::document::{BundleLayout, list_files};
use crate::name::NodeNameInfo;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Image extensions probed under `res/`, in tie-break order.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 11] = [
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "ico", "cur", "BMPf", "xbm",
];

/// Media resolved for the current node. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeAssets {
    pub background_image: Option<PathBuf>,
    pub background_audio: Option<PathBuf>,
    pub voice_over_audio: Option<PathBuf>,
}

/// Resolves asset base names to files inside a bundle.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    layout: BundleLayout,
}

impl AssetResolver {
    pub fn new(layout: BundleLayout) -> Self {
        Self { layout }
    }

    /// Returns `res/<name>.<ext>` for the first extension in
    /// [`SUPPORTED_IMAGE_EXTENSIONS`] that exists on disk.
    pub fn image(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        let dir = self.layout.images_dir();
        SUPPORTED_IMAGE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", name, ext)))
            .find(|candidate| candidate.is_file())
    }

    pub fn background_audio(&self, name: &str) -> Option<PathBuf> {
        find_by_stem(&self.layout.audio_dir(), name)
    }

    pub fn voice_over_audio(&self, name: &str, language: &str) -> Option<PathBuf> {
        find_by_stem(&self.layout.voice_over_dir(language), name)
    }

    /// Resolves all three media slots for a decoded name.
    pub fn resolve(&self, info: &NodeNameInfo, language: &str) -> NodeAssets {
        let modifiers = &info.modifiers;
        NodeAssets {
            background_image: self.image(info.background_image_name()),
            background_audio: modifiers
                .background_audio
                .as_deref()
                .and_then(|name| self.background_audio(name)),
            voice_over_audio: modifiers
                .voice_over_audio
                .as_deref()
                .and_then(|name| self.voice_over_audio(name, language)),
        }
    }
}

/// First file in `dir` (name order) whose stem equals `name`, ignoring case.
fn find_by_stem(dir: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }
    let target = name.to_lowercase();
    list_files(dir).into_iter().find(|path| {
        path.file_stem()
            .is_some_and(|stem| stem.to_string_lossy().to_lowercase() == target)
    })
}
