//! File-backed item lookup.
//!
//! A manifest maps item ids to media files:
//! ```toml
//! [items.4f2a]
//! path = "/media/movies/Movie (2010)/Movie (2010).mkv"
//!
//! [items.9c1e]
//! path = "/media/tv/Show/Season 01/S01E05.mkv"
//! episode_index = 5
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{ItemLookup, MediaItem};

/// Errors that can occur while loading a manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// In-memory library loaded from a TOML manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryManifest {
    #[serde(default)]
    items: HashMap<String, MediaItem>,
}

impl LibraryManifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a manifest from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(content)?)
    }

    /// Add or replace an item.
    pub fn insert(&mut self, item_id: impl Into<String>, item: MediaItem) {
        self.items.insert(item_id.into(), item);
    }

    /// Number of items in the manifest.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the manifest has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemLookup for LibraryManifest {
    fn find_item(&self, item_id: &str) -> Option<MediaItem> {
        self.items.get(item_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{ExternalChapterService, LookupError};
    use tempfile::tempdir;

    #[test]
    fn parse_manifest() {
        let manifest = LibraryManifest::from_toml(
            r#"
[items.movie]
path = "/media/movie.mkv"

[items.ep]
path = "/tv/S01E05.mkv"
episode_index = 5
"#,
        )
        .unwrap();

        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest.find_item("movie"),
            Some(MediaItem::new("/media/movie.mkv"))
        );
        assert_eq!(
            manifest.find_item("ep"),
            Some(MediaItem::new("/tv/S01E05.mkv").with_episode_index(5))
        );
        assert_eq!(manifest.find_item("other"), None);
    }

    #[test]
    fn missing_path_defaults_to_empty() {
        let manifest = LibraryManifest::from_toml("[items.virtual]\n").unwrap();
        let service = ExternalChapterService::new(&manifest);
        assert_eq!(service.get_chapters("virtual"), Err(LookupError::EmptyPath));
    }

    #[test]
    fn invalid_manifest() {
        assert!(matches!(
            LibraryManifest::from_toml("[items.x]\nepisode_index = \"five\"\n"),
            Err(ManifestError::ParseError(_))
        ));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let result = LibraryManifest::load(&dir.path().join("library.toml"));
        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[test]
    fn load_from_file_and_serve() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("chapters.xml"),
            "<Chapters><ChapterAtom><ChapterTimeStart>00:00:10</ChapterTimeStart>\
</ChapterAtom></Chapters>",
        )
        .unwrap();

        let mut manifest = LibraryManifest::new();
        manifest.insert("m", MediaItem::new(dir.path().join("Movie.mkv")));
        let manifest_path = dir.path().join("library.toml");
        fs::write(&manifest_path, toml::to_string(&manifest).unwrap()).unwrap();

        let loaded = LibraryManifest::load(&manifest_path).unwrap();
        let chapters = ExternalChapterService::new(&loaded).get_chapters("m").unwrap();
        assert_eq!(chapters.as_slice()[0].start_position_ticks, 100_000_000);
    }
}
