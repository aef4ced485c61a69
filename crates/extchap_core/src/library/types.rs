//! Library item types and lookup errors.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A media item as known to the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Path to the media file. May be empty for virtual items.
    #[serde(default)]
    pub path: PathBuf,
    /// Episode number within its season, if the item is an episode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_index: Option<i32>,
}

impl MediaItem {
    /// Create an item for a plain media file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            episode_index: None,
        }
    }

    /// Mark the item as an episode with the given index.
    pub fn with_episode_index(mut self, index: i32) -> Self {
        self.episode_index = Some(index);
        self
    }
}

/// Resolves opaque item ids to media items.
pub trait ItemLookup {
    /// Find an item by id, or `None` if the library does not know it.
    fn find_item(&self, item_id: &str) -> Option<MediaItem>;
}

/// Reasons no chapters can be served for an item.
///
/// All of these are "not found" conditions rather than faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item path is empty")]
    EmptyPath,

    #[error("Item directory not found for '{0}'")]
    NoDirectory(PathBuf),

    #[error("No external chapters found")]
    NoChapters,
}

/// Result type for library lookups.
pub type LookupResult<T> = Result<T, LookupError>;
