//! Serve external chapters for library items.

use crate::chapters::ChapterList;
use crate::discovery::{candidates_for_media, load_first_chapters};

use super::types::{ItemLookup, LookupError, LookupResult};

/// Looks up items and discovers their sidecar chapters.
pub struct ExternalChapterService<'a, L: ItemLookup + ?Sized> {
    library: &'a L,
}

impl<'a, L: ItemLookup + ?Sized> ExternalChapterService<'a, L> {
    /// Create a service backed by the given library.
    pub fn new(library: &'a L) -> Self {
        Self { library }
    }

    /// Get the external chapters for an item.
    ///
    /// Returns a [`LookupError`] when the item is unknown, has no usable
    /// path, or none of its candidate files contains chapters.
    pub fn get_chapters(&self, item_id: &str) -> LookupResult<ChapterList> {
        let item = self
            .library
            .find_item(item_id)
            .ok_or_else(|| LookupError::ItemNotFound(item_id.to_string()))?;

        if item.path.as_os_str().is_empty() {
            return Err(LookupError::EmptyPath);
        }

        let candidates = candidates_for_media(&item.path, item.episode_index)
            .ok_or_else(|| LookupError::NoDirectory(item.path.clone()))?;

        let chapters = load_first_chapters(&candidates);
        if chapters.is_empty() {
            tracing::debug!("No external chapters for item {}", item_id);
            return Err(LookupError::NoChapters);
        }

        Ok(chapters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::Chapter;
    use crate::library::MediaItem;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct FakeLibrary {
        items: HashMap<String, MediaItem>,
    }

    impl FakeLibrary {
        fn with(mut self, id: &str, item: MediaItem) -> Self {
            self.items.insert(id.to_string(), item);
            self
        }
    }

    impl ItemLookup for FakeLibrary {
        fn find_item(&self, item_id: &str) -> Option<MediaItem> {
            self.items.get(item_id).cloned()
        }
    }

    #[test]
    fn unknown_item() {
        let library = FakeLibrary::default();
        let service = ExternalChapterService::new(&library);
        assert_eq!(
            service.get_chapters("missing"),
            Err(LookupError::ItemNotFound("missing".to_string()))
        );
    }

    #[test]
    fn empty_path() {
        let library = FakeLibrary::default().with("a", MediaItem::new(""));
        let service = ExternalChapterService::new(&library);
        assert_eq!(service.get_chapters("a"), Err(LookupError::EmptyPath));
    }

    #[test]
    fn path_without_directory() {
        let library = FakeLibrary::default().with("a", MediaItem::new("movie.mkv"));
        let service = ExternalChapterService::new(&library);
        assert!(matches!(
            service.get_chapters("a"),
            Err(LookupError::NoDirectory(_))
        ));
    }

    #[test]
    fn no_chapter_files() {
        let dir = tempdir().unwrap();
        let library =
            FakeLibrary::default().with("a", MediaItem::new(dir.path().join("movie.mkv")));
        let service = ExternalChapterService::new(&library);
        assert_eq!(service.get_chapters("a"), Err(LookupError::NoChapters));
    }

    #[test]
    fn video_with_chapters() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("movie.chapters.txt"),
            "CHAPTER01=00:00:00.000\nCHAPTER01NAME=Test Chapter",
        )
        .unwrap();

        let library =
            FakeLibrary::default().with("a", MediaItem::new(dir.path().join("movie.mkv")));
        let service = ExternalChapterService::new(&library);

        let chapters = service.get_chapters("a").unwrap();
        assert_eq!(chapters.into_vec(), vec![Chapter::new("Test Chapter", 0)]);
    }

    #[test]
    fn episode_uses_index() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("5_chapters.txt"),
            "CHAPTER01=00:00:00.000\nCHAPTER01NAME=Episode Chapter use",
        )
        .unwrap();

        let library = FakeLibrary::default().with(
            "ep",
            MediaItem::new(dir.path().join("S01E05.mkv")).with_episode_index(5),
        );
        let service = ExternalChapterService::new(&library);

        let chapters = service.get_chapters("ep").unwrap();
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters.as_slice()[0].name, "Episode Chapter use");
    }
}
