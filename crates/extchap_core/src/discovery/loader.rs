//! Probe candidate files until one yields chapters.

use std::path::{Path, PathBuf};

use crate::chapters::{parse_chapter_file, ChapterList};

use super::candidates::candidates_for_media;

/// Return the chapters of the first candidate that parses to at least one
/// chapter.
///
/// Absent candidates are skipped. Candidates that are empty, malformed or
/// unreadable are logged and skipped, so they never hide a later valid file.
/// An empty list means no candidate had chapters.
pub fn load_first_chapters(candidates: &[PathBuf]) -> ChapterList {
    for candidate in candidates {
        if !candidate.is_file() {
            tracing::trace!("No chapter file at {}", candidate.display());
            continue;
        }

        match parse_chapter_file(candidate) {
            Ok(chapters) if !chapters.is_empty() => {
                tracing::info!("Loaded {} from {}", chapters.summary(), candidate.display());
                return chapters;
            }
            Ok(_) => {
                tracing::debug!("Chapter file {} has no chapters", candidate.display());
            }
            Err(e) => {
                tracing::warn!("Error parsing chapter file {}: {}", candidate.display(), e);
            }
        }
    }

    ChapterList::new()
}

/// Discover external chapters for a media file.
///
/// Looks for sidecar chapter files next to `media_path`, most specific name
/// first. Returns an empty list when the path has no directory or nothing
/// was found.
pub fn discover_chapters(media_path: &Path, episode_index: Option<i32>) -> ChapterList {
    match candidates_for_media(media_path, episode_index) {
        Some(candidates) => load_first_chapters(&candidates),
        None => {
            tracing::debug!(
                "Cannot derive chapter candidates from '{}'",
                media_path.display()
            );
            ChapterList::new()
        }
    }
}
