//! Candidate sidecar file names.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::chapters::ChapterFormat;

/// Extensions tried at every tier, in order.
const FORMATS: [ChapterFormat; 2] = [ChapterFormat::Xml, ChapterFormat::Txt];

/// Directory-wide fallback stems, in order.
const GENERIC_STEMS: [&str; 2] = ["chapters", "chapter"];

/// Build the ordered list of chapter files to probe for a media file.
///
/// Order, most specific first:
/// 1. `<basename>.chapters.{xml,txt}`
/// 2. `<index>_chapters.{xml,txt}` when an episode index is given
/// 3. `chapters.{xml,txt}`, then `chapter.{xml,txt}`
pub fn candidate_files(
    directory: &Path,
    basename: &OsStr,
    episode_index: Option<i32>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(8);

    // Built as OsString so non-UTF-8 media names survive
    for format in FORMATS {
        let mut name = basename.to_os_string();
        name.push(".chapters.");
        name.push(format.extension());
        candidates.push(directory.join(name));
    }

    if let Some(index) = episode_index {
        for format in FORMATS {
            candidates.push(directory.join(format!("{}_chapters.{}", index, format.extension())));
        }
    }

    for stem in GENERIC_STEMS {
        for format in FORMATS {
            candidates.push(directory.join(format!("{}.{}", stem, format.extension())));
        }
    }

    candidates
}

/// Build candidates from a media file path.
///
/// Returns `None` if the path has no parent directory or no file stem.
pub fn candidates_for_media(
    media_path: &Path,
    episode_index: Option<i32>,
) -> Option<Vec<PathBuf>> {
    let directory = media_path.parent().filter(|p| !p.as_os_str().is_empty())?;
    let basename = media_path.file_stem()?;
    Some(candidate_files(directory, basename, episode_index))
}
