//! Chapter ordering.
//!
//! Both parsers hand their records over in first-seen order; normalizing
//! sorts them by start position with a stable sort, so chapters sharing a
//! start time keep that order.

use super::types::{Chapter, ChapterList};

/// Build the ordered chapter list from unordered records.
///
/// Records with identical start positions are neither merged nor dropped.
pub fn normalize(records: impl IntoIterator<Item = Chapter>) -> ChapterList {
    let mut chapters: Vec<Chapter> = records.into_iter().collect();
    chapters.sort_by_key(|c| c.start_position_ticks);
    ChapterList::from_sorted(chapters)
}
