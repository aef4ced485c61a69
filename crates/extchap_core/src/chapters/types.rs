//! Chapter types and error definitions.
//!
//! Provides the canonical chapter record handed to players, the ordered
//! list wrapper, and the timestamp helpers shared by both file formats.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of ticks in one second. One tick is 100 nanoseconds.
pub const TICKS_PER_SECOND: u64 = 10_000_000;

const NANOS_PER_TICK: u64 = 100;

/// A single named chapter point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Display name, empty when the source file had none.
    #[serde(default)]
    pub name: String,
    /// Chapter start position in ticks (100 ns units).
    pub start_position_ticks: u64,
}

impl Chapter {
    /// Create a chapter with the given name and start position.
    pub fn new(name: impl Into<String>, start_position_ticks: u64) -> Self {
        Self {
            name: name.into(),
            start_position_ticks,
        }
    }

    /// Create an unnamed chapter.
    pub fn unnamed(start_position_ticks: u64) -> Self {
        Self::new(String::new(), start_position_ticks)
    }

    /// Format start time as HH:MM:SS.fffffff.
    pub fn format_start_time(&self) -> String {
        format_timestamp_ticks(self.start_position_ticks)
    }
}

/// Chapters ordered by start position.
///
/// Only built through [`normalize`](super::normalize), so iteration order is
/// always non-decreasing in `start_position_ticks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChapterList {
    chapters: Vec<Chapter>,
}

impl ChapterList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn from_sorted(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// Get the number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Check if there are no chapters.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Get an iterator over chapters.
    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    /// Borrow the chapters as a slice.
    pub fn as_slice(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Human-readable summary with the first and last start times.
    pub fn summary(&self) -> String {
        match (self.chapters.first(), self.chapters.last()) {
            (Some(first), Some(last)) => format!(
                "{} chapters, {} to {}",
                self.chapters.len(),
                first.format_start_time(),
                last.format_start_time()
            ),
            _ => "no chapters".to_string(),
        }
    }

    /// Consume the list, returning the ordered chapters.
    pub fn into_vec(self) -> Vec<Chapter> {
        self.chapters
    }
}

impl IntoIterator for ChapterList {
    type Item = Chapter;
    type IntoIter = std::vec::IntoIter<Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChapterList {
    type Item = &'a Chapter;
    type IntoIter = std::slice::Iter<'a, Chapter>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}

/// Error types for chapter operations.
#[derive(Debug, thiserror::Error)]
pub enum ChapterError {
    /// Chapter file exists but could not be read.
    #[error("Failed to read chapter file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Chapter XML is malformed.
    #[error("Malformed chapter XML: {0}")]
    MalformedXml(String),
}

impl ChapterError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for chapter operation results.
pub type ChapterResult<T> = Result<T, ChapterError>;

/// Format a tick count as HH:MM:SS.fffffff.
pub fn format_timestamp_ticks(ticks: u64) -> String {
    let total_secs = ticks / TICKS_PER_SECOND;
    let remaining = ticks % TICKS_PER_SECOND;

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}.{:07}", hours, minutes, seconds, remaining)
}

/// Parse a timestamp string (HH:MM:SS[.fffffffff]) to ticks.
///
/// Surrounding whitespace is ignored. Minutes and seconds must be below 60.
/// Up to nine fractional digits are accepted; precision below one tick is
/// truncated.
pub fn parse_timestamp_ticks(time_str: &str) -> Option<u64> {
    let parts: Vec<&str> = time_str.trim().split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours = parse_digits(parts[0])?;
    let minutes = parse_digits(parts[1])?;

    let (sec_str, frac_str) = match parts[2].split_once('.') {
        Some((secs, frac)) => (secs, Some(frac)),
        None => (parts[2], None),
    };
    let seconds = parse_digits(sec_str)?;

    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    let nanos = match frac_str {
        Some(frac) => {
            if frac.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            // Pad to 9 digits
            format!("{:0<9}", frac).parse::<u64>().ok()?
        }
        None => 0,
    };

    let total_secs = hours
        .checked_mul(3600)?
        .checked_add(minutes * 60 + seconds)?;
    total_secs
        .checked_mul(TICKS_PER_SECOND)?
        .checked_add(nanos / NANOS_PER_TICK)
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_timestamp_works() {
        assert_eq!(parse_timestamp_ticks("00:00:00.000"), Some(0));
        assert_eq!(parse_timestamp_ticks("00:02:58.033"), Some(1_780_330_000));
        assert_eq!(
            parse_timestamp_ticks("00:02:58.033000000"),
            Some(1_780_330_000)
        );
        assert_eq!(
            parse_timestamp_ticks("01:01:01"),
            Some(3661 * TICKS_PER_SECOND)
        );
    }

    #[test]
    fn parse_timestamp_truncates_below_tick() {
        assert_eq!(parse_timestamp_ticks("00:00:00.000000199"), Some(1));
        assert_eq!(parse_timestamp_ticks("00:00:01.5"), Some(15_000_000));
    }

    #[test]
    fn parse_timestamp_trims_whitespace() {
        assert_eq!(
            parse_timestamp_ticks("\n  00:00:10.000\n"),
            Some(10 * TICKS_PER_SECOND)
        );
    }

    #[test]
    fn parse_timestamp_rejects_invalid() {
        assert_eq!(parse_timestamp_ticks(""), None);
        assert_eq!(parse_timestamp_ticks("00:00"), None);
        assert_eq!(parse_timestamp_ticks("00:60:00.000"), None);
        assert_eq!(parse_timestamp_ticks("00:00:60.000"), None);
        assert_eq!(parse_timestamp_ticks("00:00:01."), None);
        assert_eq!(parse_timestamp_ticks("00:00:01.0000000001"), None);
        assert_eq!(parse_timestamp_ticks("-1:00:00"), None);
        assert_eq!(parse_timestamp_ticks("aa:bb:cc"), None);
    }

    #[test]
    fn long_hours_are_accepted() {
        assert_eq!(
            parse_timestamp_ticks("100:00:00"),
            Some(360_000 * TICKS_PER_SECOND)
        );
    }

    #[test]
    fn format_timestamp_works() {
        assert_eq!(format_timestamp_ticks(0), "00:00:00.0000000");
        assert_eq!(format_timestamp_ticks(1_780_330_000), "00:02:58.0330000");
        assert_eq!(
            format_timestamp_ticks(3661 * TICKS_PER_SECOND),
            "01:01:01.0000000"
        );
    }

    #[test]
    fn chapter_times() {
        let chapter = Chapter::new("Intro", 15_000_000);
        assert_eq!(chapter.format_start_time(), "00:00:01.5000000");
    }

    #[test]
    fn chapter_list_summary() {
        let list = ChapterList::from_sorted(vec![
            Chapter::unnamed(0),
            Chapter::new("End", 1_780_330_000),
        ]);
        assert_eq!(list.summary(), "2 chapters, 00:00:00.0000000 to 00:02:58.0330000");
        assert_eq!(ChapterList::new().summary(), "no chapters");
    }

    #[test]
    fn chapter_serializes_camel_case() {
        let json = serde_json::to_string(&Chapter::new("Shell Cottage", 0)).unwrap();
        assert_eq!(json, r#"{"name":"Shell Cottage","startPositionTicks":0}"#);
    }

    #[test]
    fn chapter_list_serializes_as_array() {
        let list = ChapterList::from_sorted(vec![Chapter::unnamed(10)]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"name":"","startPositionTicks":10}]"#);
    }
}
