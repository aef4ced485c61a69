//! Plain-text chapter parser.
//!
//! Parses the OGM-style key=value format:
//! ```text
//! CHAPTER01=00:00:00.000
//! CHAPTER01NAME=Opening
//! CHAPTER02=00:02:58.033
//! CHAPTER02NAME=Part A
//! ```
//!
//! Time and name lines are paired by the digits after `CHAPTER`. The digits
//! are compared as text, so `CHAPTER01` and `CHAPTER1` are different chapters.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::normalize::normalize;
use super::types::{parse_timestamp_ticks, Chapter, ChapterList};

static TIME_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^CHAPTER(\d+)=(\d{2}:\d{2}:\d{2}\.\d{3})").expect("valid time line pattern")
});

static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^CHAPTER(\d+)NAME=(.*)").expect("valid name line pattern"));

/// Parse text chapter content into an ordered chapter list.
///
/// Lines matching neither pattern are ignored. A repeated id overwrites the
/// earlier value of the same field. Names without a matching time line are
/// dropped; times without a name produce an unnamed chapter.
pub fn parse_chapter_txt(content: &str) -> ChapterList {
    let mut times: HashMap<&str, u64> = HashMap::new();
    let mut names: HashMap<&str, &str> = HashMap::new();
    // Ids in the order their time line first appeared
    let mut order: Vec<&str> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if let Some(caps) = TIME_LINE.captures(line) {
            let (Some(id), Some(time)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            match parse_timestamp_ticks(time.as_str()) {
                Some(ticks) => {
                    if times.insert(id.as_str(), ticks).is_none() {
                        order.push(id.as_str());
                    }
                }
                None => {
                    tracing::debug!(
                        "Dropping chapter time on line {}: '{}'",
                        idx + 1,
                        time.as_str()
                    );
                }
            }
            continue;
        }

        if let Some(caps) = NAME_LINE.captures(line) {
            if let (Some(id), Some(name)) = (caps.get(1), caps.get(2)) {
                names.insert(id.as_str(), name.as_str());
            }
        }
    }

    let records = order.into_iter().filter_map(|id| {
        let ticks = *times.get(id)?;
        let name = names.get(id).copied().unwrap_or_default();
        Some(Chapter::new(name, ticks))
    });

    normalize(records)
}
