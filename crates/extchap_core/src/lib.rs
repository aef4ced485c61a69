//! External chapters core.
//!
//! Finds chapter sidecar files next to a media file and parses them into an
//! ordered list of named chapter points, in 100 ns ticks.
//!
//! This crate has no transport dependencies. It can be used by a media
//! server plugin, a web handler or the `extchap` CLI.

pub mod chapters;
pub mod config;
pub mod discovery;
pub mod library;
pub mod logging;

pub use chapters::{Chapter, ChapterList};
pub use discovery::discover_chapters;
pub use library::{ExternalChapterService, ItemLookup, LookupError, MediaItem};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
