//! Chapter parsing module.
//!
//! This module turns sidecar chapter files into an ordered list of named
//! chapter points.
//!
//! # Formats
//!
//! - **XML**: Matroska chapter XML, `ChapterAtom` elements anywhere in the tree
//! - **TXT**: OGM-style `CHAPTERnn=HH:MM:SS.mmm` / `CHAPTERnnNAME=...` lines
//!
//! Both parsers are pure functions over the file content. Malformed entries
//! are dropped and a malformed XML document yields an empty list; neither
//! reports an error.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use extchap_core::chapters::parse_chapter_file;
//!
//! let chapters = parse_chapter_file(Path::new("/media/movie.chapters.xml")).unwrap();
//! for chapter in &chapters {
//!     println!("{} {}", chapter.format_start_time(), chapter.name);
//! }
//! ```

mod encoding;
mod format;
mod normalize;
mod txt;
mod types;
mod xml;

pub use format::{parse_chapter_file, ChapterFormat};
pub use normalize::normalize;
pub use txt::parse_chapter_txt;
pub use types::{
    format_timestamp_ticks, parse_timestamp_ticks, Chapter, ChapterError, ChapterList,
    ChapterResult, TICKS_PER_SECOND,
};
pub use xml::parse_chapter_xml;
