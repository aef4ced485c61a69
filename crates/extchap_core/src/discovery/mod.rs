//! Sidecar chapter discovery.
//!
//! Given a media file, generates the chapter file names worth probing and
//! returns the chapters of the first one that has any.
//!
//! ```no_run
//! use std::path::Path;
//! use extchap_core::discovery::discover_chapters;
//!
//! let chapters = discover_chapters(Path::new("/tv/Show/S01E05.mkv"), Some(5));
//! println!("{} chapters", chapters.len());
//! ```

mod candidates;
mod loader;

pub use candidates::{candidate_files, candidates_for_media};
pub use loader::{discover_chapters, load_first_chapters};
