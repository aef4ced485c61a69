//! Library boundary.
//!
//! Resolves an item id to its media file through an [`ItemLookup`] and
//! serves the sidecar chapters found next to it. Transport layers map every
//! [`LookupError`] to a "not found" response.

mod manifest;
mod service;
mod types;

pub use manifest::{LibraryManifest, ManifestError};
pub use service::ExternalChapterService;
pub use types::{ItemLookup, LookupError, LookupResult, MediaItem};
