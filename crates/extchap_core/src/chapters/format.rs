//! Chapter file format detection and file-level parsing.

use std::fs;
use std::path::Path;

use super::encoding::decode_chapter_bytes;
use super::txt::parse_chapter_txt;
use super::types::{ChapterError, ChapterList, ChapterResult};
use super::xml::parse_chapter_xml;

/// Supported chapter file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterFormat {
    /// Matroska chapter XML.
    Xml,
    /// OGM-style `CHAPTERnn=` text.
    Txt,
}

impl ChapterFormat {
    /// Detect format from file extension (case-insensitive).
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "xml" => Some(Self::Xml),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Txt => "txt",
        }
    }

    /// Parse content in this format.
    pub fn parse(&self, content: &str) -> ChapterList {
        match self {
            Self::Xml => parse_chapter_xml(content),
            Self::Txt => parse_chapter_txt(content),
        }
    }
}

/// Parse a chapter file, choosing the parser from its extension.
///
/// A missing file or an unsupported extension gives an empty list. Only a
/// failure to read an existing file is reported as an error; content that
/// is not UTF-8 is decoded, not rejected.
pub fn parse_chapter_file(path: &Path) -> ChapterResult<ChapterList> {
    let Some(format) = ChapterFormat::from_extension(path) else {
        return Ok(ChapterList::new());
    };
    if !path.is_file() {
        return Ok(ChapterList::new());
    }

    let bytes = fs::read(path).map_err(|e| ChapterError::read(path, e))?;
    let content = decode_chapter_bytes(&bytes, format);

    Ok(format.parse(&content))
}
