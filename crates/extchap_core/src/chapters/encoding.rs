//! Text decoding for chapter files.
//!
//! Chapter files come from many authoring tools and are not always UTF-8.
//! Decoding never fails: bytes that cannot be decoded become U+FFFD.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use super::format::ChapterFormat;

const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];
const UTF16_LE_BOM: &[u8] = &[0xff, 0xfe];
const UTF16_BE_BOM: &[u8] = &[0xfe, 0xff];

static XML_ENCODING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*<\?xml[^>]*?\bencoding\s*=\s*["']([A-Za-z0-9._-]+)["']"#)
        .expect("valid xml encoding pattern")
});

/// Decode raw chapter file bytes to text.
///
/// - A UTF-8 BOM is stripped; UTF-16 (LE/BE) is decoded from its BOM
/// - Valid UTF-8 is used as is
/// - XML declaring ISO-8859-1 is decoded as Latin-1
/// - Anything else is decoded as UTF-8 with replacement characters
pub fn decode_chapter_bytes(bytes: &[u8], format: ChapterFormat) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8_lossy(rest).into_owned();
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            if format == ChapterFormat::Xml && declares_latin1(bytes) {
                // Every Latin-1 byte is the code point of the same value
                bytes.iter().map(|&b| char::from(b)).collect()
            } else {
                tracing::debug!("Chapter file is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(bytes).into_owned()
            }
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn declares_latin1(bytes: &[u8]) -> bool {
    let Some(caps) = XML_ENCODING.captures(bytes) else {
        return false;
    };
    let Some(label) = caps.get(1) else {
        return false;
    };
    let label = String::from_utf8_lossy(label.as_bytes()).to_ascii_lowercase();
    matches!(
        label.as_str(),
        "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "latin-1" | "l1"
    )
}
