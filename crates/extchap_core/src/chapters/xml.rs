//! Chapter XML parsing.
//!
//! Handles the Matroska chapter XML format (as written by mkvextract and
//! most chapter editors):
//! ```xml
//! <?xml version="1.0"?>
//! <Chapters>
//!   <EditionEntry>
//!     <ChapterAtom>
//!       <ChapterTimeStart>00:00:00.000000000</ChapterTimeStart>
//!       <ChapterDisplay>
//!         <ChapterString>Chapter 1</ChapterString>
//!         <ChapterLanguage>eng</ChapterLanguage>
//!       </ChapterDisplay>
//!     </ChapterAtom>
//!   </EditionEntry>
//! </Chapters>
//! ```
//!
//! `ChapterAtom` elements are collected from anywhere in the document, so
//! nested atoms and non-standard wrappers are picked up as well.

use roxmltree::{Document, Node, ParsingOptions};

use super::normalize::normalize;
use super::types::{parse_timestamp_ticks, Chapter, ChapterError, ChapterList, ChapterResult};

/// Parse chapter XML into an ordered chapter list.
///
/// A document that is not well-formed yields an empty list.
pub fn parse_chapter_xml(xml: &str) -> ChapterList {
    match try_parse_chapter_xml(xml) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("{}", e);
            ChapterList::new()
        }
    }
}

fn try_parse_chapter_xml(xml: &str) -> ChapterResult<ChapterList> {
    let mut options = ParsingOptions::default();
    // mkvextract output carries a DOCTYPE line
    options.allow_dtd = true;

    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| ChapterError::MalformedXml(format!("XML parse error: {}", e)))?;

    let records = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "ChapterAtom")
        .filter_map(|atom| parse_chapter_atom(&atom));

    Ok(normalize(records))
}

/// Parse a single ChapterAtom element.
///
/// Returns `None` when `ChapterTimeStart` is missing or unparsable.
fn parse_chapter_atom(atom: &Node) -> Option<Chapter> {
    let start = child_element(atom, "ChapterTimeStart")?;
    let text = element_text(&start);
    let Some(ticks) = parse_timestamp_ticks(&text) else {
        tracing::debug!("Skipping chapter atom with invalid start time '{}'", text.trim());
        return None;
    };

    let name = child_element(atom, "ChapterDisplay")
        .and_then(|display| child_element(&display, "ChapterString"))
        .map(|s| element_text(&s))
        .unwrap_or_default();

    Some(Chapter::new(name, ticks))
}

/// First direct child element with the given local name.
fn child_element<'a, 'input>(node: &Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Concatenated text of all descendant text nodes.
fn element_text(node: &Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
