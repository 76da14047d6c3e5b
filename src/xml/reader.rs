//! Event-driven parse of raw bytes into a [`DocumentNode`] tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::node::DocumentNode;
use crate::error::ParseError;

/// Parse a document into its root node.
///
/// Declarations, comments and processing instructions are skipped.
/// Whitespace-only text (indentation between elements) is dropped; any other
/// text is attached, unescaped, to the enclosing element. Content after the
/// root element is ignored.
pub fn parse(bytes: &[u8]) -> Result<DocumentNode, ParseError> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    let mut stack: Vec<DocumentNode> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                stack.push(node_from_start(&start)?);
            }
            Event::Empty(start) => {
                let node = node_from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.append(node),
                    None => return Ok(node),
                }
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                let node = match stack.pop() {
                    Some(node) => node,
                    None => return Err(ParseError::UnexpectedClose(name)),
                };
                match stack.last_mut() {
                    Some(parent) => parent.append(node),
                    None => return Ok(node),
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if !text.trim().is_empty() {
                    if let Some(node) = stack.last_mut() {
                        append_text(node, &text);
                    }
                }
            }
            Event::CData(raw) => {
                let text = String::from_utf8_lossy(&raw.into_inner()).into_owned();
                if let Some(node) = stack.last_mut() {
                    append_text(node, &text);
                }
            }
            Event::Eof => {
                return Err(match stack.pop() {
                    Some(open) => ParseError::UnexpectedEof(open.tag),
                    None => ParseError::EmptyDocument,
                });
            }
            // Decl, DocType, Comment, PI: nothing to keep.
            _ => {}
        }
        buf.clear();
    }
}

fn node_from_start(start: &BytesStart<'_>) -> Result<DocumentNode, ParseError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut node = DocumentNode::new(tag);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        node.set_attribute(key, value);
    }
    Ok(node)
}

fn append_text(node: &mut DocumentNode, text: &str) {
    match &mut node.text {
        Some(existing) => existing.push_str(text),
        None => node.text = Some(text.to_owned()),
    }
}
