//! Serialization of a [`DocumentNode`] tree back to bytes.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::node::DocumentNode;
use crate::error::ParseError;

/// Render a node and its descendants to bytes.
///
/// `pretty` only controls indentation; the element structure, attribute
/// order and text content are identical either way. Text and attribute
/// values are escaped on write.
pub fn render(node: &DocumentNode, pretty: bool) -> Result<Vec<u8>, ParseError> {
    let mut writer = if pretty {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };
    write_node(&mut writer, node)?;
    Ok(writer.into_inner())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &DocumentNode) -> Result<(), ParseError> {
    let mut start = BytesStart::new(node.tag.as_str());
    for (name, value) in &node.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if node.children.is_empty() && node.text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &node.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
    Ok(())
}
