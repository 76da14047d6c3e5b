//! The document tree structure.

/// A node in a labeled document tree: tag, attributes, ordered children and
/// optional text content.
///
/// Trees are transient serialization artifacts. One is built fresh per
/// encode/decode call and owned exclusively by that call; typed message
/// values are the durable representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    /// Tag name. Never empty.
    pub tag: String,
    /// Attributes in insertion order. Keys are unique; setting an existing
    /// key overwrites its value in place.
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order.
    pub children: Vec<DocumentNode>,
    /// Text content, if any. Whitespace-only text is not represented.
    pub text: Option<String>,
}

impl DocumentNode {
    /// Create a childless node with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Builder form of [`set_attribute`](Self::set_attribute).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`append`](Self::append).
    pub fn child(mut self, node: DocumentNode) -> Self {
        self.append(node);
        self
    }

    /// Builder that sets the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set an attribute, overwriting any existing value for the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a node as the last child.
    pub fn append(&mut self, node: DocumentNode) {
        self.children.push(node);
    }

    /// First child with the given tag, if any.
    pub fn find(&self, tag: &str) -> Option<&DocumentNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Text content with surrounding whitespace trimmed, or `""` when the
    /// node carries no text.
    pub fn trimmed_text(&self) -> &str {
        self.text.as_deref().map(str::trim).unwrap_or("")
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
