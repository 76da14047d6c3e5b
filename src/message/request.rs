//! Inbound `MaltegoTransformRequestMessage` decoding.

use indexmap::IndexMap;
use tracing::debug;

use super::envelope::{self, MessageKind};
use crate::codec::NodeCodec;
use crate::entity::Entity;
use crate::error::MessageError;
use crate::xml::{self, DocumentNode};

/// Default soft result limit when the request does not state one.
pub const DEFAULT_SOFT_LIMIT: u32 = 500;

/// Default hard result limit when the request does not state one.
pub const DEFAULT_HARD_LIMIT: u32 = 10_000;

/// Soft and hard result limits carried by a request.
///
/// Defaults are plain constants; decoders take them as an explicit argument
/// so tests and embedders can substitute their own without global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub soft: u32,
    pub hard: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            soft: DEFAULT_SOFT_LIMIT,
            hard: DEFAULT_HARD_LIMIT,
        }
    }
}

/// An inbound transform call: the input entity graph, named transform
/// fields, and result limits.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest<E = Entity> {
    /// Input entities in document order. May be empty.
    pub entities: Vec<E>,
    /// Named fields in document order. Duplicate names keep the last value.
    pub fields: IndexMap<String, String>,
    /// Result limits, defaulted when the `Limits` element or its attributes
    /// are absent.
    pub limits: Limits,
}

impl<E> Default for TransformRequest<E> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            fields: IndexMap::new(),
            limits: Limits::default(),
        }
    }
}

impl<E: NodeCodec> TransformRequest<E> {
    /// Decode a request from raw document bytes.
    pub fn from_xml(bytes: &[u8]) -> Result<Self, MessageError> {
        let root = xml::parse(bytes)?;
        Self::from_node(&root)
    }

    /// Decode a request from a pre-parsed root node.
    pub fn from_node(root: &DocumentNode) -> Result<Self, MessageError> {
        Self::from_node_with_defaults(root, Limits::default())
    }

    /// Decode a request, using `defaults` for any limit the document does
    /// not carry. All-or-nothing: any failure yields no partial request.
    pub fn from_node_with_defaults(
        root: &DocumentNode,
        defaults: Limits,
    ) -> Result<Self, MessageError> {
        let node = envelope::unwrap(root, MessageKind::TransformRequest)?;

        let entity_nodes = node
            .find("Entities")
            .ok_or_else(|| MessageError::MalformedMessage("Request requires Entities tag".into()))?;
        let mut entities = Vec::with_capacity(entity_nodes.children.len());
        for child in &entity_nodes.children {
            entities.push(E::decode(child)?);
        }

        let mut fields = IndexMap::new();
        if let Some(field_nodes) = node.find("TransformFields") {
            for field in &field_nodes.children {
                let name = field.attribute("Name").ok_or_else(|| {
                    MessageError::MalformedMessage("No Name attribute in Field".into())
                })?;
                // Key is always inserted; absent text becomes an empty value.
                fields.insert(name.to_owned(), field.trimmed_text().to_owned());
            }
        }

        let mut limits = defaults;
        if let Some(limit_node) = node.find("Limits") {
            limits.soft = limit_attribute(limit_node, "SoftLimit", defaults.soft)?;
            limits.hard = limit_attribute(limit_node, "HardLimit", defaults.hard)?;
        }

        debug!(
            entities = entities.len(),
            fields = fields.len(),
            soft_limit = limits.soft,
            hard_limit = limits.hard,
            "decoded transform request"
        );
        Ok(Self {
            entities,
            fields,
            limits,
        })
    }

    /// Render the request back to its inner message node.
    ///
    /// `Entities` is always emitted, `TransformFields` only when there are
    /// fields, `Limits` always and with both attributes.
    pub fn to_node(&self) -> DocumentNode {
        let mut node = DocumentNode::new(MessageKind::TransformRequest.inner_tag());

        let mut entities = DocumentNode::new("Entities");
        for entity in &self.entities {
            entities.append(entity.encode());
        }
        node.append(entities);

        if !self.fields.is_empty() {
            let mut field_nodes = DocumentNode::new("TransformFields");
            for (name, value) in &self.fields {
                let mut field = DocumentNode::new("Field").attr("Name", name.clone());
                if !value.is_empty() {
                    field = field.with_text(value.clone());
                }
                field_nodes.append(field);
            }
            node.append(field_nodes);
        }

        node.append(
            DocumentNode::new("Limits")
                .attr("SoftLimit", self.limits.soft.to_string())
                .attr("HardLimit", self.limits.hard.to_string()),
        );
        node
    }

    /// Serialize the full `MaltegoMessage` document.
    pub fn to_xml(&self, pretty: bool) -> Result<Vec<u8>, MessageError> {
        let bytes = xml::render(&envelope::wrap(self.to_node()), pretty)?;
        Ok(bytes)
    }
}

fn limit_attribute(
    node: &DocumentNode,
    attribute: &str,
    default: u32,
) -> Result<u32, MessageError> {
    match node.attribute(attribute) {
        Some(raw) => raw.parse().map_err(|_| MessageError::NumericFormat {
            attribute: attribute.to_owned(),
            value: raw.to_owned(),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
