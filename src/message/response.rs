//! Outbound `MaltegoTransformResponseMessage` encoding and decoding.

use tracing::debug;

use super::envelope::{self, MessageKind};
use crate::codec::NodeCodec;
use crate::entity::{Entity, UiMessage};
use crate::error::MessageError;
use crate::xml::{self, DocumentNode};

/// An outbound transform result: the produced entity graph plus optional
/// user-facing UI messages.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResponse<E = Entity, M = UiMessage> {
    /// Result entities in emission order. May be empty.
    pub entities: Vec<E>,
    /// UI messages for the client to display. The `UIMessages` element is
    /// only emitted when this is non-empty, and decoding treats an absent
    /// element as empty.
    pub ui_messages: Vec<M>,
}

impl<E: NodeCodec, M: NodeCodec> TransformResponse<E, M> {
    /// A response with no UI messages.
    pub fn new(entities: Vec<E>) -> Self {
        Self {
            entities,
            ui_messages: Vec::new(),
        }
    }

    /// A response carrying UI messages alongside the entities.
    pub fn with_ui_messages(entities: Vec<E>, ui_messages: Vec<M>) -> Self {
        Self {
            entities,
            ui_messages,
        }
    }

    /// Render the inner message node: the shared envelope body (including
    /// `UIMessages` when present) followed by the `Entities` list.
    pub fn to_node(&self) -> DocumentNode {
        let mut node = envelope::render_inner(MessageKind::TransformResponse, &self.ui_messages);
        let mut entities = DocumentNode::new("Entities");
        for entity in &self.entities {
            entities.append(entity.encode());
        }
        node.append(entities);
        node
    }

    /// Serialize the full `MaltegoMessage` document.
    pub fn to_xml(&self, pretty: bool) -> Result<Vec<u8>, MessageError> {
        debug!(
            entities = self.entities.len(),
            ui_messages = self.ui_messages.len(),
            "encoding transform response"
        );
        let bytes = xml::render(&envelope::wrap(self.to_node()), pretty)?;
        Ok(bytes)
    }

    /// Decode a response from raw document bytes.
    pub fn from_xml(bytes: &[u8]) -> Result<Self, MessageError> {
        let root = xml::parse(bytes)?;
        Self::from_node(&root)
    }

    /// Decode a response from a pre-parsed root node.
    ///
    /// `Entities` is mandatory; `UIMessages` is optional and defaults to
    /// empty, mirroring what the encoder emits.
    pub fn from_node(root: &DocumentNode) -> Result<Self, MessageError> {
        let node = envelope::unwrap(root, MessageKind::TransformResponse)?;

        let entity_nodes = node.find("Entities").ok_or_else(|| {
            MessageError::MalformedMessage("Response requires Entities tag".into())
        })?;
        let mut entities = Vec::with_capacity(entity_nodes.children.len());
        for child in &entity_nodes.children {
            entities.push(E::decode(child)?);
        }

        let mut ui_messages = Vec::new();
        if let Some(message_nodes) = node.find("UIMessages") {
            for child in &message_nodes.children {
                ui_messages.push(M::decode(child)?);
            }
        }

        Ok(Self {
            entities,
            ui_messages,
        })
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
