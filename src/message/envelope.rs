//! The shared `MaltegoMessage` envelope.
//!
//! Every Transform message travels as a root `MaltegoMessage` element with a
//! single kind-specific child. Kind validation happens here; the per-kind
//! decoders only ever see a validated inner node.

use crate::codec::NodeCodec;
use crate::error::MessageError;
use crate::xml::DocumentNode;

/// Tag of the outermost element of every message.
pub const ROOT_TAG: &str = "MaltegoMessage";

/// The closed set of Transform message kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    TransformRequest,
    TransformResponse,
}

impl MessageKind {
    /// Tag name of the kind-specific inner element.
    pub fn inner_tag(&self) -> &'static str {
        match self {
            MessageKind::TransformRequest => "MaltegoTransformRequestMessage",
            MessageKind::TransformResponse => "MaltegoTransformResponseMessage",
        }
    }
}

/// Wrap an inner message node in the `MaltegoMessage` root.
pub fn wrap(inner: DocumentNode) -> DocumentNode {
    DocumentNode::new(ROOT_TAG).child(inner)
}

/// Validate the envelope of `root` and return the inner node for
/// kind-specific decoding.
///
/// Fails with [`MessageError::InvalidInput`] when `root` has no child to
/// unwrap, and with [`MessageError::MalformedMessage`] when the inner tag is
/// not the one `kind` mandates.
pub fn unwrap(root: &DocumentNode, kind: MessageKind) -> Result<&DocumentNode, MessageError> {
    let inner = root.children.first().ok_or_else(|| {
        MessageError::InvalidInput(format!("<{}> carries no inner message", root.tag))
    })?;
    if inner.tag != kind.inner_tag() {
        return Err(MessageError::MalformedMessage(format!(
            "{} is an invalid MaltegoMessage type",
            inner.tag
        )));
    }
    Ok(inner)
}

/// Build the kind-specific inner node, with a `UIMessages` child holding each
/// encoded message when there are any. Encoders append their own payload
/// children afterwards.
pub(crate) fn render_inner<M: NodeCodec>(kind: MessageKind, ui_messages: &[M]) -> DocumentNode {
    let mut inner = DocumentNode::new(kind.inner_tag());
    if !ui_messages.is_empty() {
        let mut list = DocumentNode::new("UIMessages");
        for message in ui_messages {
            list.append(message.encode());
        }
        inner.append(list);
    }
    inner
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
