//! User-facing feedback messages carried by a response.

use crate::codec::NodeCodec;
use crate::error::MessageError;
use crate::xml::DocumentNode;

/// Severity of a UI message, as displayed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMessageType {
    Fatal,
    Partial,
    Inform,
    Debug,
}

impl UiMessageType {
    fn as_str(&self) -> &'static str {
        match self {
            UiMessageType::Fatal => "FatalError",
            UiMessageType::Partial => "PartialError",
            UiMessageType::Inform => "Inform",
            UiMessageType::Debug => "Debug",
        }
    }

    fn from_wire(raw: &str) -> Result<Self, MessageError> {
        match raw {
            "FatalError" => Ok(UiMessageType::Fatal),
            "PartialError" => Ok(UiMessageType::Partial),
            "Inform" => Ok(UiMessageType::Inform),
            "Debug" => Ok(UiMessageType::Debug),
            other => Err(MessageError::MalformedMessage(format!(
                "unknown MessageType '{other}'"
            ))),
        }
    }
}

/// A single `<UIMessage MessageType="...">text</UIMessage>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiMessage {
    pub message_type: UiMessageType,
    pub text: String,
}

impl UiMessage {
    pub fn new(message_type: UiMessageType, text: impl Into<String>) -> Self {
        Self {
            message_type,
            text: text.into(),
        }
    }

    /// Convenience for the common informational case.
    pub fn inform(text: impl Into<String>) -> Self {
        Self::new(UiMessageType::Inform, text)
    }
}

impl NodeCodec for UiMessage {
    fn decode(node: &DocumentNode) -> Result<Self, MessageError> {
        let message_type = node
            .attribute("MessageType")
            .ok_or_else(|| {
                MessageError::MalformedMessage("UIMessage requires a MessageType attribute".into())
            })
            .and_then(UiMessageType::from_wire)?;
        Ok(Self {
            message_type,
            text: node.trimmed_text().to_owned(),
        })
    }

    fn encode(&self) -> DocumentNode {
        let mut node =
            DocumentNode::new("UIMessage").attr("MessageType", self.message_type.as_str());
        if !self.text.is_empty() {
            node = node.with_text(self.text.clone());
        }
        node
    }
}
