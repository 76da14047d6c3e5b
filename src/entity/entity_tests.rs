//! Tests for the stock entity and UI-message collaborators.

use super::*;
use crate::codec::NodeCodec;
use crate::error::MessageError;
use crate::xml::{self, DocumentNode};

#[test]
fn test_minimal_entity_encode() {
    let node = Entity::new("maltego.Domain", "example.com").encode();
    assert_eq!(node.tag, "Entity");
    assert_eq!(node.attribute("Type"), Some("maltego.Domain"));
    assert_eq!(node.find("Value").unwrap().trimmed_text(), "example.com");
    assert!(node.find("Weight").is_none());
    assert!(node.find("AdditionalFields").is_none());
    assert!(node.find("DisplayInformation").is_none());
}

#[test]
fn test_entity_decode_requires_type() {
    let node = DocumentNode::new("Entity").child(DocumentNode::new("Value").with_text("x"));
    let result = Entity::decode(&node);
    assert!(matches!(
        result,
        Err(MessageError::MalformedMessage(msg)) if msg.contains("Type")
    ));
}

#[test]
fn test_entity_decode_requires_value() {
    let node = DocumentNode::new("Entity").attr("Type", "maltego.Domain");
    let result = Entity::decode(&node);
    assert!(matches!(
        result,
        Err(MessageError::MalformedMessage(msg)) if msg.contains("Value")
    ));
}

#[test]
fn test_entity_decode_bad_weight() {
    let node = DocumentNode::new("Entity")
        .attr("Type", "maltego.Domain")
        .child(DocumentNode::new("Value").with_text("example.com"))
        .child(DocumentNode::new("Weight").with_text("heavy"));
    let result = Entity::decode(&node);
    assert!(matches!(
        result,
        Err(MessageError::NumericFormat { value, .. }) if value == "heavy"
    ));
}

#[test]
fn test_entity_roundtrip_full() {
    let mut entity = Entity::new("maltego.Domain", "example.com");
    entity.weight = Some(85);
    entity.fields.push(EntityField {
        name: "whois-info".into(),
        display_name: Some("WHOIS Info".into()),
        matching_rule: Some(MatchingRule::Strict),
        value: "registrar: example".into(),
    });
    entity.fields.push(EntityField::new("fqdn", "example.com"));
    entity.labels.push(Label {
        name: "summary".into(),
        content_type: Some("text/html".into()),
        content: "<b>example.com</b>".into(),
    });

    let decoded = Entity::decode(&entity.encode()).unwrap();
    assert_eq!(decoded, entity);
}

#[test]
fn test_entity_roundtrip_through_bytes() {
    let mut entity = Entity::new("maltego.Person", "Ada Lovelace");
    entity.fields.push(EntityField::new("person.firstname", "Ada"));
    let bytes = xml::render(&entity.encode(), false).unwrap();
    let decoded = Entity::decode(&xml::parse(&bytes).unwrap()).unwrap();
    assert_eq!(decoded, entity);
}

#[test]
fn test_field_without_name_fails() {
    let node = DocumentNode::new("Entity")
        .attr("Type", "t")
        .child(DocumentNode::new("Value").with_text("v"))
        .child(DocumentNode::new("AdditionalFields").child(DocumentNode::new("Field")));
    assert!(matches!(
        Entity::decode(&node),
        Err(MessageError::MalformedMessage(msg)) if msg.contains("Name")
    ));
}

#[test]
fn test_unknown_matching_rule_fails() {
    let node = DocumentNode::new("Entity")
        .attr("Type", "t")
        .child(DocumentNode::new("Value").with_text("v"))
        .child(
            DocumentNode::new("AdditionalFields").child(
                DocumentNode::new("Field")
                    .attr("Name", "f")
                    .attr("MatchingRule", "fuzzy"),
            ),
        );
    assert!(matches!(
        Entity::decode(&node),
        Err(MessageError::MalformedMessage(msg)) if msg.contains("fuzzy")
    ));
}

#[test]
fn test_ui_message_encode() {
    let node = UiMessage::new(UiMessageType::Partial, "2 of 5 failed").encode();
    assert_eq!(node.tag, "UIMessage");
    assert_eq!(node.attribute("MessageType"), Some("PartialError"));
    assert_eq!(node.trimmed_text(), "2 of 5 failed");
}

#[test]
fn test_ui_message_roundtrip_all_types() {
    for message_type in [
        UiMessageType::Fatal,
        UiMessageType::Partial,
        UiMessageType::Inform,
        UiMessageType::Debug,
    ] {
        let message = UiMessage::new(message_type, "text");
        assert_eq!(UiMessage::decode(&message.encode()).unwrap(), message);
    }
}

#[test]
fn test_ui_message_requires_message_type() {
    let node = DocumentNode::new("UIMessage").with_text("hi");
    assert!(matches!(
        UiMessage::decode(&node),
        Err(MessageError::MalformedMessage(_))
    ));
}

#[test]
fn test_ui_message_unknown_type_fails() {
    let node = DocumentNode::new("UIMessage")
        .attr("MessageType", "Whisper")
        .with_text("hi");
    assert!(matches!(
        UiMessage::decode(&node),
        Err(MessageError::MalformedMessage(msg)) if msg.contains("Whisper")
    ));
}
