//! The `Entity` element and its nested field/label structures.

use crate::codec::NodeCodec;
use crate::error::MessageError;
use crate::xml::DocumentNode;

/// How a client matches an additional field against existing graph data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchingRule {
    Strict,
    Loose,
}

impl MatchingRule {
    fn as_str(&self) -> &'static str {
        match self {
            MatchingRule::Strict => "strict",
            MatchingRule::Loose => "loose",
        }
    }

    fn from_wire(raw: &str) -> Result<Self, MessageError> {
        match raw {
            "strict" => Ok(MatchingRule::Strict),
            "loose" => Ok(MatchingRule::Loose),
            other => Err(MessageError::MalformedMessage(format!(
                "unknown MatchingRule '{other}'"
            ))),
        }
    }
}

/// An additional key/value field attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityField {
    pub name: String,
    pub display_name: Option<String>,
    pub matching_rule: Option<MatchingRule>,
    pub value: String,
}

impl EntityField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            matching_rule: None,
            value: value.into(),
        }
    }
}

/// A display-information label attached to an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    /// MIME type of the content, e.g. `text/html`.
    pub content_type: Option<String>,
    pub content: String,
}

impl Label {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            content: content.into(),
        }
    }
}

/// A single node of the transform entity graph.
///
/// Wire shape: `<Entity Type="...">` with a mandatory `<Value>` child,
/// optional `<Weight>`, and `AdditionalFields`/`DisplayInformation` lists
/// that are only emitted when non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Fully qualified entity type, e.g. `maltego.Domain`.
    pub entity_type: String,
    pub value: String,
    pub weight: Option<u32>,
    pub fields: Vec<EntityField>,
    pub labels: Vec<Label>,
}

impl Entity {
    pub fn new(entity_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            value: value.into(),
            weight: None,
            fields: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl NodeCodec for Entity {
    fn decode(node: &DocumentNode) -> Result<Self, MessageError> {
        let entity_type = node
            .attribute("Type")
            .ok_or_else(|| {
                MessageError::MalformedMessage("Entity requires a Type attribute".into())
            })?
            .to_owned();

        let value = node
            .find("Value")
            .ok_or_else(|| MessageError::MalformedMessage("Entity requires a Value tag".into()))?
            .trimmed_text()
            .to_owned();

        let weight = match node.find("Weight") {
            Some(weight_node) => {
                let raw = weight_node.trimmed_text();
                Some(raw.parse().map_err(|_| MessageError::NumericFormat {
                    attribute: "Weight".to_owned(),
                    value: raw.to_owned(),
                })?)
            }
            None => None,
        };

        let mut fields = Vec::new();
        if let Some(field_nodes) = node.find("AdditionalFields") {
            for field in &field_nodes.children {
                fields.push(decode_field(field)?);
            }
        }

        let mut labels = Vec::new();
        if let Some(label_nodes) = node.find("DisplayInformation") {
            for label in &label_nodes.children {
                labels.push(decode_label(label)?);
            }
        }

        Ok(Self {
            entity_type,
            value,
            weight,
            fields,
            labels,
        })
    }

    fn encode(&self) -> DocumentNode {
        let mut node = DocumentNode::new("Entity").attr("Type", self.entity_type.clone());
        node.append(DocumentNode::new("Value").with_text(self.value.clone()));

        if let Some(weight) = self.weight {
            node.append(DocumentNode::new("Weight").with_text(weight.to_string()));
        }

        if !self.fields.is_empty() {
            let mut list = DocumentNode::new("AdditionalFields");
            for field in &self.fields {
                list.append(encode_field(field));
            }
            node.append(list);
        }

        if !self.labels.is_empty() {
            let mut list = DocumentNode::new("DisplayInformation");
            for label in &self.labels {
                list.append(encode_label(label));
            }
            node.append(list);
        }

        node
    }
}

fn decode_field(node: &DocumentNode) -> Result<EntityField, MessageError> {
    let name = node
        .attribute("Name")
        .ok_or_else(|| MessageError::MalformedMessage("No Name attribute in Field".into()))?
        .to_owned();
    let matching_rule = node
        .attribute("MatchingRule")
        .map(MatchingRule::from_wire)
        .transpose()?;
    Ok(EntityField {
        name,
        display_name: node.attribute("DisplayName").map(str::to_owned),
        matching_rule,
        value: node.trimmed_text().to_owned(),
    })
}

fn encode_field(field: &EntityField) -> DocumentNode {
    let mut node = DocumentNode::new("Field").attr("Name", field.name.clone());
    if let Some(display_name) = &field.display_name {
        node.set_attribute("DisplayName", display_name.clone());
    }
    if let Some(rule) = field.matching_rule {
        node.set_attribute("MatchingRule", rule.as_str());
    }
    if !field.value.is_empty() {
        node = node.with_text(field.value.clone());
    }
    node
}

fn decode_label(node: &DocumentNode) -> Result<Label, MessageError> {
    let name = node
        .attribute("Name")
        .ok_or_else(|| MessageError::MalformedMessage("No Name attribute in Label".into()))?
        .to_owned();
    Ok(Label {
        name,
        content_type: node.attribute("Type").map(str::to_owned),
        content: node.text.clone().unwrap_or_default(),
    })
}

fn encode_label(label: &Label) -> DocumentNode {
    let mut node = DocumentNode::new("Label").attr("Name", label.name.clone());
    if let Some(content_type) = &label.content_type {
        node.set_attribute("Type", content_type.clone());
    }
    if !label.content.is_empty() {
        node = node.with_text(label.content.clone());
    }
    node
}
