//! Concrete entity-graph collaborators: [`Entity`] and [`UiMessage`].
//!
//! The message layer is generic over [`crate::codec::NodeCodec`]; these are
//! the stock implementations matching the standard Maltego entity XML.

mod graph;
mod ui_message;

pub use graph::{Entity, EntityField, Label, MatchingRule};
pub use ui_message::{UiMessage, UiMessageType};

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
