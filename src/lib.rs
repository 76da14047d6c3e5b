//! Encode/decode layer for the Maltego Transform XML message protocol.
//!
//! A transform client submits a `MaltegoTransformRequestMessage` carrying an
//! entity graph, named transform fields, and result limits; the transform
//! answers with a `MaltegoTransformResponseMessage` carrying a new entity
//! graph and optional user-facing UI messages. Both directions share the
//! `MaltegoMessage` envelope. This crate covers exactly that wire layer:
//! a generic document-node tree, the envelope contract, and the request and
//! response codecs. Transport and transform business logic live elsewhere.
//!
//! # Example
//!
//! ```rust
//! use maltego_codec::{Entity, TransformRequest, TransformResponse};
//!
//! let xml = b"<MaltegoMessage>\
//!     <MaltegoTransformRequestMessage><Entities/></MaltegoTransformRequestMessage>\
//!     </MaltegoMessage>";
//! let request: TransformRequest = TransformRequest::from_xml(xml).unwrap();
//! assert!(request.entities.is_empty());
//! assert_eq!(request.limits.soft, 500);
//!
//! let response: TransformResponse = TransformResponse::new(vec![
//!     Entity::new("maltego.Domain", "example.com"),
//! ]);
//! let bytes = response.to_xml(false).unwrap();
//! assert!(bytes.starts_with(b"<MaltegoMessage>"));
//! ```

pub mod codec;
pub mod entity;
pub mod error;
pub mod message;
pub mod xml;

pub use codec::NodeCodec;
pub use entity::{Entity, EntityField, Label, MatchingRule, UiMessage, UiMessageType};
pub use error::{MessageError, ParseError};
pub use message::{
    Limits, MessageKind, TransformRequest, TransformResponse, DEFAULT_HARD_LIMIT,
    DEFAULT_SOFT_LIMIT,
};
pub use xml::DocumentNode;
