//! Error taxonomy for the Transform message codec.
//!
//! Every failure aborts the whole encode/decode call; no partial message is
//! ever returned.

use thiserror::Error;

/// Byte-level XML failures, raised before any schema interpretation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not well-formed XML.
    #[error("malformed XML: {0}")]
    Syntax(#[from] quick_xml::Error),
    /// An attribute could not be read.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
    /// The input contains no root element at all.
    #[error("document contains no root element")]
    EmptyDocument,
    /// A closing tag appeared with no matching open element.
    #[error("unexpected closing tag </{0}>")]
    UnexpectedClose(String),
    /// The input ended while an element was still open.
    #[error("unexpected end of input inside <{0}>")]
    UnexpectedEof(String),
}

/// Schema-level failures for Transform request/response messages.
#[derive(Debug, Error)]
pub enum MessageError {
    /// The caller passed something that is not a usable message root.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The document violates the Transform message schema.
    #[error("malformed message: {0}")]
    MalformedMessage(String),
    /// A value that must be an integer is not one.
    #[error("'{attribute}' is not a valid integer: '{value}'")]
    NumericFormat { attribute: String, value: String },
    /// The raw bytes were not well-formed XML.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
