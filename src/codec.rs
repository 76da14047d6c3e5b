//! Seam between the message layer and concrete entity types.
//!
//! Request and response codecs only ever see this trait, never a concrete
//! entity catalog. Collaborator decode failures are returned as-is; the
//! message layer never rewraps them.

use crate::error::MessageError;
use crate::xml::DocumentNode;

/// A value that can cross the wire as a single document node.
pub trait NodeCodec: Sized {
    /// Build a value from its node form.
    fn decode(node: &DocumentNode) -> Result<Self, MessageError>;

    /// Render the value to its node form.
    fn encode(&self) -> DocumentNode;
}
