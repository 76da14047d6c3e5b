//! Typed Transform messages and the shared `MaltegoMessage` envelope.
//!
//! Split into sub-modules:
//! - `envelope`: message kinds, root wrapping, inner-tag validation
//! - `request`: inbound `MaltegoTransformRequestMessage`
//! - `response`: outbound `MaltegoTransformResponseMessage`

pub mod envelope;
mod request;
mod response;

pub use envelope::{MessageKind, ROOT_TAG};
pub use request::{Limits, TransformRequest, DEFAULT_HARD_LIMIT, DEFAULT_SOFT_LIMIT};
pub use response::TransformResponse;
