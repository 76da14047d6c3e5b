//! Generic labeled document tree and its byte-level codec.
//!
//! Split into sub-modules:
//! - `node`: the tree structure and builders, no protocol knowledge
//! - `reader`: bytes -> tree via `quick-xml` events
//! - `writer`: tree -> bytes, with optional pretty-printing

mod node;
mod reader;
mod writer;

pub use node::DocumentNode;
pub use reader::parse;
pub use writer::render;

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
