//! Markup module - Owned, read-only element tree and query helpers.
//!
//! The parser collaborator (see `ports::MarkupParser`) turns raw text into an
//! [`ElementTree`]. Everything downstream only queries the tree through the
//! accessor functions, never through parser-specific types, so a parsed tree
//! can be kept in the registry after the source text is gone.

mod accessor;
mod tree;

pub use accessor::{all_of, attr, text_of};
pub use tree::{Attribute, Element, ElementTree, MarkupNode, Nodes};
