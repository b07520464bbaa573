//! Markup Adapters
//!
//! - **XmlMarkupParser** - Parses XML text with roxmltree into an owned element tree

mod xml_parser;

pub use xml_parser::XmlMarkupParser;
