//! XML Markup Parser - roxmltree implementation of MarkupParser.
//!
//! roxmltree borrows from the input text, so the parsed document is copied
//! into an owned [`ElementTree`] before returning. Comments and processing
//! instructions are dropped; CDATA sections arrive as plain text.
//!
//! Nesting deeper than [`MAX_DEPTH`] is rejected before roxmltree sees the
//! input, and the conversion walks the tree with an explicit stack.

use roxmltree::{Document, Edge, Node, ParsingOptions};

use crate::domain::markup::{Element, ElementTree, MarkupNode};
use crate::ports::{MarkupParser, ParseError};

/// Deepest element nesting accepted.
pub const MAX_DEPTH: usize = 256;

/// Parses XML into the domain element tree.
///
/// Element and attribute names are stored as local names, so
/// `<sp:Goal>` and `<Goal>` are both found by `"Goal"`.
///
/// # Usage
///
/// ```rust,ignore
/// let parser = XmlMarkupParser::new();
/// let tree = parser.parse(&std::fs::read_to_string("plan.xml")?)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlMarkupParser;

impl XmlMarkupParser {
    pub fn new() -> Self {
        Self
    }

    fn options() -> ParsingOptions {
        ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        }
    }

    fn convert(root: Node<'_, '_>) -> Element {
        let mut open: Vec<Element> = Vec::new();
        for edge in root.traverse() {
            match edge {
                Edge::Open(node) if node.is_element() => {
                    let mut element = Element::new(node.tag_name().name());
                    for attribute in node.attributes() {
                        element = element.with_attribute(attribute.name(), attribute.value());
                    }
                    open.push(element);
                }
                Edge::Open(node) if node.is_text() => {
                    if let (Some(parent), Some(text)) = (open.last_mut(), node.text()) {
                        parent.children.push(MarkupNode::Text(text.to_string()));
                    }
                }
                Edge::Close(node) if node.is_element() => {
                    let Some(element) = open.pop() else { continue };
                    match open.last_mut() {
                        Some(parent) => parent.children.push(MarkupNode::Element(element)),
                        None => return element,
                    }
                }
                _ => {}
            }
        }
        Element::new(root.tag_name().name())
    }
}

/// Rejects input nested deeper than [`MAX_DEPTH`] without building anything.
///
/// Comments, CDATA, processing instructions and declarations are skipped;
/// quoted attribute values may contain `>`. Anything else malformed is left
/// for the real parser to report.
fn check_depth(content: &str) -> Result<(), ParseError> {
    let bytes = content.as_bytes();
    let mut depth = 0usize;
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'<') {
        let start = pos + offset;
        let rest = &bytes[start..];
        pos = if rest.starts_with(b"<!--") {
            skip_past(bytes, start, b"-->")
        } else if rest.starts_with(b"<![CDATA[") {
            skip_past(bytes, start, b"]]>")
        } else if rest.starts_with(b"<?") {
            skip_past(bytes, start, b"?>")
        } else if rest.starts_with(b"<!") {
            skip_tag(bytes, start).0
        } else if rest.starts_with(b"</") {
            depth = depth.saturating_sub(1);
            skip_tag(bytes, start).0
        } else {
            let (end, self_closing) = skip_tag(bytes, start);
            if !self_closing {
                depth += 1;
                if depth > MAX_DEPTH {
                    let (line, column) = line_and_column(content, start);
                    return Err(ParseError::malformed(
                        line,
                        column,
                        format!("elements nested deeper than {MAX_DEPTH} levels"),
                    ));
                }
            }
            end
        };
    }
    Ok(())
}

fn skip_past(bytes: &[u8], start: usize, terminator: &[u8]) -> usize {
    bytes[start..]
        .windows(terminator.len())
        .position(|window| window == terminator)
        .map_or(bytes.len(), |offset| start + offset + terminator.len())
}

/// Returns the index after the closing `>` and whether the tag ended in `/>`.
fn skip_tag(bytes: &[u8], start: usize) -> (usize, bool) {
    let mut quote: Option<u8> = None;
    let mut previous = 0u8;
    for (offset, &b) in bytes[start..].iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return (start + offset + 1, previous == b'/'),
            None => {}
        }
        previous = b;
    }
    (bytes.len(), true)
}

fn line_and_column(content: &str, index: usize) -> (u32, u32) {
    let before = &content[..index];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (
        u32::try_from(line).unwrap_or(u32::MAX),
        u32::try_from(column).unwrap_or(u32::MAX),
    )
}

impl MarkupParser for XmlMarkupParser {
    fn parse(&self, content: &str) -> Result<ElementTree, ParseError> {
        if content.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        check_depth(content)?;

        let document = Document::parse_with_options(content, Self::options()).map_err(|e| {
            let pos = e.pos();
            ParseError::malformed(pos.row, pos.col, e.to_string())
        })?;

        let root = Self::convert(document.root_element());
        tracing::trace!(root = %root.name, elements = root.element_count(), "Parsed XML document");
        Ok(ElementTree::new(root))
    }
}
