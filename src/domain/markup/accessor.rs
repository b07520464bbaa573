//! Element Accessor - Total, side-effect free queries over an element tree.
//!
//! None of these functions fail: absent elements read as empty text and
//! absent attributes as `None`, leaving defaulting to the caller.

use super::Element;

/// Trimmed text content of the first descendant named `tag`, or `""`.
pub fn text_of(node: &Element, tag: &str) -> String {
    node.first_descendant(tag)
        .map(|element| element.text_content().trim().to_string())
        .unwrap_or_default()
}

/// Value of the attribute `name` on `node`.
pub fn attr<'a>(node: &'a Element, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Every descendant named `tag`, in document order. Possibly empty.
pub fn all_of<'a>(node: &'a Element, tag: &str) -> Vec<&'a Element> {
    node.descendants_named(tag)
}
