use serde::{Deserialize, Serialize};

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A child of an element: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupNode {
    Element(Element),
    Text(String),
}

/// An element with its attributes and children in document order.
///
/// Names are local names; namespace prefixes are dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<MarkupNode>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: adds an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Builder: appends a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(MarkupNode::Element(child));
        self
    }

    /// Builder: appends a text run.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(MarkupNode::Text(text.into()));
        self
    }

    /// Returns the value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Iterates over direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            MarkupNode::Element(element) => Some(element),
            MarkupNode::Text(_) => None,
        })
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text_content(&self) -> String {
        self.nodes()
            .filter_map(|node| match node {
                MarkupNode::Text(text) => Some(text.as_str()),
                MarkupNode::Element(_) => None,
            })
            .collect()
    }

    /// Every node below this element in document order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![self.children.iter()],
        }
    }

    /// Descendant elements (not self), in pre-order.
    pub fn descendants(&self) -> impl Iterator<Item = &Element> {
        self.nodes().filter_map(|node| match node {
            MarkupNode::Element(element) => Some(element),
            MarkupNode::Text(_) => None,
        })
    }

    /// First descendant (not self) named `tag`, in pre-order.
    pub fn first_descendant(&self, tag: &str) -> Option<&Element> {
        self.descendants().find(|element| element.name == tag)
    }

    /// All descendants (not self) named `tag`, in pre-order.
    pub fn descendants_named(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .filter(|element| element.name == tag)
            .collect()
    }

    /// Self if named `tag`, else the first matching descendant.
    pub fn find_inclusive(&self, tag: &str) -> Option<&Element> {
        if self.name == tag {
            Some(self)
        } else {
            self.first_descendant(tag)
        }
    }

    /// Number of elements in this subtree, including self.
    pub fn element_count(&self) -> usize {
        1 + self.descendants().count()
    }
}

/// Pre-order walk over the nodes below an element.
///
/// Keeps one child iterator per open level on the heap, so depth is bounded
/// by memory rather than the call stack.
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    stack: Vec<std::slice::Iter<'a, MarkupNode>>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a MarkupNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(level) = self.stack.last_mut() {
            match level.next() {
                Some(node) => {
                    if let MarkupNode::Element(element) = node {
                        self.stack.push(element.children.iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// A parsed document: the root element plus nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTree {
    root: Element,
}

impl ElementTree {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Document-wide lookup that also considers the root element itself.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.root.find_inclusive(tag)
    }
}
