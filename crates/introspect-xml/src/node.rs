//! Tree vertices.

use crate::attributes::Attributes;
use crate::query::Nodes;
use crate::serialize::{self, WriteOptions};

/// Tag of the documentation pseudo-node.
///
/// A documentation comment that is not followed by a sibling element stays
/// in the tree as a child with this tag. Interface documents must not use
/// it as an element name.
pub const DOC_TAG: &str = "doc";

/// An element of an interface document.
///
/// A node owns its children. `tag` is fixed at construction; everything
/// else is filled in while the document is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attributes: Attributes,
    children: Vec<Node>,
    /// Trimmed character content.
    text: String,
    /// Folded documentation comment that preceded this element.
    documentation: Option<String>,
}

impl Node {
    /// Create an element with no attributes and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_attributes(tag, Attributes::new())
    }

    /// Create an element with the given attributes.
    pub fn with_attributes(tag: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
            text: String::new(),
            documentation: None,
        }
    }

    /// Create a documentation pseudo-node holding `text`.
    pub fn documentation_node(text: impl Into<String>) -> Self {
        let mut node = Self::new(DOC_TAG);
        node.text = text.into();
        node
    }

    /// Builder-style [`set`](Self::set).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this is a documentation pseudo-node left in the tree.
    pub fn is_documentation(&self) -> bool {
        self.tag == DOC_TAG
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Get an attribute value, or `""` if absent.
    pub fn get(&self, key: &str) -> &str {
        self.attributes.get(key)
    }

    /// Set an attribute; an empty value removes it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.set(key, value);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Direct children whose tag equals `key`, in document order.
    pub fn select_by_tag(&self, key: &str) -> Nodes<'_> {
        if key.is_empty() {
            return Nodes::new();
        }
        self.children.iter().filter(|c| c.tag == key).collect()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn set_documentation(&mut self, documentation: impl Into<String>) {
        self.documentation = Some(documentation.into());
    }

    /// Whether the node has neither text nor children, i.e. serializes as
    /// a self-closing tag.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.children.is_empty()
    }

    /// Serialize this subtree with default [`WriteOptions`].
    pub fn to_xml(&self) -> String {
        self.to_xml_with(&WriteOptions::default())
    }

    pub fn to_xml_with(&self, options: &WriteOptions) -> String {
        let mut out = String::new();
        serialize::write_node(&mut out, self, 0, options);
        out
    }
}
