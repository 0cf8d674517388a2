//! Chainable node-set queries.
//!
//! A [`Nodes`] collection borrows from the tree it was taken from, so it
//! cannot outlive the [`Document`](crate::Document) or survive a re-parse.
//!
//! ```rust
//! use introspect_xml::Document;
//!
//! let doc: Document = r#"<node>
//!   <interface name="org.example.Foo">
//!     <method name="Get"/>
//!     <method name="Set"/>
//!   </interface>
//! </node>"#
//!     .parse()
//!     .unwrap();
//!
//! let set = doc
//!     .select_by_tag("interface")
//!     .unwrap()
//!     .select_by_tag("method")
//!     .filter_by_attribute("name", "Set");
//! assert_eq!(set.len(), 1);
//! ```

use crate::node::Node;

/// An ordered, non-owning list of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nodes<'a> {
    nodes: Vec<&'a Node>,
}

impl<'a> Nodes<'a> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Direct children matching `key` of every node in the collection.
    ///
    /// Results are grouped by collection order, then by child order.
    pub fn select_by_tag(&self, key: &str) -> Nodes<'a> {
        self.nodes
            .iter()
            .copied()
            .flat_map(|node: &'a Node| node.select_by_tag(key))
            .collect()
    }

    /// Nodes whose attribute `attr` equals `value` exactly.
    pub fn filter_by_attribute(&self, attr: &str, value: &str) -> Nodes<'a> {
        self.nodes
            .iter()
            .copied()
            .filter(|node| node.get(attr) == value)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Node> {
        self.nodes.get(index).copied()
    }

    pub fn first(&self) -> Option<&'a Node> {
        self.nodes.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a Node] {
        &self.nodes
    }
}

impl<'a> From<&'a Node> for Nodes<'a> {
    fn from(node: &'a Node) -> Self {
        Self { nodes: vec![node] }
    }
}

impl<'a> FromIterator<&'a Node> for Nodes<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for Nodes<'a> {
    type Item = &'a Node;
    type IntoIter = std::vec::IntoIter<&'a Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Nodes<'a> {
    type Item = &'a Node;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a Node>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
