//! Indented XML output.
//!
//! Every tag ends with a newline. A node without text and children is
//! written self-closing; text follows the opening tag on the same line and
//! each child goes on its own line, indented one level deeper.

use crate::node::Node;
use std::borrow::Cow;

/// How reserved characters in attribute values and text are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escape {
    /// Replace `& < > " '` with entity references.
    #[default]
    Xml,

    /// Write values exactly as stored.
    ///
    /// Output is not well-formed if a value contains reserved characters.
    Verbatim,
}

impl Escape {
    fn apply<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Escape::Xml => quick_xml::escape::escape(value),
            Escape::Verbatim => Cow::Borrowed(value),
        }
    }
}

/// Serializer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub escape: Escape,

    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            escape: Escape::Xml,
            indent: 2,
        }
    }
}

pub(crate) fn write_node(out: &mut String, node: &Node, depth: usize, options: &WriteOptions) {
    push_indent(out, depth * options.indent);
    out.push('<');
    out.push_str(node.tag());

    for (key, value) in node.attributes().iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&options.escape.apply(value));
        out.push('"');
    }

    if node.is_empty() {
        out.push_str("/>\n");
        return;
    }

    out.push('>');
    out.push_str(&options.escape.apply(node.text()));

    if !node.children().is_empty() {
        out.push('\n');
        for child in node.children() {
            write_node(out, child, depth + 1, options);
        }
        push_indent(out, depth * options.indent);
    }

    out.push_str("</");
    out.push_str(node.tag());
    out.push_str(">\n");
}

fn push_indent(out: &mut String, width: usize) {
    out.extend(std::iter::repeat_n(' ', width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing() {
        let node = Node::new("arg").with_attribute("type", "s");
        assert_eq!(node.to_xml(), "<arg type=\"s\"/>\n");
    }

    #[test]
    fn test_inline_text() {
        let mut node = Node::new("annotation");
        node.set_text("value");
        assert_eq!(node.to_xml(), "<annotation>value</annotation>\n");
    }

    #[test]
    fn test_children_are_indented() {
        let mut method = Node::new("method").with_attribute("name", "Ping");
        method.push_child(Node::new("arg").with_attribute("type", "s"));

        let mut iface = Node::new("interface");
        iface.push_child(method);

        insta::assert_snapshot!(iface.to_xml(), @r#"
        <interface>
          <method name="Ping">
            <arg type="s"/>
          </method>
        </interface>
        "#);
    }

    #[test]
    fn test_text_and_children() {
        let mut node = Node::new("a");
        node.set_text("hi");
        node.push_child(Node::new("b"));
        assert_eq!(node.to_xml(), "<a>hi\n  <b/>\n</a>\n");
    }

    #[test]
    fn test_escape_modes() {
        let node = Node::new("arg").with_attribute("name", "a<b & \"c\"");

        assert_eq!(
            node.to_xml(),
            "<arg name=\"a&lt;b &amp; &quot;c&quot;\"/>\n"
        );

        let verbatim = WriteOptions {
            escape: Escape::Verbatim,
            ..WriteOptions::default()
        };
        assert_eq!(node.to_xml_with(&verbatim), "<arg name=\"a<b & \"c\"\"/>\n");
    }

    #[test]
    fn test_custom_indent() {
        let mut node = Node::new("a");
        node.push_child(Node::new("b"));
        let options = WriteOptions {
            indent: 4,
            ..WriteOptions::default()
        };
        assert_eq!(node.to_xml_with(&options), "<a>\n    <b/>\n</a>\n");
    }
}
