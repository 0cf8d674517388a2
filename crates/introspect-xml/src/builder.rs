//! Tree construction from structural events, including documentation
//! folding.
//!
//! Open elements live on a stack and are attached to their parent when they
//! close. A documentation comment is held as pending on the innermost open
//! element (or on the document, before the root opens). The next element
//! opened at that level takes it as its own documentation. A pending block
//! that is still unclaimed when another documentation comment arrives, or
//! when the enclosing element closes, stays in the tree as a literal
//! [`DOC_TAG`](crate::DOC_TAG) child.

use crate::error::{Error, Result};
use crate::events::EventSink;
use crate::node::Node;
use crate::options::{ParseOptions, TextMode};

/// Lines starting with this character are structured tags and are not
/// indented.
const TAG_PREFIX: char = '@';

pub(crate) struct TreeBuilder<'o> {
    options: &'o ParseOptions,

    /// Elements opened but not yet closed, outermost first.
    stack: Vec<Frame>,

    /// The finished root element.
    root: Option<Node>,

    /// Documentation blocks seen before the root element opened.
    prelude: Vec<String>,
}

struct Frame {
    node: Node,
    pending: Option<String>,
}

impl Frame {
    fn flush_pending(&mut self) {
        if let Some(doc) = self.pending.take() {
            tracing::debug!(
                parent = self.node.tag(),
                "documentation comment not followed by an element"
            );
            self.node.push_child(Node::documentation_node(doc));
        }
    }
}

impl<'o> TreeBuilder<'o> {
    pub(crate) fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
            root: None,
            prelude: Vec::new(),
        }
    }

    /// Take the finished root element.
    pub(crate) fn finish(self) -> Result<Node> {
        self.root.ok_or(Error::NoRoot)
    }

    fn is_documentation(&self, comment: &str) -> bool {
        self.options.documentation
            && !self.options.marker.is_empty()
            && comment.contains(self.options.marker.as_str())
    }
}

impl EventSink for TreeBuilder<'_> {
    fn open(&mut self, tag: &str, attributes: Vec<(String, String)>) {
        let mut node = Node::with_attributes(tag, attributes.into_iter().collect());

        match self.stack.last_mut() {
            Some(parent) => {
                if let Some(doc) = parent.pending.take() {
                    tracing::trace!(element = tag, "attaching documentation");
                    node.set_documentation(doc);
                }
            }
            None => {
                // Earlier unclaimed blocks stay in document order ahead of
                // the root's own children.
                if let Some(doc) = self.prelude.pop() {
                    tracing::trace!(element = tag, "attaching document-level documentation");
                    node.set_documentation(doc);
                }
                for doc in self.prelude.drain(..) {
                    node.push_child(Node::documentation_node(doc));
                }
            }
        }

        self.stack.push(Frame {
            node,
            pending: None,
        });
    }

    fn close(&mut self, _tag: &str) {
        let Some(mut frame) = self.stack.pop() else {
            return;
        };
        frame.flush_pending();

        match self.stack.last_mut() {
            Some(parent) => parent.node.push_child(frame.node),
            None => self.root = Some(frame.node),
        }
    }

    fn text(&mut self, content: &str) {
        let trimmed = content.trim_matches(|c: char| c.is_ascii_whitespace());
        // Blank chunks never overwrite text: indentation after a child would wipe it
        if trimmed.is_empty() {
            return;
        }
        let Some(frame) = self.stack.last_mut() else {
            return;
        };

        match self.options.text {
            TextMode::Overwrite => frame.node.set_text(trimmed),
            TextMode::Concatenate if frame.node.text().is_empty() => frame.node.set_text(trimmed),
            TextMode::Concatenate => {
                let joined = format!("{} {}", frame.node.text(), trimmed);
                frame.node.set_text(joined);
            }
        }
    }

    fn comment(&mut self, content: &str) {
        if !self.is_documentation(content) {
            return;
        }
        let doc = normalize_documentation(content, &self.options.indent);

        if let Some(frame) = self.stack.last_mut() {
            frame.flush_pending();
            frame.pending = Some(doc);
        } else if let Some(root) = self.root.as_mut() {
            // Nothing can follow the root element, so the block stays literal.
            root.push_child(Node::documentation_node(doc));
        } else {
            self.prelude.push(doc);
        }
    }
}

/// Turn a documentation comment body into the documentation string.
///
/// The first line (the one holding the comment opener) is dropped, as is a
/// blank last line. Every other line loses its leading whitespace; non-empty
/// lines that do not start with `@` get `indent` prepended. Each kept line
/// ends with a newline.
///
/// ```rust
/// use introspect_xml::normalize_documentation;
///
/// let doc = normalize_documentation("\n  @brief Adds.\n  Returns the sum.\n  ", "    ");
/// assert_eq!(doc, "@brief Adds.\n    Returns the sum.\n");
/// ```
pub fn normalize_documentation(comment: &str, indent: &str) -> String {
    let mut out = String::new();
    let mut lines = comment.split('\n').skip(1).peekable();

    while let Some(line) = lines.next() {
        let line = line.trim_start();

        if line.is_empty() && lines.peek().is_none() {
            continue;
        }

        if !line.is_empty() && !line.starts_with(TAG_PREFIX) {
            out.push_str(indent);
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}
