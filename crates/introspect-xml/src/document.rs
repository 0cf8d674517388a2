//! The parsed interface document and its textual read/write operations.

use crate::builder::TreeBuilder;
use crate::error::{Error, Result};
use crate::events;
use crate::node::Node;
use crate::options::ParseOptions;
use crate::query::Nodes;
use crate::serialize::WriteOptions;
use std::io::{Read, Write};
use std::str::FromStr;

/// An interface document: at most one root [`Node`] plus the options used
/// to parse it.
///
/// The root is present only after a successful [`parse`](Self::parse). A
/// failed parse leaves the document without a root, and operations that
/// need one return [`Error::NoRoot`].
///
/// ```rust
/// use introspect_xml::Document;
///
/// let doc: Document = r#"<node>
///   <!--
///     @brief Greets.
///   -->
///   <interface name="org.example.Hello"/>
/// </node>"#
///     .parse()
///     .unwrap();
///
/// let iface = doc.select_by_tag("interface").unwrap();
/// assert_eq!(iface.first().unwrap().documentation(), Some("@brief Greets.\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Option<Node>,
    options: ParseOptions,
}

impl Document {
    /// Create an empty document that will parse with `options`.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            root: None,
            options,
        }
    }

    /// Parse `content` into a new document.
    pub fn from_str_with(content: &str, options: ParseOptions) -> Result<Self> {
        let mut doc = Self::new(options);
        doc.parse(content)?;
        Ok(doc)
    }

    /// Replace the tree with one parsed from `content`.
    ///
    /// Any existing root is discarded first, so on error the document has
    /// no root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] with the error's line and column if
    /// `content` is not well-formed.
    pub fn parse(&mut self, content: &str) -> Result<()> {
        self.root = None;
        tracing::debug!(bytes = content.len(), "parsing interface document");

        match build(content, &self.options) {
            Ok(root) => {
                tracing::debug!(
                    root = root.tag(),
                    children = root.children().len(),
                    "parsed interface document"
                );
                self.root = Some(root);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "rejected interface document");
                Err(err)
            }
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    /// The root element, or [`Error::NoRoot`].
    pub fn root_node(&self) -> Result<&Node> {
        self.root.as_ref().ok_or(Error::NoRoot)
    }

    /// A collection holding just the root, as the start of a query chain.
    pub fn nodes(&self) -> Result<Nodes<'_>> {
        self.root_node().map(Nodes::from)
    }

    /// Children of the root whose tag equals `key`.
    pub fn select_by_tag(&self, key: &str) -> Result<Nodes<'_>> {
        Ok(self.root_node()?.select_by_tag(key))
    }

    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    /// Serialize the tree with default [`WriteOptions`].
    pub fn serialize(&self) -> Result<String> {
        self.serialize_with(&WriteOptions::default())
    }

    pub fn serialize_with(&self, options: &WriteOptions) -> Result<String> {
        Ok(self.root_node()?.to_xml_with(options))
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        Self::from_str_with(content, ParseOptions::default())
    }
}

fn build(content: &str, options: &ParseOptions) -> Result<Node> {
    let mut builder = TreeBuilder::new(options);
    events::drive(content, &mut builder)?;
    builder.finish()
}

/// Read `reader` to the end and parse it.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not UTF-8, and
/// [`Error::Malformed`] if it is not well-formed.
pub fn read_document<R: Read>(mut reader: R, options: ParseOptions) -> Result<Document> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Document::from_str_with(&content, options)
}

/// Write the serialized tree of `document` to `writer`.
pub fn write_document<W: Write>(mut writer: W, document: &Document) -> Result<()> {
    writer.write_all(document.serialize()?.as_bytes())?;
    Ok(())
}
