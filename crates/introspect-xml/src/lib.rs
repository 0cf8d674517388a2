//! Interface-description XML for code generators.
//!
//! This crate reads an XML interface description (such as a D-Bus
//! introspection document) into a tree of [`Node`]s that downstream tooling
//! queries and writes back out. It wraps [`quick-xml`] as the
//! well-formedness-checking event source.
//!
//! # Overview
//!
//! The main types are:
//! - [`Document`]: owns the root [`Node`]; parses and serializes
//! - [`Node`]: tag, [`Attributes`], owned children, trimmed text and
//!   optional documentation
//! - [`Nodes`]: a borrowed, chainable query result
//! - [`Error`]: malformed input (with line and column), missing root, I/O
//!
//! # Documentation comments
//!
//! Comments containing a marker (by default `@brief`) are documentation.
//! Their body is normalized with [`normalize_documentation`] and attached to
//! the element that follows at the same level. When no element follows, the
//! text stays in the tree as a [`DOC_TAG`] node.
//!
//! ```rust
//! use introspect_xml::Document;
//!
//! let doc: Document = r#"<node>
//!   <interface name="org.example.Calc">
//!     <!--
//!       @brief Adds two numbers.
//!       @param a first
//!     -->
//!     <method name="Add">
//!       <arg name="a" type="i" direction="in"/>
//!     </method>
//!   </interface>
//! </node>"#
//!     .parse()
//!     .unwrap();
//!
//! let add = doc
//!     .select_by_tag("interface")
//!     .unwrap()
//!     .select_by_tag("method")
//!     .filter_by_attribute("name", "Add");
//! let add = add.first().unwrap();
//!
//! assert_eq!(
//!     add.documentation(),
//!     Some("@brief Adds two numbers.\n@param a first\n")
//! );
//! assert_eq!(add.select_by_tag("arg").len(), 1);
//! ```

pub mod attributes;
mod builder;
pub mod document;
pub mod error;
pub mod events;
pub mod location;
pub mod node;
pub mod options;
pub mod query;
pub mod serialize;

// Re-export main types
pub use attributes::Attributes;
pub use builder::normalize_documentation;
pub use document::{Document, read_document, write_document};
pub use error::{Error, Result};
pub use events::{EventSink, drive};
pub use location::{Location, offset_to_location};
pub use node::{DOC_TAG, Node};
pub use options::{ParseOptions, TextMode};
pub use query::Nodes;
pub use serialize::{Escape, WriteOptions};
