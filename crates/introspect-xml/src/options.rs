//! Parse settings.

/// Indentation prepended to documentation lines that are not `@` tags.
pub const DEFAULT_DOC_INDENT: &str = "    ";

/// Substring that marks a comment as documentation.
pub const DEFAULT_DOC_MARKER: &str = "@brief";

/// How repeated character data inside one element is combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextMode {
    /// The last non-blank chunk wins.
    #[default]
    Overwrite,

    /// Non-blank chunks are joined with a single space.
    Concatenate,
}

/// Settings for [`Document::parse`](crate::Document::parse).
///
/// ```rust
/// use introspect_xml::{ParseOptions, TextMode};
///
/// let options = ParseOptions::default()
///     .with_documentation(false)
///     .with_text_mode(TextMode::Concatenate);
/// assert!(!options.documentation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fold documentation comments into the tree.
    pub documentation: bool,

    /// Comments containing this substring are documentation.
    pub marker: String,

    /// Indentation for documentation lines that are not `@` tags.
    pub indent: String,

    pub text: TextMode,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            documentation: true,
            marker: DEFAULT_DOC_MARKER.to_string(),
            indent: DEFAULT_DOC_INDENT.to_string(),
            text: TextMode::Overwrite,
        }
    }
}

impl ParseOptions {
    pub fn with_documentation(mut self, enabled: bool) -> Self {
        self.documentation = enabled;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_text_mode(mut self, mode: TextMode) -> Self {
        self.text = mode;
        self
    }
}
