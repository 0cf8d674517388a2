//! Error types for interface document parsing and serialization.

use crate::location::Location;
use thiserror::Error;

/// Errors that can occur while reading, querying or writing a [`Document`].
///
/// [`Document`]: crate::Document
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not well-formed XML.
    ///
    /// `line` and `column` are 1-based and point at the offending markup.
    #[error("line {line}, column {column}: {message}")]
    Malformed {
        message: String,
        line: usize,
        column: usize,
    },

    /// An operation that needs a root element was called before a
    /// successful parse.
    #[error("document has no root element")]
    NoRoot,

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>, location: Location) -> Self {
        Error::Malformed {
            message: message.into(),
            line: location.line,
            column: location.column,
        }
    }

    /// Line and column of a malformed-input error.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Malformed { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

/// Result type alias for introspect-xml operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_leads_with_position() {
        let err = Error::malformed(
            "mismatched tag",
            Location {
                offset: 6,
                line: 1,
                column: 7,
            },
        );
        assert_eq!(err.to_string(), "line 1, column 7: mismatched tag");
        assert_eq!(err.position(), Some((1, 7)));
    }

    #[test]
    fn test_no_root_has_no_position() {
        assert_eq!(Error::NoRoot.position(), None);
        assert_eq!(Error::NoRoot.to_string(), "document has no root element");
    }
}
