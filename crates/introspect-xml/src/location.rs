//! Byte offset to line/column conversion for error reporting.

/// A position in the source text.
///
/// `line` and `column` are 1-based; `column` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Convert a byte offset into a [`Location`].
///
/// Offsets past the end of `source` are clamped to the end.
pub fn offset_to_location(source: &str, offset: usize) -> Location {
    let offset = offset.min(source.len());

    let mut line = 1;
    let mut column = 1;
    let mut current_offset = 0;

    for ch in source.chars() {
        if current_offset >= offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }

        current_offset += ch.len_utf8();
    }

    Location {
        offset,
        line,
        column,
    }
}
