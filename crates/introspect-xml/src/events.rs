//! Push-style event stream over quick-xml.
//!
//! [`drive`] pulls events from a quick-xml reader and hands them to an
//! [`EventSink`] in document order. It stops at the first well-formedness
//! error and reports it with a 1-based line and column.
//!
//! Line endings are normalized before parsing: `\r\n` and a lone `\r`
//! become `\n` in text, comments and attribute values.

use crate::error::{Error, Result};
use crate::location::offset_to_location;
use quick_xml::Reader;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

/// Receiver of structural events.
///
/// Events arrive properly nested: every `open` is matched by a `close`
/// with the same tag. Self-closing elements produce both.
pub trait EventSink {
    fn open(&mut self, tag: &str, attributes: Vec<(String, String)>);

    fn close(&mut self, tag: &str);

    /// Character data inside an element, unescaped but not trimmed. One
    /// element may receive several chunks.
    fn text(&mut self, content: &str);

    /// Raw comment body, without the `<!--` and `-->` delimiters.
    fn comment(&mut self, content: &str);
}

/// Feed every event of `source` to `sink`.
///
/// # Errors
///
/// Returns [`Error::Malformed`] if `source` is not a well-formed document
/// with exactly one root element. Events already delivered are not
/// retracted.
pub fn drive<S: EventSink + ?Sized>(source: &str, sink: &mut S) -> Result<()> {
    let source = normalize_newlines(source);
    EventSource::new(&source).run(sink)
}

fn normalize_newlines(source: &str) -> Cow<'_, str> {
    if !source.contains('\r') {
        return Cow::Borrowed(source);
    }
    Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Offset of an attribute error within the tag, counted from the tag name.
fn attr_error_offset(err: &AttrError) -> usize {
    match *err {
        AttrError::ExpectedEq(pos)
        | AttrError::ExpectedValue(pos)
        | AttrError::UnquotedValue(pos)
        | AttrError::ExpectedQuote(pos, _)
        | AttrError::Duplicated(pos, _) => pos,
    }
}

struct EventSource<'a> {
    source: &'a str,
    reader: Reader<&'a [u8]>,

    /// Names of the currently open elements.
    open: Vec<String>,

    /// Whether the root element has been opened.
    seen_root: bool,
}

impl<'a> EventSource<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = false;
        reader.config_mut().trim_text_end = false;
        reader.config_mut().check_end_names = true;

        Self {
            source,
            reader,
            open: Vec::new(),
            seen_root: false,
        }
    }

    fn run<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        loop {
            let event_start = self.reader.buffer_position() as usize;

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let (tag, attributes) = self.handle_start(&e, event_start)?;
                    sink.open(&tag, attributes);
                    self.open.push(tag);
                }
                Ok(Event::Empty(e)) => {
                    let (tag, attributes) = self.handle_start(&e, event_start)?;
                    sink.open(&tag, attributes);
                    sink.close(&tag);
                }
                Ok(Event::End(e)) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.open.pop();
                    sink.close(&tag);
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|err| {
                        self.error_at(format!("invalid character data: {err}"), event_start)
                    })?;
                    self.handle_text(&text, event_start, sink)?;
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e).into_owned();
                    self.handle_text(&text, event_start, sink)?;
                }
                Ok(Event::Comment(e)) => {
                    sink.comment(&String::from_utf8_lossy(&e));
                }
                Ok(Event::Decl(_)) => {
                    // Only a byte order mark may precede the declaration.
                    if !self.source[..event_start]
                        .trim_start_matches('\u{feff}')
                        .is_empty()
                    {
                        return Err(self.error_at(
                            "XML declaration not at start of document",
                            event_start,
                        ));
                    }
                }
                Ok(Event::DocType(_)) => {
                    if self.seen_root {
                        return Err(self.error_at(
                            "document type declaration after document element",
                            event_start,
                        ));
                    }
                }
                Ok(Event::PI(_)) => {}
                Ok(Event::Eof) => break,
                Err(err) => {
                    let offset = self.reader.error_position() as usize;
                    return Err(self.error_at(err.to_string(), offset));
                }
            }
        }

        if let Some(tag) = self.open.last() {
            return Err(self.error_at(format!("unclosed element <{tag}>"), self.source.len()));
        }

        if !self.seen_root {
            return Err(self.error_at("no element found", self.source.len()));
        }

        Ok(())
    }

    fn handle_start(
        &mut self,
        e: &BytesStart<'_>,
        event_start: usize,
    ) -> Result<(String, Vec<(String, String)>)> {
        if self.open.is_empty() {
            if self.seen_root {
                return Err(self.error_at("junk after document element", event_start));
            }
            self.seen_root = true;
        }

        let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| {
                // `+ 1` skips the `<`
                let offset = event_start + 1 + attr_error_offset(&err);
                self.error_at(format!("invalid attribute: {err}"), offset)
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(|err| {
                self.error_at(format!("invalid attribute value: {err}"), event_start)
            })?;
            attributes.push((key, value.into_owned()));
        }

        Ok((tag, attributes))
    }

    fn handle_text<S: EventSink + ?Sized>(
        &self,
        text: &str,
        event_start: usize,
        sink: &mut S,
    ) -> Result<()> {
        if !self.open.is_empty() {
            sink.text(text);
        } else if !text.trim().is_empty() {
            let message = if self.seen_root {
                "junk after document element"
            } else {
                "text before document element"
            };
            return Err(self.error_at(message, event_start));
        }
        Ok(())
    }

    fn error_at(&self, message: impl Into<String>, offset: usize) -> Error {
        Error::malformed(message, offset_to_location(self.source, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records events as strings for easy comparison.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl EventSink for Recorder {
        fn open(&mut self, tag: &str, attributes: Vec<(String, String)>) {
            let attrs: Vec<String> = attributes
                .iter()
                .map(|(k, v)| format!(" {k}={v}"))
                .collect();
            self.events.push(format!("open {tag}{}", attrs.concat()));
        }

        fn close(&mut self, tag: &str) {
            self.events.push(format!("close {tag}"));
        }

        fn text(&mut self, content: &str) {
            self.events.push(format!("text {content:?}"));
        }

        fn comment(&mut self, content: &str) {
            self.events.push(format!("comment {content:?}"));
        }
    }

    fn record(source: &str) -> Result<Vec<String>> {
        let mut recorder = Recorder::default();
        drive(source, &mut recorder)?;
        Ok(recorder.events)
    }

    #[test]
    fn test_event_order() {
        let events = record(r#"<a x="1"><!-- c --><b/>t</a>"#).unwrap();
        assert_eq!(
            events,
            vec![
                "open a x=1",
                "comment \" c \"",
                "open b",
                "close b",
                "text \"t\"",
                "close a",
            ]
        );
    }

    #[test]
    fn test_entities_are_unescaped() {
        let events = record(r#"<a v="&lt;x&gt;">a &amp; b</a>"#).unwrap();
        assert_eq!(events[0], "open a v=<x>");
        assert_eq!(events[1], "text \"a & b\"");
    }

    #[test]
    fn test_cdata_is_text() {
        let events = record("<a><![CDATA[<raw>]]></a>").unwrap();
        assert_eq!(events[1], "text \"<raw>\"");
    }

    #[test]
    fn test_prolog_is_skipped() {
        let events = record(
            "<?xml version=\"1.0\"?>\n<!DOCTYPE node>\n<!-- top -->\n<node/>\n",
        )
        .unwrap();
        assert_eq!(events, vec!["comment \" top \"", "open node", "close node"]);
    }

    #[test]
    fn test_mismatched_end_tag() {
        let err = record("<a><b></a>").unwrap_err();
        let (line, column) = err.position().unwrap();
        assert_eq!(line, 1);
        // `</a>` occupies columns 7..=10
        assert!((7..=11).contains(&column), "column was {column}");
    }

    #[test]
    fn test_unclosed_element() {
        let err = record("<a>\n<b/>").unwrap_err();
        assert!(err.to_string().contains("unclosed element <a>"));
        assert_eq!(err.position(), Some((2, 5)));
    }

    #[test]
    fn test_empty_input() {
        let err = record("").unwrap_err();
        assert!(err.to_string().contains("no element found"));
        assert_eq!(err.position(), Some((1, 1)));
    }

    #[test]
    fn test_second_root_is_rejected() {
        let err = record("<a/>\n<b/>").unwrap_err();
        assert!(err.to_string().contains("junk after document element"));
        assert_eq!(err.position(), Some((2, 1)));
    }

    #[test]
    fn test_doctype_inside_root_is_rejected() {
        let err = record("<a><!DOCTYPE a></a>").unwrap_err();
        assert!(err.to_string().contains("document type declaration"));
        assert_eq!(err.position(), Some((1, 4)));
    }

    #[test]
    fn test_late_declaration_is_rejected() {
        let err = record("<a/><?xml version=\"1.0\"?>").unwrap_err();
        assert!(err.to_string().contains("XML declaration not at start"));
        assert_eq!(err.position(), Some((1, 5)));

        assert!(record("\n<?xml version=\"1.0\"?><a/>").is_err());
    }

    #[test]
    fn test_line_endings_are_normalized() {
        let events = record("<a v=\"x\r\ny\">1\r2\r\n<!--\r\nc\r\n--></a>").unwrap();
        assert_eq!(
            events,
            vec![
                "open a v=x\ny",
                "text \"1\\n2\\n\"",
                "comment \"\\nc\\n\"",
                "close a",
            ]
        );
    }

    #[test]
    fn test_crlf_error_location_counts_lines() {
        let err = record("<a>\r\n<b>\r\n</a>").unwrap_err();
        assert_eq!(err.position().map(|(line, _)| line), Some(3));
    }

    #[test]
    fn test_text_outside_root_is_rejected() {
        let err = record("<a/>trailing").unwrap_err();
        assert!(err.to_string().contains("junk after document element"));
    }

    #[test]
    fn test_duplicate_attribute_is_rejected() {
        let err = record(r#"<a x="1" x="2"/>"#).unwrap_err();
        // The second `x` is at column 10
        assert_eq!(err.position(), Some((1, 10)));
    }
}
