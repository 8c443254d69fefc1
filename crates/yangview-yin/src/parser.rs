//! YIN parser that builds statement trees.

use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::{Error, Result, Span, YinAttribute, YinElement};

/// Parse a YIN document, producing the root statement (normally `module`).
///
/// Whitespace-only text between elements is dropped; meaningful text content,
/// such as the `<text>` child of `<description>`, is kept. Comments,
/// processing instructions, and the XML declaration are skipped.
///
/// # Example
///
/// ```rust
/// let module = yangview_yin::parse(r#"<module name="m"/>"#).unwrap();
/// assert_eq!(module.attribute("name"), Some("m"));
/// ```
///
/// # Errors
///
/// Returns an error if the XML is malformed, empty, or has more than one
/// root element.
pub fn parse(content: &str) -> Result<Arc<YinElement>> {
    YinParser::new(content).parse()
}

/// Internal parser state.
struct YinParser<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<BuildNode>,
}

/// An element being constructed during parsing.
struct BuildNode {
    name: String,
    attributes: Vec<YinAttribute>,
    children: Vec<Arc<YinElement>>,
    text: Option<String>,
    start: usize,
}

impl<'a> YinParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text_start = true;
        reader.config_mut().trim_text_end = true;

        Self {
            reader,
            stack: Vec::new(),
        }
    }

    fn parse(&mut self) -> Result<Arc<YinElement>> {
        let mut root: Option<Arc<YinElement>> = None;

        loop {
            let event_start = self.reader.buffer_position() as usize;

            match self.reader.read_event() {
                Ok(Event::Start(e)) => {
                    let node = self.begin_element(&e, event_start)?;
                    self.stack.push(node);
                }
                Ok(Event::End(e)) => {
                    let node = self.stack.pop().ok_or_else(|| Error::UnexpectedClose {
                        found: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    })?;
                    let end = self.reader.buffer_position() as usize;
                    self.finish_element(node, end, &mut root)?;
                }
                Ok(Event::Empty(e)) => {
                    let node = self.begin_element(&e, event_start)?;
                    let end = self.reader.buffer_position() as usize;
                    self.finish_element(node, end, &mut root)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|err| Error::Syntax {
                        message: err.to_string(),
                        position: event_start as u64,
                    })?;
                    self.push_text(&text);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    self.push_text(&text);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {
                    // Comments, processing instructions, declarations.
                }
                Err(e) => {
                    return Err(Error::Syntax {
                        message: e.to_string(),
                        position: self.reader.error_position(),
                    });
                }
            }
        }

        if let Some(node) = self.stack.last() {
            return Err(Error::UnexpectedEof {
                expected: node.name.clone(),
            });
        }

        root.ok_or(Error::EmptyDocument)
    }

    fn begin_element(&self, e: &BytesStart<'_>, start: usize) -> Result<BuildNode> {
        let full_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        // Keep the local name; a namespace prefix on a YIN statement carries
        // no meaning once the document is parsed.
        let name = match full_name.rsplit_once(':') {
            Some((_, local)) => local.to_string(),
            None => full_name,
        };

        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| Error::Syntax {
                message: err.to_string(),
                position: start as u64,
            })?;
            let attr_name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(|err| Error::Syntax {
                message: err.to_string(),
                position: start as u64,
            })?;
            attributes.push(YinAttribute {
                name: attr_name,
                value: value.into_owned(),
            });
        }

        Ok(BuildNode {
            name,
            attributes,
            children: Vec::new(),
            text: None,
            start,
        })
    }

    fn finish_element(
        &mut self,
        node: BuildNode,
        end: usize,
        root: &mut Option<Arc<YinElement>>,
    ) -> Result<()> {
        let element = Arc::new(YinElement {
            name: node.name,
            attributes: node.attributes,
            children: node.children,
            text: node.text,
            span: Span::new(node.start, end),
        });

        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(element);
        } else if root.is_some() {
            return Err(Error::MultipleRoots);
        } else {
            *root = Some(element);
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(node) = self.stack.last_mut() {
            node.text.get_or_insert_default().push_str(text);
        }
    }
}
