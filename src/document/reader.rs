//! quick-xml event loop that builds a [`Document`].

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::encoding::{Decoder, detect_encoding};
use quick_xml::events::{BytesStart, Event};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{Attribute, Document, Element, NodeId};
use crate::base::LineIndex;
use crate::error::ScanError;

/// Single-use builder; one per parse.
pub(super) struct DocumentReader<'i> {
    input: &'i str,
    line_index: LineIndex,
    elements: Vec<Element>,
    by_name: FxHashMap<SmolStr, Vec<NodeId>>,
    /// Open elements, innermost last.
    open: Vec<NodeId>,
    seen_root: bool,
}

impl<'i> DocumentReader<'i> {
    pub(super) fn new(input: &'i str) -> Self {
        Self {
            input,
            line_index: LineIndex::new(input.as_bytes()),
            elements: Vec::new(),
            by_name: FxHashMap::default(),
            open: Vec::new(),
            seen_root: false,
        }
    }

    pub(super) fn read(mut self) -> Result<Document, ScanError> {
        // Input is already UTF-8; `from_str` keeps the declaration from
        // switching the decoder.
        let mut reader = Reader::from_str(self.input);
        let mut buf = Vec::new();

        loop {
            // Start of the next event; for tags this is the `<`.
            let offset = reader.buffer_position() as usize;
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let node = self.handle_start_element(e, reader.decoder(), offset)?;
                    self.open.push(node);
                }
                Ok(Event::Empty(ref e)) => {
                    self.handle_start_element(e, reader.decoder(), offset)?;
                }
                Ok(Event::End(_)) => {
                    self.open.pop();
                }
                Ok(Event::Text(ref t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| ScanError::xml(format!("Text error: {e}")))?;
                    self.append_text(&text);
                }
                Ok(Event::CData(ref c)) => {
                    let text = reader
                        .decoder()
                        .decode(c)
                        .map_err(|e| ScanError::xml(format!("CDATA error: {e}")))?;
                    self.append_text(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ScanError::xml(format!(
                        "XML parse error at position {}: {e}",
                        reader.error_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(&unclosed) = self.open.last() {
            return Err(ScanError::xml(format!(
                "Unclosed element <{}> at {}",
                self.elements[unclosed.index()].name,
                self.elements[unclosed.index()].position
            )));
        }
        if self.elements.is_empty() {
            return Err(ScanError::xml("Document has no root element"));
        }

        Ok(Document {
            elements: self.elements,
            by_name: self.by_name,
        })
    }

    fn handle_start_element(
        &mut self,
        e: &BytesStart<'_>,
        decoder: Decoder,
        offset: usize,
    ) -> Result<NodeId, ScanError> {
        let name = e.name();
        let tag_name = decoder
            .decode(name.as_ref())
            .map_err(|e| ScanError::xml(format!("Invalid tag name: {e}")))?;

        let parent = self.open.last().copied();
        if parent.is_none() {
            if self.seen_root {
                return Err(ScanError::xml(format!(
                    "Second root element <{tag_name}> at {}",
                    self.line_index.position(offset)
                )));
            }
            self.seen_root = true;
        }

        let mut attributes = Vec::new();
        for attr_result in e.attributes() {
            let attr =
                attr_result.map_err(|e| ScanError::xml(format!("Attribute error: {e}")))?;
            let key = decoder
                .decode(attr.key.as_ref())
                .map_err(|e| ScanError::xml(format!("Attribute key error: {e}")))?;
            let value = attr
                .decode_and_unescape_value(decoder)
                .map_err(|e| ScanError::xml(format!("Attribute value error: {e}")))?
                .into_owned();
            attributes.push(Attribute {
                name: SmolStr::new(&key),
                value,
            });
        }

        let node = NodeId::from_index(self.elements.len());
        let name = SmolStr::new(&tag_name);
        self.by_name.entry(name.clone()).or_default().push(node);
        self.elements.push(Element {
            name,
            attributes,
            parent,
            children: Vec::new(),
            text: String::new(),
            position: self.line_index.position(offset),
        });
        if let Some(parent) = parent {
            self.elements[parent.index()].children.push(node);
        }

        Ok(node)
    }

    fn append_text(&mut self, text: &str) {
        // Text outside the document element (whitespace, prolog) is dropped.
        if let Some(&current) = self.open.last() {
            self.elements[current.index()].text.push_str(text);
        }
    }
}

/// Transcode raw model bytes to UTF-8.
///
/// A byte order mark (or the 16-bit spelling of `<?`) decides first, then the
/// encoding named in the XML declaration; anything else is read as UTF-8.
/// quick-xml only tokenizes ASCII-compatible input, so UTF-16 models are
/// converted here rather than by the reader.
pub(super) fn decode_input(input: &[u8]) -> Result<Cow<'_, str>, ScanError> {
    let (encoding, bom_len) = match detect_encoding(input) {
        Some((detected, bom_len)) if !detected.is_ascii_compatible() || bom_len > 0 => {
            (detected, bom_len)
        }
        _ => {
            let mut reader = Reader::from_reader(input);
            let mut buf = Vec::new();
            let declared = match reader.read_event_into(&mut buf) {
                Ok(Event::Decl(decl)) => decl.encoder(),
                _ => None,
            };
            match declared {
                Some(declared) if declared.is_ascii_compatible() => (declared, 0),
                _ => return decode_utf8(input),
            }
        }
    };
    quick_xml::encoding::decode(&input[bom_len..], encoding)
        .map_err(|_| ScanError::xml(format!("Input is not valid {}", encoding.name())))
}

fn decode_utf8(input: &[u8]) -> Result<Cow<'_, str>, ScanError> {
    std::str::from_utf8(input)
        .map(Cow::Borrowed)
        .map_err(|e| ScanError::xml(format!("Input is not valid UTF-8: {e}")))
}
