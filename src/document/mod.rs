//! Immutable XML tree of a BPMN model.
//!
//! A [`Document`] is an arena of elements in document (pre-)order with a
//! by-tag index, so `elements_named("bpmn:serviceTask")` yields matches in
//! the same order a DOM `getElementsByTagName` would.
//!
//! ```text
//! ┌──────────────┐   quick-xml events   ┌──────────────────────────────┐
//! │  .bpmn file  │ ───────────────────▶ │ Document                     │
//! └──────────────┘    (reader.rs)       │  - elements: Vec<Element>    │
//!                                       │  - by_name: tag -> [NodeId]  │
//!                                       └──────────────┬───────────────┘
//!                                                      │ borrow
//!                                                      ▼
//!                                       ┌──────────────────────────────┐
//!                                       │ ElementRef<'d> (view.rs)     │
//!                                       │  parent / children / attrs   │
//!                                       └──────────────────────────────┘
//! ```
//!
//! Tags are stored exactly as written (`bpmn2:sequenceFlow`); namespace URIs
//! are not resolved.

mod reader;
mod view;

use std::path::Path;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::Position;
use crate::error::ScanError;

pub use view::{Ancestors, Children, ElementRef, ElementSnapshot};

/// Index of an element in its [`Document`], in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

/// A single attribute, name as written (`camunda:class`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: SmolStr,
    pub value: String,
}

/// Arena slot for one element.
#[derive(Debug, Clone)]
struct Element {
    name: SmolStr,
    /// Attributes in document order.
    attributes: Vec<Attribute>,
    parent: Option<NodeId>,
    /// Element children only; text is folded into `text`.
    children: Vec<NodeId>,
    /// Concatenated direct text and CDATA content.
    text: String,
    position: Position,
}

/// A parsed BPMN document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
    by_name: FxHashMap<SmolStr, Vec<NodeId>>,
}

impl Document {
    /// Read and parse a model file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::parse(&bytes)
    }

    /// Parse a document from raw bytes in the encoding its byte order mark
    /// or XML declaration names (UTF-8 when neither does).
    pub fn parse(input: &[u8]) -> Result<Self, ScanError> {
        Self::parse_str(&reader::decode_input(input)?)
    }

    /// Parse already decoded text; any declared encoding is ignored.
    pub fn parse_str(input: &str) -> Result<Self, ScanError> {
        reader::DocumentReader::new(input).read()
    }

    /// The document element.
    pub fn root(&self) -> Option<ElementRef<'_>> {
        self.get(NodeId(0))
    }

    pub fn get(&self, node: NodeId) -> Option<ElementRef<'_>> {
        (node.index() < self.elements.len()).then_some(ElementRef::new(self, node))
    }

    /// All elements whose tag is exactly `name`, in document order.
    pub fn elements_named<'d>(
        &'d self,
        name: &str,
    ) -> impl Iterator<Item = ElementRef<'d>> + use<'d> {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&node| ElementRef::new(self, node))
    }

    /// Whether any element carries the tag `name`.
    pub fn contains_named(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = ElementRef<'_>> {
        (0..self.elements.len()).map(move |index| ElementRef::new(self, NodeId::from_index(index)))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn element(&self, node: NodeId) -> &Element {
        &self.elements[node.index()]
    }
}
