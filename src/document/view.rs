//! Borrowed and owned views over document elements.

use smol_str::SmolStr;

use super::{Attribute, Document, NodeId};
use crate::base::Position;
use crate::base::constants::ID;

/// A borrowed view over one element of a [`Document`].
///
/// Navigation methods return further views, so resolvers walk the tree
/// without touching arena indices.
#[derive(Clone, Copy)]
pub struct ElementRef<'d> {
    document: &'d Document,
    node: NodeId,
}

impl<'d> ElementRef<'d> {
    pub(super) fn new(document: &'d Document, node: NodeId) -> Self {
        Self { document, node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn document(&self) -> &'d Document {
        self.document
    }

    // ── Names ───────────────────────────────────────────────────────

    /// Tag as written, including any prefix.
    pub fn name(&self) -> &'d str {
        &self.document.element(self.node).name
    }

    /// Tag without its prefix.
    pub fn local_name(&self) -> &'d str {
        local_name(self.name())
    }

    pub fn prefix(&self) -> Option<&'d str> {
        self.name().split_once(':').map(|(prefix, _)| prefix)
    }

    // ── Attributes ──────────────────────────────────────────────────

    /// Attributes in document order.
    pub fn attributes(&self) -> &'d [Attribute] {
        &self.document.element(self.node).attributes
    }

    /// Value of the attribute written exactly as `name`.
    pub fn attribute(&self, name: &str) -> Option<&'d str> {
        self.attributes()
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// The unqualified `id` attribute.
    pub fn element_id(&self) -> Option<&'d str> {
        self.attribute(ID)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.element_id() == Some(id)
    }

    // ── Content ─────────────────────────────────────────────────────

    /// Direct text content, untrimmed.
    pub fn text(&self) -> &'d str {
        &self.document.element(self.node).text
    }

    pub fn position(&self) -> Position {
        self.document.element(self.node).position
    }

    // ── Navigation ──────────────────────────────────────────────────

    pub fn parent(&self) -> Option<ElementRef<'d>> {
        self.document
            .element(self.node)
            .parent
            .map(|parent| ElementRef::new(self.document, parent))
    }

    /// Element children in document order.
    pub fn children(&self) -> Children<'d> {
        Children {
            document: self.document,
            inner: self.document.element(self.node).children.iter(),
        }
    }

    /// Ancestors from the parent up to the document element.
    pub fn ancestors(&self) -> Ancestors<'d> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Copy this element out of the document.
    pub fn snapshot(&self) -> ElementSnapshot {
        let element = self.document.element(self.node);
        ElementSnapshot {
            node: self.node,
            name: element.name.clone(),
            attributes: element.attributes.clone(),
            text: element.text.clone(),
            position: element.position,
        }
    }
}

impl std::fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementRef")
            .field("node", &self.node)
            .field("name", &self.name())
            .field("id", &self.element_id())
            .finish()
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.document, other.document) && self.node == other.node
    }
}

impl Eq for ElementRef<'_> {}

/// Iterator over the element children of an element.
pub struct Children<'d> {
    document: &'d Document,
    inner: std::slice::Iter<'d, NodeId>,
}

impl<'d> Iterator for Children<'d> {
    type Item = ElementRef<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|&node| ElementRef::new(self.document, node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|&node| ElementRef::new(self.document, node))
    }
}

impl ExactSizeIterator for Children<'_> {}

/// Iterator walking up the parent chain.
pub struct Ancestors<'d> {
    next: Option<ElementRef<'d>>,
}

impl<'d> Iterator for Ancestors<'d> {
    type Item = ElementRef<'d>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// An element copied out of its document.
///
/// Resolver results are snapshots so they outlive the parse that produced
/// them. `node` keeps the element's document-order index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementSnapshot {
    pub node: NodeId,
    pub name: SmolStr,
    pub attributes: Vec<Attribute>,
    pub text: String,
    pub position: Position,
}

impl ElementSnapshot {
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn element_id(&self) -> Option<&str> {
        self.attribute(ID)
    }
}

fn local_name(name: &str) -> &str {
    name.split_once(':').map_or(name, |(_, local)| local)
}
