//! A parsed document together with its resolved namespace profile.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use super::profile::detect_profile;
use crate::base::{NamespaceProfile, ScanOptions, TagKind};
use crate::document::{Document, ElementRef};
use crate::error::ScanError;

/// One parsed model plus the context every resolver needs.
///
/// The profile is derived once, when the session is built, and passed
/// explicitly to every lookup. Resolving a gateway's edges therefore always
/// uses the gateway's own document and profile, never state left behind by
/// an earlier call. A session is immutable and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Session {
    document: Document,
    profile: Option<NamespaceProfile>,
    options: ScanOptions,
}

impl Session {
    /// Parse a model file with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        Self::open_with(path, ScanOptions::default())
    }

    pub fn open_with(path: impl AsRef<Path>, options: ScanOptions) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let document = Document::open(path)?;
        debug!(path = %path.display(), elements = document.len(), "parsed BPMN model");
        Ok(Self::from_document(document, options))
    }

    /// Parse an in-memory model.
    pub fn parse_str_with(input: &str, options: ScanOptions) -> Result<Self, ScanError> {
        Ok(Self::from_document(Document::parse_str(input)?, options))
    }

    pub fn from_document(document: Document, options: ScanOptions) -> Self {
        let profile = detect_profile(&document);
        match profile {
            Some(profile) => trace!(%profile, "resolved namespace profile"),
            None => debug!("no BPMN definitions element found"),
        }
        Self {
            document,
            profile,
            options,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// The document's namespace profile.
    ///
    /// Every profile-dependent resolver calls this first, so an unresolvable
    /// profile surfaces as [`ScanError::UnknownProfile`] rather than as an
    /// empty result.
    pub fn profile(&self) -> Result<NamespaceProfile, ScanError> {
        self.profile.ok_or(ScanError::UnknownProfile)
    }

    /// Elements of one abstract kind, spelled per `profile`, in document order.
    pub(crate) fn tagged(
        &self,
        profile: NamespaceProfile,
        kind: TagKind,
    ) -> impl Iterator<Item = ElementRef<'_>> {
        self.document.elements_named(kind.qualified(profile))
    }

    /// Elements of several kinds, kind by kind, keeping only those with `id`.
    pub(crate) fn tagged_with_id<'s>(
        &'s self,
        profile: NamespaceProfile,
        kinds: &'s [TagKind],
        id: &'s str,
    ) -> impl Iterator<Item = ElementRef<'s>> {
        kinds
            .iter()
            .flat_map(move |&kind| self.tagged(profile, kind))
            .filter(move |element| element.has_id(id))
    }
}

impl FromStr for Session {
    type Err = ScanError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse_str_with(input, ScanOptions::default())
    }
}
