//! Namespace profile detection.

use crate::base::NamespaceProfile;
use crate::base::constants::DEFINITIONS;
use crate::document::Document;
use crate::error::ScanError;

/// Detect which tag spelling a document uses.
///
/// Probes for a `definitions` element under `bpmn:`, then `bpmn2:`, then
/// without a prefix. The element is looked up anywhere in the tree, so a
/// document carrying more than one spelling resolves to the first in probe
/// order.
pub fn detect_profile(document: &Document) -> Option<NamespaceProfile> {
    NamespaceProfile::PROBE_ORDER
        .into_iter()
        .find(|profile| document.contains_named(&profile.qualify(DEFINITIONS)))
}

/// Like [`detect_profile`], failing with [`ScanError::UnknownProfile`].
pub fn resolve_profile(document: &Document) -> Result<NamespaceProfile, ScanError> {
    detect_profile(document).ok_or(ScanError::UnknownProfile)
}
