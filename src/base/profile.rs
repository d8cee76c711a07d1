//! The three BPMN tag spellings.

use std::fmt;

use smol_str::{SmolStr, format_smolstr};

/// Tag-spelling convention a BPMN document uses.
///
/// Tooling has shipped the same BPMN vocabulary as `bpmn:serviceTask`,
/// `bpmn2:serviceTask` and a bare `serviceTask` in the default namespace.
/// A document's profile is decided by which `definitions` spelling it
/// contains, probed in [`NamespaceProfile::PROBE_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamespaceProfile {
    /// Tags prefixed `bpmn:`.
    Legacy,
    /// Tags prefixed `bpmn2:`.
    Bpmn2,
    /// Bare tag names.
    Unprefixed,
}

impl NamespaceProfile {
    /// Priority order used when detecting a document's profile.
    pub const PROBE_ORDER: [Self; 3] = [Self::Legacy, Self::Bpmn2, Self::Unprefixed];

    /// Tag prefix, without the colon.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Legacy => Some("bpmn"),
            Self::Bpmn2 => Some("bpmn2"),
            Self::Unprefixed => None,
        }
    }

    /// Spell a BPMN local name under this profile.
    pub fn qualify(self, local_name: &str) -> SmolStr {
        match self.prefix() {
            Some(prefix) => format_smolstr!("{prefix}:{local_name}"),
            None => SmolStr::new(local_name),
        }
    }

    /// Spell the element tag used by form-key lookups.
    ///
    /// Under [`NamespaceProfile::Bpmn2`] the prefixed name is appended to the
    /// bare one (`startEventbpmn2:startEvent`), so form keys are never found
    /// in `bpmn2:` documents. Existing rule sets depend on that outcome.
    pub fn qualify_form_tag(self, tag: &str) -> SmolStr {
        match self {
            Self::Legacy => format_smolstr!("bpmn:{tag}"),
            Self::Bpmn2 => format_smolstr!("{tag}bpmn2:{tag}"),
            Self::Unprefixed => SmolStr::new(tag),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Legacy => 0,
            Self::Bpmn2 => 1,
            Self::Unprefixed => 2,
        }
    }
}

impl fmt::Display for NamespaceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("bpmn"),
            Self::Bpmn2 => f.write_str("bpmn2"),
            Self::Unprefixed => f.write_str("unprefixed"),
        }
    }
}
