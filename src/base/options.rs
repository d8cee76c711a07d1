//! Scanner configuration.

use smol_str::{SmolStr, format_smolstr};

use super::constants::DEFAULT_EXTENSION_PREFIX;

/// Settings shared by every resolver of a scan.
///
/// Vendor attributes and elements (`camunda:class`, `camunda:script`,
/// `camunda:formKey`, listener tags) are matched by qualified name. The
/// prefix is independent of the BPMN [`NamespaceProfile`](super::NamespaceProfile).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanOptions {
    extension_prefix: SmolStr,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension_prefix: SmolStr::new_static(DEFAULT_EXTENSION_PREFIX),
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different vendor extension prefix. An empty prefix matches bare names.
    pub fn with_extension_prefix(mut self, prefix: impl Into<SmolStr>) -> Self {
        self.extension_prefix = prefix.into();
        self
    }

    pub fn extension_prefix(&self) -> &str {
        &self.extension_prefix
    }

    /// Qualify a vendor local name, e.g. `class` -> `camunda:class`.
    pub fn vendor(&self, local_name: &str) -> SmolStr {
        if self.extension_prefix.is_empty() {
            SmolStr::new(local_name)
        } else {
            format_smolstr!("{}:{local_name}", self.extension_prefix)
        }
    }

    /// Local part of a vendor-qualified name, or `None` for any other name.
    pub fn vendor_local<'a>(&self, qualified: &'a str) -> Option<&'a str> {
        if self.extension_prefix.is_empty() {
            return (!qualified.contains(':')).then_some(qualified);
        }
        qualified
            .strip_prefix(self.extension_prefix.as_str())?
            .strip_prefix(':')
    }
}
