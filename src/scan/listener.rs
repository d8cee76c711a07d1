//! Listener declarations inside extension blocks.

use smol_str::SmolStr;
use tracing::trace;

use super::Session;
use crate::base::constants::{EXECUTION_LISTENER, TASK_LISTENER};
use crate::base::{ScanOptions, TagKind};
use crate::error::ScanError;

/// Built-in listener kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Execution,
    Task,
}

impl ListenerKind {
    /// Tag of this listener kind under `options`' vendor prefix.
    pub fn tag(self, options: &ScanOptions) -> SmolStr {
        match self {
            Self::Execution => options.vendor(EXECUTION_LISTENER),
            Self::Task => options.vendor(TASK_LISTENER),
        }
    }
}

/// One attribute value taken from a listener declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerEntry {
    /// Tag of the declaring listener, e.g. `camunda:executionListener`.
    pub listener: SmolStr,
    pub value: String,
}

impl Session {
    /// Values of `attribute` on every `listener_tag` child of the extension
    /// blocks directly owned by the element with `id`.
    ///
    /// Only an extension block whose parent carries `id` counts; blocks deeper
    /// in the element's subtree do not. Listeners lacking the attribute are
    /// skipped. The result is in document order and empty when nothing matches.
    pub fn listeners(
        &self,
        id: &str,
        listener_tag: &str,
        attribute: &str,
    ) -> Result<Vec<ListenerEntry>, ScanError> {
        let profile = self.profile()?;
        let entries: Vec<_> = self
            .tagged(profile, TagKind::ExtensionElements)
            .filter(|block| block.parent().is_some_and(|owner| owner.has_id(id)))
            .flat_map(|block| block.children())
            .filter(|child| child.name() == listener_tag)
            .filter_map(|listener| {
                listener.attribute(attribute).map(|value| ListenerEntry {
                    listener: SmolStr::new(listener.name()),
                    value: value.to_owned(),
                })
            })
            .collect();
        trace!(id, listener_tag, attribute, found = entries.len(), "listeners");
        Ok(entries)
    }

    /// [`Session::listeners`] for a built-in listener kind.
    pub fn listeners_of_kind(
        &self,
        id: &str,
        kind: ListenerKind,
        attribute: &str,
    ) -> Result<Vec<ListenerEntry>, ScanError> {
        self.listeners(id, &kind.tag(self.options()), attribute)
    }
}
