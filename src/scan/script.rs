//! Inline scripts and scripted sequence-flow conditions.

use smol_str::SmolStr;
use tracing::trace;

use super::Session;
use crate::base::TagKind;
use crate::base::constants::{CONDITION_EXPRESSION, LANGUAGE, PROCESS, SCRIPT};
use crate::document::ElementRef;
use crate::error::ScanError;

impl Session {
    /// Local names of the containers of every `camunda:script` owned by the
    /// element with `id`, in document order.
    ///
    /// A script is owned by `id` when one of its ancestors, walking up from
    /// its immediate parent, carries that id. The walk stops at the enclosing
    /// `process`, which is itself never matched. This resolver does not depend
    /// on the namespace profile.
    pub fn script_parents(&self, id: &str) -> Vec<SmolStr> {
        let script = self.options().vendor(SCRIPT);
        let parents: Vec<_> = self
            .document()
            .elements_named(&script)
            .filter(|script| is_owned_by(*script, id))
            .filter_map(|script| script.parent())
            .map(|container| SmolStr::new(container.local_name()))
            .collect();
        trace!(id, ?parents, "script parents");
        parents
    }

    /// Whether the sequence flow with `id` has a condition expression that
    /// declares a scripting language.
    ///
    /// Only the first sequence flow with the id is inspected. A `language`
    /// attribute that is empty after trimming does not count.
    pub fn has_script_condition(&self, id: &str) -> Result<bool, ScanError> {
        let profile = self.profile()?;
        let scripted = self
            .tagged(profile, TagKind::SequenceFlow)
            .find(|flow| flow.has_id(id))
            .is_some_and(|flow| {
                flow.children().any(|child| {
                    child.local_name() == CONDITION_EXPRESSION
                        && child
                            .attribute(LANGUAGE)
                            .is_some_and(|language| !language.trim().is_empty())
                })
            });
        trace!(id, scripted, "script condition");
        Ok(scripted)
    }
}

fn is_owned_by(script: ElementRef<'_>, id: &str) -> bool {
    script
        .ancestors()
        .take_while(|ancestor| ancestor.local_name() != PROCESS)
        .any(|ancestor| ancestor.has_id(id))
}
