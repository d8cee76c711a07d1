//! Timer definitions on start, intermediate catch and boundary events.

use indexmap::IndexMap;
use tracing::trace;

use super::Session;
use crate::base::TagKind;
use crate::base::constants::TIMER_EVENT_DEFINITION;
use crate::document::{ElementSnapshot, NodeId};
use crate::error::ScanError;

const TIMER_TAGS: [TagKind; 3] = [
    TagKind::StartEvent,
    TagKind::IntermediateCatchEvent,
    TagKind::BoundaryEvent,
];

/// A timer event and the detail element of its timer definition
/// (`timeDate`, `timeCycle` or `timeDuration`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerDetail {
    pub event: ElementSnapshot,
    /// `None` when the definition has no element children.
    pub detail: Option<ElementSnapshot>,
}

/// Timer events keyed by their position in the document.
pub type Timers = IndexMap<NodeId, TimerDetail>;

impl Session {
    /// Timer definitions of the start, intermediate catch or boundary event
    /// with `id`.
    ///
    /// Each event maps to a single detail. Every `timerEventDefinition` child
    /// resets the detail, and every element child of a definition replaces
    /// it, so a definition carrying both `timeDate` and `timeCycle` keeps
    /// only the later one. Empty when the event has no timer.
    pub fn timers(&self, id: &str) -> Result<Timers, ScanError> {
        let profile = self.profile()?;
        let mut timers = Timers::new();
        for event in self.tagged_with_id(profile, &TIMER_TAGS, id) {
            for definition in event
                .children()
                .filter(|child| child.local_name() == TIMER_EVENT_DEFINITION)
            {
                let entry = timers
                    .entry(event.node())
                    .or_insert_with(|| TimerDetail {
                        event: event.snapshot(),
                        detail: None,
                    });
                entry.detail = None;
                for detail in definition.children() {
                    entry.detail = Some(detail.snapshot());
                }
            }
        }
        trace!(id, found = timers.len(), "timers");
        Ok(timers)
    }
}
