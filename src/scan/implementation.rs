//! How tasks and message-throwing events are invoked.

use std::fmt;

use tracing::trace;

use super::Session;
use crate::base::TagKind;
use crate::base::constants::{
    CLASS, CONNECTOR_TYPE, DECISION_REF, DELEGATE_EXPRESSION, EXPRESSION, MESSAGE_EVENT_DEFINITION,
};
use crate::document::ElementRef;
use crate::error::ScanError;

/// Element kinds whose invocation mechanism is resolved, in visiting order.
const IMPLEMENTATION_TAGS: [TagKind; 5] = [
    TagKind::BusinessRuleTask,
    TagKind::ServiceTask,
    TagKind::SendTask,
    TagKind::EndEvent,
    TagKind::IntermediateThrowEvent,
];

const MESSAGE_THROWING_TAGS: [TagKind; 2] = [TagKind::EndEvent, TagKind::IntermediateThrowEvent];

/// Invocation mechanism declared on a task or event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImplementationKind {
    /// `camunda:class`
    ClassName,
    /// `camunda:expression`
    Expression,
    /// `camunda:delegateExpression`
    DelegateExpression,
    /// `camunda:decisionRef`
    DecisionReference,
    /// `camunda:type`
    ConnectorType,
    /// The element exists but declares none of the above.
    Unspecified,
}

impl ImplementationKind {
    /// Map a vendor attribute's local name to its kind.
    pub fn from_attribute(local_name: &str) -> Option<Self> {
        match local_name {
            CLASS => Some(Self::ClassName),
            EXPRESSION => Some(Self::Expression),
            DELEGATE_EXPRESSION => Some(Self::DelegateExpression),
            DECISION_REF => Some(Self::DecisionReference),
            CONNECTOR_TYPE => Some(Self::ConnectorType),
            _ => None,
        }
    }

    /// Vendor attribute local name, `None` for [`ImplementationKind::Unspecified`].
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            Self::ClassName => Some(CLASS),
            Self::Expression => Some(EXPRESSION),
            Self::DelegateExpression => Some(DELEGATE_EXPRESSION),
            Self::DecisionReference => Some(DECISION_REF),
            Self::ConnectorType => Some(CONNECTOR_TYPE),
            Self::Unspecified => None,
        }
    }
}

impl fmt::Display for ImplementationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute().unwrap_or("implementation"))
    }
}

impl Session {
    /// Invocation mechanism of the business-rule task, service task, send task,
    /// end event or intermediate throw event with `id`.
    ///
    /// `None` means no such element; an element without any implementation
    /// attribute yields `Some(ImplementationKind::Unspecified)`. Should an
    /// element carry several implementation attributes the last one wins, and
    /// among elements sharing the id the last visited wins.
    pub fn task_implementation(&self, id: &str) -> Result<Option<ImplementationKind>, ScanError> {
        let profile = self.profile()?;
        let resolved = self
            .tagged_with_id(profile, &IMPLEMENTATION_TAGS, id)
            .map(|element| self.implementation_of(element))
            .last();
        trace!(id, ?resolved, "task implementation");
        Ok(resolved)
    }

    fn implementation_of(&self, element: ElementRef<'_>) -> ImplementationKind {
        element
            .attributes()
            .iter()
            .filter_map(|attr| self.options().vendor_local(&attr.name))
            .filter_map(ImplementationKind::from_attribute)
            .last()
            .unwrap_or(ImplementationKind::Unspecified)
    }

    /// Raw `camunda:expression` of a message event definition nested directly
    /// in the end event or intermediate throw event with `id`.
    ///
    /// Every qualifying definition overwrites the previous one, so the last
    /// in document order is returned.
    pub fn event_implementation(&self, id: &str) -> Result<Option<String>, ScanError> {
        let profile = self.profile()?;
        let expression = self.options().vendor(EXPRESSION);
        let resolved = self
            .tagged_with_id(profile, &MESSAGE_THROWING_TAGS, id)
            .flat_map(|event| event.children())
            .filter(|child| child.local_name() == MESSAGE_EVENT_DEFINITION)
            .filter_map(|definition| definition.attribute(&expression))
            .last()
            .map(str::to_owned);
        trace!(id, ?resolved, "event implementation");
        Ok(resolved)
    }
}
