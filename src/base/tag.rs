//! Abstract BPMN tags and their concrete spelling per profile.

use super::NamespaceProfile;

/// BPMN element kinds the resolvers query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    BusinessRuleTask,
    ServiceTask,
    SendTask,
    ExclusiveGateway,
    Outgoing,
    SequenceFlow,
    IntermediateCatchEvent,
    IntermediateThrowEvent,
    StartEvent,
    BoundaryEvent,
    EndEvent,
    ExtensionElements,
}

/// Concrete tag per kind, columns in `NamespaceProfile::index` order.
const TAG_TABLE: [[&str; 3]; 12] = [
    ["bpmn:businessRuleTask", "bpmn2:businessRuleTask", "businessRuleTask"],
    ["bpmn:serviceTask", "bpmn2:serviceTask", "serviceTask"],
    ["bpmn:sendTask", "bpmn2:sendTask", "sendTask"],
    ["bpmn:exclusiveGateway", "bpmn2:exclusiveGateway", "exclusiveGateway"],
    ["bpmn:outgoing", "bpmn2:outgoing", "outgoing"],
    ["bpmn:sequenceFlow", "bpmn2:sequenceFlow", "sequenceFlow"],
    [
        "bpmn:intermediateCatchEvent",
        "bpmn2:intermediateCatchEvent",
        "intermediateCatchEvent",
    ],
    [
        "bpmn:intermediateThrowEvent",
        "bpmn2:intermediateThrowEvent",
        "intermediateThrowEvent",
    ],
    ["bpmn:startEvent", "bpmn2:startEvent", "startEvent"],
    ["bpmn:boundaryEvent", "bpmn2:boundaryEvent", "boundaryEvent"],
    ["bpmn:endEvent", "bpmn2:endEvent", "endEvent"],
    [
        "bpmn:extensionElements",
        "bpmn2:extensionElements",
        "extensionElements",
    ],
];

impl TagKind {
    pub const ALL: [Self; 12] = [
        Self::BusinessRuleTask,
        Self::ServiceTask,
        Self::SendTask,
        Self::ExclusiveGateway,
        Self::Outgoing,
        Self::SequenceFlow,
        Self::IntermediateCatchEvent,
        Self::IntermediateThrowEvent,
        Self::StartEvent,
        Self::BoundaryEvent,
        Self::EndEvent,
        Self::ExtensionElements,
    ];

    /// Tag as written in a document of the given profile.
    pub fn qualified(self, profile: NamespaceProfile) -> &'static str {
        TAG_TABLE[self as usize][profile.index()]
    }

    /// Tag without any prefix.
    pub fn local_name(self) -> &'static str {
        self.qualified(NamespaceProfile::Unprefixed)
    }
}
