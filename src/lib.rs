//! # bpmn-scan
//!
//! Namespace-agnostic introspection of BPMN process models.
//!
//! BPMN tooling writes the same vocabulary as `bpmn:serviceTask`,
//! `bpmn2:serviceTask` or a bare `serviceTask`. This crate answers questions
//! about single model elements (how a task is invoked, which listeners and
//! scripts it declares, where a gateway branches to, which timer an event
//! waits for) identically for all three spellings.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project      → Model discovery, parallel convention checks
//!   ↓
//! conventions  → Element-id naming rules
//!   ↓
//! scan         → Session, BpmnScanner and the element resolvers
//!   ↓
//! document     → quick-xml reader, arena tree, element views
//!   ↓
//! base         → NamespaceProfile, TagKind table, ScanOptions, Position
//! ```

// ============================================================================
// MODULES (dependency order: base → document → scan → conventions → project)
// ============================================================================

/// Foundation types: namespace profiles, tag table, options
pub mod base;

/// Error type shared by all modules
pub mod error;

/// Parsed XML tree and element views
pub mod document;

/// Element resolvers over a parsed model
pub mod scan;

/// Element-id naming conventions
pub mod conventions;

/// Directory-level loading and checking
pub mod project;

// Re-export the common entry points
pub use base::{NamespaceProfile, Position, ScanOptions, TagKind};
pub use conventions::{ConventionSet, ConventionViolation, ElementConvention};
pub use document::{Document, ElementRef, ElementSnapshot, NodeId};
pub use error::ScanError;
pub use scan::{
    BpmnScanner, ImplementationKind, ListenerEntry, ListenerKind, Session, TimerDetail, Timers,
};
