//! Foundation types for BPMN introspection.
//!
//! This module provides the vocabulary every resolver shares:
//! - [`NamespaceProfile`] - the three coexisting BPMN tag spellings
//! - [`TagKind`] - abstract BPMN tags and their spelling under each profile
//! - [`ScanOptions`] - vendor extension settings (`camunda:` by default)
//! - [`Position`], [`LineIndex`] - source locations of parsed elements
//! - Domain constants (local names, vendor attribute names)
//!
//! This module has NO dependencies on other modules of this crate.

pub mod constants;
mod options;
mod position;
mod profile;
mod tag;

pub use options::ScanOptions;
pub use position::{LineIndex, Position};
pub use profile::NamespaceProfile;
pub use tag::TagKind;
