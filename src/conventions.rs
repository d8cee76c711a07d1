//! Element-id naming conventions.
//!
//! A convention names an element kind (`serviceTask`, `userTask`, ...) and a
//! regular expression every id of that kind must match in full. Kinds are
//! compared case-insensitively against local tag names, so one convention
//! covers all three namespace spellings.

use regex::Regex;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::Position;
use crate::base::constants::NAME;
use crate::error::ScanError;
use crate::scan::Session;

/// A naming rule for the ids of one element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementConvention {
    /// Element kind, e.g. `serviceTask`.
    pub name: String,
    /// Pattern the whole id must match.
    pub pattern: String,
}

impl ElementConvention {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// An element whose id breaks a convention.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConventionViolation {
    /// Name of the broken convention.
    pub convention: String,
    pub element_id: String,
    pub element_name: Option<String>,
    /// Tag as written in the model.
    pub tag: SmolStr,
    pub position: Position,
    pub message: String,
}

/// Conventions with their patterns compiled.
#[derive(Debug, Clone)]
pub struct ConventionSet {
    rules: Vec<(ElementConvention, Regex)>,
}

impl ConventionSet {
    /// Compile every pattern, anchored at both ends.
    pub fn compile(conventions: &[ElementConvention]) -> Result<Self, ScanError> {
        let rules = conventions
            .iter()
            .map(|convention| {
                Regex::new(&format!("^(?:{})$", convention.pattern))
                    .map(|regex| (convention.clone(), regex))
                    .map_err(|e| ScanError::invalid_pattern(&convention.name, e.to_string()))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Session {
    /// Elements whose id does not match the convention for their kind, in
    /// document order. Elements without an id are not checked.
    pub fn check_conventions(&self, conventions: &ConventionSet) -> Vec<ConventionViolation> {
        let mut violations = Vec::new();
        for element in self.document().iter() {
            let Some(element_id) = element.element_id() else {
                continue;
            };
            for (convention, pattern) in &conventions.rules {
                if !element.local_name().eq_ignore_ascii_case(&convention.name)
                    || pattern.is_match(element_id)
                {
                    continue;
                }
                trace!(element_id, convention = %convention.name, "naming convention broken");
                violations.push(ConventionViolation {
                    convention: convention.name.clone(),
                    element_id: element_id.to_owned(),
                    element_name: element.attribute(NAME).map(str::to_owned),
                    tag: SmolStr::new(element.name()),
                    position: element.position(),
                    message: format!("ID '{element_id}' is against the naming convention"),
                });
            }
        }
        violations
    }
}
