//! Error types for scan operations.

use thiserror::Error;

/// Errors that can occur while loading or introspecting a model.
///
/// Looking up an id that does not exist is not an error; resolvers report it
/// as `None` or an empty collection.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error while reading a model file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// No `definitions` element under `bpmn:`, `bpmn2:` or the default namespace.
    #[error("Unable to determine the BPMN namespace profile: no definitions element found")]
    UnknownProfile,

    /// A naming convention carries a pattern that does not compile.
    #[error("Invalid pattern for convention '{convention}': {message}")]
    InvalidPattern { convention: String, message: String },
}

impl ScanError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(convention: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            convention: convention.into(),
            message: message.into(),
        }
    }
}
