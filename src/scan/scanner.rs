//! Self-contained, path-based entry points.

use std::path::Path;

use smol_str::SmolStr;

use super::{ImplementationKind, ListenerEntry, Session, Timers};
use crate::base::{NamespaceProfile, ScanOptions};
use crate::document::ElementSnapshot;
use crate::error::ScanError;

/// Runs each resolver against a freshly parsed copy of the model.
///
/// Every call opens and parses `path` again and derives its namespace
/// profile anew; nothing is cached and no call depends on another. Use a
/// [`Session`] to run several queries against one parse.
#[derive(Debug, Clone, Default)]
pub struct BpmnScanner {
    options: ScanOptions,
}

impl BpmnScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Parse `path` into a session with this scanner's options.
    pub fn session(&self, path: impl AsRef<Path>) -> Result<Session, ScanError> {
        Session::open_with(path, self.options.clone())
    }

    pub fn profile(&self, path: impl AsRef<Path>) -> Result<NamespaceProfile, ScanError> {
        self.session(path)?.profile()
    }

    /// See [`Session::task_implementation`].
    pub fn task_implementation(
        &self,
        path: impl AsRef<Path>,
        id: &str,
    ) -> Result<Option<ImplementationKind>, ScanError> {
        self.session(path)?.task_implementation(id)
    }

    /// See [`Session::event_implementation`].
    pub fn event_implementation(
        &self,
        path: impl AsRef<Path>,
        id: &str,
    ) -> Result<Option<String>, ScanError> {
        self.session(path)?.event_implementation(id)
    }

    /// See [`Session::listeners`].
    pub fn listeners(
        &self,
        path: impl AsRef<Path>,
        id: &str,
        listener_tag: &str,
        attribute: &str,
    ) -> Result<Vec<ListenerEntry>, ScanError> {
        self.session(path)?.listeners(id, listener_tag, attribute)
    }

    /// See [`Session::form_key`].
    pub fn form_key(
        &self,
        path: impl AsRef<Path>,
        id: &str,
        element_tag: &str,
    ) -> Result<Option<String>, ScanError> {
        self.session(path)?.form_key(id, element_tag)
    }

    /// See [`Session::script_parents`].
    pub fn script_parents(
        &self,
        path: impl AsRef<Path>,
        id: &str,
    ) -> Result<Vec<SmolStr>, ScanError> {
        Ok(self.session(path)?.script_parents(id))
    }

    /// See [`Session::has_script_condition`].
    pub fn has_script_condition(
        &self,
        path: impl AsRef<Path>,
        id: &str,
    ) -> Result<bool, ScanError> {
        self.session(path)?.has_script_condition(id)
    }

    /// See [`Session::exclusive_gateway`].
    pub fn exclusive_gateway(
        &self,
        path: impl AsRef<Path>,
        id: &str,
    ) -> Result<Option<String>, ScanError> {
        self.session(path)?.exclusive_gateway(id)
    }

    /// See [`Session::outgoing_count`].
    pub fn outgoing_count(&self, path: impl AsRef<Path>, id: &str) -> Result<usize, ScanError> {
        self.session(path)?.outgoing_count(id)
    }

    /// See [`Session::outgoing_edges`].
    pub fn outgoing_edges(
        &self,
        path: impl AsRef<Path>,
        id: &str,
    ) -> Result<Vec<ElementSnapshot>, ScanError> {
        self.session(path)?.outgoing_edges(id)
    }

    /// See [`Session::timers`].
    pub fn timers(&self, path: impl AsRef<Path>, id: &str) -> Result<Timers, ScanError> {
        self.session(path)?.timers(id)
    }
}
