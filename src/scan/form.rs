//! Form references on start events and user tasks.

use tracing::trace;

use super::Session;
use crate::base::constants::FORM_KEY;
use crate::error::ScanError;

impl Session {
    /// File name referenced by the `camunda:formKey` of the `element_tag`
    /// element (e.g. `startEvent`, `userTask`) with `id`.
    ///
    /// The tag is qualified through
    /// [`NamespaceProfile::qualify_form_tag`](crate::base::NamespaceProfile::qualify_form_tag),
    /// which never matches in `bpmn2:` documents. The first matching element
    /// carrying a form key decides the result.
    pub fn form_key(&self, id: &str, element_tag: &str) -> Result<Option<String>, ScanError> {
        let profile = self.profile()?;
        let tag = profile.qualify_form_tag(element_tag);
        let form_key = self.options().vendor(FORM_KEY);
        let resolved = self
            .document()
            .elements_named(&tag)
            .filter(|element| element.has_id(id))
            .find_map(|element| element.attribute(&form_key))
            .map(|key| form_file_name(key).to_owned());
        trace!(id, %tag, ?resolved, "form key");
        Ok(resolved)
    }
}

/// Everything after the first `/`, or the whole key when there is none.
pub fn form_file_name(form_key: &str) -> &str {
    form_key
        .split_once('/')
        .map_or(form_key, |(_, file_name)| file_name)
}
