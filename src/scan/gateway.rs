//! Exclusive gateways and their outgoing sequence flows.

use tracing::trace;

use super::Session;
use crate::base::{NamespaceProfile, TagKind};
use crate::document::{ElementRef, ElementSnapshot};
use crate::error::ScanError;

const GATEWAY_TAGS: [TagKind; 1] = [TagKind::ExclusiveGateway];

impl Session {
    /// The id of the exclusive gateway with `id`, if there is one.
    pub fn exclusive_gateway(&self, id: &str) -> Result<Option<String>, ScanError> {
        let profile = self.profile()?;
        Ok(self
            .gateways(profile, id)
            .last()
            .and_then(|gateway| gateway.element_id())
            .map(str::to_owned))
    }

    /// Number of `outgoing` references directly under the exclusive gateway
    /// with `id`; zero when the gateway has none or does not exist.
    pub fn outgoing_count(&self, id: &str) -> Result<usize, ScanError> {
        let profile = self.profile()?;
        let count = self
            .gateways(profile, id)
            .map(|gateway| outgoing_references(profile, gateway).count())
            .sum();
        trace!(id, count, "outgoing count");
        Ok(count)
    }

    /// Sequence flows referenced by the `outgoing` children of the exclusive
    /// gateway with `id`.
    ///
    /// References are resolved under the gateway's own profile. References
    /// naming no sequence flow are left out.
    pub fn outgoing_edges(&self, id: &str) -> Result<Vec<ElementSnapshot>, ScanError> {
        let profile = self.profile()?;
        let edges: Vec<_> = self
            .gateways(profile, id)
            .flat_map(|gateway| outgoing_references(profile, gateway))
            .filter_map(|reference| {
                let edge_id = reference.text().trim();
                let edge = self.sequence_flow(profile, edge_id);
                if edge.is_none() {
                    trace!(gateway = id, edge_id, "unresolved outgoing reference");
                }
                edge
            })
            .map(|edge| edge.snapshot())
            .collect();
        Ok(edges)
    }

    /// The sequence flow with `id`, last match in document order.
    pub fn resolve_edge(&self, id: &str) -> Result<Option<ElementSnapshot>, ScanError> {
        let profile = self.profile()?;
        Ok(self.sequence_flow(profile, id).map(|edge| edge.snapshot()))
    }

    fn gateways<'s>(
        &'s self,
        profile: NamespaceProfile,
        id: &'s str,
    ) -> impl Iterator<Item = ElementRef<'s>> {
        self.tagged_with_id(profile, &GATEWAY_TAGS, id)
    }

    fn sequence_flow(&self, profile: NamespaceProfile, id: &str) -> Option<ElementRef<'_>> {
        self.tagged(profile, TagKind::SequenceFlow)
            .filter(|flow| flow.has_id(id))
            .last()
    }
}

fn outgoing_references<'d>(
    profile: NamespaceProfile,
    gateway: ElementRef<'d>,
) -> impl Iterator<Item = ElementRef<'d>> {
    let outgoing = TagKind::Outgoing.qualified(profile);
    gateway
        .children()
        .filter(move |child| child.name() == outgoing)
}
