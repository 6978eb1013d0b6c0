//! Incremental network builder.

use mn_core::{LinkId, MnResult, NodeId, Role, link_id};

use crate::records::{LinkRecord, NetworkElements, NodeRecord};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_node` and `add_link` to build up the network,
/// then call `build()` to validate and freeze it into `NetworkElements`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<NodeRecord>,
    links: Vec<LinkRecord>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its identifier.
    pub fn add_node(&mut self, node: NodeRecord) -> NodeId {
        let identifier = node.identifier.clone();
        self.nodes.push(node);
        identifier
    }

    /// Add a link between two nodes and return its identifier.
    ///
    /// The identifier is derived from the endpoints and the role, so adding
    /// the same link to two builders yields the same identifier.
    pub fn add_link(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        role: Role,
        replication: bool,
    ) -> LinkId {
        let source = source.into();
        let target = target.into();
        let identifier = link_id(&source, &target, role);
        self.links.push(LinkRecord {
            identifier: identifier.clone(),
            source,
            target,
            role,
            replication,
        });
        identifier
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Build and validate the network.
    pub fn build(self) -> MnResult<NetworkElements> {
        validate::validate_elements(&self.nodes, &self.links)?;
        Ok(NetworkElements {
            nodes: self.nodes,
            links: self.links,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_basic() {
        let mut builder = NetworkBuilder::new();
        let r1 = builder.add_node(NodeRecord::reaction("R1", "R1", "first", false));
        let a = builder.add_node(NodeRecord::metabolite("A", "A", "alpha", None, false));
        let l1 = builder.add_link(a.clone(), r1.clone(), Role::Reactant, false);

        assert_eq!(r1, "R1");
        assert_eq!(l1, "A:R1:reactant");
        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.link_count(), 1);
    }

    #[test]
    fn builder_build_simple() {
        let mut builder = NetworkBuilder::new();
        builder.add_node(NodeRecord::reaction("R1", "R1", "first", false));
        builder.add_node(NodeRecord::metabolite("C", "C", "gamma", None, false));
        builder.add_link("R1", "C", Role::Product, false);

        let network = builder.build().unwrap();
        assert_eq!(network.nodes.len(), 2);
        assert_eq!(network.links.len(), 1);
        assert_eq!(network.links[0].identifier, "R1:C:product");
    }

    #[test]
    fn builder_rejects_dangling_link() {
        let mut builder = NetworkBuilder::new();
        builder.add_node(NodeRecord::reaction("R1", "R1", "first", false));
        builder.add_link("A", "R1", Role::Reactant, false);
        assert!(matches!(
            builder.build(),
            Err(mn_core::MnError::Invariant { .. })
        ));
    }
}
