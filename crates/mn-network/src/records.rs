//! Node and link records.

use mn_core::{CandidateId, CompartmentId, EntityKind, LinkId, NodeId, Role};
use serde::{Deserialize, Serialize};

/// A node of the network: one reaction candidate, one shared metabolite
/// candidate, or one replicate of a metabolite candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub identifier: NodeId,
    pub entity: EntityKind,
    pub candidate: CandidateId,
    pub name: String,
    pub compartment: Option<CompartmentId>,
    /// Only meaningful for reactions.
    pub reversibility: bool,
    pub replication: bool,
}

impl NodeRecord {
    pub fn reaction(
        identifier: impl Into<NodeId>,
        candidate: impl Into<CandidateId>,
        name: impl Into<String>,
        reversibility: bool,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            entity: EntityKind::Reaction,
            candidate: candidate.into(),
            name: name.into(),
            compartment: None,
            reversibility,
            replication: false,
        }
    }

    pub fn metabolite(
        identifier: impl Into<NodeId>,
        candidate: impl Into<CandidateId>,
        name: impl Into<String>,
        compartment: Option<CompartmentId>,
        replication: bool,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            entity: EntityKind::Metabolite,
            candidate: candidate.into(),
            name: name.into(),
            compartment,
            reversibility: false,
            replication,
        }
    }
}

/// A directed link between a metabolite node and a reaction node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub identifier: LinkId,
    pub source: NodeId,
    pub target: NodeId,
    pub role: Role,
    pub replication: bool,
}

impl LinkRecord {
    /// Whether the link touches a node.
    pub fn touches(&self, node: &str) -> bool {
        self.source == node || self.target == node
    }

    /// The endpoint opposite to `node`.
    pub fn other(&self, node: &str) -> &NodeId {
        if self.source == node {
            &self.target
        } else {
            &self.source
        }
    }
}

/// Nodes and links of a network or subnetwork, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkElements {
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<LinkRecord>,
}

impl NetworkElements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    pub fn node(&self, identifier: &str) -> Option<&NodeRecord> {
        self.nodes.iter().find(|node| node.identifier == identifier)
    }

    pub fn link(&self, identifier: &str) -> Option<&LinkRecord> {
        self.links.iter().find(|link| link.identifier == identifier)
    }

    pub fn contains_node(&self, identifier: &str) -> bool {
        self.node(identifier).is_some()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|node| &node.identifier)
    }

    pub fn link_ids(&self) -> impl Iterator<Item = &LinkId> {
        self.links.iter().map(|link| &link.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_other_endpoint() {
        let link = LinkRecord {
            identifier: "A:R1:reactant".into(),
            source: "A".into(),
            target: "R1".into(),
            role: Role::Reactant,
            replication: false,
        };
        assert!(link.touches("A"));
        assert!(!link.touches("B"));
        assert_eq!(link.other("A"), "R1");
        assert_eq!(link.other("R1"), "A");
    }

    #[test]
    fn lookup_by_identifier() {
        let elements = NetworkElements {
            nodes: vec![NodeRecord::reaction("R1", "R1", "first", true)],
            links: vec![],
        };
        assert!(elements.contains_node("R1"));
        assert!(!elements.contains_node("R2"));
        assert!(elements.node("R1").is_some_and(|n| n.reversibility));
        assert!(elements.link("x").is_none());
    }
}
