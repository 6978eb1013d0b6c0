//! Adjacency index for traversal.
//!
//! Maps every node to the links leaving and entering it. Links are stored as
//! positions into `NetworkElements::links` and listed in link-identifier
//! order, so traversals that follow the lists are deterministic.

use std::collections::BTreeMap;

use mn_core::NodeId;

use crate::records::NetworkElements;

#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    outgoing: BTreeMap<NodeId, Vec<usize>>,
    incoming: BTreeMap<NodeId, Vec<usize>>,
}

impl Adjacency {
    /// Build the index from a network.
    ///
    /// Links whose endpoints are missing from the node list are left out.
    pub fn from_elements(elements: &NetworkElements) -> Self {
        let mut outgoing: BTreeMap<NodeId, Vec<usize>> = elements
            .nodes
            .iter()
            .map(|node| (node.identifier.clone(), Vec::new()))
            .collect();
        let mut incoming = outgoing.clone();

        for (position, link) in elements.links.iter().enumerate() {
            if !outgoing.contains_key(&link.source) || !outgoing.contains_key(&link.target) {
                continue;
            }
            if let Some(list) = outgoing.get_mut(&link.source) {
                list.push(position);
            }
            if let Some(list) = incoming.get_mut(&link.target) {
                list.push(position);
            }
        }

        // Sort each list by link identifier for determinism
        let links = &elements.links;
        for list in outgoing.values_mut().chain(incoming.values_mut()) {
            list.sort_by(|a, b| links[*a].identifier.cmp(&links[*b].identifier));
        }

        Self { outgoing, incoming }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.outgoing.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Positions of links whose source is `node`.
    pub fn outgoing(&self, node: &str) -> &[usize] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions of links whose target is `node`.
    pub fn incoming(&self, node: &str) -> &[usize] {
        self.incoming.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbors of `node` through outgoing and/or incoming links, as
    /// `(link position, neighbor)` pairs ordered by link identifier.
    pub fn neighbors<'a>(
        &self,
        elements: &'a NetworkElements,
        node: &str,
        forward: bool,
        backward: bool,
    ) -> Vec<(usize, &'a NodeId)> {
        let mut pairs: Vec<(usize, &'a NodeId)> = Vec::new();
        if forward {
            pairs.extend(
                self.outgoing(node)
                    .iter()
                    .map(|&position| (position, &elements.links[position].target)),
            );
        }
        if backward {
            pairs.extend(
                self.incoming(node)
                    .iter()
                    .map(|&position| (position, &elements.links[position].source)),
            );
        }
        if forward && backward {
            let links = &elements.links;
            pairs.sort_by(|a, b| links[a.0].identifier.cmp(&links[b.0].identifier));
        }
        pairs
    }
}
