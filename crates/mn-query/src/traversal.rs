//! Breadth-first proximity expansion.

use std::collections::{BTreeSet, VecDeque};

use mn_network::{Adjacency, NetworkElements};

use crate::query::ProximityDirection;

/// Select nodes and links of a network, keeping the network's order.
///
/// `links` are positions into `network.links`.
pub fn select_elements(
    network: &NetworkElements,
    nodes: &BTreeSet<&str>,
    links: &BTreeSet<usize>,
) -> NetworkElements {
    NetworkElements {
        nodes: network
            .nodes
            .iter()
            .filter(|node| nodes.contains(node.identifier.as_str()))
            .cloned()
            .collect(),
        links: links
            .iter()
            .filter_map(|&position| network.links.get(position))
            .cloned()
            .collect(),
    }
}

/// Expand from `focus` up to `depth` hops, collecting every visited node and
/// every traversed link.
pub fn collect_proximity<'a>(
    network: &'a NetworkElements,
    adjacency: &Adjacency,
    focus: &'a str,
    direction: ProximityDirection,
    depth: usize,
) -> NetworkElements {
    let (forward, backward) = direction.follows();
    let mut nodes: BTreeSet<&'a str> = BTreeSet::new();
    let mut links: BTreeSet<usize> = BTreeSet::new();
    let mut queue: VecDeque<(&'a str, usize)> = VecDeque::new();

    nodes.insert(focus);
    queue.push_back((focus, 0));
    while let Some((node, level)) = queue.pop_front() {
        if level >= depth {
            continue;
        }
        for (position, neighbor) in adjacency.neighbors(network, node, forward, backward) {
            links.insert(position);
            if nodes.insert(neighbor.as_str()) {
                queue.push_back((neighbor.as_str(), level + 1));
            }
        }
    }

    select_elements(network, &nodes, &links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mn_core::Role;
    use mn_network::{NetworkBuilder, NodeRecord};

    /// A -> R1 -> C -> R2 -> D, with B -> R1.
    fn chain() -> NetworkElements {
        let mut builder = NetworkBuilder::new();
        for reaction in ["R1", "R2"] {
            builder.add_node(NodeRecord::reaction(reaction, reaction, reaction, false));
        }
        for metabolite in ["A", "B", "C", "D"] {
            builder.add_node(NodeRecord::metabolite(metabolite, metabolite, metabolite, None, false));
        }
        builder.add_link("A", "R1", Role::Reactant, false);
        builder.add_link("B", "R1", Role::Reactant, false);
        builder.add_link("R1", "C", Role::Product, false);
        builder.add_link("C", "R2", Role::Reactant, false);
        builder.add_link("R2", "D", Role::Product, false);
        builder.build().unwrap()
    }

    fn ids(elements: &NetworkElements) -> Vec<&str> {
        elements.node_ids().map(String::as_str).collect()
    }

    #[test]
    fn successors_by_depth() {
        let network = chain();
        let adjacency = Adjacency::from_elements(&network);
        let one = collect_proximity(&network, &adjacency, "A", ProximityDirection::Successors, 1);
        assert_eq!(ids(&one), vec!["R1", "A"]);
        assert_eq!(one.links.len(), 1);

        let three = collect_proximity(&network, &adjacency, "A", ProximityDirection::Successors, 3);
        assert_eq!(ids(&three), vec!["R1", "R2", "A", "C"]);
        assert_eq!(three.links.len(), 3);
    }

    #[test]
    fn predecessors_and_neighbors() {
        let network = chain();
        let adjacency = Adjacency::from_elements(&network);
        let back = collect_proximity(&network, &adjacency, "C", ProximityDirection::Predecessors, 2);
        assert_eq!(ids(&back), vec!["R1", "A", "B", "C"]);

        let around = collect_proximity(&network, &adjacency, "C", ProximityDirection::Neighbors, 1);
        assert_eq!(ids(&around), vec!["R1", "R2", "C"]);
        assert_eq!(around.links.len(), 2);
    }

    #[test]
    fn depth_zero_is_focus_only() {
        let network = chain();
        let adjacency = Adjacency::from_elements(&network);
        let focus = collect_proximity(&network, &adjacency, "B", ProximityDirection::Neighbors, 0);
        assert_eq!(ids(&focus), vec!["B"]);
        assert!(focus.links.is_empty());
    }
}
