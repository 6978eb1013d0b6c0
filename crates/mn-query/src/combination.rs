//! Combination of a query's selection with the subnetwork.

use std::collections::BTreeSet;

use mn_network::{NetworkElements, copy_network_elements};

use crate::query::Combination;

/// Combine a selection with the subnetwork.
///
/// Inclusion keeps the subnetwork's order and appends new elements.
/// Exclusion removes the selection's nodes and links, then every link that
/// lost an endpoint.
pub fn combine_elements(
    combination: Combination,
    subnetwork: &NetworkElements,
    selection: &NetworkElements,
) -> NetworkElements {
    match combination {
        Combination::Inclusion => include(subnetwork, selection),
        Combination::Exclusion => exclude(subnetwork, selection),
    }
}

fn include(subnetwork: &NetworkElements, selection: &NetworkElements) -> NetworkElements {
    let mut novel = subnetwork.clone();
    let nodes: BTreeSet<String> = subnetwork.node_ids().cloned().collect();
    let links: BTreeSet<String> = subnetwork.link_ids().cloned().collect();
    novel.nodes.extend(
        selection
            .nodes
            .iter()
            .filter(|node| !nodes.contains(&node.identifier))
            .cloned(),
    );
    novel.links.extend(
        selection
            .links
            .iter()
            .filter(|link| !links.contains(&link.identifier))
            .cloned(),
    );
    novel
}

fn exclude(subnetwork: &NetworkElements, selection: &NetworkElements) -> NetworkElements {
    let nodes: BTreeSet<&str> = selection.node_ids().map(String::as_str).collect();
    let links: BTreeSet<&str> = selection.link_ids().map(String::as_str).collect();

    let remaining: Vec<_> = subnetwork
        .nodes
        .iter()
        .filter(|node| !nodes.contains(node.identifier.as_str()))
        .cloned()
        .collect();
    let present: BTreeSet<&str> = remaining
        .iter()
        .map(|node| node.identifier.as_str())
        .collect();
    let kept = subnetwork
        .links
        .iter()
        .filter(|link| {
            !links.contains(link.identifier.as_str())
                && present.contains(link.source.as_str())
                && present.contains(link.target.as_str())
        })
        .cloned()
        .collect();

    NetworkElements {
        nodes: remaining,
        links: kept,
    }
}

/// Subnetwork to start from under a combination: empty for inclusion, the
/// whole network for exclusion.
pub fn restore_subnetwork(combination: Combination, network: &NetworkElements) -> NetworkElements {
    match combination {
        Combination::Inclusion => NetworkElements::new(),
        Combination::Exclusion => copy_network_elements(network),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mn_core::Role;
    use mn_network::{NetworkBuilder, NodeRecord};

    fn network() -> NetworkElements {
        let mut builder = NetworkBuilder::new();
        builder.add_node(NodeRecord::reaction("R1", "R1", "R1", false));
        for metabolite in ["A", "B", "C"] {
            builder.add_node(NodeRecord::metabolite(metabolite, metabolite, metabolite, None, false));
        }
        builder.add_link("A", "R1", Role::Reactant, false);
        builder.add_link("B", "R1", Role::Reactant, false);
        builder.add_link("R1", "C", Role::Product, false);
        builder.build().unwrap()
    }

    fn part(network: &NetworkElements, nodes: &[&str], links: &[&str]) -> NetworkElements {
        NetworkElements {
            nodes: network
                .nodes
                .iter()
                .filter(|n| nodes.contains(&n.identifier.as_str()))
                .cloned()
                .collect(),
            links: network
                .links
                .iter()
                .filter(|l| links.contains(&l.identifier.as_str()))
                .cloned()
                .collect(),
        }
    }

    #[test]
    fn inclusion_appends_new_elements() {
        let network = network();
        let prior = part(&network, &["R1", "A"], &["A:R1:reactant"]);
        let selection = part(&network, &["R1", "C"], &["R1:C:product"]);
        let combined = combine_elements(Combination::Inclusion, &prior, &selection);
        let nodes: Vec<&str> = combined.node_ids().map(String::as_str).collect();
        assert_eq!(nodes, vec!["R1", "A", "C"]);
        assert_eq!(combined.links.len(), 2);

        let again = combine_elements(Combination::Inclusion, &combined, &selection);
        assert_eq!(again, combined);
    }

    #[test]
    fn exclusion_drops_dangling_links() {
        let network = network();
        let selection = part(&network, &["A"], &[]);
        let combined = combine_elements(Combination::Exclusion, &network, &selection);
        assert!(!combined.contains_node("A"));
        assert!(combined.link("A:R1:reactant").is_none());
        assert_eq!(combined.links.len(), 2);

        let rogue_reaction = part(&network, &["R1"], &[]);
        let combined = combine_elements(Combination::Exclusion, &network, &rogue_reaction);
        assert_eq!(combined.nodes.len(), 3);
        assert!(combined.links.is_empty());
    }

    #[test]
    fn exclusion_of_links_keeps_nodes() {
        let network = network();
        let selection = part(&network, &[], &["B:R1:reactant"]);
        let combined = combine_elements(Combination::Exclusion, &network, &selection);
        assert_eq!(combined.nodes.len(), 4);
        assert_eq!(combined.links.len(), 2);
    }

    #[test]
    fn restore_per_combination() {
        let network = network();
        assert!(restore_subnetwork(Combination::Inclusion, &network).is_empty());
        assert_eq!(restore_subnetwork(Combination::Exclusion, &network), network);
    }
}
