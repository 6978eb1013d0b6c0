//! Counts of nodes and links.

use mn_core::EntityKind;
use serde::{Deserialize, Serialize};

use crate::records::NetworkElements;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub nodes: usize,
    pub nodes_metabolites: usize,
    pub nodes_reactions: usize,
    pub links: usize,
}

pub fn determine_network_summary(elements: &NetworkElements) -> NetworkSummary {
    let nodes_metabolites = elements
        .nodes
        .iter()
        .filter(|node| node.entity == EntityKind::Metabolite)
        .count();
    NetworkSummary {
        nodes: elements.nodes.len(),
        nodes_metabolites,
        nodes_reactions: elements.nodes.len() - nodes_metabolites,
        links: elements.links.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::NodeRecord;

    #[test]
    fn counts_by_kind() {
        let elements = NetworkElements {
            nodes: vec![
                NodeRecord::reaction("R1", "R1", "R1", false),
                NodeRecord::metabolite("A", "A", "A", None, false),
                NodeRecord::metabolite("B", "B", "B", None, false),
            ],
            links: vec![],
        };
        let summary = determine_network_summary(&elements);
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.nodes_metabolites, 2);
        assert_eq!(summary.nodes_reactions, 1);
        assert_eq!(summary.links, 0);
        assert_eq!(determine_network_summary(&NetworkElements::new()), NetworkSummary::default());
    }
}
