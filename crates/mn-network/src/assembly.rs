//! Assembly of the network from candidates.
//!
//! Rules, per reaction candidate in identifier order:
//! - omitted reactions contribute nothing
//! - every other reaction contributes one node
//! - each participant links to its metabolite candidate's node, unless the
//!   metabolite is omitted; replicated metabolites get a node of their own
//!   per reaction, others share one node created on first use
//!
//! Reaction nodes come first, then metabolite nodes in first-link order.

use std::collections::BTreeSet;

use mn_candidacy::{Candidates, Category, Simplifications};
use mn_core::{MnResult, NodeId, Role, replicate_node_id};
use tracing::debug;

use crate::builder::NetworkBuilder;
use crate::records::{NetworkElements, NodeRecord};

/// Create the node and link records of the network.
pub fn create_network_elements(
    candidates: &Candidates,
    simplifications: &Simplifications,
) -> MnResult<NetworkElements> {
    let mut builder = NetworkBuilder::new();
    let mut metabolite_nodes: Vec<NodeRecord> = Vec::new();
    let mut created: BTreeSet<NodeId> = BTreeSet::new();
    let mut links: Vec<(NodeId, NodeId, Role, bool)> = Vec::new();

    for reaction in candidates.reactions.values() {
        if simplifications.is_omitted(Category::Reactions, &reaction.identifier) {
            continue;
        }
        builder.add_node(NodeRecord::reaction(
            reaction.identifier.clone(),
            reaction.identifier.clone(),
            reaction.name.clone(),
            reaction.reversibility,
        ));

        for participant in &reaction.participants {
            let Some(metabolite) = candidates.metabolites.get(&participant.metabolite) else {
                continue;
            };
            if simplifications.is_omitted(Category::Metabolites, &metabolite.identifier) {
                continue;
            }
            let replication = simplifications.is_replicated(&metabolite.identifier);
            let node = if replication {
                replicate_node_id(&metabolite.identifier, &reaction.identifier)
            } else {
                metabolite.identifier.clone()
            };
            if created.insert(node.clone()) {
                metabolite_nodes.push(NodeRecord::metabolite(
                    node.clone(),
                    metabolite.identifier.clone(),
                    metabolite.name.clone(),
                    metabolite.compartment.clone(),
                    replication,
                ));
            }
            let (source, target) = match participant.role {
                Role::Reactant => (node, reaction.identifier.clone()),
                Role::Product => (reaction.identifier.clone(), node),
            };
            links.push((source, target, participant.role, replication));
        }
    }

    for node in metabolite_nodes {
        builder.add_node(node);
    }
    for (source, target, role, replication) in links {
        builder.add_link(source, target, role, replication);
    }

    debug!(
        nodes = builder.node_count(),
        links = builder.link_count(),
        "assembled network"
    );
    builder.build()
}

/// Copy network elements, as the seed of a subnetwork.
pub fn copy_network_elements(elements: &NetworkElements) -> NetworkElements {
    elements.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mn_candidacy::{Method, change_simplifications, collect_candidates};
    use mn_core::EntityKind;
    use mn_model::{Model, Reaction};
    use mn_sets::{
        create_initial_sets_filters, determine_current_entities_sets, determine_total_entities_sets,
    };

    fn candidates(model: &Model) -> Candidates {
        let total = determine_total_entities_sets(&model.reactions);
        let current =
            determine_current_entities_sets(&create_initial_sets_filters(), &total, &model.reactions);
        collect_candidates(&current.filter_reactions, model, false)
    }

    fn two_reactions() -> Model {
        Model::new()
            .with_reaction(
                Reaction::new("R1", "R1")
                    .reactant("glc", "c", 1.0)
                    .reactant("atp", "c", 1.0)
                    .product("g6p", "c", 1.0),
            )
            .with_reaction(
                Reaction::new("R2", "R2")
                    .reactant("g6p", "c", 1.0)
                    .reactant("atp", "c", 1.0)
                    .product("f6p", "c", 1.0),
            )
    }

    #[test]
    fn concrete_scenario() {
        let model = Model::new().with_reaction(
            Reaction::new("R1", "R1")
                .reactant("A", "c1", 1.0)
                .reactant("B", "c1", 1.0)
                .product("C", "c1", 1.0),
        );
        let network =
            create_network_elements(&candidates(&model), &Simplifications::default()).unwrap();

        let nodes: Vec<&str> = network.node_ids().map(String::as_str).collect();
        assert_eq!(nodes, vec!["R1", "A", "B", "C"]);
        let links: Vec<&str> = network.link_ids().map(String::as_str).collect();
        assert_eq!(
            links,
            vec!["A:R1:reactant", "B:R1:reactant", "R1:C:product"]
        );
        assert_eq!(network.nodes[0].entity, EntityKind::Reaction);
    }

    #[test]
    fn shared_metabolite_node() {
        let model = two_reactions();
        let network =
            create_network_elements(&candidates(&model), &Simplifications::default()).unwrap();
        assert_eq!(network.nodes.len(), 6);
        assert_eq!(network.links.len(), 6);
        assert_eq!(network.nodes.iter().filter(|n| n.identifier == "atp").count(), 1);
    }

    #[test]
    fn replication_duplicates_metabolite_per_reaction() {
        let model = two_reactions();
        let candidates = candidates(&model);
        let simplifications = change_simplifications(
            "atp",
            Category::Metabolites,
            Method::Replication,
            &candidates,
            &Simplifications::default(),
        );
        let network = create_network_elements(&candidates, &simplifications).unwrap();
        assert!(network.contains_node("atp:R1"));
        assert!(network.contains_node("atp:R2"));
        assert!(!network.contains_node("atp"));
        assert_eq!(network.nodes.len(), 7);
        let replicate = network.node("atp:R1").unwrap();
        assert!(replicate.replication);
        assert_eq!(replicate.candidate, "atp");
        assert!(network.link("atp:R2:R2:reactant").is_some_and(|l| l.replication));
    }

    #[test]
    fn omission_removes_nodes_and_links() {
        let model = two_reactions();
        let candidates = candidates(&model);
        let omit_atp = change_simplifications(
            "atp",
            Category::Metabolites,
            Method::Omission,
            &candidates,
            &Simplifications::default(),
        );
        let network = create_network_elements(&candidates, &omit_atp).unwrap();
        assert!(!network.contains_node("atp"));
        assert!(network.links.iter().all(|l| !l.touches("atp")));

        let omit_r2 = change_simplifications(
            "R2",
            Category::Reactions,
            Method::Omission,
            &candidates,
            &Simplifications::default(),
        );
        let network = create_network_elements(&candidates, &omit_r2).unwrap();
        assert!(!network.contains_node("R2"));
        // f6p only takes part in R2.
        assert!(!network.contains_node("f6p"));
        assert_eq!(network.links.len(), 3);
    }

    #[test]
    fn copy_is_equal() {
        let model = two_reactions();
        let network =
            create_network_elements(&candidates(&model), &Simplifications::default()).unwrap();
        assert_eq!(copy_network_elements(&network), network);
    }
}
