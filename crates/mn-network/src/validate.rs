//! Network validation logic.

use std::collections::{BTreeMap, BTreeSet};

use mn_core::{EntityKind, MnResult, Role};

use crate::error::NetworkError;
use crate::records::{LinkRecord, NodeRecord};

/// Validate the network: identifiers are unique, every link joins existing
/// nodes of different kinds and runs in the direction of its role.
pub(crate) fn validate_elements(nodes: &[NodeRecord], links: &[LinkRecord]) -> MnResult<()> {
    let mut kinds: BTreeMap<&str, EntityKind> = BTreeMap::new();
    for node in nodes {
        if kinds.insert(&node.identifier, node.entity).is_some() {
            return Err(NetworkError::DuplicateNode {
                node: node.identifier.clone(),
            }
            .into());
        }
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for link in links {
        if !seen.insert(&link.identifier) {
            return Err(NetworkError::DuplicateLink {
                link: link.identifier.clone(),
            }
            .into());
        }

        let endpoint = |node: &str| {
            kinds
                .get(node)
                .copied()
                .ok_or_else(|| NetworkError::DanglingLink {
                    link: link.identifier.clone(),
                    node: node.to_string(),
                })
        };
        let source = endpoint(&link.source)?;
        let target = endpoint(&link.target)?;

        if source == target {
            return Err(NetworkError::NonBipartite {
                link: link.identifier.clone(),
            }
            .into());
        }
        let expected = match link.role {
            Role::Reactant => EntityKind::Metabolite,
            Role::Product => EntityKind::Reaction,
        };
        if source != expected {
            return Err(NetworkError::RoleMismatch {
                link: link.identifier.clone(),
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reaction(id: &str) -> NodeRecord {
        NodeRecord::reaction(id, id, id, false)
    }

    fn metabolite(id: &str) -> NodeRecord {
        NodeRecord::metabolite(id, id, id, None, false)
    }

    fn link(source: &str, target: &str, role: Role) -> LinkRecord {
        LinkRecord {
            identifier: mn_core::link_id(source, target, role),
            source: source.into(),
            target: target.into(),
            role,
            replication: false,
        }
    }

    #[test]
    fn validate_empty_network() {
        assert!(validate_elements(&[], &[]).is_ok());
    }

    #[test]
    fn validate_duplicate_node() {
        let result = validate_elements(&[metabolite("A"), metabolite("A")], &[]);
        assert!(matches!(result, Err(mn_core::MnError::Invariant { .. })));
    }

    #[test]
    fn validate_duplicate_link() {
        let nodes = [metabolite("A"), reaction("R1")];
        let links = [
            link("A", "R1", Role::Reactant),
            link("A", "R1", Role::Reactant),
        ];
        assert!(validate_elements(&nodes, &links).is_err());
    }

    #[test]
    fn validate_non_bipartite() {
        let nodes = [metabolite("A"), metabolite("B")];
        let links = [link("A", "B", Role::Reactant)];
        let err = validate_elements(&nodes, &links).unwrap_err();
        assert!(err.to_string().contains("same kind"));
    }

    #[test]
    fn validate_role_direction() {
        let nodes = [metabolite("A"), reaction("R1")];
        assert!(validate_elements(&nodes, &[link("A", "R1", Role::Reactant)]).is_ok());
        assert!(validate_elements(&nodes, &[link("R1", "A", Role::Product)]).is_ok());
        assert!(validate_elements(&nodes, &[link("A", "R1", Role::Product)]).is_err());
    }
}
