//! Identifier aliases and composite identifiers.
//!
//! Every record in the pipeline is keyed by a textual identifier. Composite
//! identifiers are derived here, in one place, so that re-deriving the same
//! candidates or network always yields the same strings.

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type MetaboliteId = String;
pub type ReactionId = String;
pub type CompartmentId = String;
pub type ProcessId = String;
pub type CandidateId = String;
pub type NodeId = String;
pub type LinkId = String;

/// Separator of the parts of a composite identifier.
pub const ID_SEPARATOR: char = ':';

/// Escape one part of a composite identifier.
///
/// `%` and the separator are percent-encoded, so an escaped part never
/// contains the separator and distinct parts stay distinct. Identifiers
/// without either character are returned unchanged.
pub fn escape_id_part(part: &str) -> String {
    let mut escaped = String::with_capacity(part.len());
    for c in part.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            ID_SEPARATOR => escaped.push_str("%3A"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Identifier of a reaction candidate, and of its reaction node.
pub fn candidate_reaction_id(reaction: &str) -> CandidateId {
    escape_id_part(reaction)
}

/// Identifier of a metabolite candidate.
///
/// Compartmental candidates are keyed by metabolite and compartment;
/// otherwise the metabolite identifier stands alone.
pub fn candidate_metabolite_id(metabolite: &str, compartment: Option<&str>) -> CandidateId {
    match compartment {
        Some(compartment) => format!(
            "{}{}{}",
            escape_id_part(metabolite),
            ID_SEPARATOR,
            escape_id_part(compartment)
        ),
        None => escape_id_part(metabolite),
    }
}

/// Identifier of a replicate metabolite node, scoped to one reaction candidate.
///
/// Both arguments are candidate identifiers. A replicate has one more part
/// than the shared metabolite nodes of the same network, and reaction
/// candidates have a single part, so replicates never meet another node.
pub fn replicate_node_id(candidate_metabolite: &str, candidate_reaction: &str) -> NodeId {
    format!("{}{}{}", candidate_metabolite, ID_SEPARATOR, candidate_reaction)
}

/// Identifier of a link, derived from its endpoints and role.
///
/// Every link joins a reaction node, a single part, to a metabolite node:
/// the reaction comes last before the role for reactants and first for
/// products, which leaves one way to read the metabolite part.
pub fn link_id(source: &str, target: &str, role: crate::Role) -> LinkId {
    format!(
        "{}{sep}{}{sep}{}",
        source,
        target,
        role.as_str(),
        sep = ID_SEPARATOR
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::Role;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn candidate_ids_are_injective(
            a in "[a-z_:%]{1,4}",
            b in "[a-z_:%]{1,4}",
            c in "[a-z_:%]{1,4}",
            d in "[a-z_:%]{1,4}",
        ) {
            let same = a == c && b == d;
            prop_assert_eq!(
                candidate_metabolite_id(&a, Some(b.as_str())) == candidate_metabolite_id(&c, Some(d.as_str())),
                same
            );
            prop_assert_eq!(
                replicate_node_id(&candidate_metabolite_id(&a, None), &candidate_reaction_id(&b))
                    == replicate_node_id(&candidate_metabolite_id(&c, None), &candidate_reaction_id(&d)),
                same
            );
        }

        #[test]
        fn reactant_link_ids_are_injective(
            a in "[a-z_:%]{1,4}",
            b in "[a-z_:%]{1,4}",
            c in "[a-z_:%]{1,4}",
            d in "[a-z_:%]{1,4}",
        ) {
            let first = link_id(
                &candidate_metabolite_id(&a, Some("c")),
                &candidate_reaction_id(&b),
                Role::Reactant,
            );
            let second = link_id(
                &candidate_metabolite_id(&c, Some("c")),
                &candidate_reaction_id(&d),
                Role::Reactant,
            );
            prop_assert_eq!(first == second, a == c && b == d);
        }

        #[test]
        fn link_ids_are_stable(source in "[a-z0-9]{1,8}", target in "[a-z0-9]{1,8}") {
            prop_assert_eq!(
                link_id(&source, &target, Role::Reactant),
                link_id(&source, &target, Role::Reactant)
            );
            prop_assert_ne!(
                link_id(&source, &target, Role::Reactant),
                link_id(&source, &target, Role::Product)
            );
        }
    }
}
