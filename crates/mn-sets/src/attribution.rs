//! Attribution of reactions and metabolites to sets.
//!
//! A set is a value of an attribute: one compartment, or one process. Every
//! reaction belongs to the compartments of itself and its participants and to
//! its processes. Every metabolite belongs to the union of the sets of the
//! reactions that reference it.
//!
//! Three views exist for both kinds of entity:
//! - total: every entity, every value
//! - access: entities and values still reachable from the sets menu, where an
//!   attribute's own filter is ignored when deciding that attribute's values
//! - filter: entities and values that pass every filter strictly
//!
//! `filter ⊆ access ⊆ total` holds for entities and for values.

use std::collections::BTreeMap;

use mn_core::{MetaboliteId, ReactionId};
use mn_model::Reaction;
use serde::{Deserialize, Serialize};

/// Attribute by which entities belong to sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Compartments,
    Processes,
}

impl Attribute {
    pub const ALL: [Attribute; 2] = [Attribute::Compartments, Attribute::Processes];

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Compartments => "compartments",
            Attribute::Processes => "processes",
        }
    }

    /// Parse an attribute name. Unknown names yield `None`, which callers
    /// treat as "no filter".
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "compartments" | "compartment" => Some(Attribute::Compartments),
            "processes" | "process" => Some(Attribute::Processes),
            _ => None,
        }
    }
}

/// Sets to which one entity belongs.
///
/// `partners` holds the entities of the other kind: the metabolites of a
/// reaction, or the reactions of a metabolite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySets {
    pub identifier: String,
    pub partners: Vec<String>,
    pub compartments: Vec<String>,
    pub processes: Vec<String>,
}

impl EntitySets {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            partners: Vec::new(),
            compartments: Vec::new(),
            processes: Vec::new(),
        }
    }

    pub fn values(&self, attribute: Attribute) -> &[String] {
        match attribute {
            Attribute::Compartments => &self.compartments,
            Attribute::Processes => &self.processes,
        }
    }

    fn values_mut(&mut self, attribute: Attribute) -> &mut Vec<String> {
        match attribute {
            Attribute::Compartments => &mut self.compartments,
            Attribute::Processes => &mut self.processes,
        }
    }
}

/// Entity identifier -> sets of that entity.
pub type SetsMap = BTreeMap<String, EntitySets>;

/// Selected values per attribute. An absent attribute means no filter.
pub type SetsFilters = BTreeMap<Attribute, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalEntitiesSets {
    pub reactions: SetsMap,
    pub metabolites: SetsMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentEntitiesSets {
    pub access_reactions: SetsMap,
    pub access_metabolites: SetsMap,
    pub filter_reactions: SetsMap,
    pub filter_metabolites: SetsMap,
}

pub fn create_initial_sets_filters() -> SetsFilters {
    SetsFilters::new()
}

/// Determine the sets of every reaction and every metabolite.
pub fn determine_total_entities_sets(
    reactions: &BTreeMap<ReactionId, Reaction>,
) -> TotalEntitiesSets {
    let reactions_sets: SetsMap = reactions
        .values()
        .map(|reaction| (reaction.identifier.clone(), reaction_sets(reaction)))
        .collect();
    let metabolites_sets = derive_metabolites_sets(&reactions_sets);
    TotalEntitiesSets {
        reactions: reactions_sets,
        metabolites: metabolites_sets,
    }
}

fn reaction_sets(reaction: &Reaction) -> EntitySets {
    let mut record = EntitySets::new(reaction.identifier.clone());
    for compartment in reaction
        .compartments
        .iter()
        .chain(reaction.participants.iter().map(|p| &p.compartment))
    {
        push_unique(&mut record.compartments, compartment);
    }
    for process in &reaction.processes {
        push_unique(&mut record.processes, process);
    }
    for participant in &reaction.participants {
        push_unique(&mut record.partners, &participant.metabolite);
    }
    record
}

/// Derive metabolites' sets from reactions' sets.
///
/// Each metabolite collects the reactions that list it as a partner and the
/// union of those reactions' values.
fn derive_metabolites_sets(reactions_sets: &SetsMap) -> SetsMap {
    let mut metabolites: BTreeMap<MetaboliteId, EntitySets> = BTreeMap::new();
    for record in reactions_sets.values() {
        for metabolite in &record.partners {
            let entry = metabolites
                .entry(metabolite.clone())
                .or_insert_with(|| EntitySets::new(metabolite.clone()));
            push_unique(&mut entry.partners, &record.identifier);
            for attribute in Attribute::ALL {
                for value in record.values(attribute) {
                    push_unique(entry.values_mut(attribute), value);
                }
            }
        }
    }
    metabolites
}

/// Determine the access and filter views of entities' sets.
pub fn determine_current_entities_sets(
    filters: &SetsFilters,
    total: &TotalEntitiesSets,
    reactions: &BTreeMap<ReactionId, Reaction>,
) -> CurrentEntitiesSets {
    let mut access_reactions = SetsMap::new();
    let mut filter_reactions = SetsMap::new();

    for record in total.reactions.values() {
        if let Some(access) = access_record(record, filters) {
            access_reactions.insert(record.identifier.clone(), access);
        }
        if passes(record, filters, None) {
            let filtered = filter_record(record, filters, reactions.get(&record.identifier));
            filter_reactions.insert(record.identifier.clone(), filtered);
        }
    }

    let access_metabolites = derive_metabolites_sets(&access_reactions);
    let filter_metabolites = derive_metabolites_sets(&filter_reactions);

    CurrentEntitiesSets {
        access_reactions,
        access_metabolites,
        filter_reactions,
        filter_metabolites,
    }
}

/// Whether a record passes every active filter, optionally ignoring one
/// attribute. Values of one attribute combine by OR, attributes by AND.
fn passes(record: &EntitySets, filters: &SetsFilters, skip: Option<Attribute>) -> bool {
    filters
        .iter()
        .filter(|(attribute, selection)| Some(**attribute) != skip && !selection.is_empty())
        .all(|(attribute, selection)| {
            record
                .values(*attribute)
                .iter()
                .any(|value| selection.contains(value))
        })
}

fn access_record(record: &EntitySets, filters: &SetsFilters) -> Option<EntitySets> {
    let accessible: Vec<Attribute> = Attribute::ALL
        .into_iter()
        .filter(|attribute| passes(record, filters, Some(*attribute)))
        .collect();
    if accessible.is_empty() {
        return None;
    }
    let mut access = record.clone();
    for attribute in Attribute::ALL {
        if !accessible.contains(&attribute) {
            access.values_mut(attribute).clear();
        }
    }
    Some(access)
}

fn filter_record(
    record: &EntitySets,
    filters: &SetsFilters,
    reaction: Option<&Reaction>,
) -> EntitySets {
    let mut filtered = record.clone();
    for (attribute, selection) in filters.iter().filter(|(_, s)| !s.is_empty()) {
        filtered
            .values_mut(*attribute)
            .retain(|value| selection.contains(value));
    }

    // Participants only count in compartments that pass.
    if let (Some(selection), Some(reaction)) = (
        filters
            .get(&Attribute::Compartments)
            .filter(|s| !s.is_empty()),
        reaction,
    ) {
        filtered.partners.clear();
        for participant in &reaction.participants {
            if selection.contains(&participant.compartment) {
                push_unique(&mut filtered.partners, &participant.metabolite);
            }
        }
    }
    filtered
}

/// Toggle one value in the filter of an attribute.
///
/// Adds the value when absent, removes it when present. An attribute whose
/// selection becomes empty is dropped, so two toggles restore the original.
pub fn record_set_selection_filters(
    value: &str,
    attribute: Attribute,
    filters: &SetsFilters,
) -> SetsFilters {
    let mut novel = filters.clone();
    let selection = novel.entry(attribute).or_default();
    if let Some(position) = selection.iter().position(|v| v == value) {
        selection.remove(position);
    } else {
        selection.push(value.to_string());
    }
    if selection.is_empty() {
        novel.remove(&attribute);
    }
    novel
}

/// Whether a value is currently selected in the filter of an attribute.
pub fn determine_sets_filter(value: &str, attribute: Attribute, filters: &SetsFilters) -> bool {
    filters
        .get(&attribute)
        .is_some_and(|selection| selection.iter().any(|v| v == value))
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use mn_model::Reaction;
    use proptest::prelude::*;

    const COMPARTMENTS: [&str; 3] = ["c", "m", "e"];
    const PROCESSES: [&str; 3] = ["p1", "p2", "p3"];
    const METABOLITES: [&str; 5] = ["A", "B", "C", "D", "E"];

    fn arb_reactions() -> impl Strategy<Value = BTreeMap<ReactionId, Reaction>> {
        let participant = (0..METABOLITES.len(), 0..COMPARTMENTS.len(), any::<bool>());
        let reaction = (
            prop::collection::vec(participant, 1..4),
            prop::collection::vec(0..PROCESSES.len(), 0..2),
        );
        prop::collection::vec(reaction, 1..8).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (participants, processes))| {
                    let mut reaction = Reaction::new(format!("R{i}"), format!("R{i}"));
                    for (m, c, reactant) in participants {
                        reaction = if reactant {
                            reaction.reactant(METABOLITES[m], COMPARTMENTS[c], 1.0)
                        } else {
                            reaction.product(METABOLITES[m], COMPARTMENTS[c], 1.0)
                        };
                    }
                    for p in processes {
                        reaction = reaction.in_process(PROCESSES[p]);
                    }
                    (reaction.identifier.clone(), reaction)
                })
                .collect()
        })
    }

    fn arb_toggles() -> impl Strategy<Value = Vec<(Attribute, String)>> {
        prop::collection::vec(
            prop_oneof![
                (0..COMPARTMENTS.len()).prop_map(|i| (Attribute::Compartments, COMPARTMENTS[i].to_string())),
                (0..PROCESSES.len()).prop_map(|i| (Attribute::Processes, PROCESSES[i].to_string())),
            ],
            0..5,
        )
    }

    fn is_subset(inner: &SetsMap, outer: &SetsMap) -> bool {
        inner.iter().all(|(id, record)| {
            outer.get(id).is_some_and(|o| {
                Attribute::ALL.iter().all(|a| {
                    record.values(*a).iter().all(|v| o.values(*a).contains(v))
                }) && record.partners.iter().all(|p| o.partners.contains(p))
            })
        })
    }

    proptest! {
        #[test]
        fn filter_within_access_within_total(reactions in arb_reactions(), toggles in arb_toggles()) {
            let total = determine_total_entities_sets(&reactions);
            let mut filters = SetsFilters::new();
            for (attribute, value) in &toggles {
                filters = record_set_selection_filters(value, *attribute, &filters);
            }
            let current = determine_current_entities_sets(&filters, &total, &reactions);
            prop_assert!(is_subset(&current.filter_reactions, &current.access_reactions));
            prop_assert!(is_subset(&current.access_reactions, &total.reactions));
            prop_assert!(is_subset(&current.filter_metabolites, &current.access_metabolites));
            prop_assert!(is_subset(&current.access_metabolites, &total.metabolites));
        }

        #[test]
        fn double_toggle_restores_filters_and_sets(
            reactions in arb_reactions(),
            toggles in arb_toggles(),
            value in 0..COMPARTMENTS.len(),
        ) {
            let total = determine_total_entities_sets(&reactions);
            let mut filters = SetsFilters::new();
            for (attribute, value) in &toggles {
                filters = record_set_selection_filters(value, *attribute, &filters);
            }
            let before = determine_current_entities_sets(&filters, &total, &reactions);

            let value = COMPARTMENTS[value];
            let once = record_set_selection_filters(value, Attribute::Compartments, &filters);
            let twice = record_set_selection_filters(value, Attribute::Compartments, &once);
            prop_assert_eq!(&twice, &filters);
            let after = determine_current_entities_sets(&twice, &total, &reactions);
            prop_assert_eq!(&after, &before);
        }
    }
}
