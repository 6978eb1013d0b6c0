//! Cardinalities of sets.
//!
//! For the entity kind shown in the sets menu, count how many entities belong
//! to each value of each attribute. An entity counts once for every distinct
//! value it holds, so an entity in three compartments adds to three counts.

use std::collections::BTreeMap;

use mn_model::Model;
use serde::{Deserialize, Serialize};

use crate::attribution::{Attribute, CurrentEntitiesSets, SetsMap};
use crate::menu::{SortSpec, SummaryEntry, prepare_entries};

/// Kind of entity represented in the sets menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetsEntities {
    #[default]
    Metabolites,
    Reactions,
}

impl SetsEntities {
    pub fn toggled(self) -> Self {
        match self {
            SetsEntities::Metabolites => SetsEntities::Reactions,
            SetsEntities::Reactions => SetsEntities::Metabolites,
        }
    }
}

/// Attribute -> value -> count of entities.
pub type SetsCardinalities = BTreeMap<Attribute, BTreeMap<String, usize>>;
pub type SetsSearches = BTreeMap<Attribute, String>;
pub type SetsSorts = BTreeMap<Attribute, SortSpec>;
pub type SetsSummaries = BTreeMap<Attribute, Vec<SummaryEntry>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetsCardinalitiesSummaries {
    pub sets_cardinalities: SetsCardinalities,
    pub sets_summaries: SetsSummaries,
}

pub fn create_initial_sets_searches() -> SetsSearches {
    Attribute::ALL
        .into_iter()
        .map(|attribute| (attribute, String::new()))
        .collect()
}

pub fn create_initial_sets_sorts() -> SetsSorts {
    Attribute::ALL
        .into_iter()
        .map(|attribute| (attribute, SortSpec::default()))
        .collect()
}

/// Count entities per value of every attribute.
pub fn determine_sets_cardinalities(sets: &SetsMap) -> SetsCardinalities {
    let mut cardinalities: SetsCardinalities = Attribute::ALL
        .into_iter()
        .map(|attribute| (attribute, BTreeMap::new()))
        .collect();
    for record in sets.values() {
        for attribute in Attribute::ALL {
            let counts = cardinalities.entry(attribute).or_default();
            let mut seen: Vec<&String> = Vec::new();
            for value in record.values(attribute) {
                if seen.contains(&value) {
                    continue;
                }
                seen.push(value);
                *counts.entry(value.clone()).or_insert(0) += 1;
            }
        }
    }
    cardinalities
}

/// Determine cardinalities for the selected entity kind and prepare the
/// searched, sorted summaries of the sets menu.
///
/// `filter` selects the strict filter sets; otherwise the access sets are
/// counted.
pub fn determine_sets_cardinalities_summaries(
    entities: SetsEntities,
    filter: bool,
    current: &CurrentEntitiesSets,
    searches: &SetsSearches,
    sorts: &SetsSorts,
    model: &Model,
) -> SetsCardinalitiesSummaries {
    let sets = match (entities, filter) {
        (SetsEntities::Metabolites, true) => &current.filter_metabolites,
        (SetsEntities::Metabolites, false) => &current.access_metabolites,
        (SetsEntities::Reactions, true) => &current.filter_reactions,
        (SetsEntities::Reactions, false) => &current.access_reactions,
    };
    let sets_cardinalities = determine_sets_cardinalities(sets);
    let total = sets.len();

    let sets_summaries = sets_cardinalities
        .iter()
        .map(|(attribute, counts)| {
            let entries = counts
                .iter()
                .map(|(value, count)| SummaryEntry {
                    value: value.clone(),
                    name: value_name(model, *attribute, value).to_string(),
                    count: *count,
                    total,
                })
                .collect();
            let search = searches.get(attribute).map(String::as_str).unwrap_or("");
            let spec = sorts.get(attribute).copied().unwrap_or_default();
            (*attribute, prepare_entries(entries, search, spec))
        })
        .collect();

    SetsCardinalitiesSummaries {
        sets_cardinalities,
        sets_summaries,
    }
}

fn value_name<'a>(model: &'a Model, attribute: Attribute, value: &'a str) -> &'a str {
    match attribute {
        Attribute::Compartments => model.compartment_name(value),
        Attribute::Processes => model.process_name(value),
    }
}
