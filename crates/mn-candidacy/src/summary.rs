//! Summaries for the candidates menu.
//!
//! A metabolite candidate counts the reaction candidates it takes part in; a
//! reaction candidate counts its distinct metabolite candidates.

use std::collections::BTreeMap;

use mn_model::Model;
use mn_sets::{SetsMap, SortSpec, SummaryEntry, menu::prepare_entries};
use serde::{Deserialize, Serialize};

use crate::candidates::{Candidates, Category, collect_candidates};

pub type CandidatesSearches = BTreeMap<Category, String>;
pub type CandidatesSorts = BTreeMap<Category, SortSpec>;
pub type CandidatesSummaries = BTreeMap<Category, Vec<SummaryEntry>>;

/// Candidates together with their menu summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidatesCollection {
    pub candidates: Candidates,
    pub summaries: CandidatesSummaries,
}

pub fn create_initial_candidates_searches() -> CandidatesSearches {
    Category::ALL
        .into_iter()
        .map(|category| (category, String::new()))
        .collect()
}

pub fn create_initial_candidates_sorts() -> CandidatesSorts {
    Category::ALL
        .into_iter()
        .map(|category| (category, SortSpec::default()))
        .collect()
}

/// Collect candidates and prepare the summaries of the candidates menu.
pub fn collect_candidates_prepare_summaries(
    filter_reactions: &SetsMap,
    model: &Model,
    compartmentalization: bool,
    searches: &CandidatesSearches,
    sorts: &CandidatesSorts,
) -> CandidatesCollection {
    let candidates = collect_candidates(filter_reactions, model, compartmentalization);
    let summaries = prepare_candidates_summaries(&candidates, model, searches, sorts);
    CandidatesCollection {
        candidates,
        summaries,
    }
}

pub fn prepare_candidates_summaries(
    candidates: &Candidates,
    model: &Model,
    searches: &CandidatesSearches,
    sorts: &CandidatesSorts,
) -> CandidatesSummaries {
    Category::ALL
        .into_iter()
        .map(|category| {
            let entries = category_entries(candidates, model, category);
            let search = searches.get(&category).map(String::as_str).unwrap_or("");
            let spec = sorts.get(&category).copied().unwrap_or_default();
            (category, prepare_entries(entries, search, spec))
        })
        .collect()
}

fn category_entries(candidates: &Candidates, model: &Model, category: Category) -> Vec<SummaryEntry> {
    let total = candidates.len(category);
    match category {
        Category::Metabolites => candidates
            .metabolites
            .values()
            .map(|candidate| SummaryEntry {
                value: candidate.identifier.clone(),
                name: match &candidate.compartment {
                    Some(compartment) => format!(
                        "{} ({})",
                        candidate.name,
                        model.compartment_name(compartment)
                    ),
                    None => candidate.name.clone(),
                },
                count: candidate.reactions.len(),
                total,
            })
            .collect(),
        Category::Reactions => candidates
            .reactions
            .values()
            .map(|candidate| SummaryEntry {
                value: candidate.identifier.clone(),
                name: candidate.name.clone(),
                count: candidate.metabolites().len(),
                total,
            })
            .collect(),
    }
}
