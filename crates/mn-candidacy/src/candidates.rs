//! Consolidation of filtered entities into candidates.

use std::collections::BTreeMap;

use mn_core::{
    CandidateId, CompartmentId, MetaboliteId, ReactionId, Role, candidate_metabolite_id,
    candidate_reaction_id,
};
use mn_model::Model;
use mn_sets::SetsMap;
use serde::{Deserialize, Serialize};

/// Category of candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Metabolites,
    Reactions,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Metabolites, Category::Reactions];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Metabolites => "metabolites",
            Category::Reactions => "reactions",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "metabolites" | "metabolite" => Some(Category::Metabolites),
            "reactions" | "reaction" => Some(Category::Reactions),
            _ => None,
        }
    }
}

/// Participant of a candidate reaction, resolved to its metabolite candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateParticipant {
    pub metabolite: CandidateId,
    pub role: Role,
    pub compartment: CompartmentId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateReaction {
    pub identifier: CandidateId,
    pub reaction: ReactionId,
    pub name: String,
    pub reversibility: bool,
    pub participants: Vec<CandidateParticipant>,
}

impl CandidateReaction {
    /// Distinct metabolite candidates among the participants.
    pub fn metabolites(&self) -> Vec<&CandidateId> {
        let mut metabolites: Vec<&CandidateId> = Vec::new();
        for participant in &self.participants {
            if !metabolites.contains(&&participant.metabolite) {
                metabolites.push(&participant.metabolite);
            }
        }
        metabolites
    }
}

/// Metabolite candidate.
///
/// `compartment` is set only under compartmentalization. `compartments` lists
/// every compartment the candidate stands for: exactly one when
/// compartmentalized, all compartments of its occurrences otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMetabolite {
    pub identifier: CandidateId,
    pub metabolite: MetaboliteId,
    pub name: String,
    pub compartment: Option<CompartmentId>,
    pub compartments: Vec<CompartmentId>,
    pub reactions: Vec<CandidateId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidates {
    pub reactions: BTreeMap<CandidateId, CandidateReaction>,
    pub metabolites: BTreeMap<CandidateId, CandidateMetabolite>,
}

impl Candidates {
    pub fn contains(&self, category: Category, identifier: &str) -> bool {
        match category {
            Category::Metabolites => self.metabolites.contains_key(identifier),
            Category::Reactions => self.reactions.contains_key(identifier),
        }
    }

    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Metabolites => self.metabolites.len(),
            Category::Reactions => self.reactions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty() && self.metabolites.is_empty()
    }
}

/// Collect candidates from the filter sets of reactions.
///
/// A participant is carried over only when its metabolite is still a partner
/// of the filtered reaction and its compartment passed the filters.
pub fn collect_candidates(
    filter_reactions: &SetsMap,
    model: &Model,
    compartmentalization: bool,
) -> Candidates {
    let mut candidates = Candidates::default();

    for record in filter_reactions.values() {
        let Some(reaction) = model.reactions.get(&record.identifier) else {
            continue;
        };
        let mut candidate = CandidateReaction {
            identifier: candidate_reaction_id(&reaction.identifier),
            reaction: reaction.identifier.clone(),
            name: reaction.name.clone(),
            reversibility: reaction.reversibility,
            participants: Vec::new(),
        };

        for participant in &reaction.participants {
            if !record.partners.contains(&participant.metabolite)
                || !record.compartments.contains(&participant.compartment)
            {
                continue;
            }
            let compartment = compartmentalization.then_some(participant.compartment.as_str());
            let identifier = candidate_metabolite_id(&participant.metabolite, compartment);

            let metabolite = candidates
                .metabolites
                .entry(identifier.clone())
                .or_insert_with(|| CandidateMetabolite {
                    identifier: identifier.clone(),
                    metabolite: participant.metabolite.clone(),
                    name: model.metabolite_name(&participant.metabolite).to_string(),
                    compartment: compartment.map(str::to_string),
                    compartments: Vec::new(),
                    reactions: Vec::new(),
                });
            push_unique(&mut metabolite.compartments, &participant.compartment);
            push_unique(&mut metabolite.reactions, &candidate.identifier);

            let duplicate = candidate
                .participants
                .iter()
                .any(|p| p.metabolite == identifier && p.role == participant.role);
            if !duplicate {
                candidate.participants.push(CandidateParticipant {
                    metabolite: identifier,
                    role: participant.role,
                    compartment: participant.compartment.clone(),
                });
            }
        }

        candidates
            .reactions
            .insert(candidate.identifier.clone(), candidate);
    }

    candidates
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
