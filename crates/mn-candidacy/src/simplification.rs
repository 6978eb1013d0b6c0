//! Simplification designations of candidates.
//!
//! A candidate holds at most one designation. Omission removes the candidate
//! from the network. Replication, for metabolites only, draws a separate node
//! per reaction instead of one shared node. Designations are either default,
//! created from the list of ubiquitous metabolites, or custom, toggled by the
//! user. Defaults never overwrite custom designations.

use std::collections::BTreeMap;

use mn_core::{CandidateId, MetaboliteId};
use serde::{Deserialize, Serialize};

use crate::candidates::{Candidates, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Omission,
    Replication,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Omission => "omission",
            Method::Replication => "replication",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "omission" | "omit" => Some(Method::Omission),
            "replication" | "replicate" => Some(Method::Replication),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simplification {
    pub method: Method,
    /// Created automatically rather than by the user.
    pub default: bool,
}

impl Simplification {
    pub fn custom(method: Method) -> Self {
        Self {
            method,
            default: false,
        }
    }

    pub fn default_replication() -> Self {
        Self {
            method: Method::Replication,
            default: true,
        }
    }
}

pub type SimplificationsMap = BTreeMap<CandidateId, Simplification>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simplifications {
    pub reactions: SimplificationsMap,
    pub metabolites: SimplificationsMap,
}

impl Simplifications {
    pub fn map(&self, category: Category) -> &SimplificationsMap {
        match category {
            Category::Metabolites => &self.metabolites,
            Category::Reactions => &self.reactions,
        }
    }

    fn map_mut(&mut self, category: Category) -> &mut SimplificationsMap {
        match category {
            Category::Metabolites => &mut self.metabolites,
            Category::Reactions => &mut self.reactions,
        }
    }

    pub fn method(&self, category: Category, identifier: &str) -> Option<Method> {
        self.map(category).get(identifier).map(|s| s.method)
    }

    pub fn is_omitted(&self, category: Category, identifier: &str) -> bool {
        self.method(category, identifier) == Some(Method::Omission)
    }

    pub fn is_replicated(&self, identifier: &str) -> bool {
        self.method(Category::Metabolites, identifier) == Some(Method::Replication)
    }
}

fn is_default_candidate(metabolite: &MetaboliteId, defaults: &[MetaboliteId]) -> bool {
    defaults.contains(metabolite)
}

/// Add default replication for every metabolite candidate whose metabolite is
/// in `defaults` and which carries no designation yet.
pub fn create_include_default_simplifications(
    defaults: &[MetaboliteId],
    candidates: &Candidates,
    simplifications: &Simplifications,
) -> Simplifications {
    let mut novel = simplifications.clone();
    for candidate in candidates.metabolites.values() {
        if is_default_candidate(&candidate.metabolite, defaults) {
            novel
                .metabolites
                .entry(candidate.identifier.clone())
                .or_insert_with(Simplification::default_replication);
        }
    }
    novel
}

/// Drop every default designation, keeping custom ones.
pub fn remove_default_simplifications(simplifications: &Simplifications) -> Simplifications {
    let mut novel = simplifications.clone();
    novel.reactions.retain(|_, s| !s.default);
    novel.metabolites.retain(|_, s| !s.default);
    novel
}

/// Toggle the designation of one candidate.
///
/// The same method as the current designation removes it; any other method
/// replaces it with a custom designation. Unknown candidates and replication
/// of reactions leave the designations unchanged.
pub fn change_simplifications(
    identifier: &str,
    category: Category,
    method: Method,
    candidates: &Candidates,
    simplifications: &Simplifications,
) -> Simplifications {
    let mut novel = simplifications.clone();
    if !candidates.contains(category, identifier)
        || (category == Category::Reactions && method == Method::Replication)
    {
        return novel;
    }
    let map = novel.map_mut(category);
    match map.get(identifier) {
        Some(current) if current.method == method => {
            map.remove(identifier);
        }
        _ => {
            map.insert(identifier.to_string(), Simplification::custom(method));
        }
    }
    novel
}

/// Whether every metabolite candidate of a default metabolite is designated.
pub fn determine_default_simplifications(
    defaults: &[MetaboliteId],
    candidates: &Candidates,
    simplifications: &Simplifications,
) -> bool {
    candidates
        .metabolites
        .values()
        .filter(|candidate| is_default_candidate(&candidate.metabolite, defaults))
        .all(|candidate| simplifications.metabolites.contains_key(&candidate.identifier))
}

/// Drop designations whose candidates no longer exist.
pub fn restore_simplifications(
    candidates: &Candidates,
    simplifications: &Simplifications,
) -> Simplifications {
    let mut novel = simplifications.clone();
    novel
        .reactions
        .retain(|identifier, _| candidates.reactions.contains_key(identifier));
    novel
        .metabolites
        .retain(|identifier, _| candidates.metabolites.contains_key(identifier));
    novel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::collect_candidates;
    use mn_model::{Model, Reaction};
    use mn_sets::{
        create_initial_sets_filters, determine_current_entities_sets, determine_total_entities_sets,
    };

    fn candidates(compartmentalization: bool) -> Candidates {
        let model = Model::new()
            .with_reaction(
                Reaction::new("R1", "R1")
                    .reactant("glc", "c", 1.0)
                    .reactant("atp", "c", 1.0)
                    .product("g6p", "c", 1.0)
                    .product("adp", "c", 1.0),
            )
            .with_reaction(
                Reaction::new("R2", "R2")
                    .reactant("atp", "m", 1.0)
                    .product("adp", "m", 1.0),
            );
        let total = determine_total_entities_sets(&model.reactions);
        let current =
            determine_current_entities_sets(&create_initial_sets_filters(), &total, &model.reactions);
        collect_candidates(&current.filter_reactions, &model, compartmentalization)
    }

    fn defaults() -> Vec<MetaboliteId> {
        vec!["atp".to_string(), "adp".to_string(), "h2o".to_string()]
    }

    #[test]
    fn defaults_cover_every_compartment() {
        let candidates = candidates(true);
        let simplifications =
            create_include_default_simplifications(&defaults(), &candidates, &Simplifications::default());
        let ids: Vec<&str> = simplifications.metabolites.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["adp:c", "adp:m", "atp:c", "atp:m"]);
        assert!(simplifications.metabolites.values().all(|s| s.default));
        assert!(determine_default_simplifications(&defaults(), &candidates, &simplifications));
    }

    #[test]
    fn defaults_never_overwrite_custom() {
        let candidates = candidates(false);
        let custom = change_simplifications(
            "atp",
            Category::Metabolites,
            Method::Omission,
            &candidates,
            &Simplifications::default(),
        );
        let with_defaults = create_include_default_simplifications(&defaults(), &candidates, &custom);
        assert_eq!(
            with_defaults.metabolites["atp"],
            Simplification::custom(Method::Omission)
        );
        assert_eq!(
            with_defaults.metabolites["adp"],
            Simplification::default_replication()
        );

        let removed = remove_default_simplifications(&with_defaults);
        assert_eq!(removed, custom);
    }

    #[test]
    fn determine_defaults_false_when_one_missing() {
        let candidates = candidates(false);
        let simplifications =
            create_include_default_simplifications(&defaults(), &candidates, &Simplifications::default());
        let toggled = change_simplifications(
            "adp",
            Category::Metabolites,
            Method::Replication,
            &candidates,
            &simplifications,
        );
        assert!(!toggled.metabolites.contains_key("adp"));
        assert!(!determine_default_simplifications(&defaults(), &candidates, &toggled));
    }

    #[test]
    fn determine_defaults_vacuous() {
        let candidates = candidates(false);
        assert!(determine_default_simplifications(
            &["nothing".to_string()],
            &candidates,
            &Simplifications::default()
        ));
    }

    #[test]
    fn change_replaces_other_method() {
        let candidates = candidates(false);
        let replicated = change_simplifications(
            "glc",
            Category::Metabolites,
            Method::Replication,
            &candidates,
            &Simplifications::default(),
        );
        let omitted = change_simplifications(
            "glc",
            Category::Metabolites,
            Method::Omission,
            &candidates,
            &replicated,
        );
        assert_eq!(omitted.method(Category::Metabolites, "glc"), Some(Method::Omission));
        assert_eq!(omitted.metabolites.len(), 1);
    }

    #[test]
    fn invalid_changes_are_ignored() {
        let candidates = candidates(false);
        let none = Simplifications::default();
        let unknown =
            change_simplifications("xyz", Category::Metabolites, Method::Omission, &candidates, &none);
        assert_eq!(unknown, none);
        let reaction_replication =
            change_simplifications("R1", Category::Reactions, Method::Replication, &candidates, &none);
        assert_eq!(reaction_replication, none);
        let reaction_omission =
            change_simplifications("R1", Category::Reactions, Method::Omission, &candidates, &none);
        assert!(reaction_omission.is_omitted(Category::Reactions, "R1"));
    }

    #[test]
    fn restore_drops_stale_designations() {
        let compartmental = candidates(true);
        let simplifications = create_include_default_simplifications(
            &defaults(),
            &compartmental,
            &Simplifications::default(),
        );
        let restored = restore_simplifications(&candidates(false), &simplifications);
        assert!(restored.metabolites.is_empty());
    }

    #[test]
    fn method_parse() {
        assert_eq!(Method::parse("omit"), Some(Method::Omission));
        assert_eq!(Method::parse("Replication"), Some(Method::Replication));
        assert_eq!(Method::parse("merge"), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        const IDS: [&str; 4] = ["glc", "atp", "g6p", "adp"];

        fn arb_method() -> impl Strategy<Value = Method> {
            prop_oneof![Just(Method::Omission), Just(Method::Replication)]
        }

        proptest! {
            #[test]
            fn toggle_twice_restores_custom_map(
                seed in proptest::collection::vec((0..IDS.len(), arb_method()), 0..4),
                index in 0..IDS.len(),
                method in arb_method(),
            ) {
                let candidates = candidates(false);
                let mut start = Simplifications::default();
                for (i, m) in seed {
                    start.metabolites.insert(IDS[i].to_string(), Simplification::custom(m));
                }
                let once = change_simplifications(IDS[index], Category::Metabolites, method, &candidates, &start);
                let twice = change_simplifications(IDS[index], Category::Metabolites, method, &candidates, &once);
                // From a different method the first toggle replaces, so two
                // toggles land on "absent" rather than the start.
                match start.method(Category::Metabolites, IDS[index]) {
                    Some(current) if current != method => {
                        prop_assert!(!twice.metabolites.contains_key(IDS[index]));
                    }
                    _ => prop_assert_eq!(twice, start),
                }
            }
        }
    }
}
