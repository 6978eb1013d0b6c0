//! Application state and the typed updates submitted to it.
//!
//! Actions never mutate the state. Each one reads a snapshot and returns a
//! `StateUpdate` naming the attributes it replaces; `AppState::submit`
//! swaps those attributes in wholesale.

use mn_candidacy::{Candidates, CandidatesSearches, CandidatesSorts, CandidatesSummaries, Simplifications};
use mn_core::NodeId;
use mn_model::{Model, ReferenceType};
use mn_network::{NetworkElements, NetworkSummary};
use mn_sets::{
    CurrentEntitiesSets, Measurement, MeasurementSummary, MeasurementsSort,
    MetabolitesMeasurements, SetsCardinalitiesSummaries, SetsEntities, SetsFilters, SetsSearches,
    SetsSorts, TotalEntitiesSets,
};
use serde::Serialize;

use crate::config::{ExplorationConfig, QueryControls};

/// Nodes picked in the query controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuerySelections {
    pub rogue_focus: Option<NodeId>,
    pub proximity_focus: Option<NodeId>,
    pub path_source: Option<NodeId>,
    pub path_target: Option<NodeId>,
    pub connection_targets: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppState {
    // Immutable inputs
    #[serde(skip)]
    pub model: Model,
    pub default_simplifications_metabolites: Vec<String>,
    pub total_sets: TotalEntitiesSets,

    // Sets
    pub sets_filters: SetsFilters,
    pub current_sets: CurrentEntitiesSets,
    pub sets_entities: SetsEntities,
    pub sets_filter: bool,
    pub sets_searches: SetsSearches,
    pub sets_sorts: SetsSorts,
    pub sets_summaries: SetsCardinalitiesSummaries,

    // Candidates
    pub compartmentalization: bool,
    pub default_simplifications: bool,
    pub candidates: Candidates,
    pub candidates_searches: CandidatesSearches,
    pub candidates_sorts: CandidatesSorts,
    pub candidates_summaries: CandidatesSummaries,
    pub simplifications: Simplifications,

    // Network
    pub network: NetworkElements,
    pub network_summary: NetworkSummary,
    pub subnetwork: NetworkElements,
    pub subnetwork_summary: NetworkSummary,

    // Measurements
    pub measurement_reference: ReferenceType,
    pub measurements: Vec<Measurement>,
    pub metabolites_measurements: MetabolitesMeasurements,
    pub measurements_sort: MeasurementsSort,
    pub measurements_summaries: Vec<MeasurementSummary>,

    // Query
    pub query: QueryControls,
    pub selections: QuerySelections,
}

impl AppState {
    /// An empty state for a model, before anything is derived.
    pub(crate) fn blank(model: Model, config: &ExplorationConfig) -> Self {
        Self {
            model,
            default_simplifications_metabolites: config.default_simplifications_metabolites.clone(),
            total_sets: TotalEntitiesSets::default(),
            sets_filters: SetsFilters::new(),
            current_sets: CurrentEntitiesSets::default(),
            sets_entities: config.sets_entities,
            sets_filter: config.sets_filter,
            sets_searches: SetsSearches::new(),
            sets_sorts: config.sets_sorts.clone(),
            sets_summaries: SetsCardinalitiesSummaries::default(),
            compartmentalization: config.compartmentalization,
            default_simplifications: config.default_simplifications,
            candidates: Candidates::default(),
            candidates_searches: CandidatesSearches::new(),
            candidates_sorts: config.candidates_sorts.clone(),
            candidates_summaries: CandidatesSummaries::new(),
            simplifications: Simplifications::default(),
            network: NetworkElements::new(),
            network_summary: NetworkSummary::default(),
            subnetwork: NetworkElements::new(),
            subnetwork_summary: NetworkSummary::default(),
            measurement_reference: config.measurement_reference,
            measurements: Vec::new(),
            metabolites_measurements: MetabolitesMeasurements::new(),
            measurements_sort: config.measurements_sort,
            measurements_summaries: Vec::new(),
            query: config.query,
            selections: QuerySelections::default(),
        }
    }

    /// Replace every attribute present in the update.
    pub fn submit(&mut self, update: StateUpdate) {
        macro_rules! replace {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = update.$field {
                    self.$field = value;
                })*
            };
        }
        replace!(
            total_sets,
            sets_filters,
            current_sets,
            sets_entities,
            sets_filter,
            sets_searches,
            sets_sorts,
            sets_summaries,
            compartmentalization,
            default_simplifications,
            candidates,
            candidates_searches,
            candidates_sorts,
            candidates_summaries,
            simplifications,
            network,
            network_summary,
            subnetwork,
            subnetwork_summary,
            measurement_reference,
            measurements,
            metabolites_measurements,
            measurements_sort,
            measurements_summaries,
            query,
            selections,
        );
    }
}

/// Attributes an action replaces. `None` leaves an attribute as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub total_sets: Option<TotalEntitiesSets>,
    pub sets_filters: Option<SetsFilters>,
    pub current_sets: Option<CurrentEntitiesSets>,
    pub sets_entities: Option<SetsEntities>,
    pub sets_filter: Option<bool>,
    pub sets_searches: Option<SetsSearches>,
    pub sets_sorts: Option<SetsSorts>,
    pub sets_summaries: Option<SetsCardinalitiesSummaries>,
    pub compartmentalization: Option<bool>,
    pub default_simplifications: Option<bool>,
    pub candidates: Option<Candidates>,
    pub candidates_searches: Option<CandidatesSearches>,
    pub candidates_sorts: Option<CandidatesSorts>,
    pub candidates_summaries: Option<CandidatesSummaries>,
    pub simplifications: Option<Simplifications>,
    pub network: Option<NetworkElements>,
    pub network_summary: Option<NetworkSummary>,
    pub subnetwork: Option<NetworkElements>,
    pub subnetwork_summary: Option<NetworkSummary>,
    pub measurement_reference: Option<ReferenceType>,
    pub measurements: Option<Vec<Measurement>>,
    pub metabolites_measurements: Option<MetabolitesMeasurements>,
    pub measurements_sort: Option<MeasurementsSort>,
    pub measurements_summaries: Option<Vec<MeasurementSummary>>,
    pub query: Option<QueryControls>,
    pub selections: Option<QuerySelections>,
}

impl StateUpdate {
    /// An update that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge another update into this one; fields of `other` win.
    pub fn merge(mut self, other: StateUpdate) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            total_sets,
            sets_filters,
            current_sets,
            sets_entities,
            sets_filter,
            sets_searches,
            sets_sorts,
            sets_summaries,
            compartmentalization,
            default_simplifications,
            candidates,
            candidates_searches,
            candidates_sorts,
            candidates_summaries,
            simplifications,
            network,
            network_summary,
            subnetwork,
            subnetwork_summary,
            measurement_reference,
            measurements,
            metabolites_measurements,
            measurements_sort,
            measurements_summaries,
            query,
            selections,
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_replaces_only_present_fields() {
        let config = ExplorationConfig::default();
        let mut state = AppState::blank(Model::new(), &config);
        let update = StateUpdate {
            compartmentalization: Some(true),
            sets_filter: Some(true),
            ..StateUpdate::none()
        };
        state.submit(update);
        assert!(state.compartmentalization);
        assert!(state.sets_filter);
        assert_eq!(state.default_simplifications, config.default_simplifications);
    }

    #[test]
    fn merge_prefers_later_fields() {
        let first = StateUpdate {
            sets_filter: Some(true),
            compartmentalization: Some(true),
            ..StateUpdate::none()
        };
        let second = StateUpdate {
            compartmentalization: Some(false),
            ..StateUpdate::none()
        };
        let merged = first.merge(second);
        assert_eq!(merged.sets_filter, Some(true));
        assert_eq!(merged.compartmentalization, Some(false));
        assert!(!merged.is_empty());
        assert!(StateUpdate::none().is_empty());
    }
}
