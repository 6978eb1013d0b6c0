//! Set membership of metabolic entities and the summaries built on it.
//!
//! # Architecture
//!
//! - **Attribution**: which compartments and processes every reaction and
//!   metabolite belongs to, in total and after the user's filters
//! - **Cardinality**: how many entities belong to each set, for the sets menu
//! - **Menu**: search and sort specifications shared with the candidates menu
//! - **Measurement**: measured values associated to metabolites through
//!   external database references
//!
//! Everything here is a pure function of its inputs. Nothing is mutated in
//! place; every derivation returns fresh maps.

pub mod attribution;
pub mod cardinality;
pub mod measurement;
pub mod menu;

pub use attribution::{
    Attribute, CurrentEntitiesSets, EntitySets, SetsFilters, SetsMap, TotalEntitiesSets,
    create_initial_sets_filters, determine_current_entities_sets, determine_sets_filter,
    determine_total_entities_sets, record_set_selection_filters,
};
pub use cardinality::{
    SetsCardinalities, SetsCardinalitiesSummaries, SetsEntities, SetsSearches, SetsSorts,
    SetsSummaries, create_initial_sets_searches, create_initial_sets_sorts,
    determine_sets_cardinalities, determine_sets_cardinalities_summaries,
};
pub use measurement::{
    Measurement, MeasurementCriterion, MeasurementSummary, MeasurementsSort, MetabolitesMeasurements,
    create_initial_measurements_sort, create_metabolites_measurements, prepare_measurements_summaries,
};
pub use menu::{SortCriterion, SortOrder, SortSpec, SummaryEntry};
