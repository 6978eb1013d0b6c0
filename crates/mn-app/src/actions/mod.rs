//! Actions, one per user intent.
//!
//! Each action is a function of the current state and the intent's
//! arguments, returning the `StateUpdate` to submit. Intents naming unknown
//! attributes, values, candidates or nodes return an empty update.

mod context;
mod derive;
mod measurement;
mod query;
mod sets;

pub use context::{
    change_candidates_search, change_candidates_sort, change_compartmentalization,
    change_default_simplifications, change_simplification, ensure_simplification,
};
pub use derive::initialize_state;
pub use measurement::{
    change_measurement_reference, change_measurements_sort, import_measurements,
    restore_measurements,
};
pub use query::{
    change_combination, change_connection_count, change_connection_targets, change_path_count,
    change_path_direction, change_proximity_depth, change_proximity_direction, change_query_type,
    exclude_connection_target, execute_proximity_expansion, execute_query, execute_rogue_union,
    include_connection_target, set_path_source, set_path_target, set_proximity_focus,
    set_rogue_focus,
};
pub use sets::{change_sets_entities, change_sets_filter, change_sets_filters, change_sets_search, change_sets_sort};
