//! Derivation chains shared by the actions.
//!
//! filters -> current sets -> summaries -> candidates -> simplifications ->
//! network -> subnetwork

use mn_candidacy::{
    Candidates, Simplifications, collect_candidates_prepare_summaries,
    create_include_default_simplifications, create_initial_candidates_searches,
    restore_simplifications,
};
use mn_model::Model;
use mn_network::{create_network_elements, determine_network_summary};
use mn_query::restore_subnetwork;
use mn_sets::{
    SetsFilters, SetsMap, create_initial_sets_filters,
    create_initial_sets_searches, determine_current_entities_sets,
    determine_sets_cardinalities_summaries, determine_total_entities_sets,
};
use tracing::info;

use crate::config::ExplorationConfig;
use crate::error::AppResult;
use crate::state::{AppState, QuerySelections, StateUpdate};

/// Derive the whole state of a session from a model and its settings.
pub fn initialize_state(model: Model, config: &ExplorationConfig) -> AppResult<AppState> {
    let mut state = AppState::blank(model, config);
    state.total_sets = determine_total_entities_sets(&state.model.reactions);
    state.sets_searches = create_initial_sets_searches();
    state.candidates_searches = create_initial_candidates_searches();

    let update = derive_from_filters(&state, &create_initial_sets_filters())?;
    state.submit(update);

    info!(
        reactions = state.total_sets.reactions.len(),
        metabolites = state.total_sets.metabolites.len(),
        candidates_reactions = state.candidates.reactions.len(),
        candidates_metabolites = state.candidates.metabolites.len(),
        nodes = state.network_summary.nodes,
        links = state.network_summary.links,
        "initialized exploration"
    );
    Ok(state)
}

/// Everything downstream of a change of filters.
pub(crate) fn derive_from_filters(state: &AppState, filters: &SetsFilters) -> AppResult<StateUpdate> {
    let current =
        determine_current_entities_sets(filters, &state.total_sets, &state.model.reactions);
    let sets_summaries = determine_sets_cardinalities_summaries(
        state.sets_entities,
        state.sets_filter,
        &current,
        &state.sets_searches,
        &state.sets_sorts,
        &state.model,
    );
    let candidacy = derive_candidacy(
        state,
        &current.filter_reactions,
        state.compartmentalization,
        state.default_simplifications,
    )?;
    Ok(StateUpdate {
        sets_filters: Some(filters.clone()),
        current_sets: Some(current),
        sets_summaries: Some(sets_summaries),
        ..StateUpdate::none()
    }
    .merge(candidacy))
}

/// Everything downstream of a change of candidates.
///
/// Designations of vanished candidates are dropped; defaults are included
/// again when enabled.
pub(crate) fn derive_candidacy(
    state: &AppState,
    filter_reactions: &SetsMap,
    compartmentalization: bool,
    default_simplifications: bool,
) -> AppResult<StateUpdate> {
    let collection = collect_candidates_prepare_summaries(
        filter_reactions,
        &state.model,
        compartmentalization,
        &state.candidates_searches,
        &state.candidates_sorts,
    );
    let restored = restore_simplifications(&collection.candidates, &state.simplifications);
    let simplifications = if default_simplifications {
        create_include_default_simplifications(
            &state.default_simplifications_metabolites,
            &collection.candidates,
            &restored,
        )
    } else {
        restored
    };
    let network = derive_network(state, &collection.candidates, &simplifications)?;
    Ok(StateUpdate {
        compartmentalization: Some(compartmentalization),
        candidates: Some(collection.candidates),
        candidates_summaries: Some(collection.summaries),
        simplifications: Some(simplifications),
        ..StateUpdate::none()
    }
    .merge(network))
}

/// Network, subnetwork and their summaries for given candidates and
/// designations. The subnetwork restarts from the current combination's
/// baseline and query selections are cleared.
pub(crate) fn derive_network(
    state: &AppState,
    candidates: &Candidates,
    simplifications: &Simplifications,
) -> AppResult<StateUpdate> {
    let network = create_network_elements(candidates, simplifications)?;
    let subnetwork = restore_subnetwork(state.query.combination, &network);
    Ok(StateUpdate {
        network_summary: Some(determine_network_summary(&network)),
        subnetwork_summary: Some(determine_network_summary(&subnetwork)),
        network: Some(network),
        subnetwork: Some(subnetwork),
        selections: Some(QuerySelections::default()),
        ..StateUpdate::none()
    })
}
