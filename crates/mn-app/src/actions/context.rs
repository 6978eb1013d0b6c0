//! Actions of the candidates menu: compartmentalization, simplifications,
//! searches and sorts.

use mn_candidacy::{
    Category, Method, change_simplifications,
    create_include_default_simplifications, determine_default_simplifications,
    prepare_candidates_summaries, remove_default_simplifications,
};
use mn_sets::SortSpec;
use tracing::debug;

use super::derive::{derive_candidacy, derive_network};
use crate::error::AppResult;
use crate::state::{AppState, StateUpdate};

/// Toggle compartmentalization and rebuild candidates and network.
pub fn change_compartmentalization(state: &AppState) -> AppResult<StateUpdate> {
    derive_candidacy(
        state,
        &state.current_sets.filter_reactions,
        !state.compartmentalization,
        state.default_simplifications,
    )
}

/// Toggle the default simplifications of ubiquitous metabolites.
pub fn change_default_simplifications(state: &AppState) -> AppResult<StateUpdate> {
    let enabled = !state.default_simplifications;
    let simplifications = if enabled {
        create_include_default_simplifications(
            &state.default_simplifications_metabolites,
            &state.candidates,
            &state.simplifications,
        )
    } else {
        remove_default_simplifications(&state.simplifications)
    };
    let network = derive_network(state, &state.candidates, &simplifications)?;
    Ok(StateUpdate {
        default_simplifications: Some(enabled),
        simplifications: Some(simplifications),
        ..StateUpdate::none()
    }
    .merge(network))
}

/// Toggle one candidate's designation.
pub fn change_simplification(
    state: &AppState,
    identifier: &str,
    category: &str,
    method: &str,
) -> AppResult<StateUpdate> {
    let (Some(category), Some(method)) = (Category::parse(category), Method::parse(method)) else {
        debug!(category, method, "ignoring simplification of unknown kind");
        return Ok(StateUpdate::none());
    };
    let simplifications = change_simplifications(
        identifier,
        category,
        method,
        &state.candidates,
        &state.simplifications,
    );
    if simplifications == state.simplifications {
        debug!(identifier, "simplification left unchanged");
        return Ok(StateUpdate::none());
    }
    let default_simplifications = determine_default_simplifications(
        &state.default_simplifications_metabolites,
        &state.candidates,
        &simplifications,
    );
    let network = derive_network(state, &state.candidates, &simplifications)?;
    Ok(StateUpdate {
        default_simplifications: Some(default_simplifications),
        simplifications: Some(simplifications),
        ..StateUpdate::none()
    }
    .merge(network))
}

/// Designate a candidate with a method, leaving an existing identical
/// designation in place.
pub fn ensure_simplification(
    state: &AppState,
    identifier: &str,
    category: &str,
    method: &str,
) -> AppResult<StateUpdate> {
    if let (Some(kind), Some(wanted)) = (Category::parse(category), Method::parse(method)) {
        if state.simplifications.method(kind, identifier) == Some(wanted) {
            debug!(identifier, method, "designation already in place");
            return Ok(StateUpdate::none());
        }
    }
    change_simplification(state, identifier, category, method)
}

pub fn change_candidates_search(state: &AppState, category: &str, search: &str) -> StateUpdate {
    let Some(category) = Category::parse(category) else {
        debug!(category, "ignoring search on unknown category");
        return StateUpdate::none();
    };
    let mut searches = state.candidates_searches.clone();
    searches.insert(category, search.to_string());
    let summaries =
        prepare_candidates_summaries(&state.candidates, &state.model, &searches, &state.candidates_sorts);
    StateUpdate {
        candidates_searches: Some(searches),
        candidates_summaries: Some(summaries),
        ..StateUpdate::none()
    }
}

pub fn change_candidates_sort(state: &AppState, category: &str, spec: SortSpec) -> StateUpdate {
    let Some(category) = Category::parse(category) else {
        debug!(category, "ignoring sort on unknown category");
        return StateUpdate::none();
    };
    let mut sorts = state.candidates_sorts.clone();
    sorts.insert(category, spec);
    let summaries =
        prepare_candidates_summaries(&state.candidates, &state.model, &state.candidates_searches, &sorts);
    StateUpdate {
        candidates_sorts: Some(sorts),
        candidates_summaries: Some(summaries),
        ..StateUpdate::none()
    }
}
