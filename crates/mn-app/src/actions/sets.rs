//! Actions of the sets menu.

use mn_sets::{
    Attribute, SetsCardinalitiesSummaries, SetsEntities, SetsSearches, SetsSorts, SortSpec,
    determine_sets_cardinalities_summaries, record_set_selection_filters,
};
use tracing::debug;

use super::derive::derive_from_filters;
use crate::error::AppResult;
use crate::state::{AppState, StateUpdate};

/// Toggle one value in the filter of an attribute and derive everything
/// downstream.
pub fn change_sets_filters(state: &AppState, attribute: &str, value: &str) -> AppResult<StateUpdate> {
    let Some(attribute) = Attribute::parse(attribute) else {
        debug!(attribute, "ignoring filter on unknown attribute");
        return Ok(StateUpdate::none());
    };
    let known = state
        .total_sets
        .reactions
        .values()
        .any(|record| record.values(attribute).iter().any(|v| v == value));
    if !known {
        debug!(attribute = attribute.as_str(), value, "ignoring filter on unknown value");
        return Ok(StateUpdate::none());
    }
    let filters = record_set_selection_filters(value, attribute, &state.sets_filters);
    derive_from_filters(state, &filters)
}

fn summaries(
    state: &AppState,
    entities: SetsEntities,
    filter: bool,
    searches: &SetsSearches,
    sorts: &SetsSorts,
) -> SetsCardinalitiesSummaries {
    determine_sets_cardinalities_summaries(
        entities,
        filter,
        &state.current_sets,
        searches,
        sorts,
        &state.model,
    )
}

/// Switch the sets menu between metabolites and reactions.
pub fn change_sets_entities(state: &AppState) -> StateUpdate {
    let entities = state.sets_entities.toggled();
    StateUpdate {
        sets_entities: Some(entities),
        sets_summaries: Some(summaries(
            state,
            entities,
            state.sets_filter,
            &state.sets_searches,
            &state.sets_sorts,
        )),
        ..StateUpdate::none()
    }
}

/// Switch the sets menu between filter and access sets.
pub fn change_sets_filter(state: &AppState) -> StateUpdate {
    let filter = !state.sets_filter;
    StateUpdate {
        sets_filter: Some(filter),
        sets_summaries: Some(summaries(
            state,
            state.sets_entities,
            filter,
            &state.sets_searches,
            &state.sets_sorts,
        )),
        ..StateUpdate::none()
    }
}

pub fn change_sets_search(state: &AppState, attribute: &str, search: &str) -> StateUpdate {
    let Some(attribute) = Attribute::parse(attribute) else {
        debug!(attribute, "ignoring search on unknown attribute");
        return StateUpdate::none();
    };
    let mut searches = state.sets_searches.clone();
    searches.insert(attribute, search.to_string());
    let sets_summaries = summaries(
        state,
        state.sets_entities,
        state.sets_filter,
        &searches,
        &state.sets_sorts,
    );
    StateUpdate {
        sets_searches: Some(searches),
        sets_summaries: Some(sets_summaries),
        ..StateUpdate::none()
    }
}

pub fn change_sets_sort(state: &AppState, attribute: &str, spec: SortSpec) -> StateUpdate {
    let Some(attribute) = Attribute::parse(attribute) else {
        debug!(attribute, "ignoring sort on unknown attribute");
        return StateUpdate::none();
    };
    let mut sorts = state.sets_sorts.clone();
    sorts.insert(attribute, spec);
    let sets_summaries = summaries(
        state,
        state.sets_entities,
        state.sets_filter,
        &state.sets_searches,
        &sorts,
    );
    StateUpdate {
        sets_sorts: Some(sorts),
        sets_summaries: Some(sets_summaries),
        ..StateUpdate::none()
    }
}
