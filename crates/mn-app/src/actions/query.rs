//! Actions of the query controls.

use mn_core::NodeId;
use mn_network::{NetworkElements, determine_network_summary};
use mn_query::{Combination, Query, QueryType, execute_query_combination, restore_subnetwork};
use tracing::{debug, info};

use crate::state::{AppState, QuerySelections, StateUpdate};

fn known_node(state: &AppState, node: &str) -> bool {
    let known = state.network.contains_node(node);
    if !known {
        debug!(node, "ignoring node missing from the network");
    }
    known
}

fn controls_update(state: &AppState, change: impl FnOnce(&mut crate::config::QueryControls)) -> StateUpdate {
    let mut query = state.query;
    change(&mut query);
    StateUpdate {
        query: Some(query),
        ..StateUpdate::none()
    }
}

fn selections_update(state: &AppState, change: impl FnOnce(&mut QuerySelections)) -> StateUpdate {
    let mut selections = state.selections.clone();
    change(&mut selections);
    StateUpdate {
        selections: Some(selections),
        ..StateUpdate::none()
    }
}

fn subnetwork_update(subnetwork: NetworkElements) -> StateUpdate {
    StateUpdate {
        subnetwork_summary: Some(determine_network_summary(&subnetwork)),
        subnetwork: Some(subnetwork),
        ..StateUpdate::none()
    }
}

/// Switch the query type, clearing every node selection.
pub fn change_query_type(state: &AppState, query_type: QueryType) -> StateUpdate {
    controls_update(state, |query| query.query_type = query_type).merge(StateUpdate {
        selections: Some(QuerySelections::default()),
        ..StateUpdate::none()
    })
}

pub fn set_rogue_focus(state: &AppState, node: &str) -> StateUpdate {
    if !known_node(state, node) {
        return StateUpdate::none();
    }
    selections_update(state, |s| s.rogue_focus = Some(node.to_string()))
}

pub fn set_proximity_focus(state: &AppState, node: &str) -> StateUpdate {
    if !known_node(state, node) {
        return StateUpdate::none();
    }
    selections_update(state, |s| s.proximity_focus = Some(node.to_string()))
}

/// Cycle successors -> neighbors -> predecessors.
pub fn change_proximity_direction(state: &AppState) -> StateUpdate {
    controls_update(state, |query| {
        query.proximity_direction = query.proximity_direction.next()
    })
}

pub fn change_proximity_depth(state: &AppState, depth: usize) -> StateUpdate {
    if depth == 0 {
        debug!("ignoring proximity depth of zero");
        return StateUpdate::none();
    }
    controls_update(state, |query| query.proximity_depth = depth)
}

pub fn set_path_source(state: &AppState, node: &str) -> StateUpdate {
    if !known_node(state, node) {
        return StateUpdate::none();
    }
    selections_update(state, |s| s.path_source = Some(node.to_string()))
}

pub fn set_path_target(state: &AppState, node: &str) -> StateUpdate {
    if !known_node(state, node) {
        return StateUpdate::none();
    }
    selections_update(state, |s| s.path_target = Some(node.to_string()))
}

/// Cycle forward -> both -> reverse.
pub fn change_path_direction(state: &AppState) -> StateUpdate {
    controls_update(state, |query| query.path_direction = query.path_direction.next())
}

pub fn change_path_count(state: &AppState, count: usize) -> StateUpdate {
    if count == 0 {
        debug!("ignoring path count of zero");
        return StateUpdate::none();
    }
    controls_update(state, |query| query.path_count = count)
}

pub fn change_connection_count(state: &AppState, count: usize) -> StateUpdate {
    if count == 0 {
        debug!("ignoring connection count of zero");
        return StateUpdate::none();
    }
    controls_update(state, |query| query.connection_count = count)
}

/// Replace the connection targets. Unknown nodes and repeats are dropped.
pub fn change_connection_targets(state: &AppState, targets: &[NodeId]) -> StateUpdate {
    let mut kept: Vec<NodeId> = Vec::new();
    for target in targets {
        if known_node(state, target) && !kept.contains(target) {
            kept.push(target.clone());
        }
    }
    selections_update(state, |s| s.connection_targets = kept)
}

pub fn include_connection_target(state: &AppState, node: &str) -> StateUpdate {
    if !known_node(state, node) || state.selections.connection_targets.iter().any(|t| t == node) {
        return StateUpdate::none();
    }
    selections_update(state, |s| s.connection_targets.push(node.to_string()))
}

pub fn exclude_connection_target(state: &AppState, node: &str) -> StateUpdate {
    if !state.selections.connection_targets.iter().any(|t| t == node) {
        return StateUpdate::none();
    }
    selections_update(state, |s| s.connection_targets.retain(|t| t != node))
}

/// Switch the combination and restore the subnetwork to its baseline.
pub fn change_combination(state: &AppState, combination: Combination) -> StateUpdate {
    let subnetwork = restore_subnetwork(combination, &state.network);
    controls_update(state, |query| query.combination = combination).merge(subnetwork_update(subnetwork))
}

/// Query described by the current controls, if every node it needs is chosen.
fn current_query(state: &AppState) -> Option<Query> {
    let controls = &state.query;
    let selections = &state.selections;
    let query = match controls.query_type {
        QueryType::Rogue => Query::Rogue {
            focus: selections.rogue_focus.clone()?,
        },
        QueryType::Proximity => Query::Proximity {
            focus: selections.proximity_focus.clone()?,
            direction: controls.proximity_direction,
            depth: controls.proximity_depth,
        },
        QueryType::Path => Query::Path {
            source: selections.path_source.clone()?,
            target: selections.path_target.clone()?,
            direction: controls.path_direction,
            count: controls.path_count,
        },
        QueryType::Connection => Query::Connection {
            targets: selections.connection_targets.clone(),
            count: controls.connection_count,
        },
    };
    Some(query)
}

/// Execute the current query, combine it with the subnetwork, and clear the
/// node selections.
pub fn execute_query(state: &AppState) -> StateUpdate {
    let Some(query) = current_query(state) else {
        debug!(query_type = ?state.query.query_type, "query lacks a node selection");
        return StateUpdate::none();
    };
    let Some(subnetwork) = execute_query_combination(
        &query,
        state.query.combination,
        &state.network,
        &state.subnetwork,
    ) else {
        return StateUpdate::none();
    };
    info!(
        query_type = ?state.query.query_type,
        combination = ?state.query.combination,
        nodes = subnetwork.nodes.len(),
        links = subnetwork.links.len(),
        "executed query"
    );
    subnetwork_update(subnetwork).merge(StateUpdate {
        selections: Some(QuerySelections::default()),
        ..StateUpdate::none()
    })
}

/// Add a node's neighbors to the subnetwork.
pub fn execute_proximity_expansion(state: &AppState, node: &str) -> StateUpdate {
    mn_query::execute_proximity_expansion(node, &state.network, &state.subnetwork)
        .map(subnetwork_update)
        .unwrap_or_default()
}

/// Add a single node to the subnetwork.
pub fn execute_rogue_union(state: &AppState, node: &str) -> StateUpdate {
    mn_query::execute_rogue_union(node, &state.network, &state.subnetwork)
        .map(subnetwork_update)
        .unwrap_or_default()
}
