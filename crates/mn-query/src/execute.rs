//! Execution of queries against the network.

use std::collections::BTreeSet;

use mn_network::{Adjacency, NetworkElements};
use tracing::debug;

use crate::combination::combine_elements;
use crate::path::{Path, find_paths};
use crate::query::{Combination, PathDirection, ProximityDirection, Query};
use crate::traversal::{collect_proximity, select_elements};

/// Select the nodes and links a query matches in the network.
///
/// Returns `None` when the query does not pass: it names a node missing from
/// the network, or a connection query names no targets.
pub fn execute_query(query: &Query, network: &NetworkElements) -> Option<NetworkElements> {
    let adjacency = Adjacency::from_elements(network);
    if let Some(missing) = query
        .named_nodes()
        .into_iter()
        .find(|node| !adjacency.contains(node))
    {
        debug!(node = %missing, "query names a node missing from the network");
        return None;
    }

    let selection = match query {
        Query::Rogue { focus } => {
            let nodes = BTreeSet::from([focus.as_str()]);
            select_elements(network, &nodes, &BTreeSet::new())
        }
        Query::Proximity {
            focus,
            direction,
            depth,
        } => collect_proximity(network, &adjacency, focus, *direction, *depth),
        Query::Path {
            source,
            target,
            direction,
            count,
        } => {
            let paths = find_paths(network, &adjacency, source, target, *direction, *count);
            select_paths(network, &paths)
        }
        Query::Connection { targets, count } => {
            if targets.is_empty() {
                debug!("connection query without targets");
                return None;
            }
            let mut distinct: Vec<&str> = Vec::new();
            for target in targets {
                if !distinct.contains(&target.as_str()) {
                    distinct.push(target);
                }
            }
            let mut paths: Vec<Path> = Vec::new();
            for (i, source) in distinct.iter().enumerate() {
                for target in &distinct[i + 1..] {
                    paths.extend(find_paths(
                        network,
                        &adjacency,
                        source,
                        target,
                        PathDirection::Both,
                        *count,
                    ));
                }
            }
            select_paths(network, &paths)
        }
    };

    debug!(
        query = ?query.query_type(),
        nodes = selection.nodes.len(),
        links = selection.links.len(),
        "query matched"
    );
    Some(selection)
}

fn select_paths(network: &NetworkElements, paths: &[Path]) -> NetworkElements {
    let nodes: BTreeSet<&str> = paths
        .iter()
        .flat_map(|path| path.nodes.iter().map(String::as_str))
        .collect();
    let link_ids: BTreeSet<&str> = paths
        .iter()
        .flat_map(|path| path.links.iter().map(String::as_str))
        .collect();
    let links: BTreeSet<usize> = network
        .links
        .iter()
        .enumerate()
        .filter(|(_, link)| link_ids.contains(link.identifier.as_str()))
        .map(|(position, _)| position)
        .collect();
    select_elements(network, &nodes, &links)
}

/// Execute a query and combine its selection with the subnetwork.
pub fn execute_query_combination(
    query: &Query,
    combination: Combination,
    network: &NetworkElements,
    subnetwork: &NetworkElements,
) -> Option<NetworkElements> {
    let selection = execute_query(query, network)?;
    Some(combine_elements(combination, subnetwork, &selection))
}

/// Add a node's direct neighbors to the subnetwork, whatever the current
/// combination.
pub fn execute_proximity_expansion(
    focus: &str,
    network: &NetworkElements,
    subnetwork: &NetworkElements,
) -> Option<NetworkElements> {
    let query = Query::Proximity {
        focus: focus.to_string(),
        direction: ProximityDirection::Neighbors,
        depth: 1,
    };
    execute_query_combination(&query, Combination::Inclusion, network, subnetwork)
}

/// Add a single node to the subnetwork, whatever the current combination.
pub fn execute_rogue_union(
    focus: &str,
    network: &NetworkElements,
    subnetwork: &NetworkElements,
) -> Option<NetworkElements> {
    let query = Query::Rogue {
        focus: focus.to_string(),
    };
    execute_query_combination(&query, Combination::Inclusion, network, subnetwork)
}
