//! Shortest simple paths between two nodes.
//!
//! Paths are found shortest first by breadth-first search, then further
//! loopless paths by deviating from the ones already found (Yen's
//! algorithm). Two paths are distinct when their ordered link sequences
//! differ. Among paths of equal length the one whose link identifiers sort
//! first wins, which makes the result deterministic.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use mn_core::{LinkId, NodeId};
use mn_network::{Adjacency, NetworkElements};
use serde::{Deserialize, Serialize};

use crate::query::PathDirection;

/// A path as ordered nodes and the links between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub links: Vec<LinkId>,
}

/// Path over link positions, used during the search.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Walk<'a> {
    nodes: Vec<&'a str>,
    links: Vec<usize>,
}

impl<'a> Walk<'a> {
    fn key(&self, network: &'a NetworkElements) -> (usize, Vec<&'a str>) {
        (
            self.links.len(),
            self.links
                .iter()
                .map(|&position| network.links[position].identifier.as_str())
                .collect(),
        )
    }

    fn into_path(self, network: &NetworkElements) -> Path {
        Path {
            nodes: self.nodes.into_iter().map(str::to_string).collect(),
            links: self
                .links
                .into_iter()
                .map(|position| network.links[position].identifier.clone())
                .collect(),
        }
    }
}

/// Find up to `count` distinct simple paths from `source` to `target`.
///
/// Returns fewer when fewer exist, none when either node is missing.
pub fn find_paths(
    network: &NetworkElements,
    adjacency: &Adjacency,
    source: &str,
    target: &str,
    direction: PathDirection,
    count: usize,
) -> Vec<Path> {
    if !adjacency.contains(source) || !adjacency.contains(target) || count == 0 {
        return Vec::new();
    }
    let Some(source) = network.node(source).map(|node| node.identifier.as_str()) else {
        return Vec::new();
    };
    if source == target {
        return vec![Path {
            nodes: vec![source.to_string()],
            links: Vec::new(),
        }];
    }

    let search = Search {
        network,
        adjacency,
        direction,
    };
    let Some(first) = search.shortest(source, target, &BTreeSet::new(), &BTreeSet::new()) else {
        return Vec::new();
    };

    let mut found: Vec<Walk> = vec![first];
    let mut candidates: Vec<Walk> = Vec::new();

    while found.len() < count {
        let Some(previous) = found.last().cloned() else {
            break;
        };
        for i in 0..previous.links.len() {
            let spur = previous.nodes[i];
            let root_nodes = &previous.nodes[..=i];
            let root_links = &previous.links[..i];

            let mut banned_links: BTreeSet<usize> = BTreeSet::new();
            for walk in &found {
                if walk.links.len() > i && walk.links[..i] == *root_links {
                    banned_links.insert(walk.links[i]);
                }
            }
            let banned_nodes: BTreeSet<&str> = root_nodes[..i].iter().copied().collect();

            if let Some(spur_walk) = search.shortest(spur, target, &banned_nodes, &banned_links) {
                let mut nodes = root_nodes[..i].to_vec();
                nodes.extend(spur_walk.nodes);
                let mut links = root_links.to_vec();
                links.extend(spur_walk.links);
                let walk = Walk { nodes, links };
                if !found.contains(&walk) && !candidates.contains(&walk) {
                    candidates.push(walk);
                }
            }
        }

        let Some(best) = candidates
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.key(network).cmp(&b.key(network)))
            .map(|(index, _)| index)
        else {
            break;
        };
        found.push(candidates.swap_remove(best));
    }

    found.into_iter().map(|walk| walk.into_path(network)).collect()
}

struct Search<'a, 'b> {
    network: &'a NetworkElements,
    adjacency: &'b Adjacency,
    direction: PathDirection,
}

impl<'a> Search<'a, '_> {
    /// Breadth-first shortest walk avoiding banned nodes and links.
    fn shortest(
        &self,
        source: &'a str,
        target: &str,
        banned_nodes: &BTreeSet<&str>,
        banned_links: &BTreeSet<usize>,
    ) -> Option<Walk<'a>> {
        let (forward, backward) = self.direction.follows();
        let mut parents: BTreeMap<&'a str, (&'a str, usize)> = BTreeMap::new();
        let mut visited: BTreeSet<&'a str> = BTreeSet::new();
        let mut queue: VecDeque<&'a str> = VecDeque::new();

        visited.insert(source);
        queue.push_back(source);
        while let Some(node) = queue.pop_front() {
            if node == target {
                return Some(Self::unwind(&parents, source, node));
            }
            for (position, neighbor) in
                self.adjacency
                    .neighbors(self.network, node, forward, backward)
            {
                let neighbor = neighbor.as_str();
                if banned_links.contains(&position) || banned_nodes.contains(neighbor) {
                    continue;
                }
                if visited.insert(neighbor) {
                    parents.insert(neighbor, (node, position));
                    queue.push_back(neighbor);
                }
            }
        }
        None
    }

    fn unwind(
        parents: &BTreeMap<&'a str, (&'a str, usize)>,
        source: &'a str,
        target: &'a str,
    ) -> Walk<'a> {
        let mut nodes = vec![target];
        let mut links = Vec::new();
        let mut current = target;
        while current != source {
            let Some(&(parent, position)) = parents.get(current) else {
                break;
            };
            nodes.push(parent);
            links.push(position);
            current = parent;
        }
        nodes.reverse();
        links.reverse();
        Walk { nodes, links }
    }
}
