//! Query parameters.

use mn_core::NodeId;
use serde::{Deserialize, Serialize};

/// Direction of a proximity expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProximityDirection {
    /// Follow links from source to target.
    #[default]
    Successors,
    /// Follow links from target to source.
    Predecessors,
    Neighbors,
}

impl ProximityDirection {
    /// Next direction in the control's cycle.
    pub fn next(self) -> Self {
        match self {
            ProximityDirection::Successors => ProximityDirection::Neighbors,
            ProximityDirection::Neighbors => ProximityDirection::Predecessors,
            ProximityDirection::Predecessors => ProximityDirection::Successors,
        }
    }

    /// Whether to follow (outgoing, incoming) links.
    pub fn follows(self) -> (bool, bool) {
        match self {
            ProximityDirection::Successors => (true, false),
            ProximityDirection::Predecessors => (false, true),
            ProximityDirection::Neighbors => (true, true),
        }
    }
}

/// Direction of a path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathDirection {
    #[default]
    Forward,
    Reverse,
    Both,
}

impl PathDirection {
    /// Next direction in the control's cycle.
    pub fn next(self) -> Self {
        match self {
            PathDirection::Forward => PathDirection::Both,
            PathDirection::Both => PathDirection::Reverse,
            PathDirection::Reverse => PathDirection::Forward,
        }
    }

    pub fn follows(self) -> (bool, bool) {
        match self {
            PathDirection::Forward => (true, false),
            PathDirection::Reverse => (false, true),
            PathDirection::Both => (true, true),
        }
    }
}

/// How a query's selection combines with the subnetwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combination {
    Inclusion,
    #[default]
    Exclusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    #[default]
    Rogue,
    Proximity,
    Path,
    Connection,
}

/// A query against the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Query {
    Rogue {
        focus: NodeId,
    },
    Proximity {
        focus: NodeId,
        direction: ProximityDirection,
        depth: usize,
    },
    Path {
        source: NodeId,
        target: NodeId,
        direction: PathDirection,
        count: usize,
    },
    Connection {
        targets: Vec<NodeId>,
        count: usize,
    },
}

impl Query {
    pub fn query_type(&self) -> QueryType {
        match self {
            Query::Rogue { .. } => QueryType::Rogue,
            Query::Proximity { .. } => QueryType::Proximity,
            Query::Path { .. } => QueryType::Path,
            Query::Connection { .. } => QueryType::Connection,
        }
    }

    /// Every node the query names.
    pub fn named_nodes(&self) -> Vec<&NodeId> {
        match self {
            Query::Rogue { focus } | Query::Proximity { focus, .. } => vec![focus],
            Query::Path { source, target, .. } => vec![source, target],
            Query::Connection { targets, .. } => targets.iter().collect(),
        }
    }
}
