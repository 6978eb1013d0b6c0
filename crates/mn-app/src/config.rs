//! Exploration settings.
//!
//! Everything a session starts from besides the model: which metabolites are
//! simplified by default and the initial state of every control. Missing
//! keys in a YAML file fall back to the defaults below.

use std::path::Path;

use mn_candidacy::{CandidatesSorts, create_initial_candidates_sorts};
use mn_core::MetaboliteId;
use mn_model::ReferenceType;
use mn_query::{Combination, PathDirection, ProximityDirection, QueryType};
use mn_sets::{
    MeasurementsSort, SetsEntities, SetsSorts, create_initial_measurements_sort,
    create_initial_sets_sorts,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Ubiquitous metabolites that clutter a network when drawn as one node.
const DEFAULT_SIMPLIFICATIONS_METABOLITES: &[&str] = &[
    "h", "h2o", "o2", "co2", "pi", "ppi", "atp", "adp", "amp", "nad", "nadh", "nadp", "nadph",
    "coa", "fad", "fadh2", "nh4", "hco3",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorationConfig {
    pub default_simplifications_metabolites: Vec<MetaboliteId>,
    pub compartmentalization: bool,
    pub default_simplifications: bool,
    pub sets_entities: SetsEntities,
    pub sets_filter: bool,
    pub sets_sorts: SetsSorts,
    pub candidates_sorts: CandidatesSorts,
    /// Database whose references match imported measurements.
    pub measurement_reference: ReferenceType,
    pub measurements_sort: MeasurementsSort,
    pub query: QueryControls,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            default_simplifications_metabolites: DEFAULT_SIMPLIFICATIONS_METABOLITES
                .iter()
                .map(|id| id.to_string())
                .collect(),
            compartmentalization: false,
            default_simplifications: true,
            sets_entities: SetsEntities::Metabolites,
            sets_filter: false,
            sets_sorts: create_initial_sets_sorts(),
            candidates_sorts: create_initial_candidates_sorts(),
            measurement_reference: ReferenceType::Pubchem,
            measurements_sort: create_initial_measurements_sort(),
            query: QueryControls::default(),
        }
    }
}

/// Settings of the query controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryControls {
    pub combination: Combination,
    pub query_type: QueryType,
    pub proximity_direction: ProximityDirection,
    pub proximity_depth: usize,
    pub path_direction: PathDirection,
    pub path_count: usize,
    pub connection_count: usize,
}

impl Default for QueryControls {
    fn default() -> Self {
        Self {
            combination: Combination::Exclusion,
            query_type: QueryType::Rogue,
            proximity_direction: ProximityDirection::Successors,
            proximity_depth: 1,
            path_direction: PathDirection::Forward,
            path_count: 1,
            connection_count: 1,
        }
    }
}

/// Load exploration settings from a YAML file.
pub fn load_config(path: &Path) -> AppResult<ExplorationConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> AppResult<ExplorationConfig> {
    let config: ExplorationConfig = serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("Failed to parse configuration YAML: {}", e)))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ExplorationConfig) -> AppResult<()> {
    let query = &config.query;
    for (what, value) in [
        ("proximity_depth", query.proximity_depth),
        ("path_count", query.path_count),
        ("connection_count", query.connection_count),
    ] {
        if value == 0 {
            return Err(AppError::Config(format!("{} must be at least 1", what)));
        }
    }
    Ok(())
}
