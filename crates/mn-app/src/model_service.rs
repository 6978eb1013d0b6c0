//! Model loading, validation, and introspection.

use std::path::Path;

use mn_model::{Model, validate_model};

use crate::error::{AppError, AppResult};

/// Counts of a model's records, for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSummary {
    pub metabolites: usize,
    pub reactions: usize,
    pub compartments: usize,
    pub processes: usize,
}

/// Load a model from a JSON file and validate its references.
pub fn load_model(path: &Path) -> AppResult<Model> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ModelFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let model: Model = serde_json::from_str(&content)
        .map_err(|e| AppError::Model(format!("Failed to parse model JSON: {}", e)))?;

    check_model(&model)?;
    Ok(model)
}

/// Validate model structure.
pub fn check_model(model: &Model) -> AppResult<()> {
    if model.reactions.is_empty() {
        return Err(AppError::Validation(
            "Model must have at least one reaction".to_string(),
        ));
    }
    validate_model(model)?;
    Ok(())
}

pub fn summarize_model(model: &Model) -> ModelSummary {
    ModelSummary {
        metabolites: model.metabolites.len(),
        reactions: model.reactions.len(),
        compartments: model.compartments.len(),
        processes: model.processes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mn_model::{Compartment, Metabolite, Reaction};

    #[test]
    fn empty_model_is_invalid() {
        assert!(matches!(
            check_model(&Model::new()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn dangling_reference_is_invalid() {
        let model = Model::new().with_reaction(Reaction::new("R1", "R1").reactant("A", "c", 1.0));
        assert!(matches!(check_model(&model), Err(AppError::Validation(_))));
    }

    #[test]
    fn summary_counts() {
        let model = Model::new()
            .with_compartment(Compartment::new("c", "cytosol"))
            .with_metabolite(Metabolite::new("A", "alpha"))
            .with_reaction(Reaction::new("R1", "R1").reactant("A", "c", 1.0));
        check_model(&model).unwrap();
        let summary = summarize_model(&model);
        assert_eq!(summary.metabolites, 1);
        assert_eq!(summary.reactions, 1);
        assert_eq!(summary.compartments, 1);
        assert_eq!(summary.processes, 0);
    }

    #[test]
    fn missing_file() {
        let err = load_model(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, AppError::ModelFileRead { .. }));
    }
}
