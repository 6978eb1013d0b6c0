//! Model validation logic.

use std::collections::BTreeMap;

use crate::schema::{Model, Reaction};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Empty identifier in {context}")]
    EmptyId { context: String },

    #[error("Mismatched key: {key} holds record {id} in {context}")]
    MismatchedKey {
        key: String,
        id: String,
        context: String,
    },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Identifier {id} names both a metabolite and a reaction")]
    SharedIdentifier { id: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_model(model: &Model) -> Result<(), ValidationError> {
    check_keys(&model.metabolites, "metabolites", |m| &m.identifier)?;
    check_keys(&model.reactions, "reactions", |r| &r.identifier)?;
    check_keys(&model.compartments, "compartments", |c| &c.identifier)?;
    check_keys(&model.processes, "processes", |p| &p.identifier)?;

    // Metabolite and reaction nodes share one identifier space.
    if let Some(id) = model
        .reactions
        .keys()
        .find(|id| model.metabolites.contains_key(*id))
    {
        return Err(ValidationError::SharedIdentifier { id: id.clone() });
    }

    for reaction in model.reactions.values() {
        validate_reaction(model, reaction)?;
    }

    Ok(())
}

fn check_keys<T>(
    records: &BTreeMap<String, T>,
    context: &str,
    identifier: impl Fn(&T) -> &String,
) -> Result<(), ValidationError> {
    for (key, record) in records {
        let id = identifier(record);
        if id.is_empty() {
            return Err(ValidationError::EmptyId {
                context: context.to_string(),
            });
        }
        if key != id {
            return Err(ValidationError::MismatchedKey {
                key: key.clone(),
                id: id.clone(),
                context: context.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_reaction(model: &Model, reaction: &Reaction) -> Result<(), ValidationError> {
    let context = |what: &str| format!("reaction {} {}", reaction.identifier, what);

    for participant in &reaction.participants {
        if !model.metabolites.contains_key(&participant.metabolite) {
            return Err(ValidationError::MissingReference {
                id: participant.metabolite.clone(),
                context: context("participant metabolite"),
            });
        }
        if !model.compartments.contains_key(&participant.compartment) {
            return Err(ValidationError::MissingReference {
                id: participant.compartment.clone(),
                context: context("participant compartment"),
            });
        }
        if !participant.coefficient.is_finite() || participant.coefficient <= 0.0 {
            return Err(ValidationError::InvalidValue {
                field: context("participant coefficient"),
                value: participant.coefficient.to_string(),
                reason: "must be finite and positive".to_string(),
            });
        }
    }

    for compartment in &reaction.compartments {
        if !model.compartments.contains_key(compartment) {
            return Err(ValidationError::MissingReference {
                id: compartment.clone(),
                context: context("compartments"),
            });
        }
    }

    for process in &reaction.processes {
        if !model.processes.contains_key(process) {
            return Err(ValidationError::MissingReference {
                id: process.clone(),
                context: context("processes"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Compartment, Metabolite, Process};

    fn base() -> Model {
        Model::new()
            .with_metabolite(Metabolite::new("A", "A"))
            .with_metabolite(Metabolite::new("B", "B"))
            .with_compartment(Compartment::new("c1", "cytosol"))
            .with_process(Process::new("p1", "glycolysis"))
    }

    #[test]
    fn valid_model_passes() {
        let model = base().with_reaction(
            Reaction::new("R1", "R1")
                .reactant("A", "c1", 1.0)
                .product("B", "c1", 1.0)
                .in_process("p1"),
        );
        validate_model(&model).unwrap();
    }

    #[test]
    fn unknown_metabolite_is_rejected() {
        let model = base().with_reaction(Reaction::new("R1", "R1").reactant("Z", "c1", 1.0));
        let err = validate_model(&model).unwrap_err();
        assert!(matches!(err, ValidationError::MissingReference { .. }));
    }

    #[test]
    fn unknown_process_is_rejected() {
        let model = base().with_reaction(Reaction::new("R1", "R1").in_process("p9"));
        assert!(validate_model(&model).is_err());
    }

    #[test]
    fn mismatched_key_is_rejected() {
        let mut model = base();
        model
            .metabolites
            .insert("X".to_string(), Metabolite::new("Y", "Y"));
        let err = validate_model(&model).unwrap_err();
        assert!(matches!(err, ValidationError::MismatchedKey { .. }));
    }

    #[test]
    fn non_positive_coefficient_is_rejected() {
        let model = base().with_reaction(Reaction::new("R1", "R1").reactant("A", "c1", 0.0));
        assert!(validate_model(&model).is_err());
    }

    #[test]
    fn reaction_named_like_a_metabolite_is_rejected() {
        let model = base().with_reaction(Reaction::new("A", "A").reactant("B", "c1", 1.0));
        let err = validate_model(&model).unwrap_err();
        assert!(matches!(err, ValidationError::SharedIdentifier { ref id } if id == "A"));
    }
}
