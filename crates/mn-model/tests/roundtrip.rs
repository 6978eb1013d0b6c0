use mn_model::*;

fn sample() -> Model {
    Model::new()
        .with_metabolite(Metabolite::new("A", "alpha"))
        .with_metabolite(Metabolite::new("B", "beta"))
        .with_metabolite(Metabolite::new("C", "gamma"))
        .with_compartment(Compartment::new("c1", "cytosol"))
        .with_process(Process::new("p1", "synthesis"))
        .with_reaction(
            Reaction::new("R1", "condensation")
                .reactant("A", "c1", 1.0)
                .reactant("B", "c1", 1.0)
                .product("C", "c1", 1.0)
                .in_process("p1"),
        )
}

#[test]
fn roundtrip_json_model() {
    let model = sample();
    validate_model(&model).unwrap();

    let path = std::env::temp_dir().join("mn_model_roundtrip.json");
    save_json(&path, &model).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(model, loaded);
}

#[test]
fn keyed_json_parses() {
    let json = r#"{
        "metabolites": {"A": {"identifier": "A", "name": "alpha"}},
        "compartments": {"c1": {"identifier": "c1", "name": "cytosol"}},
        "reactions": {
            "R1": {
                "identifier": "R1",
                "name": "sink",
                "participants": [{"metabolite": "A", "compartment": "c1", "role": "reactant"}]
            }
        }
    }"#;
    let model: Model = serde_json::from_str(json).unwrap();
    validate_model(&model).unwrap();
    assert!(model.processes.is_empty());
    assert!(!model.reactions["R1"].reversibility);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("mn_model_does_not_exist.json");
    let err = load_json(&path).unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));
}
