//! Actions of the measurements menu.

use mn_model::ReferenceType;
use mn_sets::{
    Measurement, MeasurementsSort, MetabolitesMeasurements, create_metabolites_measurements,
    prepare_measurements_summaries,
};
use tracing::{debug, info};

use crate::state::{AppState, StateUpdate};

fn associate(
    state: &AppState,
    measurements: &[Measurement],
    reference: ReferenceType,
) -> StateUpdate {
    let associated = create_metabolites_measurements(measurements, reference, &state.model.metabolites);
    let summaries =
        prepare_measurements_summaries(&associated, state.measurements_sort, &state.model.metabolites);
    info!(
        reference = reference.as_str(),
        measurements = measurements.len(),
        metabolites = associated.len(),
        "associated measurements"
    );
    StateUpdate {
        metabolites_measurements: Some(associated),
        measurements_summaries: Some(summaries),
        ..StateUpdate::none()
    }
}

/// Replace the measurements and associate them to metabolites by the
/// current reference.
pub fn import_measurements(state: &AppState, measurements: Vec<Measurement>) -> StateUpdate {
    let update = associate(state, &measurements, state.measurement_reference);
    StateUpdate {
        measurements: Some(measurements),
        ..update
    }
}

/// Switch the database whose references match measurements, associating the
/// imported measurements again.
pub fn change_measurement_reference(state: &AppState, reference: &str) -> StateUpdate {
    let Some(reference) = ReferenceType::parse(reference) else {
        debug!(reference, "ignoring unknown reference type");
        return StateUpdate::none();
    };
    if reference == state.measurement_reference {
        return StateUpdate::none();
    }
    StateUpdate {
        measurement_reference: Some(reference),
        ..associate(state, &state.measurements, reference)
    }
}

pub fn change_measurements_sort(state: &AppState, sort: MeasurementsSort) -> StateUpdate {
    let summaries = prepare_measurements_summaries(
        &state.metabolites_measurements,
        sort,
        &state.model.metabolites,
    );
    StateUpdate {
        measurements_sort: Some(sort),
        measurements_summaries: Some(summaries),
        ..StateUpdate::none()
    }
}

/// Forget every imported measurement.
pub fn restore_measurements() -> StateUpdate {
    StateUpdate {
        measurements: Some(Vec::new()),
        metabolites_measurements: Some(MetabolitesMeasurements::new()),
        measurements_summaries: Some(Vec::new()),
        ..StateUpdate::none()
    }
}
