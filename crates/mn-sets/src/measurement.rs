//! Measurements of metabolites and their menu summaries.
//!
//! A measurement names a metabolite by its identifier in one external
//! database. Association matches that reference against the metabolites of
//! the model, so one measurement may land on several metabolites that share a
//! reference, and a metabolite keeps the first measurement that reaches it.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use mn_core::MetaboliteId;
use mn_model::{Metabolite, ReferenceType};
use serde::{Deserialize, Serialize};

use crate::menu::SortOrder;

/// One measured value, keyed by an external reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub reference: String,
    pub value: f64,
}

impl Measurement {
    pub fn new(reference: impl Into<String>, value: f64) -> Self {
        Self {
            reference: reference.into(),
            value,
        }
    }
}

/// Metabolite -> measured value.
pub type MetabolitesMeasurements = BTreeMap<MetaboliteId, f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementCriterion {
    Name,
    #[default]
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurementsSort {
    pub criterion: MeasurementCriterion,
    pub order: SortOrder,
}

/// One line of the measurements summary.
///
/// `scale` places the value between the smallest (0) and largest (1)
/// associated values. A single distinct value scales to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSummary {
    pub metabolite: MetaboliteId,
    pub name: String,
    pub value: f64,
    pub scale: f64,
}

pub fn create_initial_measurements_sort() -> MeasurementsSort {
    MeasurementsSort::default()
}

/// Associate measurements to the metabolites whose reference of `kind`
/// matches. Measurements with non-finite values or unmatched references are
/// skipped.
pub fn create_metabolites_measurements(
    measurements: &[Measurement],
    kind: ReferenceType,
    metabolites: &BTreeMap<MetaboliteId, Metabolite>,
) -> MetabolitesMeasurements {
    let mut by_reference: BTreeMap<&str, Vec<&MetaboliteId>> = BTreeMap::new();
    for metabolite in metabolites.values() {
        if let Some(reference) = metabolite.references.get(&kind) {
            by_reference
                .entry(reference.trim())
                .or_default()
                .push(&metabolite.identifier);
        }
    }

    let mut associated = MetabolitesMeasurements::new();
    for measurement in measurements {
        if !measurement.value.is_finite() {
            continue;
        }
        let Some(identifiers) = by_reference.get(measurement.reference.trim()) else {
            continue;
        };
        for identifier in identifiers {
            associated
                .entry((*identifier).clone())
                .or_insert(measurement.value);
        }
    }
    associated
}

/// Summaries of the associated measurements, scaled and sorted.
pub fn prepare_measurements_summaries(
    metabolites_measurements: &MetabolitesMeasurements,
    sort: MeasurementsSort,
    metabolites: &BTreeMap<MetaboliteId, Metabolite>,
) -> Vec<MeasurementSummary> {
    let (minimum, maximum) = metabolites_measurements
        .values()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), &value| {
            (low.min(value), high.max(value))
        });
    let range = maximum - minimum;

    let mut summaries: Vec<MeasurementSummary> = metabolites_measurements
        .iter()
        .map(|(identifier, &value)| MeasurementSummary {
            metabolite: identifier.clone(),
            name: metabolites
                .get(identifier)
                .map(|metabolite| metabolite.name.clone())
                .unwrap_or_else(|| identifier.clone()),
            value,
            scale: if range > 0.0 {
                (value - minimum) / range
            } else {
                1.0
            },
        })
        .collect();

    summaries.sort_by(|a, b| {
        let primary = match sort.criterion {
            MeasurementCriterion::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            MeasurementCriterion::Value => a.value.total_cmp(&b.value),
        };
        let primary = match sort.order {
            SortOrder::Ascending => primary,
            SortOrder::Descending => primary.reverse(),
        };
        match primary {
            Ordering::Equal => a.metabolite.cmp(&b.metabolite),
            other => other,
        }
    });
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metabolites() -> BTreeMap<MetaboliteId, Metabolite> {
        [
            Metabolite::new("pyr", "pyruvate")
                .with_reference(ReferenceType::Pubchem, "1060")
                .with_reference(ReferenceType::Hmdb, "HMDB0000243"),
            Metabolite::new("lac", "lactate").with_reference(ReferenceType::Pubchem, "612"),
            Metabolite::new("glc", "glucose").with_reference(ReferenceType::Pubchem, "5793"),
            Metabolite::new("h2o", "water"),
        ]
        .into_iter()
        .map(|metabolite| (metabolite.identifier.clone(), metabolite))
        .collect()
    }

    #[test]
    fn associates_by_selected_reference() {
        let measurements = vec![
            Measurement::new("1060", 2.0),
            Measurement::new(" 612 ", 0.5),
            Measurement::new("HMDB0000243", 9.0),
            Measurement::new("unknown", 1.0),
        ];
        let pubchem =
            create_metabolites_measurements(&measurements, ReferenceType::Pubchem, &metabolites());
        assert_eq!(pubchem.len(), 2);
        assert_eq!(pubchem["pyr"], 2.0);
        assert_eq!(pubchem["lac"], 0.5);

        let hmdb = create_metabolites_measurements(&measurements, ReferenceType::Hmdb, &metabolites());
        assert_eq!(hmdb.len(), 1);
        assert_eq!(hmdb["pyr"], 9.0);

        let metanetx =
            create_metabolites_measurements(&measurements, ReferenceType::Metanetx, &metabolites());
        assert!(metanetx.is_empty());
    }

    #[test]
    fn first_measurement_wins_and_nan_is_skipped() {
        let measurements = vec![
            Measurement::new("5793", f64::NAN),
            Measurement::new("5793", 3.0),
            Measurement::new("5793", 4.0),
        ];
        let associated =
            create_metabolites_measurements(&measurements, ReferenceType::Pubchem, &metabolites());
        assert_eq!(associated["glc"], 3.0);
    }

    #[test]
    fn summaries_scale_between_extremes() {
        let associated: MetabolitesMeasurements = [
            ("glc".to_string(), 4.0),
            ("lac".to_string(), 1.0),
            ("pyr".to_string(), 2.5),
        ]
        .into_iter()
        .collect();
        let summaries =
            prepare_measurements_summaries(&associated, create_initial_measurements_sort(), &metabolites());
        let order: Vec<&str> = summaries.iter().map(|s| s.metabolite.as_str()).collect();
        assert_eq!(order, vec!["glc", "pyr", "lac"]);
        assert_eq!(summaries[0].scale, 1.0);
        assert_eq!(summaries[1].scale, 0.5);
        assert_eq!(summaries[2].scale, 0.0);
        assert_eq!(summaries[0].name, "glucose");

        let by_name = prepare_measurements_summaries(
            &associated,
            MeasurementsSort {
                criterion: MeasurementCriterion::Name,
                order: SortOrder::Ascending,
            },
            &metabolites(),
        );
        let names: Vec<&str> = by_name.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["glucose", "lactate", "pyruvate"]);
    }

    #[test]
    fn single_value_scales_to_one() {
        let associated: MetabolitesMeasurements = [("pyr".to_string(), 7.0)].into_iter().collect();
        let summaries =
            prepare_measurements_summaries(&associated, MeasurementsSort::default(), &metabolites());
        assert_eq!(summaries[0].scale, 1.0);
        assert!(prepare_measurements_summaries(
            &MetabolitesMeasurements::new(),
            MeasurementsSort::default(),
            &metabolites()
        )
        .is_empty());
    }
}
