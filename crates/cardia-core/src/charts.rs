//! Chart-ready projections of a prediction result.
//!
//! These stay renderer-agnostic: the dashboard feeds them to widgets, the
//! one-shot commands serialize them as-is.

use serde::Serialize;

use crate::form::{FormField, HealthForm};
use crate::wire::HealthyBaseline;

/// One slice of the risk breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskSlice {
    pub name: &'static str,
    pub value: f64,
}

/// Splits a 0-100 risk score into its two complementary slices.
///
/// No clamping happens here; a score outside 0-100 produces a negative
/// complement, exactly as reported.
#[must_use]
pub fn risk_breakdown(risk_score: f64) -> [RiskSlice; 2] {
    [
        RiskSlice { name: "Risk", value: risk_score },
        RiskSlice { name: "No Risk", value: 100.0 - risk_score },
    ]
}

/// One row of the patient-versus-baseline comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub name: &'static str,
    #[serde(rename = "Your Data")]
    pub yours: f64,
    #[serde(rename = "Healthy Baseline")]
    pub baseline: f64,
}

/// Fields shown in the comparison chart, with their display names.
const COMPARED: [(FormField, &str); 4] = [
    (FormField::ChestPainType, "Chest Pain"),
    (FormField::ExerciseAngina, "Exercise Angina"),
    (FormField::Oldpeak, "Oldpeak"),
    (FormField::StSlope, "ST Slope"),
];

/// Builds the comparison rows from the submitted form and the service
/// baseline. Unparseable form values chart as zero.
#[must_use]
pub fn comparison_rows(form: &HealthForm, baseline: &HealthyBaseline) -> Vec<ComparisonRow> {
    COMPARED
        .iter()
        .map(|&(field, name)| ComparisonRow {
            name,
            yours: form.chart_value(field),
            baseline: baseline.value(field),
        })
        .collect()
}
