//! Wire types for the prediction service endpoints.
//!
//! Field names are camelCase on the wire except `GET /api/health`, which the
//! service emits in snake_case.

use serde::{Deserialize, Serialize};

use crate::form::FormField;
use crate::risk::RiskLevel;

/// Body of `POST /api/predict`.
///
/// Values come straight from the form parse; a field left empty or
/// non-numeric is `NaN` here and `null` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub age: f64,
    pub sex: f64,
    pub chest_pain_type: f64,
    pub exercise_angina: f64,
    pub oldpeak: f64,
    pub st_slope: f64,
}

/// Response of `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Predicted heart-disease risk as a 0-100 percentage.
    pub risk_score: f64,
    /// Categorical bucket for the score.
    pub risk_level: RiskLevel,
    /// Raw model class: 0 = healthy, 1 = diseased.
    #[serde(rename = "prediction", default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<i64>,
    /// Disease probability, 0.0-1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Complement probability, 0.0-1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthy_probability: Option<f64>,
}

/// Response of `GET /api/healthy-baseline`: reference values for a low-risk
/// profile, one per input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthyBaseline {
    pub age: f64,
    pub sex: f64,
    pub chest_pain_type: f64,
    pub exercise_angina: f64,
    pub oldpeak: f64,
    pub st_slope: f64,
}

impl HealthyBaseline {
    /// Reference value for one field.
    #[must_use]
    pub const fn value(&self, field: FormField) -> f64 {
        match field {
            FormField::Age => self.age,
            FormField::Sex => self.sex,
            FormField::ChestPainType => self.chest_pain_type,
            FormField::ExerciseAngina => self.exercise_angina,
            FormField::Oldpeak => self.oldpeak,
            FormField::StSlope => self.st_slope,
        }
    }
}

/// One entry of the feature-importance ranking.
///
/// The service sorts these; the client preserves whatever order arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub name: String,
    /// Contribution weight as a percentage.
    pub importance: f64,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    pub model_loaded: bool,
}
