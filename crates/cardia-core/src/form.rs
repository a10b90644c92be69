//! Form state for the six health inputs.
//!
//! Fields hold free text until submission. Parsing is deliberately lenient:
//! empty or non-numeric text becomes `NaN` in the request body (which
//! serializes as JSON `null`) and `0.0` in the comparison chart. The service
//! is the sole validator of submitted values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::wire::PredictRequest;

/// The six input fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Age,
    Sex,
    ChestPainType,
    ExerciseAngina,
    Oldpeak,
    StSlope,
}

impl FormField {
    pub const ALL: [Self; 6] = [
        Self::Age,
        Self::Sex,
        Self::ChestPainType,
        Self::ExerciseAngina,
        Self::Oldpeak,
        Self::StSlope,
    ];

    /// Wire name used in request and baseline payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Sex => "sex",
            Self::ChestPainType => "chestPainType",
            Self::ExerciseAngina => "exerciseAngina",
            Self::Oldpeak => "oldpeak",
            Self::StSlope => "stSlope",
        }
    }

    /// Form heading shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age (years)",
            Self::Sex => "Sex",
            Self::ChestPainType => "Chest Pain Type",
            Self::ExerciseAngina => "Exercise Induced Angina",
            Self::Oldpeak => "Oldpeak (ST depression)",
            Self::StSlope => "ST Slope",
        }
    }

    /// Legal choices for the categorical fields, as `(value, meaning)` pairs.
    /// Empty for the free-numeric fields (age, oldpeak).
    #[must_use]
    pub const fn options(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Age | Self::Oldpeak => &[],
            Self::Sex => &[("0", "Female"), ("1", "Male")],
            Self::ChestPainType => &[
                ("0", "Typical Angina"),
                ("1", "Atypical Angina"),
                ("2", "Non-anginal Pain"),
                ("3", "Asymptomatic"),
            ],
            Self::ExerciseAngina => &[("0", "No"), ("1", "Yes")],
            Self::StSlope => &[("0", "Upsloping"), ("1", "Flat"), ("2", "Downsloping")],
        }
    }

    /// Entry hint for the free-numeric fields.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Age => "e.g., 45",
            Self::Oldpeak => "e.g., 1.5",
            _ => "",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory state of the input form: six free-text fields.
///
/// One instance is owned by the application state and shared by both the
/// input and results views; it is never reset while the process runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthForm {
    pub age: String,
    pub sex: String,
    pub chest_pain_type: String,
    pub exercise_angina: String,
    pub oldpeak: String,
    pub st_slope: String,
}

impl HealthForm {
    /// Overwrite a field unconditionally. No validation, no range checks.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Current text of a field.
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        self.slot(field)
    }

    /// Mutable access to a field's text buffer, for in-place editing.
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        self.slot_mut(field)
    }

    /// Parse a field for submission. Empty or non-numeric text becomes `NaN`,
    /// which travels as JSON `null`.
    #[must_use]
    pub fn parse_value(&self, field: FormField) -> f64 {
        self.slot(field).trim().parse().unwrap_or(f64::NAN)
    }

    /// Parse a field for charting. NaN (empty, non-numeric, or a literal
    /// "NaN") falls back to `0.0`.
    #[must_use]
    pub fn chart_value(&self, field: FormField) -> f64 {
        let value = self.parse_value(field);
        if value.is_nan() { 0.0 } else { value }
    }

    /// Build the prediction request body from the current text.
    #[must_use]
    pub fn to_request(&self) -> PredictRequest {
        PredictRequest {
            age: self.parse_value(FormField::Age),
            sex: self.parse_value(FormField::Sex),
            chest_pain_type: self.parse_value(FormField::ChestPainType),
            exercise_angina: self.parse_value(FormField::ExerciseAngina),
            oldpeak: self.parse_value(FormField::Oldpeak),
            st_slope: self.parse_value(FormField::StSlope),
        }
    }

    const fn slot(&self, field: FormField) -> &String {
        match field {
            FormField::Age => &self.age,
            FormField::Sex => &self.sex,
            FormField::ChestPainType => &self.chest_pain_type,
            FormField::ExerciseAngina => &self.exercise_angina,
            FormField::Oldpeak => &self.oldpeak,
            FormField::StSlope => &self.st_slope,
        }
    }

    const fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Age => &mut self.age,
            FormField::Sex => &mut self.sex,
            FormField::ChestPainType => &mut self.chest_pain_type,
            FormField::ExerciseAngina => &mut self.exercise_angina,
            FormField::Oldpeak => &mut self.oldpeak,
            FormField::StSlope => &mut self.st_slope,
        }
    }
}
