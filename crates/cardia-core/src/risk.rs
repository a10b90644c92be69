//! Risk level classification returned by the prediction service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical risk bucket accompanying the risk score.
///
/// The service emits the capitalized variant names on the wire (`"Low"`,
/// `"Moderate"`, `"High"`). Any other string folds into
/// [`RiskLevel::Unknown`], which the renderers draw in the neutral band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Unknown,
}

impl From<String> for RiskLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Self::Low,
            "Moderate" => Self::Moderate,
            "High" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }

    /// Display band for this level as an RGB triple.
    ///
    /// High is red, Moderate amber, Low green; anything the service sent
    /// that we did not recognize lands in neutral gray.
    #[must_use]
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            Self::High => (239, 68, 68),
            Self::Moderate => (245, 158, 11),
            Self::Low => (16, 185, 129),
            Self::Unknown => (156, 163, 175),
        }
    }

    /// One-line reading of the level for the results views.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Low => "Low risk - no significant indicators",
            Self::Moderate => "Moderate risk - follow-up recommended",
            Self::High => "High risk - consultation advised",
            Self::Unknown => "Risk level not recognized",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
