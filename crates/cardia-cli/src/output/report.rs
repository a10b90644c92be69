//! Plain-text rendering of a full prediction round trip.
//!
//! The JSON formats serialize [`PredictionReport`] as-is; the table format
//! goes through [`render_prediction_report`], which draws each chart as an
//! indented meter section.

use cardia_core::charts::{ComparisonRow, RiskSlice};
use cardia_core::wire::{FeatureWeight, Prediction};
use serde::Serialize;

use crate::ui;

const METER_WIDTH: usize = 24;

const RISK_RED: (u8, u8, u8) = (239, 68, 68);
const HEALTHY_GREEN: (u8, u8, u8) = (16, 185, 129);

/// Everything one `predict` invocation produced.
///
/// The comparison and importance sections are optional: they come from
/// separate endpoints and a failed fetch drops the section rather than the
/// whole report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub prediction: Prediction,
    pub risk_breakdown: [RiskSlice; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Vec<ComparisonRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_importance: Option<Vec<FeatureWeight>>,
}

/// Render the report for the table format.
#[must_use]
pub fn render_prediction_report(report: &PredictionReport) -> String {
    let color = ui::prefs().table_color;

    let mut sections = vec![
        summary_section(&report.prediction, color),
        breakdown_section(&report.risk_breakdown, color),
    ];
    if let Some(rows) = &report.comparison {
        sections.push(comparison_section(rows, color));
    }
    if let Some(weights) = &report.feature_importance {
        sections.push(importance_section(weights, color));
    }
    sections.join("\n\n")
}

/// Render the importance ranking on its own, for the `features` command.
#[must_use]
pub fn render_feature_importance(weights: &[FeatureWeight]) -> String {
    importance_section(weights, ui::prefs().table_color)
}

fn summary_section(prediction: &Prediction, color: bool) -> String {
    let level = prediction.risk_level;
    let label = if color {
        rgb(level.as_str(), level.color())
    } else {
        level.as_str().to_string()
    };
    format!(
        "Risk score: {:.2}% ({label})\n{}",
        prediction.risk_score,
        level.summary()
    )
}

fn breakdown_section(slices: &[RiskSlice; 2], color: bool) -> String {
    let mut lines = vec!["Risk breakdown".to_string()];
    for (slice, band) in slices.iter().zip([RISK_RED, HEALTHY_GREEN]) {
        let bar = meter(slice.value, 100.0);
        let bar = if color { rgb(&bar, band) } else { bar };
        lines.push(format!("  {:<8} {:>6.2}%  {bar}", slice.name, slice.value));
    }
    lines.join("\n")
}

fn comparison_section(rows: &[ComparisonRow], color: bool) -> String {
    let max = rows
        .iter()
        .flat_map(|row| [row.yours, row.baseline])
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);

    let mut lines = vec!["You vs. healthy baseline".to_string()];
    for row in rows {
        lines.push(format!("  {}", row.name));
        let yours_bar = meter(row.yours, max);
        let baseline_bar = meter(row.baseline, max);
        let (yours_bar, baseline_bar) = if color {
            (rgb(&yours_bar, RISK_RED), rgb(&baseline_bar, HEALTHY_GREEN))
        } else {
            (yours_bar, baseline_bar)
        };
        lines.push(format!("    {:<17} {:>6.2}  {yours_bar}", "Your Data", row.yours));
        lines.push(format!("    {:<17} {:>6.2}  {baseline_bar}", "Healthy Baseline", row.baseline));
    }
    lines.join("\n")
}

fn importance_section(weights: &[FeatureWeight], color: bool) -> String {
    let max = weights
        .iter()
        .map(|weight| weight.importance)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    let name_width = weights
        .iter()
        .map(|weight| weight.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec!["Feature importance".to_string()];
    for weight in weights {
        let bar = meter(weight.importance, max);
        let bar = if color { rgb(&bar, RISK_RED) } else { bar };
        lines.push(format!(
            "  {:<name_width$} {:>6.2}%  {bar}",
            weight.name, weight.importance
        ));
    }
    lines.join("\n")
}

/// Proportional fill over a fixed-width track. Non-finite values and a zero
/// maximum draw an empty track.
fn meter(value: f64, max: f64) -> String {
    let ratio = if value.is_finite() && max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (ratio * METER_WIDTH as f64).round() as usize;
    let mut bar = "\u{2588}".repeat(filled);
    bar.push_str(&"\u{2591}".repeat(METER_WIDTH - filled));
    bar
}

fn rgb(text: &str, (r, g, b): (u8, u8, u8)) -> String {
    format!("\u{1b}[38;2;{r};{g};{b}m{text}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use cardia_core::charts::risk_breakdown;
    use cardia_core::risk::RiskLevel;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_prediction() -> Prediction {
        Prediction {
            risk_score: 73.42,
            risk_level: RiskLevel::High,
            outcome: Some(1),
            probability: Some(0.734),
            healthy_probability: Some(0.266),
        }
    }

    fn sample_report() -> PredictionReport {
        PredictionReport {
            prediction: sample_prediction(),
            risk_breakdown: risk_breakdown(73.42),
            comparison: Some(vec![ComparisonRow {
                name: "Oldpeak",
                yours: 1.5,
                baseline: 0.9,
            }]),
            feature_importance: Some(vec![
                FeatureWeight { name: "ST slope".to_string(), importance: 41.69 },
                FeatureWeight { name: "age".to_string(), importance: 6.53 },
            ]),
        }
    }

    #[test]
    fn report_renders_every_section() {
        let rendered = render_prediction_report(&sample_report());
        assert!(rendered.contains("Risk score: 73.42% (High)"));
        assert!(rendered.contains("High risk - consultation advised"));
        assert!(rendered.contains("Risk breakdown"));
        assert!(rendered.contains("You vs. healthy baseline"));
        assert!(rendered.contains("Your Data"));
        assert!(rendered.contains("Feature importance"));
        assert!(rendered.contains("ST slope"));
    }

    #[test]
    fn report_drops_sections_without_data() {
        let report = PredictionReport {
            comparison: None,
            feature_importance: None,
            ..sample_report()
        };
        let rendered = render_prediction_report(&report);
        assert!(rendered.contains("Risk breakdown"));
        assert!(!rendered.contains("healthy baseline"));
        assert!(!rendered.contains("Feature importance"));
    }

    #[test]
    fn report_serializes_camel_case_and_skips_missing_sections() {
        let full = serde_json::to_value(sample_report()).unwrap();
        assert!(full.get("riskBreakdown").is_some());
        assert!(full.get("featureImportance").is_some());
        assert_eq!(full["comparison"][0]["Your Data"], 1.5);

        let bare = PredictionReport {
            comparison: None,
            feature_importance: None,
            ..sample_report()
        };
        let bare = serde_json::to_value(bare).unwrap();
        assert!(bare.get("comparison").is_none());
        assert!(bare.get("featureImportance").is_none());
    }

    #[test]
    fn meter_fills_proportionally() {
        assert_eq!(meter(50.0, 100.0).matches('\u{2588}').count(), METER_WIDTH / 2);
        assert_eq!(meter(0.0, 100.0).matches('\u{2588}').count(), 0);
        assert_eq!(meter(150.0, 100.0).matches('\u{2588}').count(), METER_WIDTH);
        assert_eq!(meter(f64::NAN, 100.0).matches('\u{2588}').count(), 0);
        assert_eq!(meter(1.0, 0.0).chars().count(), METER_WIDTH);
    }

    #[test]
    fn importance_scales_bars_to_the_largest_weight() {
        let weights = vec![
            FeatureWeight { name: "st slope".to_string(), importance: 40.0 },
            FeatureWeight { name: "age".to_string(), importance: 10.0 },
        ];
        let section = render_feature_importance(&weights);
        let lines: Vec<&str> = section.lines().collect();
        assert_eq!(lines[1].matches('\u{2588}').count(), METER_WIDTH);
        assert_eq!(lines[2].matches('\u{2588}').count(), METER_WIDTH / 4);
    }
}
