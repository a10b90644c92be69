//! One-shot prediction: submit the six values, print the full report.

use cardia_api::{ApiError, PredictorClient};
use cardia_core::charts;
use cardia_core::form::{FormField, HealthForm};

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::PredictArgs;
use crate::output;
use crate::output::report::{PredictionReport, render_prediction_report};
use crate::progress::Progress;

/// # Errors
/// Fails when the prediction request itself fails. The baseline and
/// importance fetches only feed optional report sections, so their errors
/// are logged and the sections dropped.
pub async fn handle(
    client: &PredictorClient,
    args: &PredictArgs,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = form_from_args(args);
    let request = form.to_request();

    let progress = Progress::spinner("Predicting heart-disease risk...");
    let (prediction, baseline, importance) = tokio::join!(
        client.predict(&request),
        client.fetch_healthy_baseline(),
        client.fetch_feature_importance(),
    );

    let prediction = match prediction {
        Ok(prediction) => {
            progress.finish_clear();
            prediction
        }
        Err(error) => {
            progress.finish_err("Prediction failed");
            return Err(error.into());
        }
    };

    let report = PredictionReport {
        risk_breakdown: charts::risk_breakdown(prediction.risk_score),
        comparison: discard_failed(baseline, "healthy baseline")
            .map(|baseline| charts::comparison_rows(&form, &baseline)),
        feature_importance: discard_failed(importance, "feature importance"),
        prediction,
    };

    if flags.format == OutputFormat::Table {
        println!("{}", render_prediction_report(&report));
        Ok(())
    } else {
        output::output(&report, flags.format)
    }
}

fn discard_failed<T>(result: Result<T, ApiError>, section: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(%error, "{} unavailable, section omitted", section);
            None
        }
    }
}

fn form_from_args(args: &PredictArgs) -> HealthForm {
    let mut form = HealthForm::default();
    form.set(FormField::Age, args.age.as_deref().unwrap_or_default());
    form.set(FormField::Sex, args.sex.as_deref().unwrap_or_default());
    form.set(
        FormField::ChestPainType,
        args.chest_pain_type.as_deref().unwrap_or_default(),
    );
    form.set(
        FormField::ExerciseAngina,
        args.exercise_angina.as_deref().unwrap_or_default(),
    );
    form.set(FormField::Oldpeak, args.oldpeak.as_deref().unwrap_or_default());
    form.set(FormField::StSlope, args.st_slope.as_deref().unwrap_or_default());
    form
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn args_fill_the_form_and_leave_gaps_empty() {
        let args = PredictArgs {
            age: Some("54".to_string()),
            sex: None,
            chest_pain_type: Some("2".to_string()),
            exercise_angina: None,
            oldpeak: Some("1.5".to_string()),
            st_slope: None,
        };

        let form = form_from_args(&args);
        assert_eq!(form.get(FormField::Age), "54");
        assert_eq!(form.get(FormField::Sex), "");
        assert_eq!(form.get(FormField::ChestPainType), "2");

        let request = form.to_request();
        assert!((request.oldpeak - 1.5).abs() < f64::EPSILON);
        assert!(request.st_slope.is_nan());
    }

    #[test]
    fn failed_auxiliary_fetch_becomes_a_missing_section() {
        let dropped: Option<i32> = discard_failed(
            Err(ApiError::Api { status: 500, message: "boom".to_string() }),
            "healthy baseline",
        );
        assert_eq!(dropped, None);
        assert_eq!(discard_failed(Ok(7), "feature importance"), Some(7));
    }
}
