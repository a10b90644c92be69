use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Interactive dashboard: fill in the form, submit, browse the charts.
    Dashboard,
    /// One-shot prediction from command-line values.
    Predict(PredictArgs),
    /// Fetch the healthy reference profile.
    Baseline,
    /// Fetch the model's feature-importance ranking.
    Features,
    /// Check that the service is up and its model is loaded.
    Status,
}

/// Arguments for `cardia predict`.
///
/// Every field is free text, exactly as the form takes it. An omitted flag
/// leaves the field empty, and empty fields travel to the service as `null`.
#[derive(Clone, Debug, Args)]
pub struct PredictArgs {
    /// Age in years.
    #[arg(long)]
    pub age: Option<String>,

    /// Sex: 0 = female, 1 = male.
    #[arg(long)]
    pub sex: Option<String>,

    /// Chest pain type: 0 = typical angina, 1 = atypical angina,
    /// 2 = non-anginal pain, 3 = asymptomatic.
    #[arg(long)]
    pub chest_pain_type: Option<String>,

    /// Exercise-induced angina: 0 = no, 1 = yes.
    #[arg(long)]
    pub exercise_angina: Option<String>,

    /// ST depression induced by exercise relative to rest.
    #[arg(long)]
    pub oldpeak: Option<String>,

    /// Slope of the peak exercise ST segment: 0 = upsloping, 1 = flat,
    /// 2 = downsloping.
    #[arg(long)]
    pub st_slope: Option<String>,
}
