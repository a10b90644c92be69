use cardia_api::PredictorClient;

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::output;
use crate::output::report::render_feature_importance;
use crate::progress::Progress;

/// # Errors
/// Fails when the importance fetch fails or output rendering fails.
pub async fn handle(client: &PredictorClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Fetching feature importance...");
    let weights = match client.fetch_feature_importance().await {
        Ok(weights) => {
            progress.finish_clear();
            weights
        }
        Err(error) => {
            progress.finish_err("Importance fetch failed");
            return Err(error.into());
        }
    };

    if flags.format == OutputFormat::Table {
        println!("{}", render_feature_importance(&weights));
        Ok(())
    } else {
        output::output(&weights, flags.format)
    }
}
