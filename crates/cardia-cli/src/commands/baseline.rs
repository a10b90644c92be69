use cardia_api::PredictorClient;

use crate::cli::GlobalFlags;
use crate::output;
use crate::progress::Progress;

/// # Errors
/// Fails when the baseline fetch fails or output rendering fails.
pub async fn handle(client: &PredictorClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Fetching healthy baseline...");
    match client.fetch_healthy_baseline().await {
        Ok(baseline) => {
            progress.finish_clear();
            output::output(&baseline, flags.format)
        }
        Err(error) => {
            progress.finish_err("Baseline fetch failed");
            Err(error.into())
        }
    }
}
