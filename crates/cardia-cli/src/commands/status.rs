use cardia_api::PredictorClient;

use crate::cli::GlobalFlags;
use crate::output;
use crate::progress::Progress;

/// # Errors
/// Fails when the service is unreachable or reports an error status.
pub async fn handle(client: &PredictorClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Checking service health...");
    match client.health_check().await {
        Ok(status) => {
            progress.finish_clear();
            output::output(&status, flags.format)
        }
        Err(error) => {
            progress.finish_err("Health check failed");
            Err(error.into())
        }
    }
}
