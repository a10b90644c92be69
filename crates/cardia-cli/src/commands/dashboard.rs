use cardia_api::PredictorClient;
use cardia_config::CardiaConfig;

use crate::tui;

/// # Errors
/// Fails when the terminal cannot enter or leave the alternate screen, or
/// when drawing fails.
pub async fn handle(client: PredictorClient, config: &CardiaConfig) -> anyhow::Result<()> {
    tui::run(client, config).await
}
