use cardia_api::PredictorClient;
use cardia_config::CardiaConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
///
/// # Errors
/// Propagates whatever the handler returns.
pub async fn dispatch(
    command: Commands,
    client: PredictorClient,
    config: &CardiaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => super::dashboard::handle(client, config).await,
        Commands::Predict(args) => super::predict::handle(&client, &args, flags).await,
        Commands::Baseline => super::baseline::handle(&client, flags).await,
        Commands::Features => super::features::handle(&client, flags).await,
        Commands::Status => super::status::handle(&client, flags).await,
    }
}
