use std::sync::Arc;

use {
    secrecy::ExposeSecret, serenity::Client, tellbot_config::ConfigStore,
    tellbot_relay::RelayRouter, tracing::info,
};

use crate::{Result, config::DiscordBotConfig, handler::DiscordHandler};

/// Connect to the gateway and serve interactions until the connection ends.
pub async fn run(config: DiscordBotConfig, store: Arc<ConfigStore>) -> Result<()> {
    let router = Arc::new(RelayRouter::new(
        store,
        config.admin_id.clone(),
        config.timezone,
    ));
    let handler = DiscordHandler { router };

    let mut client = Client::builder(config.token.expose_secret(), DiscordHandler::intents())
        .event_handler(handler)
        .await?;

    info!(
        admin_id = %config.admin_id,
        timezone = %config.timezone,
        "connecting to discord gateway"
    );
    client.start().await?;
    Ok(())
}
