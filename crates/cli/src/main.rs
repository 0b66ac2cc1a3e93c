use std::{path::PathBuf, sync::Arc};

use {
    clap::Parser,
    secrecy::Secret,
    tellbot_config::ConfigStore,
    tellbot_discord::DiscordBotConfig,
    tellbot_relay::time::{DEFAULT_TIMEZONE, parse_timezone},
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "tellbot", about = "Anonymous message relay bot for Discord")]
struct Cli {
    /// Bot token.
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    token: String,

    /// User id allowed to run the setup command.
    #[arg(long, env = "ADMIN_ID")]
    admin_id: String,

    /// Time zone for log timestamps.
    #[arg(long, env = "TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// State file holding the log channel and panel location. Must exist.
    #[arg(long, env = "TELLBOT_CONFIG", default_value = "config.json")]
    config_file: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_telemetry(&cli);

    info!(version = env!("CARGO_PKG_VERSION"), "tellbot starting");

    let timezone = parse_timezone(&cli.timezone)?;
    let store = Arc::new(ConfigStore::load(&cli.config_file)?);
    info!(path = %store.path().display(), "using state file");
    let config = DiscordBotConfig::new(Secret::new(cli.token), cli.admin_id, timezone)?;

    tellbot_discord::run(config, store).await?;
    Ok(())
}
