use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides every other log setting.
pub const LOG_ENV: &str = "WEATHER_STORIES_LOG";

/// Installs the global subscriber; logs go to stderr so page output stays clean.
pub fn init(default_level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .with_context(|| format!("Invalid log level '{default_level}'"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to initialise logging: {err}"))
}
