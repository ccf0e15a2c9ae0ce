use super::Config;
use crate::error::SteamWatchError;
use config::Config as ConfigBuilder;

pub const ENV_PREFIX: &str = "STEAMWATCH";

/// Loads configuration from an optional file, then `STEAMWATCH_*` environment
/// variables. Later sources override earlier ones.
pub fn load_config(config_path: Option<&str>) -> Result<Config, SteamWatchError> {
    let mut builder = ConfigBuilder::builder();
    if let Some(config_path) = config_path {
        tracing::debug!("Loading configuration from {}", config_path);
        builder = builder.add_source(config::File::with_name(config_path));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;

    settings.try_deserialize().map_err(Into::into)
}
