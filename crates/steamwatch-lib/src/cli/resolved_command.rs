use crate::cli::args::{Command, SteamOptions};
use crate::cli::params::{StatusParams, WatchParams};
use crate::config::{Config, load_config};
use crate::error::SteamWatchError;
use crate::monitor::MonitorOptions;
use crate::steam::{SteamLayout, default_steam_roots, discover_steam_root_in};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Watch(WatchParams),
    Status(StatusParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, SteamWatchError> {
    resolve_command_with_roots(command, &default_steam_roots())
}

/// Like [`resolve_command`], probing `candidate_roots` instead of the platform
/// defaults when no Steam path is configured.
pub fn resolve_command_with_roots(
    command: Command,
    candidate_roots: &[PathBuf],
) -> Result<ResolvedCommand, SteamWatchError> {
    match command {
        Command::Watch {
            steam,
            interval_secs,
            iterations,
        } => {
            let (app_config, layout) = resolve_steam(steam, candidate_roots)?;

            let interval_secs = interval_secs.unwrap_or(app_config.poll_interval_secs);
            if interval_secs == 0 {
                return Err(SteamWatchError::CliArgumentValidation {
                    details: "interval must be greater than 0.".to_string(),
                });
            }
            let iterations = match iterations.unwrap_or(app_config.iterations) {
                0 => None,
                n => Some(n),
            };

            Ok(ResolvedCommand::Watch(WatchParams {
                layout,
                options: MonitorOptions {
                    interval: Duration::from_secs(interval_secs),
                    iterations,
                },
            }))
        }
        Command::Status { steam } => {
            let (_, layout) = resolve_steam(steam, candidate_roots)?;
            Ok(ResolvedCommand::Status(StatusParams { layout }))
        }
    }
}

fn resolve_steam(
    steam: SteamOptions,
    candidate_roots: &[PathBuf],
) -> Result<(Config, SteamLayout), SteamWatchError> {
    let SteamOptions {
        config_path,
        steam_path,
    } = steam;

    let app_config = load_config(config_path.as_deref())?;

    let explicit = steam_path
        .map(PathBuf::from)
        .or_else(|| app_config.steam_path.clone());
    let root = discover_steam_root_in(explicit.as_deref(), candidate_roots)?;
    tracing::debug!(root = %root.display(), "Resolved Steam installation");

    let layout = SteamLayout::from_root(root);
    layout.validate()?;

    Ok((app_config, layout))
}
