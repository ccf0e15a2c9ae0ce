use steamwatch_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_status, run_watch};
use steamwatch_lib::error::SteamWatchError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SteamWatchError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Watch(params) => run_watch(params).await?,
        ResolvedCommand::Status(params) => run_status(params)?,
    }

    Ok(())
}
