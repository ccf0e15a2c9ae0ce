use crate::cli::StatusParams;
use crate::error::SteamWatchError;
use crate::monitor::{MonitorSession, format_cycle};
use std::io::Write;

pub fn run_status(params: StatusParams) -> Result<(), SteamWatchError> {
    let StatusParams { layout } = params;

    tracing::debug!("Reading download state under {}", layout.downloading.display());
    let mut session = MonitorSession::new(layout);
    let report = session.poll(1, Some(1))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(format_cycle(&report).as_bytes())?;
    out.flush()?;
    Ok(())
}
