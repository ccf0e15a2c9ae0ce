use super::report::format_cycle;
use super::session::MonitorSession;
use crate::error::SteamWatchError;
use std::future::Future;
use std::io::Write;
use std::time::Duration;

pub const STOPPED_MESSAGE: &str = "Stopped by user";
pub const FINISHED_MESSAGE: &str = "Monitoring finished";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonitorOptions {
    pub interval: Duration,
    /// `None` polls until interrupted.
    pub iterations: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorOutcome {
    Completed,
    Interrupted,
}

/// Runs polling cycles and writes each report to `out`, pausing `interval`
/// between cycles.
///
/// `shutdown` is checked after every cycle, including the last one, and raced
/// against every pause so an interrupt ends the run without waiting out the
/// rest of it. A cycle that fails (for example because the content log can't
/// be opened) is logged and skipped.
pub async fn run_monitor<W, S>(
    session: &mut MonitorSession,
    options: MonitorOptions,
    out: &mut W,
    shutdown: S,
) -> Result<MonitorOutcome, SteamWatchError>
where
    W: Write,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    let mut iteration = 1u32;
    loop {
        match session.poll(iteration, options.iterations) {
            Ok(report) => {
                out.write_all(format_cycle(&report).as_bytes())?;
                out.flush()?;
            }
            Err(e) => {
                tracing::warn!(iteration, "Skipping polling cycle: {}", e);
            }
        }

        let interrupted = tokio::select! {
            biased;
            _ = &mut shutdown => true,
            _ = std::future::ready(()) => false,
        };
        if interrupted {
            return write_stopped(out);
        }

        if options.iterations.is_some_and(|total| iteration >= total) {
            break;
        }
        iteration = iteration.saturating_add(1);

        tokio::select! {
            _ = tokio::time::sleep(options.interval) => {}
            _ = &mut shutdown => return write_stopped(out),
        }
    }

    writeln!(out, "{FINISHED_MESSAGE}")?;
    out.flush()?;
    Ok(MonitorOutcome::Completed)
}

fn write_stopped<W: Write>(out: &mut W) -> Result<MonitorOutcome, SteamWatchError> {
    writeln!(out)?;
    writeln!(out, " {STOPPED_MESSAGE}")?;
    out.flush()?;
    Ok(MonitorOutcome::Interrupted)
}
