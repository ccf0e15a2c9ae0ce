use crate::cli::WatchParams;
use crate::error::SteamWatchError;
use crate::monitor::{MonitorOutcome, MonitorSession, run_monitor, separator};
use std::future::Future;
use std::io::Write;

/// Installs the Ctrl+C handler right away, so an interrupt that arrives while
/// a cycle is still running is held until the monitor next checks for it.
#[cfg(unix)]
fn listen_for_interrupt() -> std::io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    Ok(async move {
        if sigint.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    })
}

#[cfg(windows)]
fn listen_for_interrupt() -> std::io::Result<impl Future<Output = ()>> {
    let mut ctrl_c = tokio::signal::windows::ctrl_c()?;
    Ok(async move {
        if ctrl_c.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    })
}

pub async fn run_watch(params: WatchParams) -> Result<(), SteamWatchError> {
    let WatchParams { layout, options } = params;

    tracing::info!("Watching downloads under {}", layout.downloading.display());
    tracing::debug!(
        interval = ?options.interval,
        iterations = ?options.iterations,
        log = %layout.content_log.display(),
        "Monitor options"
    );

    let listener = listen_for_interrupt()
        .inspect_err(|e| {
            tracing::warn!("Couldn't listen for Ctrl+C, polling will not be interruptible: {}", e);
        })
        .ok();
    let shutdown = async move {
        match listener {
            Some(listener) => listener.await,
            None => std::future::pending().await,
        }
    };

    // Locked per write so the lock is never held across an await.
    let mut out = std::io::stdout();
    writeln!(out, " Steam found: {}", layout.root.display())?;
    writeln!(out, "Monitoring Steam downloads")?;
    writeln!(out)?;
    writeln!(out, "Ctrl + C to stop")?;
    writeln!(out, "{}", separator())?;

    let mut session = MonitorSession::new(layout);
    let outcome = run_monitor(&mut session, options, &mut out, shutdown).await?;

    match outcome {
        MonitorOutcome::Completed => tracing::debug!("Monitoring completed"),
        MonitorOutcome::Interrupted => tracing::debug!("Monitoring interrupted"),
    }
    Ok(())
}
