use super::report::{AppReport, CycleReport};
use crate::error::SteamWatchError;
use crate::manifest::{DownloadStatus, ManifestReader};
use crate::rate::{ScanCursor, scan_rate};
use crate::steam::{SteamLayout, list_downloading_apps};
use chrono::{Local, NaiveTime};

/// State carried between polling cycles for one Steam installation.
///
/// The log cursor only moves forward, except when the content log shrinks
/// below it, in which case Steam has started a new log and the scan restarts
/// from the beginning.
#[derive(Debug, Clone)]
pub struct MonitorSession {
    layout: SteamLayout,
    manifests: ManifestReader,
    cursor: ScanCursor,
    last_rate: Option<f64>,
}

impl MonitorSession {
    pub fn new(layout: SteamLayout) -> Self {
        Self {
            manifests: ManifestReader::new(&layout.steamapps),
            layout,
            cursor: ScanCursor::START,
            last_rate: None,
        }
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    pub fn poll(
        &mut self,
        iteration: u32,
        total: Option<u32>,
    ) -> Result<CycleReport, SteamWatchError> {
        self.poll_at(iteration, total, Local::now().time())
    }

    pub fn poll_at(
        &mut self,
        iteration: u32,
        total: Option<u32>,
        timestamp: NaiveTime,
    ) -> Result<CycleReport, SteamWatchError> {
        let app_ids = list_downloading_apps(&self.layout.downloading)?;
        tracing::debug!(count = app_ids.len(), "Found staged downloads");

        let mut apps = Vec::with_capacity(app_ids.len());
        for app_id in app_ids {
            apps.push(AppReport {
                name: self.manifests.display_name(&app_id),
                status: self.manifests.classify(&app_id),
                app_id,
                rate_mib_s: 0.0,
            });
        }

        // Steam writes one content log for all apps, so it is scanned at most
        // once per cycle and the rate is shared by everything downloading.
        if apps.iter().any(|app| app.status.is_downloading()) {
            let rate = self.refresh_rate()?;
            for app in apps
                .iter_mut()
                .filter(|app| app.status == DownloadStatus::Downloading)
            {
                app.rate_mib_s = rate;
            }
        }

        Ok(CycleReport {
            iteration,
            total,
            timestamp,
            apps,
        })
    }

    fn refresh_rate(&mut self) -> Result<f64, SteamWatchError> {
        self.rewind_if_truncated();

        let scan = scan_rate(&self.layout.content_log, self.cursor)?;
        self.cursor = scan.cursor;
        if let Some(rate) = scan.rate {
            self.last_rate = Some(rate);
        }

        Ok(self.last_rate.unwrap_or(0.0))
    }

    fn rewind_if_truncated(&mut self) {
        let Ok(metadata) = std::fs::metadata(&self.layout.content_log) else {
            return;
        };
        if metadata.len() < self.cursor.offset() {
            tracing::info!(
                path = %self.layout.content_log.display(),
                len = metadata.len(),
                cursor = %self.cursor,
                "Content log shrank, rescanning from the start"
            );
            self.cursor = ScanCursor::START;
            self.last_rate = None;
        }
    }
}
