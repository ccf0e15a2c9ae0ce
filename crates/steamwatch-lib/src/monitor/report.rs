use crate::manifest::DownloadStatus;
use crate::steam::AppId;
use chrono::NaiveTime;

pub const SEPARATOR_WIDTH: usize = 70;

#[derive(Debug, Clone, PartialEq)]
pub struct AppReport {
    pub app_id: AppId,
    pub name: String,
    pub status: DownloadStatus,
    /// MiB/s; zero for anything not currently downloading.
    pub rate_mib_s: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CycleReport {
    pub iteration: u32,
    pub total: Option<u32>,
    pub timestamp: NaiveTime,
    pub apps: Vec<AppReport>,
}

impl CycleReport {
    pub fn is_idle(&self) -> bool {
        self.apps.is_empty()
    }
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn format_cycle(report: &CycleReport) -> String {
    let timestamp = report.timestamp.format("%H:%M:%S");
    let mut out = match report.total {
        Some(total) => format!("[{timestamp}] Iteration {}/{total}\n", report.iteration),
        None => format!("[{timestamp}] Iteration {}\n", report.iteration),
    };

    for app in &report.apps {
        out.push_str(&format!(
            " {}\n {:.2} MiB/s | {}\n",
            app.name, app.rate_mib_s, app.status
        ));
    }
    if report.is_idle() {
        out.push_str(" No active downloads\n");
    }

    out.push_str(&separator());
    out.push('\n');
    out
}
