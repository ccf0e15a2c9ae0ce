use super::key_values::KeyValues;
use std::fmt;

pub const UPDATE_RESULT_KEY: &str = "UpdateResult";
pub const SIZE_ON_DISK_KEY: &str = "SizeOnDisk";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownloadStatus {
    Downloading,
    Paused,
    Unknown,
}

impl DownloadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Downloading => "Downloading",
            Self::Paused => "Paused",
            Self::Unknown => "Unknown",
        }
    }

    pub fn is_downloading(&self) -> bool {
        matches!(self, Self::Downloading)
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Infers the download state from `UpdateResult` and `SizeOnDisk`.
///
/// Only the two combinations Steam is known to write for a queued item are
/// recognised. Anything else, including a non-zero `SizeOnDisk` while bytes are
/// still arriving, is `Unknown`.
pub fn classify_fields(fields: &KeyValues) -> DownloadStatus {
    let update_result = fields.get(UPDATE_RESULT_KEY);
    let size_on_disk = fields.get(SIZE_ON_DISK_KEY);

    match (update_result, size_on_disk) {
        (Some("4"), Some("0")) => DownloadStatus::Paused,
        (Some("0"), Some("0")) => DownloadStatus::Downloading,
        _ => DownloadStatus::Unknown,
    }
}
