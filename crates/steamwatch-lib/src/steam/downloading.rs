use super::app_id::AppId;
use crate::error::SteamWatchError;
use itertools::Itertools;
use std::path::Path;

/// Lists the apps Steam currently has a staging directory for under
/// `steamapps/downloading`, sorted by id.
pub fn list_downloading_apps(downloading_dir: &Path) -> Result<Vec<AppId>, SteamWatchError> {
    let list_error = |e: std::io::Error| SteamWatchError::DownloadingDirList {
        path: downloading_dir.to_path_buf(),
        reason: e.to_string(),
    };

    let mut apps = Vec::new();
    for entry in std::fs::read_dir(downloading_dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        let file_name = entry.file_name();
        let Some(app_id) = file_name.to_str().and_then(AppId::from_dir_name) else {
            tracing::trace!(entry = ?file_name, "Skipping non-numeric entry");
            continue;
        };
        if !entry.path().is_dir() {
            tracing::trace!(%app_id, "Skipping non-directory entry");
            continue;
        }
        apps.push(app_id);
    }

    Ok(apps.into_iter().sorted().collect())
}
