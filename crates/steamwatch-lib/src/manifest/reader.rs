use super::key_values::{KeyValues, parse_key_values};
use super::status::{DownloadStatus, classify_fields};
use crate::steam::AppId;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""name"\s+"(.+?)""#).expect("Invalid manifest name pattern"));

pub fn manifest_path(steamapps: &Path, app_id: &AppId) -> PathBuf {
    steamapps.join(format!("appmanifest_{app_id}.acf"))
}

pub fn fallback_name(app_id: &AppId) -> String {
    format!("AppID {app_id}")
}

fn read_manifest_text(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::debug!(path = %path.display(), "Couldn't read manifest: {}", e);
            None
        }
    }
}

/// Reads the manifest at `path` and returns its fields, or `None` if the file
/// is missing or unreadable.
pub fn read_key_values(path: &Path) -> Option<KeyValues> {
    read_manifest_text(path).map(|text| parse_key_values(&text))
}

/// Classifies the manifest at `path`. Never fails; anything that prevents
/// reading the file yields [`DownloadStatus::Unknown`].
pub fn classify(path: &Path) -> DownloadStatus {
    let Some(fields) = read_key_values(path) else {
        return DownloadStatus::Unknown;
    };
    let status = classify_fields(&fields);
    tracing::trace!(
        path = %path.display(),
        update_result = fields.get(super::status::UPDATE_RESULT_KEY),
        size_on_disk = fields.get(super::status::SIZE_ON_DISK_KEY),
        %status,
        "Classified manifest"
    );
    status
}

/// Returns the first `"name" "<value>"` in the manifest, falling back to
/// `AppID <id>`.
pub fn display_name(path: &Path, app_id: &AppId) -> String {
    read_manifest_text(path)
        .and_then(|text| {
            NAME_RE
                .captures(&text)
                .and_then(|captures| captures.get(1))
                .map(|name| name.as_str().to_string())
        })
        .unwrap_or_else(|| fallback_name(app_id))
}

/// Manifest lookups for apps under one `steamapps` directory.
#[derive(Debug, Clone)]
pub struct ManifestReader {
    steamapps: PathBuf,
}

impl ManifestReader {
    pub fn new(steamapps: impl Into<PathBuf>) -> Self {
        Self {
            steamapps: steamapps.into(),
        }
    }

    pub fn manifest_path(&self, app_id: &AppId) -> PathBuf {
        manifest_path(&self.steamapps, app_id)
    }

    pub fn classify(&self, app_id: &AppId) -> DownloadStatus {
        classify(&self.manifest_path(app_id))
    }

    pub fn display_name(&self, app_id: &AppId) -> String {
        display_name(&self.manifest_path(app_id), app_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, app_id: &AppId, content: &str) -> PathBuf {
        let path = manifest_path(dir.path(), app_id);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_manifest_path_pattern() {
        let path = manifest_path(Path::new("/steam/steamapps"), &AppId::new(220));
        assert_eq!(path, PathBuf::from("/steam/steamapps/appmanifest_220.acf"));
    }

    #[test]
    fn test_classify_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let app_id = AppId::new(220);
        let path = write_manifest(
            &dir,
            &app_id,
            "\"AppState\"\n{\n\t\"UpdateResult\"\t\t\"4\"\n\t\"SizeOnDisk\"\t\t\"0\"\n}\n",
        );

        assert_eq!(classify(&path), DownloadStatus::Paused);

        std::fs::write(&path, "\"UpdateResult\" \"0\"\n\"SizeOnDisk\" \"0\"\n").unwrap();
        assert_eq!(classify(&path), DownloadStatus::Downloading);
    }

    #[test]
    fn test_classify_missing_manifest_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path(), &AppId::new(440));

        assert_eq!(classify(&path), DownloadStatus::Unknown);
    }

    #[test]
    fn test_classify_directory_in_place_of_manifest_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path(), &AppId::new(440));
        std::fs::create_dir(&path).unwrap();

        assert_eq!(classify(&path), DownloadStatus::Unknown);
    }

    #[test]
    fn test_classify_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path(), &AppId::new(10));
        let mut content = b"\"name\" \"Caf\xe9\"\n".to_vec();
        content.extend_from_slice(b"\"UpdateResult\" \"0\"\n\"SizeOnDisk\" \"0\"\n");
        std::fs::write(&path, content).unwrap();

        assert_eq!(classify(&path), DownloadStatus::Downloading);
    }

    #[test]
    fn test_display_name_from_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let app_id = AppId::new(70);
        let path = write_manifest(
            &dir,
            &app_id,
            "\"AppState\"\n{\n\t\"appid\"\t\t\"70\"\n\t\"name\"\t\t\"Half-Life\"\n}\n",
        );

        assert_eq!(display_name(&path, &app_id), "Half-Life");
    }

    #[test]
    fn test_display_name_uses_first_match() {
        let dir = tempfile::tempdir().unwrap();
        let app_id = AppId::new(70);
        let path = write_manifest(&dir, &app_id, "\"name\" \"First\"\n\"name\" \"Second\"\n");

        assert_eq!(display_name(&path, &app_id), "First");
    }

    #[test]
    fn test_display_name_missing_manifest_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let app_id = AppId::new(220);
        let path = manifest_path(dir.path(), &app_id);

        assert_eq!(display_name(&path, &app_id), "AppID 220");
    }

    #[test]
    fn test_display_name_without_name_field_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let app_id = AppId::new(220);
        let path = write_manifest(&dir, &app_id, "\"appid\" \"220\"\n\"name\"\n");

        assert_eq!(display_name(&path, &app_id), "AppID 220");
    }

    #[test]
    fn test_manifest_reader_uses_steamapps_root() {
        let dir = tempfile::tempdir().unwrap();
        let app_id = AppId::new(620);
        write_manifest(
            &dir,
            &app_id,
            "\"name\" \"Portal 2\"\n\"UpdateResult\" \"4\"\n\"SizeOnDisk\" \"0\"\n",
        );
        let reader = ManifestReader::new(dir.path());

        assert_eq!(reader.classify(&app_id), DownloadStatus::Paused);
        assert_eq!(reader.display_name(&app_id), "Portal 2");
        assert_eq!(reader.classify(&AppId::new(621)), DownloadStatus::Unknown);
        assert_eq!(reader.display_name(&AppId::new(621)), "AppID 621");
    }

    #[test]
    fn test_leading_zero_directory_name_reads_its_own_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let padded = AppId::from_dir_name("0220").unwrap();
        write_manifest(&dir, &AppId::new(220), "\"name\" \"Half-Life 2\"\n");
        let reader = ManifestReader::new(dir.path());

        assert_eq!(
            reader.manifest_path(&padded),
            dir.path().join("appmanifest_0220.acf")
        );
        assert_eq!(reader.display_name(&padded), "AppID 0220");

        write_manifest(
            &dir,
            &padded,
            "\"name\" \"Padded\"\n\"UpdateResult\" \"0\"\n\"SizeOnDisk\" \"0\"\n",
        );
        assert_eq!(reader.display_name(&padded), "Padded");
        assert_eq!(reader.classify(&padded), DownloadStatus::Downloading);
    }
}
