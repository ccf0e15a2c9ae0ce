use eyre::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use steamwatch_lib::config::Config;
use steamwatch_lib::steam::SteamLayout;
use tempfile::TempDir;

/// A throwaway Steam installation with the directories the monitor expects.
pub struct FakeSteam {
    dir: TempDir,
}

impl FakeSteam {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let layout = SteamLayout::from_root(dir.path());
        std::fs::create_dir_all(&layout.downloading)?;
        if let Some(logs) = layout.content_log.parent() {
            std::fs::create_dir_all(logs)?;
        }
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn layout(&self) -> SteamLayout {
        SteamLayout::from_root(self.root())
    }

    /// Creates `downloading/<id>` and writes a matching app manifest.
    pub fn stage_app(
        &self,
        app_id: u32,
        name: &str,
        update_result: &str,
        size_on_disk: &str,
    ) -> Result<()> {
        let layout = self.layout();
        std::fs::create_dir_all(layout.downloading.join(app_id.to_string()))?;
        self.write_manifest(app_id, name, update_result, size_on_disk)
    }

    pub fn write_manifest(
        &self,
        app_id: u32,
        name: &str,
        update_result: &str,
        size_on_disk: &str,
    ) -> Result<()> {
        let manifest = format!(
            "\"AppState\"\n{{\n\t\"appid\"\t\t\"{app_id}\"\n\t\"Universe\"\t\t\"1\"\n\t\"name\"\t\t\"{name}\"\n\t\"StateFlags\"\t\t\"1026\"\n\t\"installdir\"\t\t\"{name}\"\n\t\"SizeOnDisk\"\t\t\"{size_on_disk}\"\n\t\"UpdateResult\"\t\t\"{update_result}\"\n\t\"InstalledDepots\"\n\t{{\n\t}}\n}}\n"
        );
        std::fs::write(
            self.layout()
                .steamapps
                .join(format!("appmanifest_{app_id}.acf")),
            manifest,
        )?;
        Ok(())
    }

    pub fn append_log(&self, content: &str) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.layout().content_log)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Writes a JSON config pointing at this installation and returns its path.
    pub fn write_config(&self, poll_interval_secs: u64, iterations: u32) -> Result<PathBuf> {
        let config = Config {
            steam_path: Some(self.root().to_path_buf()),
            poll_interval_secs,
            iterations,
        };
        let config_path = self.root().join("steamwatch.json");
        std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
        Ok(config_path)
    }
}

pub fn rate_line(value: &str, unit: &str) -> String {
    format!("[2024-05-01 12:00:00] Current download rate: {value} {unit}\n")
}
