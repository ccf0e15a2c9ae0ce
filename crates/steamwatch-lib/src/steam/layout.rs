use crate::error::SteamWatchError;
use itertools::Itertools;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamLayout {
    pub root: PathBuf,
    pub steamapps: PathBuf,
    pub downloading: PathBuf,
    pub content_log: PathBuf,
}

impl SteamLayout {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let steamapps = root.join("steamapps");
        Self {
            downloading: steamapps.join("downloading"),
            content_log: root.join("logs").join("content_log.txt"),
            steamapps,
            root,
        }
    }

    /// Checks that the downloading directory exists. The content log is not
    /// checked here since Steam may not have created it yet.
    pub fn validate(&self) -> Result<(), SteamWatchError> {
        if !self.downloading.is_dir() {
            return Err(SteamWatchError::DownloadingDirMissing {
                path: self.downloading.clone(),
            });
        }
        Ok(())
    }
}

/// Install locations recorded by the Steam client in the registry.
#[cfg(windows)]
pub fn registry_steam_roots() -> Vec<PathBuf> {
    use winreg::RegKey;
    use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

    let keys = [
        (HKEY_CURRENT_USER, r"Software\Valve\Steam", "SteamPath"),
        (HKEY_LOCAL_MACHINE, r"Software\Valve\Steam", "InstallPath"),
        (HKEY_LOCAL_MACHINE, r"Software\WOW6432Node\Valve\Steam", "InstallPath"),
    ];

    keys.into_iter()
        .filter_map(|(hive, subkey, value)| {
            let path = RegKey::predef(hive)
                .open_subkey(subkey)
                .and_then(|key| key.get_value::<String, _>(value));
            match path {
                Ok(path) => Some(PathBuf::from(path)),
                Err(e) => {
                    tracing::debug!(subkey, value, "Couldn't read Steam registry value: {}", e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(not(windows))]
pub fn registry_steam_roots() -> Vec<PathBuf> {
    Vec::new()
}

fn fixed_steam_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    if cfg!(windows) {
        roots.push(PathBuf::from(r"C:\Program Files (x86)\Steam"));
        roots.push(PathBuf::from(r"C:\Program Files\Steam"));
    } else if let Some(home) = dirs::home_dir() {
        if cfg!(target_os = "macos") {
            roots.push(home.join("Library/Application Support/Steam"));
        } else {
            roots.push(home.join(".steam/steam"));
            roots.push(home.join(".local/share/Steam"));
            roots.push(home.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"));
        }
    }

    roots
}

/// Candidate Steam install locations in probing order: registry entries
/// first, then well-known paths for the current platform.
pub fn default_steam_roots() -> Vec<PathBuf> {
    registry_steam_roots()
        .into_iter()
        .chain(fixed_steam_roots())
        .unique()
        .collect()
}

/// Resolves the Steam root from an explicit path or the given candidates.
///
/// An explicit path is never second-guessed: if it is not a directory, that is
/// an error rather than a cue to probe elsewhere.
pub fn discover_steam_root_in(
    explicit: Option<&Path>,
    candidates: &[PathBuf],
) -> Result<PathBuf, SteamWatchError> {
    if let Some(path) = explicit {
        if path.is_dir() {
            return Ok(path.to_path_buf());
        }
        return Err(SteamWatchError::SteamNotFound {
            details: format!("{} is not a directory", path.display()),
        });
    }

    for candidate in candidates {
        tracing::debug!(candidate = %candidate.display(), "Probing for Steam installation");
        if candidate.is_dir() {
            return Ok(candidate.clone());
        }
    }

    Err(SteamWatchError::SteamNotFound {
        details: "no installation at any default location; pass --steam-path or set steam_path"
            .to_string(),
    })
}
