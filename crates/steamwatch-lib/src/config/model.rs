use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_ITERATIONS: u32 = 5;

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Steam installation root. Probed from well-known locations when unset.
    #[serde(default)]
    pub steam_path: Option<PathBuf>,
    /// Pause between polling cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Number of polling cycles; 0 polls until interrupted.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steam_path: None,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}
