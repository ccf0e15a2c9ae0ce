pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod monitor;
pub mod rate;
pub mod steam;

pub use config::Config;
pub use error::SteamWatchError;
