mod app_id;
mod downloading;
mod layout;

pub use app_id::AppId;
pub use downloading::list_downloading_apps;
pub use layout::{SteamLayout, default_steam_roots, discover_steam_root_in, registry_steam_roots};
