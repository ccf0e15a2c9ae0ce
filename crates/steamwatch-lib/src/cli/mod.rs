mod args;
mod params;
mod resolved_command;
mod status;
mod watch;

pub use args::{Args, Command, SteamOptions, parse_args};
pub use params::{StatusParams, WatchParams};
pub use resolved_command::{ResolvedCommand, resolve_command, resolve_command_with_roots};
pub use status::run_status;
pub use watch::run_watch;
