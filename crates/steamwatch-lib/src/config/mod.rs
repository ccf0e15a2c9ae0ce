mod loader;
mod model;

pub use loader::{ENV_PREFIX, load_config};
pub use model::{Config, DEFAULT_ITERATIONS, DEFAULT_POLL_INTERVAL_SECS};
